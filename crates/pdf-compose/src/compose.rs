//! Document generation: one image per page, scaled and centered

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::constants::{PAGE_HEIGHT_PT, PAGE_WIDTH_PT, QUALITY_MAX};
use crate::layout::fit_to_page;
use crate::types::*;

/// Generate the full document at the given JPEG quality.
///
/// Every image gets its own 595x842pt page: resampled to its placed
/// dimensions with Lanczos3, re-encoded as a JPEG at `quality`, and embedded
/// as a DCTDecode image XObject at the centered offset. Pages come out in
/// input order. The document is rebuilt from scratch on every call; the
/// encoded buffers never outlive it.
pub fn render_document(images: &[DynamicImage], quality: u8) -> Result<Vec<u8>> {
    if images.is_empty() {
        return Err(ComposeError::NoImages);
    }
    let quality = quality.clamp(1, QUALITY_MAX);

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(images.len());

    for image in images {
        let page_id = render_page(&mut output, image, quality, pages_tree_id)?;
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    output.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Render one image onto a new page of the output document
fn render_page(
    output: &mut Document,
    image: &DynamicImage,
    quality: u8,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let placement = fit_to_page(image.width(), image.height());
    let resampled = image.resize_exact(placement.width, placement.height, FilterType::Lanczos3);
    let xobject_id = add_jpeg_xobject(output, &resampled, quality)?;

    let cmd = format!(
        "q {} 0 0 {} {} {} cm /Im0 Do Q\n",
        placement.width, placement.height, placement.x_offset, placement.y_offset
    );
    let content_id = output.add_object(Stream::new(Dictionary::new(), cmd.into_bytes()));

    let resources = Dictionary::from_iter(vec![(
        "XObject",
        Object::Dictionary(Dictionary::from_iter(vec![(
            "Im0",
            Object::Reference(xobject_id),
        )])),
    )]);

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(PAGE_WIDTH_PT),
            Object::Real(PAGE_HEIGHT_PT),
        ]),
    );
    page_dict.set("Resources", Object::Dictionary(resources));
    page_dict.set("Contents", Object::Reference(content_id));

    Ok(output.add_object(page_dict))
}

/// JPEG-encode a resampled image and embed it as a DCTDecode XObject.
///
/// Grayscale images stay single-channel (DeviceGray); everything else is
/// flattened to RGB8 (DeviceRGB). Alpha was already stripped at load time,
/// so the conversion here only narrows bit depth.
fn add_jpeg_xobject(
    output: &mut Document,
    image: &DynamicImage,
    quality: u8,
) -> Result<ObjectId> {
    let (pixels, color_space, color_type) = match image {
        DynamicImage::ImageLuma8(gray) => (
            gray.as_raw().clone(),
            "DeviceGray",
            image::ExtendedColorType::L8,
        ),
        other => (
            other.to_rgb8().into_raw(),
            "DeviceRGB",
            image::ExtendedColorType::Rgb8,
        ),
    };

    let mut jpeg = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, quality);
    encoder.encode(&pixels, image.width(), image.height(), color_type)?;

    let dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(image.width() as i64)),
        ("Height", Object::Integer(image.height() as i64)),
        ("ColorSpace", Object::Name(color_space.into())),
        ("BitsPerComponent", Object::Integer(8)),
        ("Filter", Object::Name(b"DCTDecode".to_vec())),
    ]);

    Ok(output.add_object(Stream::new(dict, jpeg)))
}
