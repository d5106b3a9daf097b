use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid target size: {0}")]
    InvalidTarget(String),
    #[error("No images to place")]
    NoImages,
}

pub type Result<T> = std::result::Result<T, ComposeError>;

/// Result of a size-targeted compression run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionOutcome {
    /// Quality of the document that ended up on disk
    pub quality: u8,
    /// Byte length of the final document
    pub bytes_written: u64,
    /// Number of full document regenerations performed
    pub regenerations: usize,
}
