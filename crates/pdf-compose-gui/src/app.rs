use std::path::{Path, PathBuf};

use anyhow::Context;
use eframe::egui;
use image::DynamicImage;
use pdf_compose::constants::{bytes_to_mb, mb_to_bytes};

use crate::logger::AppLogger;

/// Raster formats accepted by the file picker
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff"];

pub struct ComposeApp {
    // Loaded, normalized images with their display names (parallel vectors)
    images: Vec<DynamicImage>,
    image_names: Vec<String>,

    target_mb: String,
    status: String,

    logger: AppLogger,
}

impl ComposeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, logger: AppLogger) -> Self {
        Self {
            images: Vec::new(),
            image_names: Vec::new(),
            target_mb: String::new(),
            status: String::new(),
            logger,
        }
    }

    /// Open the multi-file picker and load every selected image.
    ///
    /// Loading is all-or-nothing: a file that fails to decode aborts the
    /// whole add and leaves the current set untouched.
    fn add_images(&mut self) {
        let Some(paths) = rfd::FileDialog::new()
            .add_filter("Image Files", IMAGE_EXTENSIONS)
            .set_title("Select Images")
            .pick_files()
        else {
            return;
        };

        match load_all(&paths) {
            Ok(loaded) => {
                log::info!("Loaded {} images", loaded.len());
                self.status = format!("Loaded {} images", loaded.len());
                for (name, image) in loaded {
                    self.image_names.push(name);
                    self.images.push(image);
                }
            }
            Err(e) => {
                log::warn!("Image load failed: {e:#}");
                self.status = format!("Error: {e:#}");
            }
        }
    }

    /// Validate the target entry, ask for a destination, and run the
    /// size-target search. A canceled save dialog aborts silently.
    fn generate(&mut self) {
        let Ok(target_mb) = self.target_mb.trim().parse::<f64>() else {
            self.status = "Target size must be a number (MB)".to_string();
            log::warn!("Rejected non-numeric target size entry {:?}", self.target_mb);
            return;
        };
        if target_mb <= 0.0 {
            self.status = "Target size must be greater than zero".to_string();
            return;
        }

        let Some(dest) = rfd::FileDialog::new()
            .add_filter("PDF files", &["pdf"])
            .set_file_name("output.pdf")
            .set_title("Save PDF as")
            .save_file()
        else {
            return;
        };

        match pdf_compose::compress_to_target(&self.images, mb_to_bytes(target_mb), &dest) {
            Ok(outcome) => {
                log::info!(
                    "Wrote {} pages at quality {} in {} regenerations",
                    self.images.len(),
                    outcome.quality,
                    outcome.regenerations
                );
                self.status = format!(
                    "PDF saved at {} with size {:.2} MB",
                    dest.display(),
                    bytes_to_mb(outcome.bytes_written)
                );
            }
            Err(e) => {
                log::warn!("PDF generation failed: {e}");
                self.status = format!("Error: {e}");
            }
        }
    }
}

impl eframe::App for ComposeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Image to PDF Converter");
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("📂 Add Images…").clicked() {
                    self.add_images();
                }
                if ui
                    .add_enabled(!self.images.is_empty(), egui::Button::new("Clear"))
                    .clicked()
                {
                    self.images.clear();
                    self.image_names.clear();
                    self.status.clear();
                }
            });

            if self.images.is_empty() {
                ui.label("No images selected");
            } else {
                egui::ScrollArea::vertical()
                    .max_height(140.0)
                    .show(ui, |ui| {
                        for (name, image) in self.image_names.iter().zip(&self.images) {
                            ui.label(format!(
                                "{} ({}×{})",
                                name,
                                image.width(),
                                image.height()
                            ));
                        }
                    });
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Target PDF size (MB):");
                ui.text_edit_singleline(&mut self.target_mb);
            });

            if ui
                .add_enabled(!self.images.is_empty(), egui::Button::new("💾 Generate PDF…"))
                .clicked()
            {
                self.generate();
            }

            if !self.status.is_empty() {
                ui.separator();
                ui.label(&self.status);
            }

            egui::CollapsingHeader::new("Log").show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("log_scroll")
                    .max_height(120.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for entry in self.logger.entries() {
                            ui.monospace(format!(
                                "{} {:5} {}",
                                entry.timestamp.format("%H:%M:%S"),
                                entry.level,
                                entry.message
                            ));
                        }
                    });
            });
        });
    }
}

fn load_all(paths: &[PathBuf]) -> anyhow::Result<Vec<(String, DynamicImage)>> {
    paths
        .iter()
        .map(|path| {
            let image = pdf_compose::load_image(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            Ok((display_name(path), image))
        })
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
