use super::super::FilterApp;
use crate::image::{
    describe_aspect_ratio, describe_color, format_system_time, human_readable_bytes,
};
use egui::{Color32, RichText};
use image::GenericImageView;

impl FilterApp {
    pub(crate) fn ui_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let filter = self.render.shown_kind;
            ui.label(
                RichText::new(format!("Filter: {filter}"))
                    .small()
                    .color(Color32::from_gray(180)),
            );
            if let Some(image) = self.source.image.as_deref() {
                let (w, h) = image.dimensions();
                ui.separator();
                ui.label(RichText::new(format!("Source: {w} × {h}")).small());
            }
            if let Some(display) = self.render.display.as_ref() {
                let [w, h] = display.size;
                ui.separator();
                ui.label(RichText::new(format!("Result: {w} × {h}")).small());
            }
            if let Some(msg) = &self.ui.last_status {
                ui.separator();
                ui.label(
                    RichText::new(msg.as_str())
                        .small()
                        .color(Color32::from_gray(200)),
                );
            }
        });
    }

    pub(crate) fn ui_image_info_window(&mut self, ctx: &egui::Context) {
        if !self.ui.info_window_open {
            return;
        }

        egui::Window::new("Image info")
            .open(&mut self.ui.info_window_open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                let Some(image) = self.source.image.as_deref() else {
                    ui.label("Load an image to inspect its metadata.");
                    return;
                };

                ui.heading("File");
                if let Some(meta) = self.source.meta.as_ref() {
                    ui.label(format!("Source: {}", meta.source_label()));
                    ui.label(format!("Name: {}", meta.display_name()));
                    if let Some(path) = meta.path() {
                        ui.label(format!("Path: {}", path.display()));
                    }
                    match meta.byte_len() {
                        Some(bytes) => ui.label(format!(
                            "Size: {} ({bytes} bytes)",
                            human_readable_bytes(bytes)
                        )),
                        None => ui.label("Size: Unknown"),
                    };
                    match meta.modified() {
                        Some(modified) => {
                            ui.label(format!("Modified: {}", format_system_time(modified)))
                        }
                        None => ui.label("Modified: Unknown"),
                    };
                }

                ui.add_space(6.0);
                ui.heading("Source image");
                let (w, h) = image.dimensions();
                ui.label(format!("Dimensions: {w} × {h} px"));
                ui.label(format!(
                    "Aspect ratio: {}",
                    describe_aspect_ratio(w, h).unwrap_or_else(|| "n/a".to_string())
                ));
                let total_pixels = u64::from(w) * u64::from(h);
                #[allow(clippy::cast_precision_loss)]
                let megapixels = total_pixels as f64 / 1_000_000.0;
                ui.label(format!("Pixels: {total_pixels} ({megapixels:.2} MP)"));
                ui.label(format!("Channels: {}", describe_color(image.color())));

                if let Some(display) = self.render.display.as_ref() {
                    ui.add_space(6.0);
                    ui.heading(format!("Result ({})", self.render.shown_kind));
                    let [rw, rh] = display.size;
                    ui.label(format!("Dimensions: {rw} × {rh} px"));
                    ui.label(format!(
                        "Channels: {} ({})",
                        display.channel_count(),
                        describe_color(display.color)
                    ));
                }
            });
    }
}
