use super::super::FilterApp;
use super::common::display_size;
use egui::{Color32, RichText};

impl FilterApp {
    pub(crate) fn ui_central(&mut self, ui: &mut egui::Ui) {
        self.handle_dropped_files(ui);

        if let Some(err) = self.render.error.as_deref() {
            ui.label(
                RichText::new(format!("Filter failed: {err}"))
                    .color(Color32::from_rgb(220, 70, 70)),
            );
        }

        if let Some(display) = self.render.display.as_ref() {
            let (tex_id, img_size) = (display.texture.id(), display.size);
            let caption = self.render.shown_kind.label();
            let fit = self.ui.fit_to_width;
            egui::ScrollArea::both().show(ui, |ui| {
                let size = display_size(img_size, ui.available_width(), fit);
                ui.add(egui::Image::new((tex_id, size)));
                ui.label(RichText::new(caption).small().italics());
            });
        } else if self.source.pending.is_some() || self.render.pending.is_some() {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
        } else {
            ui.centered_and_justified(|ui| {
                ui.label("Drop a JPEG or PNG here or use Upload an image in the side panel.");
            });
        }
    }

    fn handle_dropped_files(&mut self, ui: &egui::Ui) {
        let dropped = ui.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        for (idx, f) in dropped.iter().enumerate() {
            log::debug!(
                "drop[{idx}] name='{}' mime={} path={:?} bytes={}",
                f.name,
                f.mime,
                f.path,
                f.bytes.as_ref().map_or(0, |b| b.len())
            );
        }

        for f in &dropped {
            if let Some(path) = &f.path {
                self.start_loading_image_from_path(path.clone());
                return;
            }
            if let Some(bytes) = &f.bytes {
                self.start_loading_image_from_bytes(
                    (!f.name.is_empty()).then(|| f.name.clone()),
                    bytes.to_vec(),
                    f.last_modified,
                );
                return;
            }
        }
        log::warn!("Drop ignored: no readable bytes or path");
        self.set_status("Drop failed: no readable bytes/path");
    }
}
