//! Side panel: filter selection, parameter controls and upload.

use super::super::FilterApp;
use super::icons;
use crate::filter::{FilterKind, FlipCode, MAX_ANGLE};
use egui::RichText;

impl FilterApp {
    pub(crate) fn ui_side(&mut self, ui: &mut egui::Ui) {
        ui.heading("Choose an Option");
        ui.add_space(4.0);

        let mut changed = self.ui_filter_selector(ui);
        if self.selection.kind.takes_parameters() {
            ui.add_space(6.0);
            changed |= self.ui_filter_parameters(ui);
        }
        if self.selection.kind.single_channel_output() {
            ui.label(RichText::new("Output is single-channel (gray).").small());
        }
        if changed {
            self.mark_selection_changed();
        }

        ui.add_space(8.0);
        ui.separator();
        self.ui_upload_section(ui);
    }

    fn ui_filter_selector(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        egui::ComboBox::from_label("Filter")
            .selected_text(self.selection.kind.label())
            .show_ui(ui, |ui| {
                for kind in FilterKind::ALL {
                    changed |= ui
                        .selectable_value(&mut self.selection.kind, kind, kind.label())
                        .changed();
                }
            });
        changed
    }

    fn ui_filter_parameters(&mut self, ui: &mut egui::Ui) -> bool {
        let max_side = self.config.effective_image_limits().image_dim;
        let inputs = &mut self.selection.inputs;
        let mut changed = false;
        match self.selection.kind {
            FilterKind::Resize => {
                egui::Grid::new("resize_params")
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.label("Enter Width");
                        changed |= ui
                            .add(egui::DragValue::new(&mut inputs.width).range(1..=max_side))
                            .changed();
                        ui.end_row();
                        ui.label("Enter Height");
                        changed |= ui
                            .add(egui::DragValue::new(&mut inputs.height).range(1..=max_side))
                            .changed();
                        ui.end_row();
                    });
            }
            FilterKind::Rotate => {
                changed |= ui
                    .add(
                        egui::Slider::new(&mut inputs.angle, 0.0..=MAX_ANGLE)
                            .step_by(1.0)
                            .suffix("°")
                            .text("Angle"),
                    )
                    .changed();
            }
            FilterKind::Flip => {
                ui.label("Flip Direction");
                for code in FlipCode::ALL {
                    changed |= ui
                        .radio_value(&mut inputs.flip_code, code, code.label())
                        .changed();
                }
            }
            FilterKind::Original
            | FilterKind::Grayscale
            | FilterKind::Blur
            | FilterKind::EdgeDetection => {}
        }
        if changed {
            *inputs = inputs.sanitized();
        }
        changed
    }

    fn ui_upload_section(&mut self, ui: &mut egui::Ui) {
        ui.label("Upload an image");
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Browse…", icons::ICON_OPEN))
                .on_hover_text("Open a JPEG or PNG (Ctrl+O)")
                .clicked()
            {
                self.open_image_dialog();
            }
            if ui
                .button(format!("{} Paste", icons::ICON_PASTE))
                .on_hover_text("Paste an image from the clipboard (Ctrl+V)")
                .clicked()
            {
                self.paste_image_from_clipboard();
            }
        });
        ui.label(RichText::new("JPG, JPEG or PNG. Drop a file on the window to load it.").small());
        if let Some(meta) = self.source.meta.as_ref() {
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("{} {}", icons::ICON_FILTERS, meta.display_name())).strong(),
            );
        }
    }
}
