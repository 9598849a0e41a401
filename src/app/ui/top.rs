use super::super::FilterApp;
use super::common::toggle_switch;
use super::icons;

impl FilterApp {
    pub(crate) fn ui_top(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::widgets::global_theme_preference_switch(ui);
            ui.separator();

            self.ui_file_menu(ui);
            ui.separator();

            let side_label = if self.ui.side_open {
                "Hide side"
            } else {
                "Show side"
            };
            if ui
                .add(
                    egui::Button::new(format!("{} {side_label}", icons::ICON_SIDE_TOGGLE))
                        .shortcut_text("Ctrl+B"),
                )
                .on_hover_text("Toggle the filter panel (Ctrl+B)")
                .clicked()
            {
                self.ui.side_open = !self.ui.side_open;
            }
            ui.separator();

            ui.label(format!("{} Fit to width", icons::ICON_FIT));
            toggle_switch(ui, &mut self.ui.fit_to_width)
                .on_hover_text("Scale the result to the width of the window");
            ui.separator();

            let has_image = self.source.image.is_some();
            if ui
                .add_enabled(
                    has_image,
                    egui::Button::new(format!("{} Image info", icons::ICON_INFO))
                        .shortcut_text("Ctrl+I"),
                )
                .on_hover_text("Show file & image details (Ctrl+I)")
                .clicked()
            {
                self.ui.info_window_open = true;
            }
        });
    }

    fn ui_file_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button(format!("{} File", icons::ICON_MENU), |ui| {
            if ui
                .add(egui::Button::new("Open image…").shortcut_text("Ctrl+O"))
                .on_hover_text("Open a JPEG or PNG (Ctrl+O). You can also drop a file here.")
                .clicked()
            {
                self.open_image_dialog();
                ui.close();
            }
            if ui
                .add(egui::Button::new("Paste image").shortcut_text("Ctrl+V"))
                .on_hover_text("Paste an image from the clipboard (Ctrl+V)")
                .clicked()
            {
                self.paste_image_from_clipboard();
                ui.close();
            }
        });
    }
}
