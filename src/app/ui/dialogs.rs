use super::super::FilterApp;
use crate::image::SUPPORTED_EXTENSIONS;
use egui_file_dialog::FileDialog;
use std::path::Path;

impl FilterApp {
    pub(crate) fn open_image_dialog(&mut self) {
        let mut dialog = Self::make_open_dialog(self.last_image_dir.as_deref());
        dialog.pick_file();
        self.open_dialog = Some(dialog);
    }

    fn make_open_dialog(initial_dir: Option<&Path>) -> FileDialog {
        // Keep in sync with the formats accepted by the decoder.
        let mut dialog = FileDialog::new()
            .title("Upload an image")
            .add_file_filter_extensions("JPEG or PNG", SUPPORTED_EXTENSIONS.to_vec())
            .add_file_filter_extensions("PNG", vec!["png"])
            .add_file_filter_extensions("JPEG/JPG", vec!["jpg", "jpeg"])
            .default_file_filter("JPEG or PNG");
        if let Some(dir) = initial_dir {
            dialog = dialog.initial_directory(dir.to_path_buf());
        }
        dialog
    }
}
