//! Main egui/eframe application state and frame orchestration.

use crate::config::AppConfig;
use crate::filter::{FilterKind, ParameterInputs};
use egui::{Context, Key};
use egui_file_dialog::{DialogState, FileDialog};
use std::path::{Path, PathBuf};
use std::time::Duration;

mod clipboard;
mod image_loader;
mod image_state;
mod render;
mod ui;
mod ui_state;

use image_state::{
    ImageLoadRequest, ImageLoadResult, PendingImageMeta, PendingImageTask, SourceState,
};
use render::RenderState;
use ui_state::UiState;

/// How often pending worker channels are polled while a job is in flight.
const WORKER_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Filter selection and the parameter widget values.
#[derive(Debug, Clone, Copy)]
struct FilterSelection {
    kind: FilterKind,
    inputs: ParameterInputs,
}

/// Top-level application state.
pub struct FilterApp {
    config: AppConfig,
    source: SourceState,
    selection: FilterSelection,
    render: RenderState,
    ui: UiState,
    open_dialog: Option<FileDialog>,
    last_image_dir: Option<PathBuf>,
}

impl FilterApp {
    /// Create the app and optionally queue an initial image load.
    pub fn new(config: AppConfig, initial_path: Option<&Path>) -> Self {
        let selection = FilterSelection {
            kind: config.startup_filter_kind(),
            inputs: ParameterInputs::default(),
        };
        let ui = UiState::new(&config);
        let mut app = Self {
            config,
            source: SourceState::default(),
            selection,
            render: RenderState::default(),
            ui,
            open_dialog: None,
            last_image_dir: None,
        };
        if let Some(path) = initial_path {
            app.start_loading_image_from_path(path.to_owned());
        }
        app
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.ui.last_status = Some(msg.into());
    }

    /// Re-run the dispatcher on the next frame with the current selection.
    const fn mark_selection_changed(&mut self) {
        self.render.dirty = true;
    }

    fn has_pending_work(&self) -> bool {
        self.source.pending.is_some() || self.render.pending.is_some()
    }

    fn handle_hotkeys(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() || self.open_dialog.is_some() {
            return;
        }
        // Ctrl/Cmd + O: open image
        if ctx.input(|i| i.key_pressed(Key::O) && i.modifiers.command) {
            self.open_image_dialog();
        }
        // Ctrl/Cmd + V: paste image from clipboard
        if ctx.input(|i| i.key_pressed(Key::V) && i.modifiers.command) {
            self.paste_image_from_clipboard();
        }
        // Ctrl/Cmd + B: toggle side panel
        if ctx.input(|i| i.key_pressed(Key::B) && i.modifiers.command) {
            self.ui.side_open = !self.ui.side_open;
        }
        // Ctrl/Cmd + I: image info
        if self.source.image.is_some()
            && ctx.input(|i| i.key_pressed(Key::I) && i.modifiers.command)
        {
            self.ui.info_window_open = true;
        }
    }

    fn update_open_dialog(&mut self, ctx: &Context) {
        let Some(dialog) = self.open_dialog.as_mut() else {
            return;
        };
        dialog.update(ctx);
        if let Some(path) = dialog.take_picked() {
            self.open_dialog = None;
            self.start_loading_image_from_path(path);
            return;
        }
        match dialog.state() {
            DialogState::Cancelled => {
                self.open_dialog = None;
                self.set_status("Open canceled.");
            }
            DialogState::Closed => self.open_dialog = None,
            _ => {}
        }
    }
}

impl eframe::App for FilterApp {
    // All drawing happens in `update`, which eframe still calls right before `ui`.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_image_loader();
        self.handle_hotkeys(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| self.ui_top(ui));
        egui::SidePanel::left("side")
            .resizable(true)
            .default_width(self.config.side_panel_width())
            .show_animated(ctx, self.ui.side_open, |ui| self.ui_side(ui));
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| self.ui_status_bar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.ui_central(ui));
        self.ui_image_info_window(ctx);
        self.update_open_dialog(ctx);

        if self.render.dirty {
            self.start_render();
        }
        self.poll_render(ctx);

        if self.has_pending_work() {
            ctx.request_repaint_after(WORKER_POLL_INTERVAL);
        }
    }
}
