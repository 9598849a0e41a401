use super::FilterApp;
use crate::filter::{FilterKind, apply_filter, collect_parameters};
use crate::image::{DisplayImage, RenderedImage};
use egui::Context;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;

/// Result of one collect → dispatch run, converted for display on the worker.
pub enum RenderOutcome {
    Success(RenderedImage),
    Error(String),
}

pub struct PendingRenderTask {
    rx: Receiver<RenderOutcome>,
    kind: FilterKind,
}

/// The latest filter output and the run that will replace it.
#[derive(Default)]
pub struct RenderState {
    pub(super) display: Option<DisplayImage>,
    /// Filter that produced `display`, used as the caption.
    pub(super) shown_kind: FilterKind,
    pub(super) error: Option<String>,
    pub(super) pending: Option<PendingRenderTask>,
    pub(super) dirty: bool,
}

impl FilterApp {
    /// Dispatch the current selection against the source image on a worker.
    ///
    /// Any run still in flight is abandoned: its receiver is dropped and the
    /// worker's send fails silently.
    pub(crate) fn start_render(&mut self) {
        self.render.dirty = false;
        let Some(source) = self.source.image.clone() else {
            return;
        };
        let kind = self.selection.kind;
        let params = collect_parameters(kind, &self.selection.inputs);
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let started = Instant::now();
            let outcome = match apply_filter(&source, kind, params.as_ref()) {
                Ok(result) => {
                    log::debug!(
                        "{kind} -> {}x{} in {:.1?}",
                        result.width(),
                        result.height(),
                        started.elapsed()
                    );
                    RenderOutcome::Success(RenderedImage::from_dynamic(&result))
                }
                Err(err) => RenderOutcome::Error(err.to_string()),
            };
            let _ = tx.send(outcome);
        });
        if self.render.pending.is_some() {
            log::debug!("Abandoning in-flight filter run");
        }
        self.render.pending = Some(PendingRenderTask { rx, kind });
    }

    pub(crate) fn poll_render(&mut self, ctx: &Context) {
        let Some(task) = self.render.pending.take() else {
            return;
        };
        match task.rx.try_recv() {
            Ok(RenderOutcome::Success(rendered)) => {
                match self.render.display.as_mut() {
                    Some(display) => display.replace(rendered),
                    None => self.render.display = Some(DisplayImage::upload(ctx, rendered)),
                }
                self.render.shown_kind = task.kind;
                self.render.error = None;
            }
            Ok(RenderOutcome::Error(err)) => {
                log::warn!("{} failed: {err}", task.kind);
                self.set_status(format!("{} failed: {err}", task.kind));
                self.render.error = Some(err);
            }
            Err(TryRecvError::Empty) => {
                self.render.pending = Some(task);
            }
            Err(TryRecvError::Disconnected) => {
                log::error!("Filter worker for {} disconnected", task.kind);
                self.set_status(format!("{} failed: worker disconnected.", task.kind));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::image::ImageMeta;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::time::Duration;

    fn app_with_source(image: DynamicImage) -> FilterApp {
        let mut app = FilterApp::new(AppConfig::default(), None);
        app.set_source_image(image, ImageMeta::for_clipboard(None));
        app
    }

    fn wait_for_render(app: &mut FilterApp, ctx: &Context) {
        for _ in 0..500 {
            app.poll_render(ctx);
            if app.render.pending.is_none() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("filter run did not finish");
    }

    #[test]
    fn newer_run_replaces_pending_one() {
        let ctx = Context::default();
        let mut app = app_with_source(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            16,
            12,
            Rgba([40, 120, 200, 255]),
        )));
        assert!(app.render.dirty);

        app.selection.kind = FilterKind::Blur;
        app.start_render();
        app.selection.kind = FilterKind::Grayscale;
        app.start_render();
        assert!(!app.render.dirty);
        wait_for_render(&mut app, &ctx);

        assert_eq!(app.render.shown_kind, FilterKind::Grayscale);
        assert!(app.render.error.is_none());
        let display = app.render.display.as_ref().expect("display");
        assert_eq!(display.size, [16, 12]);
        assert_eq!(display.channel_count(), 1);
    }

    #[test]
    fn failed_run_keeps_caption_and_records_error() {
        let ctx = Context::default();
        let mut app = app_with_source(DynamicImage::new_rgba8(0, 0));

        app.selection.kind = FilterKind::Blur;
        app.start_render();
        wait_for_render(&mut app, &ctx);

        assert!(app.render.display.is_none());
        assert_eq!(app.render.shown_kind, FilterKind::Original);
        let err = app.render.error.as_deref().expect("error");
        assert!(err.contains("Blur"), "{err}");
        assert!(app.ui.last_status.as_deref().is_some_and(|s| s.contains("failed")));
    }

    #[test]
    fn render_without_source_is_a_no_op() {
        let mut app = FilterApp::new(AppConfig::default(), None);
        app.render.dirty = true;
        app.start_render();
        assert!(!app.render.dirty);
        assert!(app.render.pending.is_none());
    }
}
