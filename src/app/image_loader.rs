use super::{FilterApp, ImageLoadRequest, ImageLoadResult, PendingImageMeta, PendingImageTask};
use crate::image::{ImageMeta, decode_image_from_bytes, decode_image_from_path};
use image::{DynamicImage, GenericImageView};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::SystemTime;

impl FilterApp {
    pub(crate) fn start_loading_image_from_path(&mut self, path: PathBuf) {
        self.remember_image_dir_from_path(&path);
        let meta = PendingImageMeta::Path { path: path.clone() };
        self.start_image_load(ImageLoadRequest::Path(path), meta);
    }

    pub(crate) fn start_loading_image_from_bytes(
        &mut self,
        name: Option<String>,
        bytes: Vec<u8>,
        last_modified: Option<SystemTime>,
    ) {
        let meta = PendingImageMeta::DroppedBytes {
            name,
            byte_len: bytes.len(),
            last_modified,
        };
        self.start_image_load(ImageLoadRequest::Bytes(bytes), meta);
    }

    fn start_image_load(&mut self, request: ImageLoadRequest, meta: PendingImageMeta) {
        let description = meta.description();
        let limits = self.config.effective_image_limits();
        let (tx, rx) = mpsc::channel();
        log::info!("Loading {description}");
        thread::spawn(move || {
            let result = match request {
                ImageLoadRequest::Path(path) => decode_image_from_path(&limits, &path),
                ImageLoadRequest::Bytes(bytes) => decode_image_from_bytes(&limits, bytes),
            };
            let msg = match result {
                Ok(image) => ImageLoadResult::Success(image),
                Err(err) => ImageLoadResult::Error(format!("{err:#}")),
            };
            let _ = tx.send(msg);
        });
        self.source.pending = Some(PendingImageTask { rx, meta });
        self.set_status(format!("Loading {description}…"));
    }

    pub(crate) fn poll_image_loader(&mut self) {
        let Some(task) = self.source.pending.take() else {
            return;
        };
        match task.rx.try_recv() {
            Ok(ImageLoadResult::Success(image)) => {
                self.set_source_image(image, task.meta.into_image_meta());
            }
            Ok(ImageLoadResult::Error(err)) => {
                let label = task.meta.description();
                log::warn!("Failed to load {label}: {err}");
                self.set_status(format!("Failed to load {label}: {err}"));
            }
            Err(TryRecvError::Empty) => {
                self.source.pending = Some(task);
            }
            Err(TryRecvError::Disconnected) => {
                let label = task.meta.description();
                log::error!("Image loader for {label} disconnected");
                self.set_status(format!("Loading {label} failed: worker disconnected."));
            }
        }
    }

    /// Replace the source image and queue a fresh filter run.
    pub(crate) fn set_source_image(&mut self, image: DynamicImage, meta: ImageMeta) {
        let (width, height) = image.dimensions();
        let name = meta.display_name();
        log::info!("Loaded {name} ({width}x{height}, {:?})", image.color());
        self.selection.inputs.seed_size(width, height);
        self.source.image = Some(Arc::new(image));
        self.source.meta = Some(meta);
        self.mark_selection_changed();
        self.set_status(format!("Loaded {name}"));
    }

    pub(crate) fn remember_image_dir_from_path(&mut self, path: &Path) {
        let dir = path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        self.last_image_dir = Some(dir);
    }
}
