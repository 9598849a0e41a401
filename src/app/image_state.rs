use crate::image::ImageMeta;
use image::DynamicImage;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::SystemTime;

pub enum ImageLoadRequest {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

pub enum ImageLoadResult {
    Success(DynamicImage),
    Error(String),
}

pub struct PendingImageTask {
    pub(super) rx: Receiver<ImageLoadResult>,
    pub(super) meta: PendingImageMeta,
}

#[derive(Clone)]
pub enum PendingImageMeta {
    Path {
        path: PathBuf,
    },
    DroppedBytes {
        name: Option<String>,
        byte_len: usize,
        last_modified: Option<SystemTime>,
    },
}

impl PendingImageMeta {
    pub(super) fn description(&self) -> String {
        match self {
            Self::Path { path } => path
                .file_name()
                .and_then(|s| s.to_str())
                .map_or_else(|| path.display().to_string(), str::to_string),
            Self::DroppedBytes { name, .. } => name
                .as_deref()
                .map_or_else(|| "dropped bytes".to_string(), str::to_string),
        }
    }

    pub(super) fn into_image_meta(self) -> ImageMeta {
        match self {
            Self::Path { path } => ImageMeta::for_file(&path),
            Self::DroppedBytes {
                name,
                byte_len,
                last_modified,
            } => ImageMeta::for_dropped(name.as_deref(), byte_len, last_modified),
        }
    }
}

/// The decoded upload every filter run starts from.
#[derive(Default)]
pub struct SourceState {
    pub(super) image: Option<Arc<DynamicImage>>,
    pub(super) meta: Option<ImageMeta>,
    pub(super) pending: Option<PendingImageTask>,
}
