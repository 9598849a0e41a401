use super::FilterApp;
use crate::config::ImageLimits;
use crate::image::{ImageMeta, human_readable_bytes};
use arboard::{Clipboard, Error as ClipboardError};
use image::{DynamicImage, RgbaImage};

impl FilterApp {
    pub(crate) fn paste_image_from_clipboard(&mut self) {
        let limits = self.config.effective_image_limits();
        match capture_clipboard_image(&limits) {
            Ok(image) => {
                let byte_len = u64::try_from(image.as_bytes().len()).ok();
                self.source.pending = None;
                self.set_source_image(image, ImageMeta::for_clipboard(byte_len));
            }
            Err(err) => {
                log::info!("{err}");
                self.set_status(err);
            }
        }
    }
}

fn capture_clipboard_image(limits: &ImageLimits) -> Result<DynamicImage, String> {
    let mut clipboard = Clipboard::new().map_err(format_clipboard_error)?;
    let data = clipboard.get_image().map_err(format_clipboard_error)?;
    let (width, height) = check_clipboard_size(limits, data.width, data.height)?;
    let expected_len = rgba_len(width, height)?;
    let mut bytes = data.bytes.into_owned();
    if bytes.len() < expected_len {
        return Err("Paste failed: clipboard image data is truncated.".to_string());
    }
    bytes.truncate(expected_len);
    RgbaImage::from_raw(width, height, bytes)
        .map(DynamicImage::ImageRgba8)
        .ok_or_else(|| "Paste failed: clipboard image has an unexpected layout.".to_string())
}

/// Validate clipboard dimensions against the decode limits used for files.
fn check_clipboard_size(
    limits: &ImageLimits,
    width: usize,
    height: usize,
) -> Result<(u32, u32), String> {
    if width == 0 || height == 0 {
        return Err("Paste failed: clipboard image is empty.".to_string());
    }
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(format!(
            "Paste failed: clipboard image {width}x{height} is too large."
        ));
    };
    if w > limits.image_dim || h > limits.image_dim {
        return Err(format!(
            "Paste failed: clipboard image {w}x{h} exceeds the per-side limit ({} px).",
            limits.image_dim
        ));
    }
    let total_pixels = u64::from(w) * u64::from(h);
    if total_pixels > limits.total_pixels {
        return Err(format!(
            "Paste failed: clipboard image {w}x{h} (~{} MP) exceeds limit (~{} MP).",
            total_pixels / 1_000_000,
            limits.total_pixels / 1_000_000
        ));
    }
    let rgba_bytes = total_pixels * 4;
    if rgba_bytes > limits.alloc_bytes {
        return Err(format!(
            "Paste failed: clipboard image needs {} of RGBA data, over the limit ({}).",
            human_readable_bytes(rgba_bytes),
            human_readable_bytes(limits.alloc_bytes)
        ));
    }
    Ok((w, h))
}

fn rgba_len(width: u32, height: u32) -> Result<usize, String> {
    usize::try_from(u64::from(width) * u64::from(height) * 4)
        .map_err(|_| "Paste failed: clipboard image does not fit in memory.".to_string())
}

fn format_clipboard_error(err: ClipboardError) -> String {
    match err {
        ClipboardError::ContentNotAvailable => {
            "Paste failed: clipboard does not contain an image.".to_string()
        }
        ClipboardError::ClipboardNotSupported => {
            "Paste failed: clipboard access is not supported here.".to_string()
        }
        ClipboardError::ClipboardOccupied => {
            "Paste failed: clipboard is busy; try again.".to_string()
        }
        other => format!("Paste failed: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clipboard_image_is_rejected() {
        let err = check_clipboard_size(&ImageLimits::default(), 0, 10).expect_err("empty");
        assert!(err.contains("empty"));
    }

    #[test]
    fn oversized_side_is_rejected() {
        let limits = ImageLimits::default().sanitized();
        let too_wide = limits.image_dim as usize + 1;
        let err = check_clipboard_size(&limits, too_wide, 1).expect_err("too wide");
        assert!(err.contains("per-side limit"), "{err}");
    }

    #[test]
    fn pixel_budget_is_enforced() {
        let limits = ImageLimits {
            image_dim: 10_000,
            total_pixels: 1_000_000,
            alloc_bytes: 1 << 30,
        };
        let err = check_clipboard_size(&limits, 2000, 1000).expect_err("too many pixels");
        assert!(err.contains("MP"), "{err}");
    }

    #[test]
    fn allocation_budget_is_enforced() {
        let limits = ImageLimits {
            image_dim: 10_000,
            total_pixels: 100_000_000,
            alloc_bytes: 8 * 1024 * 1024,
        };
        let err = check_clipboard_size(&limits, 2000, 2000).expect_err("too many bytes");
        assert!(err.contains("RGBA"), "{err}");
    }

    #[test]
    fn valid_size_passes_through() {
        assert_eq!(
            check_clipboard_size(&ImageLimits::default(), 640, 480),
            Ok((640, 480))
        );
        assert_eq!(rgba_len(640, 480), Ok(640 * 480 * 4));
    }
}
