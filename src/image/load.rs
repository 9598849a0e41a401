use crate::config::ImageLimits;
use anyhow::Context as _;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, Limits};
use std::io::{BufRead, Cursor, Read, Seek};
use std::path::Path;

/// Formats accepted for upload.
pub const SUPPORTED_FORMATS: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Jpeg];
/// File extensions offered by the open dialog.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

fn decode_reader<R>(limits: &ImageLimits, mut reader: ImageReader<R>) -> anyhow::Result<DynamicImage>
where
    R: Read + Seek + BufRead,
{
    let format = reader
        .format()
        .context("Unrecognized image data (expected PNG or JPEG)")?;
    if !SUPPORTED_FORMATS.contains(&format) {
        anyhow::bail!("Unsupported image format {format:?}; only PNG and JPEG are accepted");
    }

    let il = limits.sanitized();
    let mut decode_limits = Limits::default();
    decode_limits.max_image_width = Some(il.image_dim);
    decode_limits.max_image_height = Some(il.image_dim);
    decode_limits.max_alloc = Some(il.alloc_bytes);
    reader.limits(decode_limits);
    let img = reader.decode().context("Failed to decode image data")?;

    let (w, h) = img.dimensions();
    let total_pixels = u64::from(w) * u64::from(h);
    if total_pixels > il.total_pixels {
        anyhow::bail!(
            "Image too large: {w}x{h} (~{} MP) exceeds limit (~{} MP)",
            total_pixels / 1_000_000,
            il.total_pixels / 1_000_000
        );
    }

    Ok(to_eight_bit(img))
}

/// Keep 8-bit gray and RGBA buffers as they are; widen everything else to RGBA8.
fn to_eight_bit(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageLumaA8(_) | DynamicImage::ImageRgba8(_) => {
            img
        }
        DynamicImage::ImageLuma16(_) => DynamicImage::ImageLuma8(img.to_luma8()),
        DynamicImage::ImageLumaA16(_) => DynamicImage::ImageLumaA8(img.to_luma_alpha8()),
        other => DynamicImage::ImageRgba8(other.to_rgba8()),
    }
}

/// Load and decode a PNG or JPEG file using the configured limits.
pub fn decode_image_from_path(limits: &ImageLimits, path: &Path) -> anyhow::Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .with_guessed_format()
        .context("Failed to detect image format")?;
    decode_reader(limits, reader)
}

/// Decode PNG or JPEG bytes (drag & drop payloads) using the configured limits.
pub fn decode_image_from_bytes(limits: &ImageLimits, bytes: Vec<u8>) -> anyhow::Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("Failed to detect image format")?;
    decode_reader(limits, reader)
}
