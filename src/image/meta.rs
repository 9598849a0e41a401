use chrono::{DateTime, Utc};
use image::ColorType;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Where the current source image came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Dropped { name: Option<String> },
    Clipboard,
}

/// Provenance of the loaded source image, shown in the info window.
#[derive(Debug, Clone)]
pub struct ImageMeta {
    source: ImageSource,
    byte_len: Option<u64>,
    modified: Option<SystemTime>,
}

impl ImageMeta {
    pub fn for_file(path: &Path) -> Self {
        let fs_meta = std::fs::metadata(path).ok();
        Self {
            source: ImageSource::File(path.to_path_buf()),
            byte_len: fs_meta.as_ref().map(std::fs::Metadata::len),
            modified: fs_meta.and_then(|m| m.modified().ok()),
        }
    }

    pub fn for_dropped(name: Option<&str>, byte_len: usize, modified: Option<SystemTime>) -> Self {
        let name = name.map(str::trim).filter(|n| !n.is_empty()).map(String::from);
        Self {
            source: ImageSource::Dropped { name },
            byte_len: u64::try_from(byte_len).ok(),
            modified,
        }
    }

    pub const fn for_clipboard(byte_len: Option<u64>) -> Self {
        Self {
            source: ImageSource::Clipboard,
            byte_len,
            modified: None,
        }
    }

    pub fn display_name(&self) -> String {
        match &self.source {
            ImageSource::File(path) => path.file_name().map_or_else(
                || path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            ),
            ImageSource::Dropped { name } => {
                name.clone().unwrap_or_else(|| "Dropped image".to_string())
            }
            ImageSource::Clipboard => "Clipboard image".to_string(),
        }
    }

    pub const fn source_label(&self) -> &'static str {
        match self.source {
            ImageSource::File(_) => "File on disk",
            ImageSource::Dropped { .. } => "Dropped bytes",
            ImageSource::Clipboard => "Clipboard",
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ImageSource::File(path) => Some(path),
            ImageSource::Dropped { .. } | ImageSource::Clipboard => None,
        }
    }

    pub const fn byte_len(&self) -> Option<u64> {
        self.byte_len
    }

    pub const fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}

/// Format a byte count with binary units.
pub fn human_readable_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    if bytes < KIB {
        return format!("{bytes} B");
    }
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64 / KIB as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// UTC timestamp for the info window.
pub fn format_system_time(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%Y-%m-%d %H:%M:%S %Z")
        .to_string()
}

/// Reduced aspect ratio, e.g. `16:9 (~1.778:1)`.
pub fn describe_aspect_ratio(width: u32, height: u32) -> Option<String> {
    if width == 0 || height == 0 {
        return None;
    }
    let divisor = gcd(width, height);
    let ratio = f64::from(width) / f64::from(height);
    Some(format!(
        "{}:{} (~{ratio:.3}:1)",
        width / divisor,
        height / divisor
    ))
}

/// Short channel layout label such as `RGBA, 8-bit`.
pub const fn describe_color(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "Gray, 8-bit",
        ColorType::La8 => "Gray + alpha, 8-bit",
        ColorType::Rgb8 => "RGB, 8-bit",
        ColorType::Rgba8 => "RGBA, 8-bit",
        ColorType::L16 | ColorType::La16 => "Gray, 16-bit",
        ColorType::Rgb16 | ColorType::Rgba16 => "RGB, 16-bit",
        _ => "Floating point",
    }
}

const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_use_binary_units() {
        assert_eq!(human_readable_bytes(512), "512 B");
        assert_eq!(human_readable_bytes(1536), "1.50 KiB");
        assert_eq!(human_readable_bytes(5 * 1024 * 1024), "5.00 MiB");
    }

    #[test]
    fn aspect_ratio_is_reduced() {
        assert_eq!(
            describe_aspect_ratio(1920, 1080).as_deref(),
            Some("16:9 (~1.778:1)")
        );
        assert_eq!(describe_aspect_ratio(0, 10), None);
    }

    #[test]
    fn dropped_names_are_trimmed() {
        let meta = ImageMeta::for_dropped(Some("  "), 10, None);
        assert_eq!(meta.display_name(), "Dropped image");
        let meta = ImageMeta::for_dropped(Some("cat.png"), 10, None);
        assert_eq!(meta.display_name(), "cat.png");
        assert_eq!(meta.byte_len(), Some(10));
        assert!(meta.path().is_none());
    }

    #[test]
    fn file_meta_uses_file_name() {
        let meta = ImageMeta::for_file(Path::new("/nonexistent/dir/photo.jpg"));
        assert_eq!(meta.display_name(), "photo.jpg");
        assert_eq!(meta.source_label(), "File on disk");
        assert_eq!(meta.byte_len(), None);
    }

    #[test]
    fn timestamps_are_utc() {
        assert_eq!(
            format_system_time(SystemTime::UNIX_EPOCH),
            "1970-01-01 00:00:00 UTC"
        );
    }

    #[test]
    fn clipboard_has_fixed_label() {
        let meta = ImageMeta::for_clipboard(Some(64));
        assert_eq!(meta.display_name(), "Clipboard image");
        assert_eq!(meta.source_label(), "Clipboard");
    }
}
