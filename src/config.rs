use std::fs;
use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs};
use serde::Deserialize;

use crate::filter::FilterKind;

const CONFIG_FILE_NAME: &str = "filterdesk.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub image_limits: ImageLimits,
    /// Label of the filter selected at launch, e.g. `"Blur"`.
    pub startup_filter: String,
    pub fit_to_width: bool,
    pub side_panel_width: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image_limits: ImageLimits::default(),
            startup_filter: FilterKind::Original.label().to_string(),
            fit_to_width: true,
            side_panel_width: 260.0,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            let Ok(contents) = fs::read_to_string(&path) else {
                continue;
            };
            match Self::from_toml(&contents) {
                Ok(cfg) => {
                    log::info!("Loaded config from {}", path.display());
                    return cfg;
                }
                Err(err) => log::warn!("Failed to parse config {}: {err}", path.display()),
            }
        }
        log::debug!("No config file found, using defaults");
        Self::default()
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Filter to select at launch; unknown labels fall back to the original image.
    pub fn startup_filter_kind(&self) -> FilterKind {
        self.startup_filter.parse().unwrap_or_else(|err| {
            log::warn!("Ignoring startup_filter: {err}");
            FilterKind::Original
        })
    }

    pub const fn side_panel_width(&self) -> f32 {
        self.side_panel_width.clamp(160.0, 600.0)
    }

    pub fn effective_image_limits(&self) -> ImageLimits {
        self.image_limits.sanitized()
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(dir) = exe_path.parent()
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "Filterdesk", "Filterdesk") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(
                base_dirs
                    .config_dir()
                    .join("filterdesk")
                    .join(CONFIG_FILE_NAME),
            );
        }

        paths
    }
}

/// Upper bounds applied while decoding uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImageLimits {
    pub image_dim: u32,
    pub total_pixels: u64,
    pub alloc_bytes: u64,
}

impl Default for ImageLimits {
    fn default() -> Self {
        Self {
            image_dim: 12_000,
            total_pixels: 80_000_000,       // ~80 MP
            alloc_bytes: 512 * 1024 * 1024, // 512 MiB
        }
    }
}

impl ImageLimits {
    pub fn sanitized(&self) -> Self {
        Self {
            image_dim: self.image_dim.clamp(64, 100_000),
            total_pixels: self.total_pixels.clamp(1_000_000, 5_000_000_000), // 1 MP .. 5 GP
            alloc_bytes: self
                .alloc_bytes
                .clamp(8 * 1024 * 1024, 8 * 1024 * 1024 * 1024), // 8 MiB .. 8 GiB
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = AppConfig::from_toml("").expect("parse");
        assert_eq!(cfg.startup_filter_kind(), FilterKind::Original);
        assert!(cfg.fit_to_width);
        assert_eq!(cfg.image_limits, ImageLimits::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
startup_filter = "edge detection"
fit_to_width = false

[image_limits]
image_dim = 4000
"#,
        )
        .expect("parse");
        assert_eq!(cfg.startup_filter_kind(), FilterKind::EdgeDetection);
        assert!(!cfg.fit_to_width);
        assert_eq!(cfg.image_limits.image_dim, 4000);
        assert_eq!(
            cfg.image_limits.total_pixels,
            ImageLimits::default().total_pixels
        );
    }

    #[test]
    fn unknown_startup_filter_falls_back_to_original() {
        let cfg = AppConfig::from_toml(r#"startup_filter = "Posterize""#).expect("parse");
        assert_eq!(cfg.startup_filter_kind(), FilterKind::Original);
    }

    #[test]
    fn wrong_value_type_is_an_error() {
        assert!(AppConfig::from_toml("fit_to_width = 3").is_err());
    }

    #[test]
    fn limits_are_clamped_to_sane_bounds() {
        let limits = ImageLimits {
            image_dim: 1,
            total_pixels: u64::MAX,
            alloc_bytes: 0,
        }
        .sanitized();
        assert_eq!(limits.image_dim, 64);
        assert_eq!(limits.total_pixels, 5_000_000_000);
        assert_eq!(limits.alloc_bytes, 8 * 1024 * 1024);
    }

    #[test]
    fn side_panel_width_is_bounded() {
        let cfg = AppConfig {
            side_panel_width: 10.0,
            ..AppConfig::default()
        };
        assert!((cfg.side_panel_width() - 160.0).abs() <= f32::EPSILON);
    }
}
