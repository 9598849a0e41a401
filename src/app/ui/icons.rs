//! Unicode UI icon constants.
//!
//! BMP-only glyphs so the default egui fonts cover them.

pub const ICON_MENU: &str = "☰";
pub const ICON_INFO: &str = "ℹ";
pub const ICON_FILTERS: &str = "≋";
pub const ICON_SIDE_TOGGLE: &str = "⟷";
pub const ICON_OPEN: &str = "⇧";
pub const ICON_PASTE: &str = "⎘";
pub const ICON_FIT: &str = "▣";
