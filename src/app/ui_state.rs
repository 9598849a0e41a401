use crate::config::AppConfig;

pub struct UiState {
    pub(super) side_open: bool,
    pub(super) fit_to_width: bool,
    pub(super) info_window_open: bool,
    pub(super) last_status: Option<String>,
}

impl UiState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            side_open: true,
            fit_to_width: config.fit_to_width,
            info_window_open: false,
            last_status: None,
        }
    }
}
