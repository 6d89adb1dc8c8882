// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Static application settings: window geometry, display formats, log defaults.

use crate::ui::components::date_picker;

/// Settings used when launching the window.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Native window title.
    pub title: String,
    /// Initial window size in logical points.
    pub inner_size: [f32; 2],
    /// Smallest size the window may be resized to.
    pub min_inner_size: [f32; 2],
    /// `chrono` format string for dates shown to the user.
    pub date_format: String,
    /// Log filter applied when `RUST_LOG` is unset.
    pub default_log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Registration".to_string(),
            inner_size: [480.0, 640.0],
            min_inner_size: [360.0, 480.0],
            date_format: date_picker::DISPLAY_FORMAT.to_string(),
            default_log_filter: "regform=info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_fits_min_size() {
        let config = AppConfig::default();
        assert!(config.inner_size[0] >= config.min_inner_size[0]);
        assert!(config.inner_size[1] >= config.min_inner_size[1]);
    }

    #[test]
    fn default_date_format_is_month_first() {
        assert_eq!(AppConfig::default().date_format, "%m/%d/%Y");
    }
}
