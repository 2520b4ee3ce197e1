//! Gallery configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```json
//! { "layout": { "card_width": 240.0 }, "load_delay_ms": 0 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, GalleryResult};

/// Card dimensions and board interaction constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Card width in pixels
    pub card_width: f64,
    /// Card height in pixels
    pub card_height: f64,
    /// Space between grid cells
    pub gap: f64,
    /// Strip at the top of the board kept clear for the filter bar
    pub reserved_top: f64,
    /// Largest tilt of a freely placed card, in degrees either way
    pub max_rotation_deg: f64,
    /// Pointer travel that turns a press into a drag
    pub drag_threshold_px: f64,
    /// A release later than this after the press is never a click
    pub click_window_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 200.0,
            card_height: 280.0,
            gap: 20.0,
            reserved_top: 96.0,
            max_rotation_deg: 15.0,
            drag_threshold_px: 5.0,
            click_window_ms: 200,
        }
    }
}

impl LayoutConfig {
    pub fn click_window(&self) -> Duration {
        Duration::from_millis(self.click_window_ms)
    }

    pub fn validate(&self) -> GalleryResult<()> {
        if !(self.card_width > 0.0 && self.card_height > 0.0) {
            return Err(GalleryError::Config(
                "card dimensions must be positive".to_string(),
            ));
        }
        if !(self.gap >= 0.0) {
            return Err(GalleryError::Config("gap must not be negative".to_string()));
        }
        if !(self.reserved_top >= 0.0) {
            return Err(GalleryError::Config(
                "reserved_top must not be negative".to_string(),
            ));
        }
        if !(self.max_rotation_deg >= 0.0) {
            return Err(GalleryError::Config(
                "max_rotation_deg must not be negative".to_string(),
            ));
        }
        if !(self.drag_threshold_px >= 0.0) {
            return Err(GalleryError::Config(
                "drag_threshold_px must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Desktop window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "To All The Boys.".to_string(),
            width: 1280.0,
            height: 900.0,
        }
    }
}

/// Top-level configuration shared by the desktop app and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub layout: LayoutConfig,
    /// Simulated catalog load latency
    pub load_delay_ms: u64,
    /// How many tags the dashboard ranks
    pub dashboard_top_n: usize,
    pub window: WindowConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            load_delay_ms: 1000,
            dashboard_top_n: 3,
            window: WindowConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Parse and validate a JSON config string.
    pub fn from_json_str(json: &str) -> GalleryResult<Self> {
        let config: GalleryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> GalleryResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded gallery config");
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> GalleryResult<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn validate(&self) -> GalleryResult<()> {
        self.layout.validate()?;
        if self.dashboard_top_n == 0 {
            return Err(GalleryError::Config(
                "dashboard_top_n must be at least 1".to_string(),
            ));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(GalleryError::Config(
                "window size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GalleryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.layout.click_window(), Duration::from_millis(200));
        assert_eq!(config.load_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GalleryConfig::from_json_str(r#"{ "layout": { "card_width": 240.0 }, "load_delay_ms": 0 }"#)
                .unwrap();
        assert_eq!(config.layout.card_width, 240.0);
        assert_eq!(config.layout.gap, 20.0);
        assert_eq!(config.load_delay_ms, 0);
        assert_eq!(config.dashboard_top_n, 3);
    }

    #[test]
    fn test_invalid_card_size_rejected() {
        let err = GalleryConfig::from_json_str(r#"{ "layout": { "card_height": 0.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, GalleryError::Config(_)));
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let err = GalleryConfig::from_json_str(r#"{ "dashboard_top_n": 0 }"#).unwrap_err();
        assert!(matches!(err, GalleryError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = GalleryConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, GalleryError::Json(_)));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "window": {{ "title": "Gallery" }} }}"#).unwrap();

        let config = GalleryConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.window.title, "Gallery");
        assert_eq!(config.window.width, 1280.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GalleryConfig::from_json_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, GalleryError::Io(_)));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(
            GalleryConfig::load_or_default(None).unwrap(),
            GalleryConfig::default()
        );
    }
}
