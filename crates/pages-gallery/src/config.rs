//! Gallery configuration.
//!
//! A [`GalleryConfig`] is handed to [`PagesGallery::new`](crate::PagesGallery::new)
//! once and frozen from then on; changing any option means building a new
//! gallery.
//!
//! # Example
//!
//! ```
//! use pages_gallery::config::GalleryConfig;
//!
//! let config = GalleryConfig::from_toml_str(
//!     r##"
//!     start_index = 2
//!     allow_inertia = false
//!
//!     [indicator]
//!     active_dot_color = "#FF8800"
//!     dot_size = 6.0
//!     "##,
//! )
//! .unwrap();
//!
//! assert_eq!(config.start_index(), 2);
//! assert!(!config.allow_inertia());
//! assert!(config.allow_autoscroll());
//! assert_eq!(config.indicator().dot_size, 6.0);
//! ```

use serde::Deserialize;

use pages_gallery_core::logging::targets;

use crate::error::{ConfigError, ConfigResult};
use crate::geometry::Color;

/// Default indicator dot diameter.
pub const DEFAULT_DOT_SIZE: f32 = 8.0;

/// Default gap between indicator dots.
pub const DEFAULT_DOT_SPACING: f32 = 8.0;

/// Appearance of the page indicator dots.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorStyle {
    /// Color of inactive dots.
    pub dot_color: Color,
    /// Color of the dot for the active item.
    pub active_dot_color: Color,
    /// Dot diameter.
    pub dot_size: f32,
    /// Gap between neighboring dots.
    pub spacing: f32,
}

impl IndicatorStyle {
    /// Create a style from its parts.
    pub fn new(dot_color: Color, active_dot_color: Color, dot_size: f32, spacing: f32) -> Self {
        Self {
            dot_color,
            active_dot_color,
            dot_size,
            spacing,
        }
    }

    /// Check that the numeric fields describe a drawable row of dots.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.dot_size.is_finite() || self.dot_size < 0.0 {
            return Err(ConfigError::InvalidDotSize(self.dot_size));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            dot_color: Color::GRAY,
            active_dot_color: Color::WHITE,
            dot_size: DEFAULT_DOT_SIZE,
            spacing: DEFAULT_DOT_SPACING,
        }
    }
}

/// Construction-time options for a gallery.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    start_index: usize,
    show_indicator: bool,
    allow_inertia: bool,
    allow_autoscroll: bool,
    indicator: IndicatorStyle,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            start_index: 0,
            show_indicator: true,
            allow_inertia: true,
            allow_autoscroll: true,
            indicator: IndicatorStyle::default(),
        }
    }
}

impl GalleryConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text and validate it.
    ///
    /// Missing keys take their default values. Colors are written as
    /// `"#RRGGBB"` or `"#RRGGBBAA"` strings.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text).inspect_err(|err| {
            tracing::warn!(target: targets::CONFIG, error = %err, "rejected gallery configuration");
        })?;
        config.validate()?;
        tracing::debug!(target: targets::CONFIG, ?config, "loaded gallery configuration");
        Ok(config)
    }

    /// Check every field for values the gallery cannot use.
    pub fn validate(&self) -> ConfigResult<()> {
        self.indicator.validate()
    }

    /// Set the initial item using builder pattern.
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Show or hide the page indicator using builder pattern.
    pub fn with_show_indicator(mut self, show_indicator: bool) -> Self {
        self.show_indicator = show_indicator;
        self
    }

    /// Allow or suppress native momentum using builder pattern.
    pub fn with_allow_inertia(mut self, allow_inertia: bool) -> Self {
        self.allow_inertia = allow_inertia;
        self
    }

    /// Enable or disable snapping using builder pattern.
    pub fn with_allow_autoscroll(mut self, allow_autoscroll: bool) -> Self {
        self.allow_autoscroll = allow_autoscroll;
        self
    }

    /// Set the indicator appearance using builder pattern.
    pub fn with_indicator(mut self, indicator: IndicatorStyle) -> Self {
        self.indicator = indicator;
        self
    }

    /// The item shown first.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Whether the page indicator is shown.
    #[inline]
    pub fn show_indicator(&self) -> bool {
        self.show_indicator
    }

    /// Whether native momentum may continue after a drag.
    #[inline]
    pub fn allow_inertia(&self) -> bool {
        self.allow_inertia
    }

    /// Whether the strip snaps to the nearest item when it comes to rest.
    #[inline]
    pub fn allow_autoscroll(&self) -> bool {
        self.allow_autoscroll
    }

    /// Appearance of the page indicator.
    #[inline]
    pub fn indicator(&self) -> &IndicatorStyle {
        &self.indicator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::new();
        assert_eq!(config.start_index(), 0);
        assert!(config.show_indicator());
        assert!(config.allow_inertia());
        assert!(config.allow_autoscroll());
        assert_eq!(config.indicator().dot_color, Color::GRAY);
        assert_eq!(config.indicator().active_dot_color, Color::WHITE);
        assert_eq!(config.indicator().dot_size, DEFAULT_DOT_SIZE);
        assert_eq!(config.indicator().spacing, DEFAULT_DOT_SPACING);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GalleryConfig::new()
            .with_start_index(4)
            .with_show_indicator(false)
            .with_allow_inertia(false)
            .with_allow_autoscroll(false)
            .with_indicator(IndicatorStyle::new(Color::BLACK, Color::WHITE, 6.0, 4.0));

        assert_eq!(config.start_index(), 4);
        assert!(!config.show_indicator());
        assert!(!config.allow_inertia());
        assert!(!config.allow_autoscroll());
        assert_eq!(config.indicator().spacing, 4.0);
    }

    #[test]
    fn test_from_toml() {
        let config = GalleryConfig::from_toml_str(
            r##"
            show_indicator = false

            [indicator]
            dot_color = "#000000"
            spacing = 12.0
            "##,
        )
        .unwrap();

        assert!(!config.show_indicator());
        assert_eq!(config.indicator().dot_color, Color::BLACK);
        assert_eq!(config.indicator().spacing, 12.0);
        assert_eq!(config.indicator().dot_size, DEFAULT_DOT_SIZE);
    }

    #[test]
    fn test_from_empty_toml() {
        let config = GalleryConfig::from_toml_str("").unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_invalid_color() {
        let err = GalleryConfig::from_toml_str(
            r##"
            [indicator]
            dot_color = "gray"
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("invalid color"));
    }

    #[test]
    fn test_unknown_key() {
        let err = GalleryConfig::from_toml_str("show_dots = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = GalleryConfig::from_toml_str("[indicator]\ndot_size = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDotSize(size) if size == -1.0));

        let style = IndicatorStyle::new(Color::GRAY, Color::WHITE, 8.0, f32::NAN);
        assert!(matches!(style.validate(), Err(ConfigError::InvalidSpacing(_))));
    }
}
