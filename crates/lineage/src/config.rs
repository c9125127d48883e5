//! Configuration types for lineage chart layout.
//!
//! This module provides configuration structures that control how charts are
//! laid out and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Spacing constants for the geometry mapping.
//! - [`StyleConfig`] - Node size hints and the engine color palette.
//!
//! # Example
//!
//! ```
//! # use lineage::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().horizontal_spacing(), 280.0);
//! ```

use serde::Deserialize;

use crate::semantic::Engine;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Spacing constants for the geometry mapping.
///
/// A node lands at `(index * horizontal_spacing, depth * vertical_spacing)`.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal distance between sibling slots.
    #[serde(default = "default_horizontal_spacing")]
    horizontal_spacing: f32,

    /// Vertical distance between lineage levels.
    #[serde(default = "default_vertical_spacing")]
    vertical_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: default_horizontal_spacing(),
            vertical_spacing: default_vertical_spacing(),
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified spacings.
    pub fn new(horizontal_spacing: f32, vertical_spacing: f32) -> Self {
        Self {
            horizontal_spacing,
            vertical_spacing,
        }
    }

    /// Returns the horizontal spacing between sibling slots.
    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    /// Returns the vertical spacing between lineage levels.
    pub fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }
}

/// Node size hints and the engine color palette.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Suggested node width, in chart units.
    #[serde(default = "default_node_width")]
    node_width: f32,

    /// Suggested node height, in chart units.
    #[serde(default = "default_node_height")]
    node_height: f32,

    /// Background colors keyed by storage engine.
    #[serde(default)]
    palette: Palette,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            node_width: default_node_width(),
            node_height: default_node_height(),
            palette: Palette::default(),
        }
    }
}

impl StyleConfig {
    /// Returns the suggested node width.
    pub fn node_width(&self) -> f32 {
        self.node_width
    }

    /// Returns the suggested node height.
    pub fn node_height(&self) -> f32 {
        self.node_height
    }

    /// Returns the background color for a table with the given engine.
    pub fn background(&self, engine: Engine) -> &str {
        match engine {
            Engine::Kafka => &self.palette.kafka,
            Engine::MergeTree => &self.palette.merge_tree,
            Engine::Distributed => &self.palette.distributed,
            Engine::Other => &self.palette.fallback,
        }
    }
}

/// Background colors keyed by storage engine, as color strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Palette {
    #[serde(default = "default_kafka_color")]
    kafka: String,

    #[serde(default = "default_merge_tree_color")]
    merge_tree: String,

    #[serde(default = "default_distributed_color")]
    distributed: String,

    /// Color for engines without a dedicated entry.
    #[serde(default = "default_fallback_color")]
    fallback: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            kafka: default_kafka_color(),
            merge_tree: default_merge_tree_color(),
            distributed: default_distributed_color(),
            fallback: default_fallback_color(),
        }
    }
}

fn default_horizontal_spacing() -> f32 {
    280.0
}

fn default_vertical_spacing() -> f32 {
    200.0
}

fn default_node_width() -> f32 {
    240.0
}

fn default_node_height() -> f32 {
    100.0
}

fn default_kafka_color() -> String {
    "#fec89a".to_string()
}

fn default_merge_tree_color() -> String {
    "#ffbf69".to_string()
}

fn default_distributed_color() -> String {
    "#f9dcc4".to_string()
}

fn default_fallback_color() -> String {
    "#fff".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spacings() {
        let config = AppConfig::default();

        assert_eq!(config.layout().horizontal_spacing(), 280.0);
        assert_eq!(config.layout().vertical_spacing(), 200.0);
    }

    #[test]
    fn test_default_style() {
        let style = StyleConfig::default();

        assert_eq!(style.node_width(), 240.0);
        assert_eq!(style.node_height(), 100.0);
        assert_eq!(style.background(Engine::Kafka), "#fec89a");
        assert_eq!(style.background(Engine::MergeTree), "#ffbf69");
        assert_eq!(style.background(Engine::Distributed), "#f9dcc4");
        assert_eq!(style.background(Engine::Other), "#fff");
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"layout": {"horizontal_spacing": 120.0}}"#).unwrap();

        assert_eq!(config.layout().horizontal_spacing(), 120.0);
        assert_eq!(config.layout().vertical_spacing(), 200.0);
        assert_eq!(config.style().node_width(), 240.0);
    }

    #[test]
    fn test_palette_override() {
        let config: AppConfig =
            serde_json::from_str(r##"{"style": {"palette": {"kafka": "#123456"}}}"##).unwrap();

        assert_eq!(config.style().background(Engine::Kafka), "#123456");
        assert_eq!(config.style().background(Engine::Other), "#fff");
    }
}
