use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Spacing and size constants that drive a layout pass.
///
/// Every field has a default, so a config file only needs the values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Distance between execution layers, left to right.
    pub horizontal_spacing: i32,
    /// Distance between nodes stacked in the same layer.
    pub vertical_spacing: i32,
    /// Width assumed for nodes that carry no intrinsic width.
    pub node_width_estimate: i32,
    /// Height assumed for nodes that carry no intrinsic height.
    pub node_height_estimate: i32,
    /// Horizontal offset of a pure node from its consumer.
    pub pure_offset_x: i32,
    /// Vertical offset of the first pure node stacked against a consumer.
    pub pure_offset_y: i32,
    /// Vertical gap between stacked pure nodes.
    pub pure_vertical_gap: i32,
    /// Column used for pure nodes nothing reads from.
    pub orphan_column_x: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 350,
            vertical_spacing: 200,
            node_width_estimate: 200,
            node_height_estimate: 120,
            pure_offset_x: -200,
            pure_offset_y: -50,
            pure_vertical_gap: 140,
            orphan_column_x: -200,
        }
    }
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Spacings, the stacking gap and the size estimates must be positive.
    /// Offsets may take any sign.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("horizontalSpacing", self.horizontal_spacing),
            ("verticalSpacing", self.vertical_spacing),
            ("nodeWidthEstimate", self.node_width_estimate),
            ("nodeHeightEstimate", self.node_height_estimate),
            ("pureVerticalGap", self.pure_vertical_gap),
        ];
        match positive.into_iter().find(|(_, value)| *value <= 0) {
            Some((field, value)) => Err(ConfigError::NonPositive { field, value }),
            None => Ok(()),
        }
    }
}
