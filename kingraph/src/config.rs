//! Engine configuration: node sizing bounds, curvature step, and the display
//! palette used by label classification.

use serde::{Deserialize, Serialize};

/// Error types for configuration validation
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid node size range: min {min} must not exceed max {max}")]
    InvalidSizeRange { min: f32, max: f32 },

    #[error("Curvature step must be positive, got {0}")]
    InvalidCurvatureStep(f32),

    #[error("Palette color '{0}' must not be empty")]
    EmptyColor(&'static str),
}

/// Display colors per label category, plus the "ended" override and the
/// transparency suffix appended for modifier-stripped labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub love: String,
    pub potential_love: String,
    pub family: String,
    pub property: String,
    pub other: String,
    pub unknown: String,
    /// Neutral gray forced for ex-/former/divorced labels regardless of
    /// category.
    pub ended: String,
    /// Hex alpha suffix appended when a modifier (step-, half-, ...) was
    /// stripped from the label.
    pub modified_alpha: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            love: "#ff4d6d".to_string(),
            potential_love: "#ff9ff3".to_string(),
            family: "#2ed573".to_string(),
            property: "#a55eea".to_string(),
            other: "#ffa502".to_string(),
            unknown: "#ffffff".to_string(),
            ended: "#999999".to_string(),
            modified_alpha: "80".to_string(),
        }
    }
}

impl Palette {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, color) in [
            ("love", &self.love),
            ("potential_love", &self.potential_love),
            ("family", &self.family),
            ("property", &self.property),
            ("other", &self.other),
            ("unknown", &self.unknown),
            ("ended", &self.ended),
        ] {
            if color.trim().is_empty() {
                return Err(ConfigError::EmptyColor(name));
            }
        }
        Ok(())
    }
}

/// Configuration for graph normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Size assigned to the least-connected rendered node
    pub min_node_size: f32,
    /// Size assigned to the most-connected rendered node
    pub max_node_size: f32,
    /// Curvature increment between parallel edges of one ordered pair
    pub curvature_step: f32,
    pub palette: Palette,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            min_node_size: 4.0,
            max_node_size: 12.0,
            curvature_step: 0.1,
            palette: Palette::default(),
        }
    }
}

impl GraphConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_node_size > self.max_node_size {
            return Err(ConfigError::InvalidSizeRange {
                min: self.min_node_size,
                max: self.max_node_size,
            });
        }
        if self.curvature_step <= 0.0 {
            return Err(ConfigError::InvalidCurvatureStep(self.curvature_step));
        }
        self.palette.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GraphConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_size_range_rejected() {
        let config = GraphConfig {
            min_node_size: 20.0,
            max_node_size: 4.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSizeRange { .. })
        ));
    }

    #[test]
    fn test_non_positive_curvature_step_rejected() {
        let config = GraphConfig {
            curvature_step: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCurvatureStep(_))
        ));
    }

    #[test]
    fn test_empty_palette_color_rejected() {
        let mut config = GraphConfig::default();
        config.palette.family = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyColor("family"))));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = GraphConfig::default();
        let json = serde_json::to_string(&config).expect("config should serialize");
        let back: GraphConfig = serde_json::from_str(&json).expect("config should deserialize");
        assert_eq!(back.min_node_size, config.min_node_size);
        assert_eq!(back.palette.ended, config.palette.ended);
    }
}
