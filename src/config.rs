//! # Configuration
//!
//! Plain configuration structs with builder-style setters. Both have sensible
//! defaults so most callers only override what they need:
//!
//! ```rust
//! use stage_layout::config::{ArrangeConfig, SceneConfig};
//!
//! let config = SceneConfig::default()
//!     .with_arrange(ArrangeConfig::default().with_keep_original_scale(true))
//!     .with_empty_overall_size(10.0);
//! assert!(config.arrange.keep_original_scale);
//! ```

use crate::gfx::bounds::Color;

/// Spacing multiplier between adjacent spiral cells (10% margin).
pub const DEFAULT_CELL_GAP: f32 = 1.1;

/// Parameters of a single spiral arrangement pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrangeConfig {
    /// Cell pitch as a multiple of the unit size. Values below 1 allow overlap.
    pub cell_gap: f32,
    /// Skip scale normalization and place every object at its loaded size.
    pub keep_original_scale: bool,
}

impl ArrangeConfig {
    pub fn new() -> Self {
        Self {
            cell_gap: DEFAULT_CELL_GAP,
            keep_original_scale: false,
        }
    }

    pub fn with_cell_gap(mut self, cell_gap: f32) -> Self {
        self.cell_gap = cell_gap;
        self
    }

    pub fn with_keep_original_scale(mut self, keep: bool) -> Self {
        self.keep_original_scale = keep;
        self
    }
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Scene-level settings: arrangement, camera framing fallback and selection
/// visuals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub arrange: ArrangeConfig,
    /// Unit size reported by [`Scene::framing`](crate::gfx::scene::Scene::framing)
    /// when nothing is loaded.
    pub empty_unit_size: f32,
    /// Overall size reported for an empty scene.
    pub empty_overall_size: f32,
    /// Selection box color of the current (first selected) object.
    pub selected_color: Color,
    /// Selection box color of every other selected object.
    pub other_color: Color,
    /// Corner marker radius as a fraction of the volume's largest dimension.
    pub corner_marker_ratio: f32,
}

impl SceneConfig {
    pub fn new() -> Self {
        Self {
            arrange: ArrangeConfig::new(),
            empty_unit_size: 1.0,
            empty_overall_size: 5.0,
            selected_color: [1.0, 0.85, 0.1, 1.0],
            other_color: [0.3, 0.6, 1.0, 1.0],
            corner_marker_ratio: 0.02,
        }
    }

    pub fn with_arrange(mut self, arrange: ArrangeConfig) -> Self {
        self.arrange = arrange;
        self
    }

    pub fn with_empty_unit_size(mut self, size: f32) -> Self {
        self.empty_unit_size = size;
        self
    }

    pub fn with_empty_overall_size(mut self, size: f32) -> Self {
        self.empty_overall_size = size;
        self
    }

    pub fn with_selection_colors(mut self, selected: Color, other: Color) -> Self {
        self.selected_color = selected;
        self.other_color = other;
        self
    }

    pub fn with_corner_marker_ratio(mut self, ratio: f32) -> Self {
        self.corner_marker_ratio = ratio;
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SceneConfig::default();
        assert_eq!(config.arrange.cell_gap, 1.1);
        assert!(!config.arrange.keep_original_scale);
        assert_eq!(config.empty_unit_size, 1.0);
        assert_eq!(config.empty_overall_size, 5.0);
    }

    #[test]
    fn test_builders() {
        let config = SceneConfig::new()
            .with_arrange(ArrangeConfig::new().with_cell_gap(1.5))
            .with_selection_colors([1.0; 4], [0.0; 4])
            .with_corner_marker_ratio(0.1);
        assert_eq!(config.arrange.cell_gap, 1.5);
        assert_eq!(config.selected_color, [1.0; 4]);
        assert_eq!(config.other_color, [0.0; 4]);
        assert_eq!(config.corner_marker_ratio, 0.1);
    }
}
