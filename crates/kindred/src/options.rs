use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Geometry and relaxation settings for [`crate::layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    pub node_width: f64,
    pub node_height: f64,
    /// Horizontal gap between two nodes of the same layer.
    pub horiz_margin: f64,
    /// Vertical gap between two layers.
    pub vert_margin: f64,
    /// Number of top-down + bottom-up relaxation rounds.
    pub iterations: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            node_width: 300.0,
            node_height: 150.0,
            horiz_margin: 20.0,
            vert_margin: 20.0,
            iterations: 20,
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance between the left edges of two adjacent nodes in a layer.
    pub fn column_step(&self) -> f64 {
        self.node_width + self.horiz_margin
    }

    /// Distance between the top edges of two adjacent layers.
    pub fn row_step(&self) -> f64 {
        self.node_height + self.vert_margin
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("nodeWidth", self.node_width),
            ("nodeHeight", self.node_height),
            ("horizMargin", self.horiz_margin),
            ("vertMargin", self.vert_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidOption { name, value });
            }
        }
        Ok(())
    }
}
