// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout configuration.
//!
//! Diagram width and height live on [`ActivityDiagram`]; everything else the layout engine
//! consumes is here. Deserializable so a host can keep it next to its own settings:
//!
//! ```
//! # use idef0_ascii::config::LayoutConfig;
//! let config: LayoutConfig = serde_json::from_str(r#"{"box_width": 12}"#).unwrap();
//! assert_eq!(config.box_width(), 12);
//! assert_eq!(config.box_height(), LayoutConfig::default().box_height());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::BAR_HEIGHT;
use crate::model::ActivityDiagram;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: i32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i32 },

    #[error("diagram {width}x{height} leaves no room above the information bar")]
    DiagramTooSmall { width: i32, height: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    box_width: i32,
    box_height: i32,
    x_gap: i32,
    y_gap: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { box_width: 16, box_height: 6, x_gap: 4, y_gap: 2 }
    }
}

impl LayoutConfig {
    pub fn new(box_width: i32, box_height: i32, x_gap: i32, y_gap: i32) -> Self {
        Self { box_width, box_height, x_gap, y_gap }
    }

    pub fn box_width(&self) -> i32 {
        self.box_width
    }

    pub fn box_height(&self) -> i32 {
        self.box_height
    }

    pub fn x_gap(&self) -> i32 {
        self.x_gap
    }

    pub fn y_gap(&self) -> i32 {
        self.y_gap
    }

    /// Rejects sizes the layout arithmetic cannot work with.
    ///
    /// Whether the boxes actually fit the diagram is not checked; an oversized layout is
    /// reported by the renderer when it writes outside the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("box_width", self.box_width), ("box_height", self.box_height)] {
            if value <= 0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        for (field, value) in [("x_gap", self.x_gap), ("y_gap", self.y_gap)] {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// [`Self::validate`] plus the diagram's own dimensions.
    pub fn validate_for(&self, diagram: &ActivityDiagram) -> Result<(), ConfigError> {
        self.validate()?;
        let (width, height) = (diagram.width(), diagram.height());
        if width <= 0 || height <= BAR_HEIGHT {
            return Err(ConfigError::DiagramTooSmall { width, height });
        }
        Ok(())
    }
}
