// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use thiserror::Error;

use crate::config::ConfigError;
use crate::layout::LayoutError;
use crate::render::RenderError;
use crate::route::RouteError;

/// Any failure of the [`crate::render_activity_diagram`] pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("layout failed: {0}")]
    Layout(LayoutError),

    #[error("routing failed: {0}")]
    Route(#[from] RouteError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Configuration problems surface as [`Error::Config`] whichever stage caught them.
impl From<LayoutError> for Error {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::Config(err) => Self::Config(err),
            err => Self::Layout(err),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::config::ConfigError;
    use crate::layout::LayoutError;

    #[test]
    fn layout_config_errors_flatten_to_config() {
        let config = ConfigError::Negative { field: "x_gap", value: -1 };
        assert_eq!(Error::from(LayoutError::Config(config.clone())), Error::Config(config));
        assert_eq!(
            Error::from(LayoutError::AlreadyLaidOut),
            Error::Layout(LayoutError::AlreadyLaidOut)
        );
    }
}
