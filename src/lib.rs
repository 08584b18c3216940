// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout, stub resolution and text rasterization for IDEF0 activity diagrams.
//!
//! The pipeline runs in fixed phases, each taking the previous one's output by reference:
//!
//! 1. [`layout::layout_diagram`] positions the frame, boxes and stubs (once per model);
//! 2. [`route::route_diagram`] turns the laid-out model into a routing request and asks a
//!    [`route::Router`] for orthogonal polylines;
//! 3. [`render::render_diagram`] draws everything onto a character [`render::Grid`].
//!
//! [`render_activity_diagram`] runs all three.
//!
//! ```
//! use idef0_ascii::config::LayoutConfig;
//! use idef0_ascii::model::{ActivityBox, ActivityDiagram, Frame, Interface, Stub};
//! use idef0_ascii::route::GridRouter;
//!
//! let mut diagram = ActivityDiagram::new(40, 20)
//!     .with_frame(Frame::new("A0", "Make widget", "C1"))
//!     .with_box(ActivityBox::new("Make", "1").with_stub(Interface::Input, Stub::new("X")))
//!     .with_boundary_stub(Interface::Input, Stub::new("X"));
//!
//! let grid = idef0_ascii::render_activity_diagram(
//!     &mut diagram,
//!     &LayoutConfig::new(10, 6, 4, 2),
//!     &GridRouter,
//! )?;
//! assert_eq!(grid.height(), 20);
//! # Ok::<(), idef0_ascii::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod render;
pub mod resolve;
pub mod route;

pub use error::{Error, Result};

use log::info;

use crate::config::LayoutConfig;
use crate::model::ActivityDiagram;
use crate::render::Grid;
use crate::route::Router;

/// Lays out `diagram`, routes it with `router` and rasterizes the result.
///
/// The diagram keeps its layout afterwards, so the call succeeds once per model. An invalid
/// `config` is reported as [`Error::Config`] before anything is moved.
pub fn render_activity_diagram(
    diagram: &mut ActivityDiagram,
    config: &LayoutConfig,
    router: &dyn Router,
) -> Result<Grid> {
    layout::layout_diagram(diagram, config)?;
    let routes = route::route_diagram(diagram, router)?;
    let grid = render::render_diagram(diagram, &routes)?;
    info!(rows = grid.height(), cols = grid.width(); "Activity diagram rendered");
    Ok(grid)
}
