// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout for activity diagrams.
//!
//! One pass fills in every position of a freshly loaded [`ActivityDiagram`]: the bottom
//! bar, the diagonal block of boxes, the stubs on each box outline, and finally the
//! boundary stubs, which align with whatever box stub they resolve to.

mod boundary;
mod placement;

use log::{debug, info};
use thiserror::Error;

use crate::config::{ConfigError, LayoutConfig};
use crate::model::ActivityDiagram;
use crate::resolve::StubIndex;

/// Rows taken by the information bar at the bottom of the diagram.
pub const BAR_HEIGHT: i32 = 3;

/// Length of the first stub on an edge; each following stub is one cell longer.
pub const BASE_STUB_LENGTH: i32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("diagram is already laid out")]
    AlreadyLaidOut,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Rows above the information bar.
pub fn content_height(diagram: &ActivityDiagram) -> i32 {
    diagram.height() - BAR_HEIGHT
}

/// Lays out `diagram` in place.
///
/// A diagram is laid out at most once; a second call returns
/// [`LayoutError::AlreadyLaidOut`] and leaves the geometry untouched.
pub fn layout_diagram(
    diagram: &mut ActivityDiagram,
    config: &LayoutConfig,
) -> Result<(), LayoutError> {
    if diagram.is_laid_out() {
        return Err(LayoutError::AlreadyLaidOut);
    }
    config.validate_for(diagram)?;

    info!(
        boxes = diagram.boxes().len(),
        width = diagram.width(),
        height = diagram.height();
        "Laying out activity diagram"
    );

    placement::layout_frame(diagram);
    placement::layout_boxes(diagram, config);
    for activity in diagram.boxes_mut() {
        placement::layout_box_stubs(activity);
    }
    debug!(boxes = diagram.boxes().len(); "Placed boxes and their stubs");

    let index = StubIndex::build(diagram);
    let positions = boundary::plan_positions(diagram, &index);
    boundary::apply_positions(diagram, &positions);
    let lengths = boundary::plan_lengths(diagram, &index);
    boundary::apply_lengths(diagram, &lengths);
    debug!(boundary_stubs = positions.len(); "Placed boundary stubs");

    diagram.mark_laid_out();
    Ok(())
}
