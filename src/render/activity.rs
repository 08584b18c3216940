// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Draw passes for activity diagrams.
//!
//! Order matters, later passes overwrite earlier ones: routed polylines, boxes with their
//! stubs, boundary stubs, then the frame and the information bar.

use log::{debug, info};
use rayon::prelude::*;
use thiserror::Error;

use super::text::{centre_offset, text_len, truncate_marked, wrap};
use super::{Canvas, CanvasError, Grid, CORNER, HORIZONTAL, VERTICAL};
use crate::geometry::{Direction, GridPoint, GridRect, RoutePoint};
use crate::model::{ActivityBox, ActivityDiagram, Edge, Interface, LabelAnchor, Stub};
use crate::route::{Route, RouteSet};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("routed segment {from} -> {to} is neither horizontal nor vertical")]
    MalformedSegment { from: RoutePoint, to: RoutePoint },

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// One glyph of a routed polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stroke {
    cell: GridPoint,
    glyph: char,
}

const fn straight(direction: Direction) -> char {
    if direction.is_vertical() {
        VERTICAL
    } else {
        HORIZONTAL
    }
}

/// Cells of one polyline in drawing order: `+` on every vertex, straight glyphs between.
fn polyline_strokes(route: &Route, height: i32) -> Result<Vec<Stroke>, RenderError> {
    let points = route.points();
    let mut strokes = Vec::new();
    if let [only] = points {
        strokes.push(Stroke { cell: only.to_grid(height), glyph: CORNER });
    }

    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let (start, end) = (from.to_grid(height), to.to_grid(height));
        let direction =
            Direction::classify(start, end).ok_or(RenderError::MalformedSegment { from, to })?;

        strokes.push(Stroke { cell: start, glyph: CORNER });
        let glyph = straight(direction);
        let mut cell = start.step(direction, 1);
        while cell != end {
            strokes.push(Stroke { cell, glyph });
            cell = cell.step(direction, 1);
        }
        strokes.push(Stroke { cell: end, glyph: CORNER });
    }

    Ok(strokes)
}

/// Computes every polyline's strokes in parallel, then applies them in route order.
///
/// Applying in order through [`Canvas::stroke`] gives exactly the sequential result, and
/// the first malformed route in order is the one reported.
fn draw_routes(canvas: &mut Canvas, routes: &RouteSet, height: i32) -> Result<(), RenderError> {
    let per_route = routes
        .as_slice()
        .par_iter()
        .map(|route| polyline_strokes(route, height))
        .collect::<Vec<_>>();

    for strokes in per_route {
        for stroke in strokes? {
            canvas.stroke(stroke.cell, stroke.glyph)?;
        }
    }
    Ok(())
}

/// Arrow (or straight cell) at `position`, straight cells, `+` at `position + length`.
fn draw_tick(
    canvas: &mut Canvas,
    position: GridPoint,
    direction: Direction,
    length: i32,
    head: Option<char>,
) -> Result<GridPoint, CanvasError> {
    let glyph = straight(direction);
    canvas.set(position, head.unwrap_or(glyph))?;
    for step in 1..length {
        canvas.set(position.step(direction, step), glyph)?;
    }
    let far = position.step(direction, length);
    canvas.set(far, CORNER)?;
    Ok(far)
}

fn label_origin(anchor: LabelAnchor, far: GridPoint, name: &str) -> GridPoint {
    match anchor {
        LabelAnchor::AboveEndingAt => {
            GridPoint::new(far.row - 1, far.col + 1 - text_len(name) as i32)
        }
        LabelAnchor::AboveStartingAt => GridPoint::new(far.row - 1, far.col),
        LabelAnchor::RightOf => GridPoint::new(far.row, far.col + 1),
    }
}

fn draw_box_stub(
    canvas: &mut Canvas,
    interface: Interface,
    stub: &Stub,
) -> Result<(), CanvasError> {
    let geometry = interface.geometry();
    let head = stub.headed().then_some(geometry.arrow);
    let far = draw_tick(canvas, stub.position(), geometry.outward, stub.length(), head)?;
    canvas.write_str(label_origin(geometry.label, far, stub.name()), stub.name());
    Ok(())
}

fn draw_box(canvas: &mut Canvas, activity: &ActivityBox) -> Result<(), CanvasError> {
    let rect = activity.rect();
    canvas.draw_rect(rect)?;

    let inner_left = rect.left + 1 + activity.padding();
    let inner_width = activity.interior_width();
    let lines = wrap(activity.name(), inner_width);
    let inner_rows = (rect.height() - 2).max(0);
    let first_row = rect.top + 1 + ((inner_rows - lines.len() as i32) / 2).max(0);
    // Lines past the interior are dropped so the bottom border stays intact.
    for (i, line) in lines.iter().take(inner_rows as usize).enumerate() {
        let col = inner_left + centre_offset(line, inner_width) as i32;
        canvas.write_str(GridPoint::new(first_row + i as i32, col), line);
    }

    let node = format!("A{}", activity.node());
    let node_col = rect.right - text_len(&node) as i32;
    canvas.write_str(GridPoint::new(rect.bottom - 1, node_col), &node);

    for (interface, _, stub) in activity.stubs().iter() {
        draw_box_stub(canvas, interface, stub)?;
    }
    Ok(())
}

/// Where a boundary stub's name goes: next to the frame, clear of the tick.
fn boundary_label_origin(edge: Edge, stub: &Stub, canvas_width: i32) -> GridPoint {
    let p = stub.position();
    match edge {
        Edge::Left => GridPoint::new(p.row - 1, 1),
        Edge::Right => {
            GridPoint::new(p.row - 1, canvas_width - 1 - text_len(stub.name()) as i32)
        }
        Edge::Top | Edge::Bottom => {
            let inward = if edge == Edge::Top { 1 } else { -1 };
            GridPoint::new(p.row + inward, p.col + 1)
        }
    }
}

fn draw_boundary_stub(
    canvas: &mut Canvas,
    interface: Interface,
    stub: &Stub,
    canvas_width: i32,
) -> Result<(), CanvasError> {
    let geometry = interface.geometry();
    let inward = geometry.outward.reverse();
    draw_tick(canvas, stub.position(), inward, stub.length(), None)?;
    if interface == Interface::Output && stub.headed() {
        // The frame border claims the edge cell, so the head sits just inside it.
        canvas.set(stub.position().step(inward, 1), geometry.arrow)?;
    }
    canvas.write_str(boundary_label_origin(geometry.edge, stub, canvas_width), stub.name());
    Ok(())
}

fn draw_frame(canvas: &mut Canvas, diagram: &ActivityDiagram) -> Result<(), CanvasError> {
    let (bottom, right) = (diagram.height() - 1, diagram.width() - 1);
    canvas.draw_rect(GridRect { top: 0, left: 0, bottom, right })?;

    for (prefix, section) in diagram.frame().sections() {
        if section.width() <= 0 || section.height() <= 0 {
            continue;
        }
        let origin = section.position();
        canvas.draw_rect(GridRect {
            top: origin.row,
            left: origin.col,
            bottom: origin.row + section.height() - 1,
            right: origin.col + section.width() - 1,
        })?;
        let room = usize::try_from(section.width() - 2).unwrap_or(0);
        let text = truncate_marked(&format!("{prefix}{}", section.text()), room);
        canvas.write_str(GridPoint::new(origin.row + 1, origin.col + 1), &text);
    }
    Ok(())
}

/// Rasterizes a laid-out diagram and its routes.
///
/// The grid is `height` rows of `width` characters. A route segment that is not purely
/// horizontal or vertical aborts with [`RenderError::MalformedSegment`]; a structural glyph
/// outside the grid aborts with [`CanvasError::OutOfBounds`].
pub fn render_diagram(diagram: &ActivityDiagram, routes: &RouteSet) -> Result<Grid, RenderError> {
    let (width, height) = (diagram.width(), diagram.height());
    info!(width = width, height = height, routes = routes.len(); "Rendering activity diagram");

    let mut canvas = Canvas::new(width, height)?;
    draw_routes(&mut canvas, routes, height)?;
    for activity in diagram.boxes() {
        draw_box(&mut canvas, activity)?;
    }
    for (interface, _, stub) in diagram.boundary().iter() {
        draw_boundary_stub(&mut canvas, interface, stub, width)?;
    }
    draw_frame(&mut canvas, diagram)?;

    debug!(
        boxes = diagram.boxes().len(),
        boundary_stubs = diagram.boundary().len();
        "Rendered activity diagram"
    );
    Ok(canvas.finish())
}
