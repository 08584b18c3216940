// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boundary stub placement.
//!
//! Both steps read the whole diagram while deciding and write only afterwards, so the
//! resolver never sees a half-updated model.

use log::{debug, trace};

use super::{content_height, BAR_HEIGHT, BASE_STUB_LENGTH};
use crate::geometry::GridPoint;
use crate::model::{ActivityDiagram, Edge, Interface, StubRef};
use crate::resolve::{StubIndex, StubResolver};

/// Coordinate that varies along `edge`.
fn along(edge: Edge, point: GridPoint) -> i32 {
    if edge.spreads_over_rows() {
        point.row
    } else {
        point.col
    }
}

/// Cell on the diagram frame at offset `offset` along `edge`.
fn frame_point(diagram: &ActivityDiagram, edge: Edge, offset: i32) -> GridPoint {
    match edge {
        Edge::Left => GridPoint::new(offset, 0),
        Edge::Right => GridPoint::new(offset, diagram.width() - 1),
        Edge::Top => GridPoint::new(0, offset),
        Edge::Bottom => GridPoint::new(diagram.height() - BAR_HEIGHT, offset),
    }
}

/// Start and extent of the stretch of frame edge that unmatched stubs of `interface` share.
///
/// Mechanisms and calls split the bottom edge, left half and right half.
fn fallback_section(diagram: &ActivityDiagram, interface: Interface) -> (i32, i32) {
    let width = diagram.width();
    match interface {
        Interface::Input | Interface::Output => (0, content_height(diagram)),
        Interface::Control => (0, width),
        Interface::Mechanism => (0, width / 2),
        Interface::Call => (width / 2, width / 2),
    }
}

/// Matched stubs copy their box stub's coordinate; the rest share the edge evenly.
pub(super) fn plan_positions(
    diagram: &ActivityDiagram,
    index: &StubIndex,
) -> Vec<(StubRef, GridPoint)> {
    let resolver = StubResolver::with_index(diagram, index);
    let mut planned = Vec::with_capacity(diagram.boundary().len());

    for interface in Interface::ALL {
        let edge = interface.geometry().edge;
        let mut unmatched = Vec::new();

        for idx in 0..diagram.boundary().get(interface).len() {
            let stub_ref = StubRef::on_boundary(interface, idx);
            let port = resolver.find_matching_port(stub_ref).and_then(|m| diagram.stub(m));
            match port {
                Some(port) => {
                    let position = frame_point(diagram, edge, along(edge, port.position()));
                    trace!(
                        stub:% = stub_ref, row = position.row, col = position.col;
                        "Aligned boundary stub"
                    );
                    planned.push((stub_ref, position));
                }
                None => unmatched.push(stub_ref),
            }
        }

        if unmatched.is_empty() {
            continue;
        }
        let (start, extent) = fallback_section(diagram, interface);
        let spacing = extent / (unmatched.len() as i32 + 1);
        for (i, stub_ref) in unmatched.into_iter().enumerate() {
            let position = frame_point(diagram, edge, start + (i as i32 + 1) * spacing);
            debug!(
                stub:% = stub_ref, row = position.row, col = position.col;
                "No matching port, spacing evenly"
            );
            planned.push((stub_ref, position));
        }
    }

    planned
}

pub(super) fn apply_positions(diagram: &mut ActivityDiagram, planned: &[(StubRef, GridPoint)]) {
    let boundary = diagram.boundary_mut();
    for &(stub_ref, position) in planned {
        if let Some(stub) = boundary.get_mut(stub_ref.interface).get_mut(stub_ref.index) {
            stub.set_position(position);
        }
    }
}

/// A boundary stub grows by one cell for every unrelated stub placed before it on the
/// same box edge, so parallel ticks end at different depths.
pub(super) fn plan_lengths(diagram: &ActivityDiagram, index: &StubIndex) -> Vec<(StubRef, i32)> {
    let resolver = StubResolver::with_index(diagram, index);

    diagram
        .boundary()
        .iter()
        .map(|(interface, idx, stub)| {
            let edge = interface.geometry().edge;
            let own = along(edge, stub.position());
            let before = resolver
                .neighbour_stubs(stub.name())
                .into_iter()
                .filter_map(|neighbour| diagram.stub(neighbour))
                .filter(|neighbour| along(edge, neighbour.position()) < own)
                .count();
            (StubRef::on_boundary(interface, idx), BASE_STUB_LENGTH + before as i32)
        })
        .collect()
}

pub(super) fn apply_lengths(diagram: &mut ActivityDiagram, planned: &[(StubRef, i32)]) {
    let boundary = diagram.boundary_mut();
    for &(stub_ref, length) in planned {
        if let Some(stub) = boundary.get_mut(stub_ref.interface).get_mut(stub_ref.index) {
            stub.set_length(length);
        }
    }
}
