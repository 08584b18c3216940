// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::trace;

use super::{content_height, BAR_HEIGHT, BASE_STUB_LENGTH};
use crate::config::LayoutConfig;
use crate::geometry::GridPoint;
use crate::model::{ActivityBox, ActivityDiagram, Interface};

/// Splits the bottom bar into Node (quarter), Title (half) and C-Number (the rest).
pub(super) fn layout_frame(diagram: &mut ActivityDiagram) {
    let width = diagram.width();
    let top = diagram.height() - BAR_HEIGHT;
    let quarter = width / 4;
    let widths = [quarter, 2 * quarter, width - 3 * quarter];

    let mut col = 0;
    for (section, section_width) in diagram.frame_mut().sections_mut().into_iter().zip(widths) {
        section.place(GridPoint::new(top, col), section_width, BAR_HEIGHT);
        col += section_width;
    }
}

/// Places boxes on a diagonal, top-left to bottom-right, centred in the content area.
pub(super) fn layout_boxes(diagram: &mut ActivityDiagram, config: &LayoutConfig) {
    let count = diagram.boxes().len() as i32;
    if count == 0 {
        return;
    }

    let (box_w, box_h) = (config.box_width(), config.box_height());
    let block_w = count * box_w + (count - 1) * config.x_gap();
    let block_h = count * box_h + (count - 1) * config.y_gap();
    let left = (diagram.width() - block_w) / 2;
    let top = (content_height(diagram) - block_h) / 2;

    for (i, activity) in diagram.boxes_mut().iter_mut().enumerate() {
        let i = i as i32;
        let center = GridPoint::new(
            top + i * (box_h + config.y_gap()) + box_h / 2,
            left + i * (box_w + config.x_gap()) + box_w / 2,
        );
        trace!(name = activity.name(), row = center.row, col = center.col; "Placed box");
        activity.place(center, box_w, box_h);
    }
}

/// Spreads each kind of stub evenly along its edge.
///
/// Mechanisms share the left half of the bottom edge, calls the right half.
pub(super) fn layout_box_stubs(activity: &mut ActivityBox) {
    let rect = activity.rect();
    let center_col = activity.center().col;
    let (width, height) = (activity.width(), activity.height());

    for interface in Interface::ALL {
        let stubs = activity.stubs_mut().get_mut(interface);
        let slots = stubs.len() as i32 + 1;
        for (i, stub) in stubs.iter_mut().enumerate() {
            let step = i as i32 + 1;
            let position = match interface {
                Interface::Input => GridPoint::new(rect.top + step * height / slots, rect.left),
                Interface::Output => GridPoint::new(rect.top + step * height / slots, rect.right),
                Interface::Control => GridPoint::new(rect.top, rect.left + step * width / slots),
                Interface::Mechanism => {
                    GridPoint::new(rect.bottom, rect.left + step * (width / 2) / slots)
                }
                Interface::Call => {
                    GridPoint::new(rect.bottom, center_col + step * (width / 2) / slots)
                }
            };
            stub.set_position(position);
            stub.set_length(BASE_STUB_LENGTH + i as i32);
        }
    }
}
