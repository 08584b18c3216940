// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use idef0_ascii::config::LayoutConfig;
use idef0_ascii::model::{ActivityBox, ActivityDiagram, Frame, Interface, Stub};

const MARGIN_X: i32 = 12;
const MARGIN_Y: i32 = 8;

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(if out.len() % 7 == 6 { ' ' } else { fill });
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub boxes: usize,
    pub stubs_per_kind: usize,
    pub label_len: usize,
}

impl Params {
    pub const fn new(boxes: usize, stubs_per_kind: usize, label_len: usize) -> Self {
        Self { boxes, stubs_per_kind, label_len }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LongLabels,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LongLabels => "long_labels",
        }
    }

    pub const fn params(self) -> Params {
        match self {
            Self::Small => Params::new(3, 1, 12),
            Self::Medium => Params::new(8, 2, 12),
            Self::LongLabels => Params::new(8, 2, 48),
        }
    }
}

pub fn config() -> LayoutConfig {
    LayoutConfig::default()
}

fn output_name(b: usize, j: usize) -> String {
    format!("o{b}_{j}")
}

fn input_name(b: usize, j: usize) -> String {
    match b {
        0 => format!("raw_{j}"),
        _ => output_name(b - 1, j),
    }
}

/// An assembly line of `boxes` activities, each feeding the next.
pub fn diagram(params: Params) -> ActivityDiagram {
    let config = config();
    let boxes = params.boxes as i32;
    let width = boxes * (config.box_width() + config.x_gap()) + 2 * MARGIN_X;
    let height = boxes * (config.box_height() + config.y_gap()) + 3 + 2 * MARGIN_Y;

    let mut diagram = ActivityDiagram::new(width, height).with_frame(Frame::new(
        "A0",
        ascii_repeat_to_len("Bench line", 'x', params.label_len),
        "C1",
    ));

    for b in 0..params.boxes {
        let label = ascii_repeat_to_len(&format!("Step {b}"), 'w', params.label_len);
        let mut activity = ActivityBox::new(label, (b + 1).to_string());
        for j in 0..params.stubs_per_kind {
            activity = activity
                .with_stub(Interface::Input, Stub::new(input_name(b, j)))
                .with_stub(Interface::Output, Stub::new(output_name(b, j)))
                .with_stub(Interface::Control, Stub::new(format!("c{j}")))
                .with_stub(Interface::Mechanism, Stub::new(format!("m{b}_{j}")));
        }
        diagram = diagram.with_box(activity);
    }

    let last = params.boxes.saturating_sub(1);
    for j in 0..params.stubs_per_kind {
        diagram = diagram
            .with_boundary_stub(Interface::Input, Stub::new(input_name(0, j)))
            .with_boundary_stub(Interface::Output, Stub::new(output_name(last, j)))
            .with_boundary_stub(Interface::Control, Stub::new(format!("c{j}")))
            .with_boundary_stub(Interface::Mechanism, Stub::new(format!("m0_{j}")));
    }
    diagram
}

pub fn fixture(case: Case) -> ActivityDiagram {
    diagram(case.params())
}
