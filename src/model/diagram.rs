// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::activity::ActivityBox;
use super::stub::{Interface, Stub, StubSet};
use crate::geometry::GridPoint;

/// Who owns a stub.
///
/// Variant order is declaration order: box stubs come before boundary stubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Owner {
    Box(usize),
    Boundary,
}

/// Stable address of one stub inside an [`ActivityDiagram`].
///
/// The derived ordering is declaration order (box index, interface, stub index, then the
/// boundary stubs), which is what "first match wins" means throughout the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StubRef {
    pub owner: Owner,
    pub interface: Interface,
    pub index: usize,
}

impl StubRef {
    pub const fn on_box(box_idx: usize, interface: Interface, index: usize) -> Self {
        Self { owner: Owner::Box(box_idx), interface, index }
    }

    pub const fn on_boundary(interface: Interface, index: usize) -> Self {
        Self { owner: Owner::Boundary, interface, index }
    }

    pub fn is_boundary(&self) -> bool {
        self.owner == Owner::Boundary
    }

    pub fn box_index(&self) -> Option<usize> {
        match self.owner {
            Owner::Box(idx) => Some(idx),
            Owner::Boundary => None,
        }
    }
}

impl fmt::Display for StubRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner {
            Owner::Box(idx) => write!(f, "box#{idx}/{}#{}", self.interface, self.index),
            Owner::Boundary => write!(f, "boundary/{}#{}", self.interface, self.index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameSection {
    #[serde(default)]
    position: GridPoint,
    #[serde(default)]
    width: i32,
    #[serde(default)]
    height: i32,
    #[serde(default)]
    text: String,
}

impl FrameSection {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    /// Top-left cell.
    pub fn position(&self) -> GridPoint {
        self.position
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn place(&mut self, position: GridPoint, width: i32, height: i32) {
        self.position = position;
        self.width = width;
        self.height = height;
    }
}

/// The bottom information bar.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    node: FrameSection,
    #[serde(default)]
    title: FrameSection,
    #[serde(default)]
    c_number: FrameSection,
}

impl Frame {
    pub fn new(
        node: impl Into<String>,
        title: impl Into<String>,
        c_number: impl Into<String>,
    ) -> Self {
        Self {
            node: FrameSection::new(node),
            title: FrameSection::new(title),
            c_number: FrameSection::new(c_number),
        }
    }

    pub fn node(&self) -> &FrameSection {
        &self.node
    }

    pub fn title(&self) -> &FrameSection {
        &self.title
    }

    pub fn c_number(&self) -> &FrameSection {
        &self.c_number
    }

    /// Sections left to right, with the prefix drawn before each text.
    pub fn sections(&self) -> [(&'static str, &FrameSection); 3] {
        [("Node: ", &self.node), ("Title: ", &self.title), ("CNumber: ", &self.c_number)]
    }

    pub(crate) fn sections_mut(&mut self) -> [&mut FrameSection; 3] {
        [&mut self.node, &mut self.title, &mut self.c_number]
    }
}

/// A whole activity diagram: frame, boxes and boundary stubs.
///
/// `width` and `height` are fixed at construction. Layout fills in every position once;
/// afterwards the model is read-only for routing and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDiagram {
    width: i32,
    height: i32,
    #[serde(default)]
    frame: Frame,
    #[serde(default)]
    boxes: Vec<ActivityBox>,
    #[serde(default)]
    boundary: StubSet,
    #[serde(skip)]
    laid_out: bool,
}

impl ActivityDiagram {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            frame: Frame::default(),
            boxes: Vec::new(),
            boundary: StubSet::default(),
            laid_out: false,
        }
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_box(mut self, activity: ActivityBox) -> Self {
        self.boxes.push(activity);
        self
    }

    pub fn with_boundary_stub(mut self, interface: Interface, stub: Stub) -> Self {
        self.boundary.push(interface, stub);
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn boxes(&self) -> &[ActivityBox] {
        &self.boxes
    }

    pub fn boundary(&self) -> &StubSet {
        &self.boundary
    }

    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    pub fn stub(&self, stub_ref: StubRef) -> Option<&Stub> {
        let set = match stub_ref.owner {
            Owner::Box(idx) => self.boxes.get(idx)?.stubs(),
            Owner::Boundary => &self.boundary,
        };
        set.get(stub_ref.interface).get(stub_ref.index)
    }

    /// Every stub in declaration order, box stubs first.
    pub fn stubs(&self) -> impl Iterator<Item = (StubRef, &Stub)> + '_ {
        let box_stubs = self.boxes.iter().enumerate().flat_map(|(box_idx, activity)| {
            activity.stubs().iter().map(move |(interface, index, stub)| {
                (StubRef::on_box(box_idx, interface, index), stub)
            })
        });
        let boundary_stubs = self
            .boundary
            .iter()
            .map(|(interface, index, stub)| (StubRef::on_boundary(interface, index), stub));
        box_stubs.chain(boundary_stubs)
    }

    pub(crate) fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    pub(crate) fn boxes_mut(&mut self) -> &mut [ActivityBox] {
        &mut self.boxes
    }

    pub(crate) fn boundary_mut(&mut self) -> &mut StubSet {
        &mut self.boundary
    }

    pub(crate) fn mark_laid_out(&mut self) {
        self.laid_out = true;
    }
}
