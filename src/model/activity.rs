// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::stub::{Interface, Stub, StubSet};
use crate::geometry::{GridPoint, GridRect};

/// An activity box with its owned stubs.
///
/// Geometry (`center`, `width`, `height`) is zero until layout runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityBox {
    name: String,
    node: String,
    #[serde(default)]
    center: GridPoint,
    #[serde(default)]
    width: i32,
    #[serde(default)]
    height: i32,
    #[serde(default)]
    padding: i32,
    #[serde(default)]
    stubs: StubSet,
}

impl ActivityBox {
    pub fn new(name: impl Into<String>, node: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node: node.into(),
            center: GridPoint::default(),
            width: 0,
            height: 0,
            padding: 0,
            stubs: StubSet::default(),
        }
    }

    pub fn with_stub(mut self, interface: Interface, stub: Stub) -> Self {
        self.stubs.push(interface, stub);
        self
    }

    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn center(&self) -> GridPoint {
        self.center
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn padding(&self) -> i32 {
        self.padding
    }

    /// Outline cells, corners included.
    pub fn rect(&self) -> GridRect {
        GridRect::centered(self.center, self.width, self.height)
    }

    /// Columns available to the label between the side borders and padding.
    pub fn interior_width(&self) -> usize {
        usize::try_from(self.width - 2 - 2 * self.padding).unwrap_or(0).max(1)
    }

    pub fn stubs(&self) -> &StubSet {
        &self.stubs
    }

    pub(crate) fn stubs_mut(&mut self) -> &mut StubSet {
        &mut self.stubs
    }

    pub(crate) fn place(&mut self, center: GridPoint, width: i32, height: i32) {
        self.center = center;
        self.width = width;
        self.height = height;
    }
}
