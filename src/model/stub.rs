// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::geometry::{Direction, GridPoint};

/// Which collection a stub belongs to.
///
/// Variant order is declaration order; resolution ties are broken by it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Interface {
    Input,
    Output,
    Control,
    Mechanism,
    Call,
}

impl Interface {
    pub const ALL: [Self; 5] =
        [Self::Input, Self::Output, Self::Control, Self::Mechanism, Self::Call];

    /// Consumers record their producers in `sources`; producers are named by consumers.
    pub const fn is_consumer(self) -> bool {
        matches!(self, Self::Input | Self::Control)
    }

    pub fn geometry(self) -> &'static StubGeometry {
        &STUB_GEOMETRY[self as usize]
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Control => "control",
            Self::Mechanism => "mechanism",
            Self::Call => "call",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Stubs on left/right edges are spread over rows, the rest over columns.
    pub const fn spreads_over_rows(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Where a stub's name goes relative to the far end of its tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    /// One row above the tick, last character on the far-end column.
    AboveEndingAt,
    /// One row above the tick, first character on the far-end column.
    AboveStartingAt,
    /// On the far-end row, starting one column to the right of the tick.
    RightOf,
}

/// Per-kind drawing rule: one row of the table replaces five copies of the same code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubGeometry {
    /// Box (and frame) edge the stub sits on.
    pub edge: Edge,
    /// Tick direction away from a box. Boundary ticks run the opposite way.
    pub outward: Direction,
    /// Glyph drawn at the box edge when the stub is headed.
    pub arrow: char,
    pub label: LabelAnchor,
}

static STUB_GEOMETRY: [StubGeometry; 5] = [
    StubGeometry {
        edge: Edge::Left,
        outward: Direction::Left,
        arrow: '>',
        label: LabelAnchor::AboveEndingAt,
    },
    StubGeometry {
        edge: Edge::Right,
        outward: Direction::Right,
        arrow: '>',
        label: LabelAnchor::AboveStartingAt,
    },
    StubGeometry {
        edge: Edge::Top,
        outward: Direction::Up,
        arrow: 'V',
        label: LabelAnchor::RightOf,
    },
    StubGeometry {
        edge: Edge::Bottom,
        outward: Direction::Down,
        arrow: '^',
        label: LabelAnchor::RightOf,
    },
    StubGeometry {
        edge: Edge::Bottom,
        outward: Direction::Down,
        arrow: '^',
        label: LabelAnchor::RightOf,
    },
];

/// A named connection point on a box or on the diagram frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stub {
    name: SmolStr,
    #[serde(default)]
    sources: SmallVec<[SmolStr; 2]>,
    #[serde(default)]
    position: GridPoint,
    #[serde(default)]
    length: i32,
    #[serde(default = "default_headed")]
    headed: bool,
}

fn default_headed() -> bool {
    true
}

impl Stub {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            sources: SmallVec::new(),
            position: GridPoint::default(),
            length: 0,
            headed: true,
        }
    }

    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.sources.extend(sources.into_iter().map(Into::into));
        self
    }

    pub fn with_headed(mut self, headed: bool) -> Self {
        self.headed = headed;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sources(&self) -> &[SmolStr] {
        &self.sources
    }

    pub fn lists_source(&self, name: &str) -> bool {
        self.sources.iter().any(|s| s.as_str() == name)
    }

    /// The stub is named `name` or claims to receive from it.
    pub fn refers_to(&self, name: &str) -> bool {
        self.name.as_str() == name || self.lists_source(name)
    }

    pub fn position(&self) -> GridPoint {
        self.position
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn headed(&self) -> bool {
        self.headed
    }

    pub(crate) fn set_position(&mut self, position: GridPoint) {
        self.position = position;
    }

    pub(crate) fn set_length(&mut self, length: i32) {
        self.length = length;
    }
}

/// Five ordered stub collections, one per [`Interface`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StubSet {
    #[serde(default)]
    input: Vec<Stub>,
    #[serde(default)]
    output: Vec<Stub>,
    #[serde(default)]
    control: Vec<Stub>,
    #[serde(default)]
    mechanism: Vec<Stub>,
    #[serde(default)]
    call: Vec<Stub>,
}

impl StubSet {
    pub fn get(&self, interface: Interface) -> &[Stub] {
        match interface {
            Interface::Input => &self.input,
            Interface::Output => &self.output,
            Interface::Control => &self.control,
            Interface::Mechanism => &self.mechanism,
            Interface::Call => &self.call,
        }
    }

    pub fn get_mut(&mut self, interface: Interface) -> &mut Vec<Stub> {
        match interface {
            Interface::Input => &mut self.input,
            Interface::Output => &mut self.output,
            Interface::Control => &mut self.control,
            Interface::Mechanism => &mut self.mechanism,
            Interface::Call => &mut self.call,
        }
    }

    pub fn push(&mut self, interface: Interface, stub: Stub) {
        self.get_mut(interface).push(stub);
    }

    /// All stubs in declaration order: kinds in [`Interface::ALL`] order, then index.
    pub fn iter(&self) -> impl Iterator<Item = (Interface, usize, &Stub)> + '_ {
        Interface::ALL.into_iter().flat_map(move |interface| {
            self.get(interface).iter().enumerate().map(move |(idx, stub)| (interface, idx, stub))
        })
    }

    pub fn len(&self) -> usize {
        Interface::ALL.iter().map(|interface| self.get(*interface).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{Interface, Stub, StubSet};
    use crate::geometry::Direction;

    #[test]
    fn geometry_table_is_indexed_by_interface() {
        assert_eq!(Interface::Input.geometry().outward, Direction::Left);
        assert_eq!(Interface::Output.geometry().outward, Direction::Right);
        assert_eq!(Interface::Control.geometry().arrow, 'V');
        assert_eq!(Interface::Mechanism.geometry().arrow, '^');
        assert_eq!(Interface::Call.geometry().outward, Direction::Down);
    }

    #[test]
    fn refers_to_matches_name_or_source() {
        let stub = Stub::new("in").with_sources(["Y", "Z"]);
        assert!(stub.refers_to("in"));
        assert!(stub.refers_to("Z"));
        assert!(!stub.refers_to("Q"));
    }

    #[test]
    fn stub_set_iterates_in_declaration_order() {
        let mut set = StubSet::default();
        set.push(Interface::Call, Stub::new("c"));
        set.push(Interface::Input, Stub::new("i0"));
        set.push(Interface::Input, Stub::new("i1"));
        set.push(Interface::Control, Stub::new("k"));

        let order = set.iter().map(|(_, _, stub)| stub.name().to_owned()).collect::<Vec<_>>();
        assert_eq!(order, vec!["i0", "i1", "k", "c"]);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn deserialized_stub_defaults_to_headed() {
        let stub: Stub = serde_json::from_str(r#"{"name":"X","sources":["A"]}"#).expect("stub");
        assert!(stub.headed());
        assert_eq!(stub.sources().len(), 1);
        assert_eq!(stub.sources()[0].as_str(), "A");
        assert_eq!(stub.length(), 0);
    }
}
