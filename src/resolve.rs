// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Name-based stub resolution.
//!
//! Diagrams carry no edge list. A stub links to another when both share a name, or when the
//! consumer side lists the producer's name among its `sources`. [`StubIndex`] maps names to
//! stubs once per pass so each query is a couple of map lookups plus a small ordered merge.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::{ActivityBox, ActivityDiagram, Interface, Owner, Stub, StubRef};

/// Box interface kinds a boundary stub of the given kind may attach to.
pub(crate) fn boundary_peers(interface: Interface) -> &'static [Interface] {
    match interface {
        Interface::Input => &[Interface::Input, Interface::Control],
        Interface::Output => &[Interface::Output],
        Interface::Control => &[Interface::Control],
        Interface::Mechanism => &[Interface::Mechanism],
        Interface::Call => &[Interface::Call],
    }
}

/// Interface kinds on *another* box a box stub of the given kind may attach to.
fn box_peers(interface: Interface) -> &'static [Interface] {
    match interface {
        Interface::Input | Interface::Control => &[Interface::Output, Interface::Call],
        Interface::Output | Interface::Call => {
            &[Interface::Input, Interface::Control, Interface::Output, Interface::Call]
        }
        Interface::Mechanism => &[],
    }
}

pub(crate) fn compatible(a: StubRef, b: StubRef) -> bool {
    match (a.owner, b.owner) {
        (Owner::Boundary, Owner::Boundary) => false,
        (Owner::Boundary, Owner::Box(_)) => boundary_peers(a.interface).contains(&b.interface),
        (Owner::Box(_), Owner::Boundary) => boundary_peers(b.interface).contains(&a.interface),
        (Owner::Box(x), Owner::Box(y)) => x != y && box_peers(a.interface).contains(&b.interface),
    }
}

/// Directed link test used by [`StubResolver::find_matching_port`].
///
/// Consumers (Input/Control) are matched by their own source list, producers
/// (Output/Mechanism/Call) by the target's source list.
fn candidate_links(candidate_kind: Interface, candidate: &Stub, target: &Stub) -> bool {
    if candidate.name() == target.name() {
        return true;
    }
    if candidate_kind.is_consumer() {
        candidate.lists_source(target.name())
    } else {
        target.lists_source(candidate.name())
    }
}

/// Undirected link test: equal names, or either side lists the other as a source.
pub(crate) fn names_link(a: &Stub, b: &Stub) -> bool {
    a.name() == b.name() || a.lists_source(b.name()) || b.lists_source(a.name())
}

/// Name lookups over every stub of a diagram, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct StubIndex {
    by_name: BTreeMap<SmolStr, SmallVec<[StubRef; 2]>>,
    by_source: BTreeMap<SmolStr, SmallVec<[StubRef; 2]>>,
}

impl StubIndex {
    pub fn build(diagram: &ActivityDiagram) -> Self {
        let mut index = Self::default();
        // `stubs()` yields declaration order, so every list below stays sorted.
        for (stub_ref, stub) in diagram.stubs() {
            index.by_name.entry(SmolStr::new(stub.name())).or_default().push(stub_ref);
            for source in stub.sources() {
                let consumers = index.by_source.entry(source.clone()).or_default();
                if consumers.last() != Some(&stub_ref) {
                    consumers.push(stub_ref);
                }
            }
        }
        index
    }

    /// Stubs whose name is `name`.
    pub fn named(&self, name: &str) -> &[StubRef] {
        self.by_name.get(name).map(|refs| refs.as_slice()).unwrap_or(&[])
    }

    /// Stubs listing `name` among their sources.
    pub fn consumers_of(&self, name: &str) -> &[StubRef] {
        self.by_source.get(name).map(|refs| refs.as_slice()).unwrap_or(&[])
    }

    /// Stubs named `name` or listing it, each once, in declaration order.
    pub fn referring_to(&self, name: &str) -> Vec<StubRef> {
        let mut refs =
            self.named(name).iter().chain(self.consumers_of(name)).copied().collect::<Vec<_>>();
        refs.sort_unstable();
        refs.dedup();
        refs
    }
}

/// Resolution queries against one diagram snapshot.
#[derive(Debug, Clone)]
pub struct StubResolver<'a> {
    diagram: &'a ActivityDiagram,
    index: Cow<'a, StubIndex>,
}

impl<'a> StubResolver<'a> {
    pub fn new(diagram: &'a ActivityDiagram) -> Self {
        Self { diagram, index: Cow::Owned(StubIndex::build(diagram)) }
    }

    /// Reuses an index built earlier from the same stub names.
    ///
    /// Layout moves stubs around but never renames them, so one index serves a whole pass.
    pub fn with_index(diagram: &'a ActivityDiagram, index: &'a StubIndex) -> Self {
        Self { diagram, index: Cow::Borrowed(index) }
    }

    pub fn diagram(&self) -> &'a ActivityDiagram {
        self.diagram
    }

    pub fn index(&self) -> &StubIndex {
        &self.index
    }

    /// Every stub that could link to `stub` by name, unfiltered.
    fn name_neighbourhood(&self, stub: &Stub) -> BTreeSet<StubRef> {
        let mut out = BTreeSet::new();
        out.extend(self.index.named(stub.name()).iter().copied());
        out.extend(self.index.consumers_of(stub.name()).iter().copied());
        for source in stub.sources() {
            out.extend(self.index.named(source).iter().copied());
        }
        out
    }

    /// First stub, in declaration order, that `target` resolves to.
    ///
    /// A miss is an ordinary outcome: callers fall back to default placement.
    pub fn find_matching_port(&self, target: StubRef) -> Option<StubRef> {
        let target_stub = self.diagram.stub(target)?;
        self.name_neighbourhood(target_stub).into_iter().find(|&candidate| {
            if candidate == target || !compatible(target, candidate) {
                return false;
            }
            let Some(candidate_stub) = self.diagram.stub(candidate) else {
                return false;
            };
            if candidate.is_boundary() && !target.is_boundary() {
                // Box-to-boundary links are always judged from the boundary side.
                candidate_links(target.interface, target_stub, candidate_stub)
            } else {
                candidate_links(candidate.interface, candidate_stub, target_stub)
            }
        })
    }

    /// Indices of boxes owning a stub named `name` or listing it, once per such stub.
    pub fn connected_box_indices(&self, name: &str) -> Vec<usize> {
        self.index.referring_to(name).into_iter().filter_map(|r| r.box_index()).collect()
    }

    pub fn connected_boxes(&self, name: &str) -> Vec<&'a ActivityBox> {
        let boxes = self.diagram.boxes();
        self.connected_box_indices(name).into_iter().filter_map(|idx| boxes.get(idx)).collect()
    }

    /// Stubs sharing an edge with the stub(s) that carry `name`, but not connected to it.
    ///
    /// For each connected box the first interface kind (declaration order) that refers to
    /// `name` is chosen; the other stubs of that kind on that box are returned.
    pub fn neighbour_stubs(&self, name: &str) -> Vec<StubRef> {
        let mut seen = BTreeSet::<usize>::new();
        let mut out = Vec::new();

        for stub_ref in self.index.referring_to(name) {
            let Some(box_idx) = stub_ref.box_index() else {
                continue;
            };
            if !seen.insert(box_idx) {
                continue;
            }
            let Some(activity) = self.diagram.boxes().get(box_idx) else {
                continue;
            };

            let interface = stub_ref.interface;
            for (idx, stub) in activity.stubs().get(interface).iter().enumerate() {
                if !stub.refers_to(name) {
                    out.push(StubRef::on_box(box_idx, interface, idx));
                }
            }
        }

        out
    }

    /// Every compatible stub linked to `stub_ref` by name in either direction.
    pub(crate) fn partners(&self, stub_ref: StubRef) -> Vec<StubRef> {
        let Some(stub) = self.diagram.stub(stub_ref) else {
            return Vec::new();
        };
        self.name_neighbourhood(stub)
            .into_iter()
            .filter(|&other| other != stub_ref && compatible(stub_ref, other))
            .filter(|&other| self.diagram.stub(other).is_some_and(|o| names_link(stub, o)))
            .collect()
    }
}

/// One-shot form of [`StubResolver::find_matching_port`].
pub fn find_matching_port(diagram: &ActivityDiagram, target: StubRef) -> Option<StubRef> {
    StubResolver::new(diagram).find_matching_port(target)
}

/// One-shot form of [`StubResolver::connected_boxes`].
pub fn connected_boxes<'a>(
    diagram: &'a ActivityDiagram,
    stub_name: &str,
) -> Vec<&'a ActivityBox> {
    StubResolver::new(diagram).connected_boxes(stub_name)
}

/// One-shot form of [`StubResolver::neighbour_stubs`].
pub fn neighbour_stubs(diagram: &ActivityDiagram, stub_name: &str) -> Vec<StubRef> {
    StubResolver::new(diagram).neighbour_stubs(stub_name)
}
