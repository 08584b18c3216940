// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::activity::ActivityBox;
use super::diagram::{ActivityDiagram, Frame};
use super::stub::{Interface, Stub};

/// 40×20, one box with input `X`, one boundary input `X`.
pub(crate) fn single_box_matched_input() -> ActivityDiagram {
    ActivityDiagram::new(40, 20)
        .with_frame(Frame::new("A0", "Make widget", "C1"))
        .with_box(
            ActivityBox::new("Make", "1").with_stub(Interface::Input, Stub::new("X")),
        )
        .with_boundary_stub(Interface::Input, Stub::new("X"))
}

/// Box A produces `Y`; box B consumes it through its source list.
pub(crate) fn producer_consumer() -> ActivityDiagram {
    ActivityDiagram::new(60, 30)
        .with_box(ActivityBox::new("Cut", "1").with_stub(Interface::Output, Stub::new("Y")))
        .with_box(
            ActivityBox::new("Weld", "2")
                .with_stub(Interface::Input, Stub::new("in").with_sources(["Y"])),
        )
        .with_boundary_stub(Interface::Output, Stub::new("done"))
}

/// Three boxes exercising every interface kind, matched and unmatched boundary stubs.
pub(crate) fn assembly_line() -> ActivityDiagram {
    ActivityDiagram::new(120, 50)
        .with_frame(Frame::new("A0", "Assemble product", "C7"))
        .with_box(
            ActivityBox::new("Receive parts", "1")
                .with_stub(Interface::Input, Stub::new("parts"))
                .with_stub(Interface::Input, Stub::new("returns"))
                .with_stub(Interface::Output, Stub::new("sorted"))
                .with_stub(Interface::Control, Stub::new("plan"))
                .with_stub(Interface::Mechanism, Stub::new("clerk")),
        )
        .with_box(
            ActivityBox::new("Assemble", "2")
                .with_stub(Interface::Input, Stub::new("kit").with_sources(["sorted"]))
                .with_stub(Interface::Output, Stub::new("product"))
                .with_stub(Interface::Output, Stub::new("scrap"))
                .with_stub(Interface::Control, Stub::new("drawing"))
                .with_stub(Interface::Control, Stub::new("plan2").with_sources(["plan"]))
                .with_stub(Interface::Mechanism, Stub::new("robot"))
                .with_stub(Interface::Call, Stub::new("firmware")),
        )
        .with_box(
            ActivityBox::new("Inspect", "3")
                .with_stub(Interface::Input, Stub::new("unit").with_sources(["product"]))
                .with_stub(Interface::Output, Stub::new("shipped"))
                .with_stub(Interface::Mechanism, Stub::new("inspector")),
        )
        .with_boundary_stub(Interface::Input, Stub::new("parts"))
        .with_boundary_stub(Interface::Input, Stub::new("supplies"))
        .with_boundary_stub(Interface::Output, Stub::new("shipped"))
        .with_boundary_stub(Interface::Control, Stub::new("plan"))
        .with_boundary_stub(Interface::Mechanism, Stub::new("robot"))
        .with_boundary_stub(Interface::Call, Stub::new("firmware"))
}

pub(crate) fn empty() -> ActivityDiagram {
    ActivityDiagram::new(40, 20).with_frame(Frame::new("A-0", "Nothing", "C0"))
}
