// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Activity diagram model.
//!
//! A loader builds the model with zeroed geometry; [`crate::layout`] fills it in once.

pub mod activity;
pub mod diagram;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod stub;

pub use activity::ActivityBox;
pub use diagram::{ActivityDiagram, Frame, FrameSection, Owner, StubRef};
pub use stub::{Edge, Interface, LabelAnchor, Stub, StubGeometry, StubSet};
