// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use idef0_ascii::config::{ConfigError, LayoutConfig};
use idef0_ascii::geometry::RoutePoint;
use idef0_ascii::layout::LayoutError;
use idef0_ascii::model::{ActivityDiagram, Interface, StubRef};
use idef0_ascii::render::RenderError;
use idef0_ascii::resolve::find_matching_port;
use idef0_ascii::route::{GridRouter, Route, RouteError, RouteRequest, RouteSet, Router};
use idef0_ascii::{render_activity_diagram, Error};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("activity")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

fn load_diagram(name: &str) -> ActivityDiagram {
    serde_json::from_str(&read_fixture(name))
        .unwrap_or_else(|err| panic!("expected {name} to deserialize, got error: {err}"))
}

#[test]
fn matched_input_renders_as_golden_text() {
    let mut diagram = load_diagram("widget.json");
    let config = LayoutConfig::new(10, 6, 4, 2);
    let grid = render_activity_diagram(&mut diagram, &config, &GridRouter).expect("render");

    let boundary = diagram.stub(StubRef::on_boundary(Interface::Input, 0)).expect("boundary");
    let port = diagram.boxes()[0].stubs().get(Interface::Input)[0].position();
    assert_eq!(boundary.position().row, port.row);

    let expected = read_fixture("widget.txt");
    assert_eq!(grid.to_string(), expected.trim_end_matches('\n'));
}

#[test]
fn assembly_line_renders_every_box_and_link() {
    let mut diagram = load_diagram("assembly.json");
    let grid = render_activity_diagram(&mut diagram, &LayoutConfig::default(), &GridRouter)
        .expect("render");
    let text = grid.to_string();

    assert_eq!(grid.height(), 50);
    assert!(grid.rows().all(|row| row.len() == 120));
    for needle in ["Receive", "Assemble", "Inspect", "A1", "A2", "A3", "shipped", "firmware"] {
        assert!(text.contains(needle), "missing {needle:?} in\n{text}");
    }
    assert!(text.contains("|Title: Assemble product"));

    // Matched boundary stubs line up with their box stub.
    for interface in [Interface::Input, Interface::Output, Interface::Control] {
        let boundary_ref = StubRef::on_boundary(interface, 0);
        let matched = find_matching_port(&diagram, boundary_ref).expect("match");
        let a = diagram.stub(boundary_ref).expect("boundary").position();
        let b = diagram.stub(matched).expect("port").position();
        if interface == Interface::Control {
            assert_eq!(a.col, b.col);
        } else {
            assert_eq!(a.row, b.row);
        }
    }
}

#[test]
fn long_labels_wrap_without_losing_characters() {
    let mut diagram = load_diagram("assembly.json");
    let grid = render_activity_diagram(&mut diagram, &LayoutConfig::default(), &GridRouter)
        .expect("render");

    let activity = &diagram.boxes()[2];
    let rect = activity.rect();
    let mut label = String::new();
    for row in rect.top + 1..rect.bottom - 1 {
        let line = grid.row_string(row as usize).expect("row");
        let inner = &line[(rect.left + 1) as usize..rect.right as usize];
        label.push_str(inner.trim());
        label.push(' ');
    }
    let words = label.split_whitespace().collect::<Vec<_>>();
    assert_eq!(words, vec!["Inspect", "finished", "units"]);
}

#[test]
fn empty_diagram_renders_only_frame_and_bar() {
    let mut diagram = load_diagram("empty.json");
    let grid = render_activity_diagram(&mut diagram, &LayoutConfig::default(), &GridRouter)
        .expect("render");

    let lines = grid.to_string().lines().map(str::to_owned).collect::<Vec<_>>();
    assert_eq!(lines.len(), 20);
    for line in &lines[1..17] {
        assert_eq!(line.trim_matches('|').trim(), "", "unexpected content: {line:?}");
    }
    assert!(lines[18].starts_with("|Node: A~|"));
}

#[test]
fn second_run_on_the_same_model_is_rejected() {
    let mut diagram = load_diagram("widget.json");
    let config = LayoutConfig::new(10, 6, 4, 2);
    render_activity_diagram(&mut diagram, &config, &GridRouter).expect("first render");

    let err = render_activity_diagram(&mut diagram, &config, &GridRouter).expect_err("second");
    assert_eq!(err, Error::Layout(LayoutError::AlreadyLaidOut));
}

#[test]
fn invalid_config_is_reported_as_a_config_error() {
    let mut diagram = load_diagram("widget.json");
    let config = LayoutConfig::new(10, 6, -1, 2);
    let err = render_activity_diagram(&mut diagram, &config, &GridRouter).expect_err("config");

    assert_eq!(err, Error::Config(ConfigError::Negative { field: "x_gap", value: -1 }));
    assert!(!diagram.is_laid_out());
}

struct Diagonal;

impl Router for Diagonal {
    fn route(&self, request: &RouteRequest) -> Result<RouteSet, RouteError> {
        Ok(request
            .connections()
            .iter()
            .map(|c| {
                let skewed = RoutePoint::new(c.end().x, c.end().y + 1);
                Route::new(c.id(), vec![c.start(), skewed])
            })
            .collect())
    }
}

#[test]
fn diagonal_routes_abort_rendering() {
    let mut diagram = load_diagram("widget.json");
    let config = LayoutConfig::new(10, 6, 4, 2);
    let err = render_activity_diagram(&mut diagram, &config, &Diagonal).expect_err("diagonal");

    assert_eq!(
        err,
        Error::Render(RenderError::MalformedSegment {
            from: RoutePoint::new(3, 12),
            to: RoutePoint::new(12, 13),
        })
    );
}
