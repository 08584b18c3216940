// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Routing adapter.
//!
//! Translates a laid-out diagram into the routing service's vocabulary (obstacle rectangles
//! and directed endpoint pairs, all in the upward-`y` [`RoutePoint`] space) and hands it to
//! a [`Router`]. The router answers with one orthogonal polyline per connection.

mod grid;

use std::collections::BTreeMap;

use log::{debug, info, trace};
use thiserror::Error;

use crate::geometry::{GridRect, RoutePoint, RouteRect};
use crate::layout::BAR_HEIGHT;
use crate::model::{ActivityDiagram, Interface, StubRef};
use crate::resolve::{boundary_peers, StubResolver};

pub use grid::GridRouter;

pub type ConnectionId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("router returned a polyline for unknown connection {id}")]
    UnknownConnection { id: ConnectionId },

    #[error("router returned no polyline for connection {id}")]
    MissingConnection { id: ConnectionId },
}

/// One directed producer-to-consumer link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    id: ConnectionId,
    from: StubRef,
    to: StubRef,
    start: RoutePoint,
    end: RoutePoint,
}

impl Connection {
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Producing stub.
    pub fn from(&self) -> StubRef {
        self.from
    }

    /// Consuming stub.
    pub fn to(&self) -> StubRef {
        self.to
    }

    pub fn start(&self) -> RoutePoint {
        self.start
    }

    pub fn end(&self) -> RoutePoint {
        self.end
    }
}

/// Everything a routing service needs, in its own coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    area: RouteRect,
    obstacles: Vec<RouteRect>,
    connections: Vec<Connection>,
}

impl RouteRequest {
    /// Cells a polyline may use: inside the frame border and above the bar.
    pub fn area(&self) -> RouteRect {
        self.area
    }

    pub fn obstacles(&self) -> &[RouteRect] {
        &self.obstacles
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

/// A routed polyline. Vertices are in [`RoutePoint`] space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: ConnectionId,
    points: Vec<RoutePoint>,
}

impl Route {
    pub fn new(id: ConnectionId, points: Vec<RoutePoint>) -> Self {
        Self { id, points }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn points(&self) -> &[RoutePoint] {
        &self.points
    }
}

/// Router output, kept in the order the routes were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    pub fn get(&self, id: ConnectionId) -> Option<&Route> {
        self.routes.iter().find(|route| route.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn as_slice(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl FromIterator<Route> for RouteSet {
    fn from_iter<T: IntoIterator<Item = Route>>(iter: T) -> Self {
        Self { routes: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a RouteSet {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// An obstacle-avoiding orthogonal routing service.
///
/// Implementations must return only axis-aligned segments; the rasterizer rejects anything
/// else.
pub trait Router {
    fn route(&self, request: &RouteRequest) -> Result<RouteSet, RouteError>;
}

/// Where each box stub's connector leaves its tick: `length` cells outward.
pub fn place_box_endpoints(diagram: &ActivityDiagram) -> Vec<(StubRef, RoutePoint)> {
    let height = diagram.height();
    diagram
        .stubs()
        .filter(|(stub_ref, _)| !stub_ref.is_boundary())
        .map(|(stub_ref, stub)| {
            let outward = stub_ref.interface.geometry().outward;
            (stub_ref, stub.position().step(outward, stub.length()).to_route(height))
        })
        .collect()
}

/// Where each boundary stub's connector leaves its tick: `length` cells into the diagram.
pub fn place_boundary_endpoints(diagram: &ActivityDiagram) -> Vec<(StubRef, RoutePoint)> {
    let height = diagram.height();
    diagram
        .boundary()
        .iter()
        .map(|(interface, idx, stub)| {
            let inward = interface.geometry().outward.reverse();
            let point = stub.position().step(inward, stub.length()).to_route(height);
            (StubRef::on_boundary(interface, idx), point)
        })
        .collect()
}

pub fn place_obstacles(diagram: &ActivityDiagram) -> Vec<RouteRect> {
    let height = diagram.height();
    diagram.boxes().iter().map(|activity| activity.rect().to_route(height)).collect()
}

/// Boundary stubs of these kinds feed the diagram; the others drain it.
fn boundary_produces(interface: Interface) -> bool {
    matches!(interface, Interface::Input | Interface::Control | Interface::Mechanism)
}

/// Pairs up linked endpoints into directed connections, in declaration order.
///
/// Boundary links come first, then box-to-box links from each Output/Call stub. Two
/// producers sharing a name are connected once, from the earlier-declared one.
pub fn build_connections(
    diagram: &ActivityDiagram,
    box_endpoints: &[(StubRef, RoutePoint)],
    boundary_endpoints: &[(StubRef, RoutePoint)],
    obstacles: Vec<RouteRect>,
) -> RouteRequest {
    let endpoints = box_endpoints
        .iter()
        .chain(boundary_endpoints)
        .copied()
        .collect::<BTreeMap<StubRef, RoutePoint>>();
    let resolver = StubResolver::new(diagram);
    let mut pairs = Vec::<(StubRef, StubRef)>::new();

    for &(boundary_ref, _) in boundary_endpoints {
        let peers = boundary_peers(boundary_ref.interface);
        for partner in resolver.partners(boundary_ref) {
            if !peers.contains(&partner.interface) {
                continue;
            }
            if boundary_produces(boundary_ref.interface) {
                pairs.push((boundary_ref, partner));
            } else {
                pairs.push((partner, boundary_ref));
            }
        }
    }

    for &(producer, _) in box_endpoints {
        if !matches!(producer.interface, Interface::Output | Interface::Call) {
            continue;
        }
        for partner in resolver.partners(producer) {
            if partner.is_boundary() {
                continue;
            }
            let both_produce = matches!(partner.interface, Interface::Output | Interface::Call);
            if both_produce && partner < producer {
                continue;
            }
            pairs.push((producer, partner));
        }
    }

    let connections = pairs
        .into_iter()
        .filter_map(|(from, to)| Some((from, to, *endpoints.get(&from)?, *endpoints.get(&to)?)))
        .enumerate()
        .map(|(id, (from, to, start, end))| {
            trace!(id = id, from:% = from, to:% = to; "Connection");
            Connection { id, from, to, start, end }
        })
        .collect::<Vec<_>>();

    let (width, height) = (diagram.width(), diagram.height());
    let area =
        GridRect { top: 1, left: 1, bottom: height - BAR_HEIGHT - 1, right: width - 2 }
            .to_route(height);

    RouteRequest { area, obstacles, connections }
}

/// Builds the routing request for a laid-out diagram and runs `router` on it once.
///
/// Every connection in the request gets exactly one route back, in request order.
pub fn route_diagram(
    diagram: &ActivityDiagram,
    router: &dyn Router,
) -> Result<RouteSet, RouteError> {
    let box_endpoints = place_box_endpoints(diagram);
    let boundary_endpoints = place_boundary_endpoints(diagram);
    let obstacles = place_obstacles(diagram);
    let request = build_connections(diagram, &box_endpoints, &boundary_endpoints, obstacles);

    info!(
        connections = request.connections().len(),
        obstacles = request.obstacles().len();
        "Routing activity diagram"
    );
    let routes = router.route(&request)?;

    for route in &routes {
        if route.id() >= request.connections().len() {
            return Err(RouteError::UnknownConnection { id: route.id() });
        }
    }
    let mut ordered = Vec::with_capacity(request.connections().len());
    for connection in request.connections() {
        let route = routes
            .get(connection.id())
            .ok_or(RouteError::MissingConnection { id: connection.id() })?;
        ordered.push(route.clone());
    }
    debug!(routes = ordered.len(); "Routing finished");

    Ok(RouteSet { routes: ordered })
}

#[cfg(test)]
mod tests {
    use super::{
        build_connections, place_boundary_endpoints, place_box_endpoints, place_obstacles,
        route_diagram, GridRouter, Route, RouteError, RouteRequest, RouteSet, Router,
    };
    use crate::config::LayoutConfig;
    use crate::geometry::{RoutePoint, RouteRect};
    use crate::layout::layout_diagram;
    use crate::model::{fixtures, ActivityBox, ActivityDiagram, Interface, Stub, StubRef};

    fn laid_out(mut diagram: ActivityDiagram, config: LayoutConfig) -> ActivityDiagram {
        layout_diagram(&mut diagram, &config).expect("layout");
        diagram
    }

    fn request_for(diagram: &ActivityDiagram) -> RouteRequest {
        build_connections(
            diagram,
            &place_box_endpoints(diagram),
            &place_boundary_endpoints(diagram),
            place_obstacles(diagram),
        )
    }

    #[test]
    fn endpoints_are_offset_by_length_and_flipped() {
        let diagram =
            laid_out(fixtures::single_box_matched_input(), LayoutConfig::new(10, 6, 4, 2));

        assert_eq!(
            place_box_endpoints(&diagram),
            vec![(StubRef::on_box(0, Interface::Input, 0), RoutePoint::new(12, 12))]
        );
        assert_eq!(
            place_boundary_endpoints(&diagram),
            vec![(StubRef::on_boundary(Interface::Input, 0), RoutePoint::new(3, 12))]
        );
    }

    #[test]
    fn obstacles_cover_each_box_in_route_space() {
        let diagram =
            laid_out(fixtures::single_box_matched_input(), LayoutConfig::new(10, 6, 4, 2));
        assert_eq!(
            place_obstacles(&diagram),
            vec![RouteRect { min_x: 15, max_x: 24, min_y: 10, max_y: 15 }]
        );
    }

    #[test]
    fn boundary_input_feeds_the_box() {
        let diagram =
            laid_out(fixtures::single_box_matched_input(), LayoutConfig::new(10, 6, 4, 2));
        let request = request_for(&diagram);

        assert_eq!(request.connections().len(), 1);
        let connection = request.connections()[0];
        assert_eq!(connection.from(), StubRef::on_boundary(Interface::Input, 0));
        assert_eq!(connection.to(), StubRef::on_box(0, Interface::Input, 0));
    }

    #[test]
    fn assembly_line_connects_every_linked_pair_once() {
        let diagram = laid_out(fixtures::assembly_line(), LayoutConfig::default());
        let pairs = request_for(&diagram)
            .connections()
            .iter()
            .map(|c| (c.from(), c.to()))
            .collect::<Vec<_>>();
        let on_box = StubRef::on_box;
        let edge = StubRef::on_boundary;

        assert_eq!(
            pairs,
            vec![
                (edge(Interface::Input, 0), on_box(0, Interface::Input, 0)),
                (on_box(2, Interface::Output, 0), edge(Interface::Output, 0)),
                (edge(Interface::Control, 0), on_box(0, Interface::Control, 0)),
                (edge(Interface::Control, 0), on_box(1, Interface::Control, 1)),
                (edge(Interface::Mechanism, 0), on_box(1, Interface::Mechanism, 0)),
                (on_box(1, Interface::Call, 0), edge(Interface::Call, 0)),
                (on_box(0, Interface::Output, 0), on_box(1, Interface::Input, 0)),
                (on_box(1, Interface::Output, 0), on_box(2, Interface::Input, 0)),
            ]
        );
    }

    #[test]
    fn producers_sharing_a_name_are_connected_once() {
        let diagram = laid_out(
            ActivityDiagram::new(80, 40)
                .with_box(ActivityBox::new("A", "1").with_stub(Interface::Output, Stub::new("Y")))
                .with_box(ActivityBox::new("B", "2").with_stub(Interface::Output, Stub::new("Y"))),
            LayoutConfig::default(),
        );
        let pairs = request_for(&diagram)
            .connections()
            .iter()
            .map(|c| (c.from(), c.to()))
            .collect::<Vec<_>>();
        let first = StubRef::on_box(0, Interface::Output, 0);
        let second = StubRef::on_box(1, Interface::Output, 0);
        assert_eq!(pairs, vec![(first, second)]);
    }

    #[test]
    fn routing_area_stays_inside_the_frame_and_above_the_bar() {
        let diagram = laid_out(fixtures::empty(), LayoutConfig::default());
        let request = request_for(&diagram);
        assert_eq!(request.area(), RouteRect { min_x: 1, max_x: 38, min_y: 4, max_y: 19 });
        assert!(request.connections().is_empty());
    }

    struct Scripted(RouteSet);

    impl Router for Scripted {
        fn route(&self, _request: &RouteRequest) -> Result<RouteSet, RouteError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn grid_router_runs_a_matched_input_straight() {
        let diagram =
            laid_out(fixtures::single_box_matched_input(), LayoutConfig::new(10, 6, 4, 2));
        let routes = route_diagram(&diagram, &GridRouter::default()).expect("routes");

        assert_eq!(routes.len(), 1);
        let route = routes.get(0).expect("route 0");
        assert_eq!(route.points(), &[RoutePoint::new(3, 12), RoutePoint::new(12, 12)]);
    }

    #[test]
    fn routes_come_back_in_request_order() {
        let diagram = laid_out(fixtures::assembly_line(), LayoutConfig::default());
        let forward = GridRouter.route(&request_for(&diagram)).expect("routes");
        assert!(forward.len() >= 2);
        let reversed = Scripted(forward.iter().rev().cloned().collect());
        assert_eq!(reversed.0.as_slice()[0].id(), forward.len() - 1);

        let routes = route_diagram(&diagram, &reversed).expect("routes");
        let ids = routes.iter().map(Route::id).collect::<Vec<_>>();
        assert_eq!(ids, (0..forward.len()).collect::<Vec<_>>());
        assert_eq!(routes, forward);
    }

    #[test]
    fn unknown_connection_ids_are_rejected() {
        let diagram =
            laid_out(fixtures::single_box_matched_input(), LayoutConfig::new(10, 6, 4, 2));
        let bogus = Scripted([Route::new(7, vec![RoutePoint::new(1, 1)])].into_iter().collect());
        assert_eq!(
            route_diagram(&diagram, &bogus),
            Err(RouteError::UnknownConnection { id: 7 })
        );
    }

    #[test]
    fn missing_routes_are_rejected() {
        let diagram =
            laid_out(fixtures::single_box_matched_input(), LayoutConfig::new(10, 6, 4, 2));
        let silent = Scripted(RouteSet::default());
        assert_eq!(
            route_diagram(&diagram, &silent),
            Err(RouteError::MissingConnection { id: 0 })
        );
    }
}
