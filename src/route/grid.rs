// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of idef0-ascii and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::{debug, trace};

use super::{Route, RouteError, RouteRequest, RouteSet, Router};
use crate::geometry::{RoutePoint, RouteRect};

/// Deterministic 4-direction breadth-first router.
///
/// Box rectangles are hard obstacles (connection endpoints excepted). Among equally short
/// paths the search prefers stepping towards the goal, horizontal first, so straight runs
/// stay straight. A connection with no path inside the routing area falls back to an
/// L-shaped polyline.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRouter;

impl Router for GridRouter {
    fn route(&self, request: &RouteRequest) -> Result<RouteSet, RouteError> {
        let mut scratch = SearchScratch::new(request.area(), request.obstacles());
        let mut routes = RouteSet::default();

        for connection in request.connections() {
            let (start, goal) = (connection.start(), connection.end());
            let points = match scratch.shortest_path(start, goal) {
                Some(path) => compress_to_polyline(path),
                None => {
                    debug!(
                        id = connection.id(), start:% = start, goal:% = goal;
                        "No grid path, using fallback"
                    );
                    fallback_polyline(start, goal)
                }
            };
            trace!(id = connection.id(), vertices = points.len(); "Routed connection");
            routes.push(Route::new(connection.id(), points));
        }

        Ok(routes)
    }
}

fn neighbor_deltas_towards(current: RoutePoint, goal: RoutePoint) -> [(i32, i32); 4] {
    let primary_x = match (goal.x - current.x).signum() {
        0 => None,
        dx => Some((dx, 0)),
    };
    let primary_y = match (goal.y - current.y).signum() {
        0 => None,
        dy => Some((0, dy)),
    };

    let mut out = [(0, 0); 4];
    let mut idx = 0usize;
    for delta in primary_x.into_iter().chain(primary_y) {
        out[idx] = delta;
        idx += 1;
    }
    // Vertical detours before moving horizontally away from the goal.
    for delta in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
        if primary_x == Some(delta) || primary_y == Some(delta) {
            continue;
        }
        out[idx] = delta;
        idx += 1;
    }

    debug_assert_eq!(idx, 4);
    out
}

/// Dense index over the routing area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchGrid {
    min_x: i32,
    min_y: i32,
    width: usize,
    height: usize,
}

impl SearchGrid {
    fn new(area: RouteRect) -> Self {
        let width = usize::try_from(area.max_x - area.min_x + 1).unwrap_or(0);
        let height = usize::try_from(area.max_y - area.min_y + 1).unwrap_or(0);
        Self { min_x: area.min_x, min_y: area.min_y, width, height }
    }

    fn len(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    fn idx_of(&self, point: RoutePoint) -> Option<usize> {
        let x = usize::try_from(point.x - self.min_x).ok()?;
        let y = usize::try_from(point.y - self.min_y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    fn point_of(&self, idx: usize) -> RoutePoint {
        let x = (idx % self.width) as i32 + self.min_x;
        let y = (idx / self.width) as i32 + self.min_y;
        RoutePoint::new(x, y)
    }
}

/// Buffers reused across every connection of one request.
///
/// `visit_gen` tags cells with the search that reached them, so nothing is cleared between
/// searches.
#[derive(Debug)]
struct SearchScratch {
    grid: SearchGrid,
    blocked: Vec<bool>,
    visit_gen: Vec<u32>,
    came_from: Vec<usize>,
    queue: Vec<RoutePoint>,
    queue_head: usize,
    path: Vec<RoutePoint>,
    gen: u32,
}

impl SearchScratch {
    fn new(area: RouteRect, obstacles: &[RouteRect]) -> Self {
        let grid = SearchGrid::new(area);
        let len = grid.len();
        let mut blocked = vec![false; len];
        for rect in obstacles {
            for y in rect.min_y..=rect.max_y {
                for x in rect.min_x..=rect.max_x {
                    if let Some(idx) = grid.idx_of(RoutePoint::new(x, y)) {
                        blocked[idx] = true;
                    }
                }
            }
        }

        Self {
            grid,
            blocked,
            visit_gen: vec![0; len],
            came_from: vec![usize::MAX; len],
            queue: Vec::with_capacity(len.min(4096)),
            queue_head: 0,
            path: Vec::new(),
            gen: 0,
        }
    }

    fn begin(&mut self) -> u32 {
        self.gen = self.gen.wrapping_add(1);
        if self.gen == 0 {
            self.visit_gen.fill(0);
            self.gen = 1;
        }
        self.queue.clear();
        self.queue_head = 0;
        self.gen
    }

    fn visit(&mut self, idx: usize, gen: u32, came_from: usize) -> bool {
        if self.visit_gen[idx] == gen {
            return false;
        }
        self.visit_gen[idx] = gen;
        self.came_from[idx] = came_from;
        true
    }

    /// Cell-by-cell path from `start` to `goal`, both included.
    fn shortest_path(&mut self, start: RoutePoint, goal: RoutePoint) -> Option<&[RoutePoint]> {
        if start == goal {
            self.path.clear();
            self.path.push(start);
            return Some(&self.path);
        }

        let grid = self.grid;
        let start_idx = grid.idx_of(start)?;
        let goal_idx = grid.idx_of(goal)?;

        let gen = self.begin();
        self.visit(start_idx, gen, usize::MAX);
        self.queue.push(start);

        while let Some(&current) = self.queue.get(self.queue_head) {
            self.queue_head += 1;
            if current == goal {
                self.path.clear();
                self.path.push(goal);
                let mut cursor = goal_idx;
                while cursor != start_idx {
                    let prev = self.came_from[cursor];
                    if prev == usize::MAX {
                        return None;
                    }
                    self.path.push(grid.point_of(prev));
                    cursor = prev;
                }
                self.path.reverse();
                return Some(&self.path);
            }

            let current_idx = grid.idx_of(current)?;
            for (dx, dy) in neighbor_deltas_towards(current, goal) {
                let next = current.offset(dx, dy);
                let Some(next_idx) = grid.idx_of(next) else {
                    continue;
                };
                if next != goal && self.blocked[next_idx] {
                    continue;
                }
                if self.visit(next_idx, gen, current_idx) {
                    self.queue.push(next);
                }
            }
        }

        None
    }
}

/// Keeps only the vertices where the path turns.
fn compress_to_polyline(path: &[RoutePoint]) -> Vec<RoutePoint> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let step = |a: RoutePoint, b: RoutePoint| (b.x - a.x, b.y - a.y);
    let mut points = vec![path[0]];
    let mut prev_dir = step(path[0], path[1]);
    for pair in path[1..].windows(2) {
        let dir = step(pair[0], pair[1]);
        if dir != prev_dir {
            points.push(pair[0]);
            prev_dir = dir;
        }
    }
    points.extend(path.last().copied());
    points
}

/// Horizontal-then-vertical elbow.
fn fallback_polyline(start: RoutePoint, goal: RoutePoint) -> Vec<RoutePoint> {
    if start == goal {
        return vec![start];
    }
    if start.x == goal.x || start.y == goal.y {
        return vec![start, goal];
    }
    vec![start, RoutePoint::new(goal.x, start.y), goal]
}
