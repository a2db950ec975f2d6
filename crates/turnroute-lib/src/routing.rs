//! Route planning on top of the directional search engine.
//!
//! [`plan_route`] validates endpoints before the search runs and wraps
//! the raw coordinate sequence in a [`RoutePlan`]. Callers that need to
//! distinguish "no route exists" from a zero-move route (start equal to
//! goal) can match on [`Error::RouteNotFound`] or use
//! [`crate::find_route`] directly, which keeps the `Option` sentinel.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::{Grid, Position};
use crate::search::find_route;

/// High-level route planning request.
#[derive(Debug, Clone, Copy)]
pub struct RouteRequest {
    pub start: Position,
    pub goal: Position,
}

impl RouteRequest {
    pub fn new(start: Position, goal: Position) -> Self {
        Self { start, goal }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: Position,
    pub goal: Position,
    pub steps: Vec<Position>,
}

impl RoutePlan {
    /// Number of moves in the route. Zero when start equals goal.
    pub fn move_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route for the request, rejecting invalid endpoints before
/// the search begins.
pub fn plan_route(grid: &Grid, request: &RouteRequest) -> Result<RoutePlan> {
    validate_endpoint(grid, request.start, "start")?;
    validate_endpoint(grid, request.goal, "goal")?;

    let Some(steps) = find_route(grid, request.start, request.goal) else {
        return Err(Error::RouteNotFound {
            start: request.start,
            goal: request.goal,
        });
    };

    Ok(RoutePlan {
        start: request.start,
        goal: request.goal,
        steps,
    })
}

fn validate_endpoint(grid: &Grid, position: Position, which: &'static str) -> Result<()> {
    if !grid.in_bounds(position) {
        return Err(Error::OutOfBounds {
            which,
            position,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    if !grid.is_free(position) {
        return Err(Error::BlockedEndpoint { which, position });
    }
    Ok(())
}
