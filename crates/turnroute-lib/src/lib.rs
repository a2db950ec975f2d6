//! Turnroute library entry points.
//!
//! This crate exposes helpers to build grid mazes, run the
//! turn-constrained route search, and plan routes between two cells.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!
//! Movement through the maze is restricted: after the first move, an
//! agent may only continue straight ahead or rotate 90 degrees
//! clockwise before stepping. The first move from the start cell may go
//! in any of the four cardinal directions.

#![deny(warnings)]

pub mod error;
pub mod grid;
pub mod routing;
pub mod search;

pub use error::{Error, Result};
pub use grid::{Cell, Grid, Position};
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use search::{find_route, manhattan_distance, successor_headings, Heading, State};
