//! router
//! ======
//!
//! A two-layer grid maze router: Dijkstra-based shortest-path search on a
//! `FREE`/`BLOCKED` occupancy grid, a Rentsch-style multi-pin connector built
//! on top of it, a deterministic net sequencer, and a driver that ties the
//! three together into a full routing session.

mod cell;
mod connector;
mod cost;
pub mod driver;
mod error;
mod grid;
pub mod parse;
mod problem;
pub mod search;
pub mod sequencer;
#[cfg(feature = "visualize")]
pub mod visualize;
pub mod write;

pub use self::{
    cell::{Cell, Layer},
    cost::CostModel,
    driver::{route, RoutesMap, RoutingResult},
    error::{Result, RouterError},
    grid::Grid,
    problem::{Net, RoutingProblem},
};
