#![forbid(unsafe_code)]

//! Layered layout for family trees.
//!
//! Person records reference each other through `children` and `partners` id lists. [`layout`]
//! turns them into generations (layers), orders each generation to reduce crossing parent/child
//! lines, and assigns pixel coordinates that centre parents over their children:
//!
//! 1. [`graph`]: arena relation graph, `parents` derived from `children`;
//! 2. [`rank`]: depth-first seeding plus fixed-point tightening;
//! 3. [`normalize`]: ancestors to layer 0;
//! 4. [`order`]: one top-down barycenter sweep;
//! 5. [`position`]: grid placement, relaxation, shift to `x = 0`.
//!
//! The engine never fails on graph data. Dangling ids are dropped and cycles are reported through
//! `tracing` and otherwise tolerated.

pub mod error;
pub mod graph;
pub mod model;
pub mod normalize;
pub mod options;
pub mod order;
pub mod pipeline;
pub mod position;
pub mod rank;

pub use error::{Error, Result};
pub use graph::{Bounds, FamilyGraph, Link, LinkKind, Node, NodeIx};
pub use model::{Gender, ParentRole, Person, parse_people};
pub use options::LayoutOptions;
pub use pipeline::layout;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
