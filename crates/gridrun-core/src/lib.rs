//! **gridrun-core** — Constrained-run grid routing (core types).
//!
//! This crate provides the foundational types used across the *gridrun*
//! ecosystem: the integer coordinate type, the immutable per-cell cost
//! matrix, and the run-length movement policy, together with their
//! construction errors.

pub mod error;
pub mod geom;
pub mod grid;
pub mod policy;

pub use error::{GridError, PolicyError};
pub use geom::Coord;
pub use grid::CostGrid;
pub use policy::MovementPolicy;
