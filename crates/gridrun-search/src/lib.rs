//! Run-constrained shortest-path search on 2D cost grids.
//!
//! A mover starts at the top-left cell of a [`CostGrid`] and must reach the
//! bottom-right cell. Every move is a straight *run* of between `min_run`
//! and `max_run` cells (a [`MovementPolicy`]), after which the mover must
//! turn onto the perpendicular axis; reversing is never legal. The cost of
//! a run is the sum of every cell entered, and the engine returns the
//! minimum total cost of any legal route.
//!
//! The search space is not the grid itself but an augmented graph of
//! [`State`]s (position × last-run axis, plus synthetic `Start`/`End`
//! markers). [`RunGraph`] generates the outgoing [`Edge`]s of a state on
//! demand, and [`RunSearch`] runs Dijkstra's algorithm over that implicit
//! graph, reusing its internal caches so repeated solves incur no
//! allocations after warm-up.
//!
//! ```
//! use gridrun_core::{CostGrid, MovementPolicy};
//! use gridrun_search::min_run_cost;
//!
//! let grid = CostGrid::parse("241\n321\n325").unwrap();
//! let cost = min_run_cost(&grid, MovementPolicy::tight()).unwrap();
//! assert!(cost >= 0);
//! ```

mod graph;
mod search;
mod state;

pub use gridrun_core::{Coord, CostGrid, GridError, MovementPolicy, PolicyError};
pub use graph::{Edge, RunGraph};
pub use search::{min_run_cost, RunSearch, SearchError};
pub use state::{Orientation, State};
