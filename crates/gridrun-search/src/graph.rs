//! On-demand edge generation for the augmented search space.

use gridrun_core::{Coord, CostGrid, MovementPolicy};

use crate::state::{Orientation, State};

/// A directed transition between two [`State`]s with a non-negative weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub to: State,
    pub weight: i32,
}

/// The implicit graph of legal runs over a cost grid.
///
/// Edges are generated per state as the solver asks for them; the full edge
/// set (`O(width · height · max_run)` entries) is never materialized.
pub struct RunGraph<'a> {
    grid: &'a CostGrid,
    policy: MovementPolicy,
}

impl<'a> RunGraph<'a> {
    /// Create a graph over `grid` under `policy`.
    pub fn new(grid: &'a CostGrid, policy: MovementPolicy) -> Self {
        Self { grid, policy }
    }

    /// Append the outgoing edges of `from` into `buf`. The caller clears
    /// `buf` before calling.
    ///
    /// From a grid state the legal moves are runs of `min_run..=max_run`
    /// cells along the axis perpendicular to the state's orientation, in
    /// either signed direction. The weight of a run is the sum of every
    /// cell entered; the origin cell is never charged. A run that would
    /// leave the grid at any step produces nothing, and neither do the
    /// longer runs behind it in that direction.
    pub fn edges(&self, from: State, buf: &mut Vec<Edge>) {
        match from {
            State::Start => {
                buf.push(Edge {
                    to: State::cell(Coord::ZERO, Orientation::Horizontal),
                    weight: 0,
                });
                buf.push(Edge {
                    to: State::cell(Coord::ZERO, Orientation::Vertical),
                    weight: 0,
                });
            }
            State::Cell { pos, orientation } => {
                if pos == self.grid.bottom_right() {
                    buf.push(Edge {
                        to: State::End,
                        weight: 0,
                    });
                }
                let axis = orientation.flip();
                for step in axis.unit_steps() {
                    self.run_edges(pos, axis, step, buf);
                }
            }
            State::End => {}
        }
    }

    /// Emit the edges for every legal run from `origin` along `step`.
    ///
    /// The weight accumulates one cell per iteration, so each run's sum is
    /// computed incrementally rather than from scratch.
    fn run_edges(&self, origin: Coord, axis: Orientation, step: Coord, buf: &mut Vec<Edge>) {
        let mut pos = origin;
        let mut weight = 0;
        for len in 1..=self.policy.max_run() {
            pos = pos + step;
            let Some(cost) = self.grid.get(pos) else {
                break;
            };
            weight += cost;
            if len >= self.policy.min_run() {
                buf.push(Edge {
                    to: State::cell(pos, axis),
                    weight,
                });
            }
        }
    }

    /// Number of distinct states: two orientations per cell plus the two
    /// synthetic endpoints.
    #[inline]
    pub(crate) fn state_count(&self) -> usize {
        self.cell_states() + 2
    }

    #[inline]
    fn cell_states(&self) -> usize {
        (self.grid.width() as usize) * (self.grid.height() as usize) * 2
    }

    /// Convert a `State` to a flat index.
    #[inline]
    pub(crate) fn index(&self, s: State) -> usize {
        match s {
            State::Start => self.cell_states(),
            State::End => self.cell_states() + 1,
            State::Cell { pos, orientation } => {
                let cell = (pos.y * self.grid.width() + pos.x) as usize;
                cell * 2 + orientation as usize
            }
        }
    }

    /// Convert a flat index back to a `State`.
    #[inline]
    pub(crate) fn state_at(&self, idx: usize) -> State {
        let cells = self.cell_states();
        if idx == cells {
            return State::Start;
        }
        if idx == cells + 1 {
            return State::End;
        }
        let orientation = if idx % 2 == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let cell = (idx / 2) as i32;
        let w = self.grid.width();
        State::cell(Coord::new(cell % w, cell / w), orientation)
    }
}
