//! Dijkstra over the implicit run graph.

use std::collections::BinaryHeap;

use gridrun_core::{CostGrid, MovementPolicy};
use thiserror::Error;

use crate::graph::{Edge, RunGraph};
use crate::state::State;

/// Search failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No route from the origin to the destination satisfies the movement
    /// policy. A legitimate outcome, not a defect: for instance, a grid
    /// smaller than `min_run` in both dimensions has no legal first run.
    #[error("no path satisfies the movement policy")]
    NoPathFound,
}

/// Per-state bookkeeping, lazily invalidated by a generation counter.
#[derive(Clone)]
struct Node {
    dist: i32,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            dist: 0,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `dist` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    dist: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest dist first.
        other.dist.cmp(&self.dist)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A reusable search context for run-constrained shortest-path queries.
///
/// Owns the visited-cost array and the edge scratch buffer so that repeated
/// solves incur no allocations after warm-up. Stale entries from earlier
/// solves are ignored via a generation counter rather than cleared.
#[derive(Default)]
pub struct RunSearch {
    nodes: Vec<Node>,
    generation: u32,
    ebuf: Vec<Edge>,
}

impl RunSearch {
    /// Create an empty search context.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generation: 0,
            ebuf: Vec::with_capacity(8),
        }
    }

    /// Compute the minimum total cost of a legal route from the top-left
    /// cell to the bottom-right cell of `grid` under `policy`.
    pub fn min_cost(
        &mut self,
        grid: &CostGrid,
        policy: MovementPolicy,
    ) -> Result<i32, SearchError> {
        let graph = RunGraph::new(grid, policy);
        let len = graph.state_count();
        if len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let start_idx = graph.index(State::Start);
        let end_idx = graph.index(State::End);
        {
            let n = &mut self.nodes[start_idx];
            n.dist = 0;
            n.generation = cur_gen;
            n.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            dist: 0,
        });

        let mut ebuf = std::mem::take(&mut self.ebuf);
        let mut result = Err(SearchError::NoPathFound);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.nodes[ci];

            // Skip stale entries.
            if cn.generation != cur_gen || !cn.open {
                continue;
            }
            let current_dist = cn.dist;
            self.nodes[ci].open = false;

            // First dequeue of End finalizes the answer.
            if ci == end_idx {
                result = Ok(current_dist);
                break;
            }

            let cs = graph.state_at(ci);
            ebuf.clear();
            graph.edges(cs, &mut ebuf);

            for &Edge { to, weight } in ebuf.iter() {
                let ni = graph.index(to);
                let tentative = current_dist + weight;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.dist {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.dist = tentative;
                n.open = true;
                open.push(NodeRef {
                    idx: ni,
                    dist: tentative,
                });
            }
        }

        self.ebuf = ebuf;

        match result {
            Ok(cost) => log::debug!("run search over {}x{} grid ({policy}): cost {cost}",
                grid.width(), grid.height()),
            Err(_) => log::debug!("run search over {}x{} grid ({policy}): no path",
                grid.width(), grid.height()),
        }
        result
    }
}

/// One-shot convenience: solve with a fresh [`RunSearch`].
pub fn min_run_cost(grid: &CostGrid, policy: MovementPolicy) -> Result<i32, SearchError> {
    RunSearch::new().min_cost(grid, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 13x13 reference grid with known optimal costs under both regimes.
    const CANONICAL: &str = "\
        2413432311323
        3215453535623
        3255245654254
        3446585845452
        4546657867536
        1438598798454
        4457876987766
        3637877979653
        4654967986887
        4564679986453
        1224686865563
        2546548887735
        4322674655533";

    // Low-cost top row with a single cheap rightmost column; forces runs of
    // at least 4 cells before every turn.
    const STRIPS: &str = "\
        111111111111
        999999999991
        999999999991
        999999999991
        999999999991";

    #[test]
    fn canonical_grid_tight_policy() {
        let grid = CostGrid::parse(CANONICAL).unwrap();
        assert_eq!(min_run_cost(&grid, MovementPolicy::tight()), Ok(102));
    }

    #[test]
    fn canonical_grid_loose_policy() {
        let grid = CostGrid::parse(CANONICAL).unwrap();
        assert_eq!(min_run_cost(&grid, MovementPolicy::loose()), Ok(94));
    }

    #[test]
    fn minimum_run_is_enforced_before_turning() {
        // Greedily hugging the cheap top row then turning early is illegal
        // under the loose policy; the mover must overshoot into 9s instead,
        // giving 71 rather than the unconstrained optimum.
        let grid = CostGrid::parse(STRIPS).unwrap();
        assert_eq!(min_run_cost(&grid, MovementPolicy::loose()), Ok(71));
    }

    #[test]
    fn single_cell_grid_costs_nothing() {
        let grid = CostGrid::parse("5").unwrap();
        assert_eq!(min_run_cost(&grid, MovementPolicy::tight()), Ok(0));
        assert_eq!(min_run_cost(&grid, MovementPolicy::loose()), Ok(0));
    }

    #[test]
    fn no_path_when_grid_is_too_small_for_min_run() {
        let grid = CostGrid::parse("111\n111\n111").unwrap();
        assert_eq!(
            min_run_cost(&grid, MovementPolicy::loose()),
            Err(SearchError::NoPathFound)
        );
    }

    #[test]
    fn reused_context_is_deterministic() {
        let grid = CostGrid::parse(CANONICAL).unwrap();
        let mut search = RunSearch::new();
        let first = search.min_cost(&grid, MovementPolicy::tight());
        let second = search.min_cost(&grid, MovementPolicy::tight());
        assert_eq!(first, second);
        // Switching policies on the same context must not leak state.
        assert_eq!(search.min_cost(&grid, MovementPolicy::loose()), Ok(94));
        assert_eq!(search.min_cost(&grid, MovementPolicy::tight()), Ok(102));
    }

    #[test]
    fn tightening_the_policy_never_helps() {
        let grid = CostGrid::parse(CANONICAL).unwrap();
        let base = min_run_cost(&grid, MovementPolicy::tight()).unwrap();
        for (min_run, max_run) in [(1, 2), (2, 3), (1, 1)] {
            let policy = MovementPolicy::new(min_run, max_run).unwrap();
            let cost = min_run_cost(&grid, policy).unwrap();
            assert!(
                cost >= base,
                "({min_run},{max_run}) gave {cost}, below the (1,3) optimum {base}"
            );
        }
    }

    #[test]
    fn shared_grid_solves_in_parallel() {
        let grid = CostGrid::parse(CANONICAL).unwrap();
        std::thread::scope(|s| {
            let tight = s.spawn(|| min_run_cost(&grid, MovementPolicy::tight()));
            let loose = s.spawn(|| min_run_cost(&grid, MovementPolicy::loose()));
            assert_eq!(tight.join().unwrap(), Ok(102));
            assert_eq!(loose.join().unwrap(), Ok(94));
        });
    }
}
