//! Best-first (A*) search over any [`Board`].

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::board::Board;
use crate::error::SolveError;
use crate::event::EventType;
use crate::node::SearchNode;
use crate::reporter::Reporter;

/// Frontier entry: cheapest total first, then first pushed first.
struct Queued<B: Board> {
    node: SearchNode<B>,
    seq: u64,
}

impl<B: Board> PartialEq for Queued<B> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<B: Board> Eq for Queued<B> {}

impl<B: Board> PartialOrd for Queued<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reversed, so that `BinaryHeap` pops the minimum.
impl<B: Board> Ord for Queued<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .cmp(&self.node)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A single A* run from `start` to `end` or to `end.alternative()`.
///
/// A board is only checked against the visited map when it gets generated as
/// a child, and a board seen before is dropped without comparing costs. With
/// unit moves and a consistent heuristic the first discovery is already
/// along a shortest path, so this loses nothing; it would with other costs.
pub struct Solver<B: Board, R: Reporter<B>> {
    start: B,
    end: B,
    alternative_end: B,
    reporter: R,
    queue: BinaryHeap<Queued<B>>,
    /// Every discovered board mapped to the board it was expanded from.
    visited: HashMap<B, B>,
    pushed: u64,
}

impl<B: Board, R: Reporter<B>> Solver<B, R> {
    pub fn new(start: B, end: B, reporter: R) -> Self {
        let alternative_end = end.alternative();
        Self {
            start,
            end,
            alternative_end,
            reporter,
            queue: BinaryHeap::new(),
            visited: HashMap::new(),
            pushed: 0,
        }
    }

    /// Run the search to completion.
    ///
    /// Reports exactly one event per popped node, with `Done` for the goal.
    pub fn solve(mut self) -> Result<Solution<B>, SolveError> {
        debug!("solving {} -> {} (or {})", self.start, self.end, self.alternative_end);
        let mut min_future_cost = u32::MAX;
        let future_cost = self.start.distance_to(&self.end);
        self.push(SearchNode::new(self.start.clone(), 0, future_cost));

        let mut step: u64 = 0;
        loop {
            let Some(Queued { node, .. }) = self.queue.pop() else {
                debug!("frontier exhausted after {} steps", step);
                return Err(SolveError::Exhausted { steps: step });
            };

            let board = node.board();
            if *board == self.end || *board == self.alternative_end {
                self.reporter.report(EventType::Done, step, &node);
                debug!(
                    "done after {} steps, {} moves, {} boards discovered",
                    step,
                    node.past_cost(),
                    self.visited.len()
                );
                let reached_alternative = *board != self.end;
                let path = self.trace_back(board);
                return Ok(Solution {
                    node,
                    path,
                    steps: step,
                    reached_alternative,
                });
            }

            if node.future_cost() < min_future_cost {
                min_future_cost = node.future_cost();
                trace!(step, "closer: {}", node);
                self.reporter.report(EventType::Closer, step, &node);
            } else {
                self.reporter.report(EventType::Nothing, step, &node);
            }

            let past_cost = node.past_cost() + 1;
            for child in node.board().children() {
                if let Entry::Vacant(slot) = self.visited.entry(child) {
                    let future_cost = slot.key().distance_to(&self.end);
                    let child_node = SearchNode::new(slot.key().clone(), past_cost, future_cost);
                    slot.insert(node.board().clone());
                    self.push(child_node);
                }
            }
            step += 1;
        }
    }

    fn push(&mut self, node: SearchNode<B>) {
        self.queue.push(Queued {
            node,
            seq: self.pushed,
        });
        self.pushed += 1;
    }

    /// Boards from the start to `board`, both included.
    fn trace_back(&self, board: &B) -> Vec<B> {
        let mut path = vec![board.clone()];
        let mut current = board;
        // Parents were always expanded before their children got discovered,
        // so following them can only end at the start.
        while *current != self.start {
            match self.visited.get(current) {
                Some(parent) => {
                    path.push(parent.clone());
                    current = parent;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

/// The outcome of a successful search.
#[derive(Debug, Clone)]
pub struct Solution<B: Board> {
    node: SearchNode<B>,
    path: Vec<B>,
    steps: u64,
    reached_alternative: bool,
}

impl<B: Board> Solution<B> {
    /// The goal node, as reported with `Done`.
    pub fn node(&self) -> &SearchNode<B> {
        &self.node
    }

    pub fn moves(&self) -> u32 {
        self.node.past_cost()
    }

    /// Boards visited from the start to the reached goal.
    pub fn path(&self) -> &[B] {
        &self.path
    }

    /// Nodes expanded before the goal got popped.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// True when only the goal with two tiles swapped could be reached.
    pub fn reached_alternative(&self) -> bool {
        self.reached_alternative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fifteen::FifteenBoard;
    use crate::reporter::SilentReporter;

    fn board(s: &str) -> FifteenBoard {
        s.parse().unwrap()
    }

    #[test]
    fn test_start_is_goal() {
        let b = FifteenBoard::solved();
        let mut events = Vec::new();
        let solution = Solver::new(b, b, |e: EventType, step: u64, _: &SearchNode<FifteenBoard>| {
            events.push((e, step))
        })
        .solve()
        .unwrap();
        assert_eq!(events, vec![(EventType::Done, 0)]);
        assert_eq!(solution.moves(), 0);
        assert_eq!(solution.path(), &[b]);
        assert!(!solution.reached_alternative());
    }

    #[test]
    fn test_one_move() {
        let start = board("1234_5678_9ABC_DE0F");
        let end = FifteenBoard::solved();
        let solution = Solver::new(start, end, SilentReporter).solve().unwrap();
        assert_eq!(solution.moves(), 1);
        assert_eq!(solution.node().future_cost(), 0);
        assert_eq!(solution.path(), &[start, end]);
    }

    #[test]
    fn test_queue_pops_cheapest_then_oldest() {
        let b = FifteenBoard::solved();
        let mut heap = BinaryHeap::new();
        for (seq, (past, future)) in [(2, 2), (0, 3), (1, 2), (0, 5)].into_iter().enumerate() {
            heap.push(Queued {
                node: SearchNode::new(b, past, future),
                seq: seq as u64,
            });
        }
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|q| q.seq)).collect();
        assert_eq!(order, vec![1, 2, 0, 3]);
    }

    /// A board with no moves at all, so the frontier runs dry at once.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Stuck(u8);

    impl std::fmt::Display for Stuck {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "Stuck({})", self.0)
        }
    }

    impl Board for Stuck {
        fn distance_to(&self, other: &Self) -> u32 {
            self.0.abs_diff(other.0) as u32
        }

        fn children(&self) -> Vec<Self> {
            Vec::new()
        }

        fn alternative(&self) -> Self {
            Stuck(self.0 ^ 1)
        }
    }

    #[test]
    fn test_exhausted() {
        let result = Solver::new(Stuck(0), Stuck(4), SilentReporter).solve();
        assert_eq!(result.unwrap_err(), SolveError::Exhausted { steps: 1 });
    }
}
