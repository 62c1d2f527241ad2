use std::cmp::Ordering;
use std::fmt;

use crate::board::Board;

/// A board together with the cost of reaching it and the estimated cost of
/// finishing from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<B: Board> {
    board: B,
    past_cost: u32,
    future_cost: u32,
}

impl<B: Board> SearchNode<B> {
    pub fn new(board: B, past_cost: u32, future_cost: u32) -> Self {
        Self {
            board,
            past_cost,
            future_cost,
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    /// Moves made from the start.
    pub fn past_cost(&self) -> u32 {
        self.past_cost
    }

    /// Lower bound on the moves still needed.
    pub fn future_cost(&self) -> u32 {
        self.future_cost
    }

    pub fn total(&self) -> u32 {
        self.past_cost + self.future_cost
    }
}

impl<B: Board> PartialOrd for SearchNode<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nodes order by total cost only, which is coarser than `Eq`.
impl<B: Board> Ord for SearchNode<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total().cmp(&other.total())
    }
}

impl<B: Board> fmt::Display for SearchNode<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {}+{})", self.board, self.past_cost, self.future_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fifteen::FifteenBoard;

    #[test]
    fn test_orders_by_total() {
        let b = FifteenBoard::solved();
        let cheap = SearchNode::new(b, 5, 1);
        let dear = SearchNode::new(b, 0, 7);
        assert!(cheap < dear);
        assert_eq!(cheap.total(), 6);
        assert_eq!(
            SearchNode::new(b, 3, 3).cmp(&SearchNode::new(b, 6, 0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_display() {
        let node = SearchNode::new(FifteenBoard::solved(), 12, 3);
        assert_eq!(node.to_string(), "(1234_5678_9ABC_DEF0 12+3)");
    }
}
