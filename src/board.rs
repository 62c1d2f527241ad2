use std::fmt;
use std::hash::Hash;

/// A sliding puzzle board. Implementations must be immutable values.
///
/// The solver only talks to boards through this trait, so other sizes or
/// topologies can reuse it unchanged.
pub trait Board: Clone + Eq + Hash + fmt::Display {
    /// Manhattan distance between `self` and `other`, summed over all tiles
    /// except the empty one.
    ///
    /// This is a lower bound on the number of moves needed, it is symmetric
    /// and it is zero exactly when both boards are equal.
    fn distance_to(&self, other: &Self) -> u32;

    /// The 2 to 4 boards obtained by sliding a neighboring tile into the
    /// empty slot.
    fn children(&self) -> Vec<Self>;

    /// A board differing from `self` by a single swap of two tiles.
    ///
    /// Used for nearly-solving unsolvable problems: exactly one of a goal and
    /// its alternative is reachable from any start. Must be self-inverse.
    fn alternative(&self) -> Self;
}
