//! Optimal solver for the 4x4 sliding puzzle.
//!
//! The board is packed into a pair of 64-bit words, so that moves and the
//! Manhattan distance take a handful of bit operations. The search itself is
//! a plain A* generic over [`Board`].

pub mod board;
pub mod config;
pub mod error;
pub mod event;
pub mod fifteen;
pub mod node;
pub mod reporter;
pub mod solver;

pub use board::Board;
pub use error::{BoardError, ConfigError, SolveError};
pub use event::EventType;
pub use fifteen::{FifteenBoard, Move};
pub use node::SearchNode;
pub use reporter::{ConsoleReporter, Reporter, SilentReporter, TracingReporter};
pub use solver::{Solution, Solver};
