use std::fmt;

/// What happened at one search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Nothing worth mentioning.
    Nothing,
    /// The smallest future cost seen so far has decreased.
    Closer,
    /// Reserved, never emitted by [`crate::Solver`].
    LowerBound,
    /// Reserved, never emitted by [`crate::Solver`].
    UpperBound,
    /// A goal has been popped from the frontier.
    Done,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            EventType::Nothing => "-",
            EventType::Closer => "C",
            EventType::LowerBound => "LOWER_BOUND",
            EventType::UpperBound => "UPPER_BOUND",
            EventType::Done => "DONE",
        };
        // Padding flags must apply to the short names too.
        f.pad(s)
    }
}
