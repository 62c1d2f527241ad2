//! Consumers of search events.
//!
//! The solver calls [`Reporter::report`] once per step and leaves throttling
//! and output entirely to the reporter.

use std::io::{self, Write};

use crossterm::style::{style, Color, Stylize};

use crate::board::Board;
use crate::event::EventType;
use crate::node::SearchNode;

/// Steps between two consecutive `Nothing` reports.
pub const DEFAULT_PERIOD: u64 = 1_000_000;

pub trait Reporter<B: Board> {
    fn report(&mut self, event: EventType, step: u64, node: &SearchNode<B>);
}

impl<B: Board, F> Reporter<B> for F
where
    F: FnMut(EventType, u64, &SearchNode<B>),
{
    fn report(&mut self, event: EventType, step: u64, node: &SearchNode<B>) {
        self(event, step, node)
    }
}

/// Ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl<B: Board> Reporter<B> for SilentReporter {
    fn report(&mut self, _event: EventType, _step: u64, _node: &SearchNode<B>) {}
}

/// Lets `Nothing` through only once per period; other events always pass.
#[derive(Debug, Clone)]
struct Throttle {
    period: u64,
    next_step: u64,
}

impl Throttle {
    fn new(period: u64) -> Self {
        Self {
            period: period.max(1),
            next_step: 0,
        }
    }

    fn admits(&mut self, event: EventType, step: u64) -> bool {
        if event == EventType::Nothing && step < self.next_step {
            return false;
        }
        self.next_step = self.period * (step / self.period + 1);
        true
    }
}

/// Prints one aligned line per admitted event.
pub struct ConsoleReporter<W: Write> {
    out: W,
    throttle: Throttle,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(period: u64, color: bool) -> Self {
        Self::new(io::stdout(), period, color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, period: u64, color: bool) -> Self {
        Self {
            out,
            throttle: Throttle::new(period),
            color,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<B: Board>(
        &mut self,
        event: EventType,
        step: u64,
        node: &SearchNode<B>,
    ) -> io::Result<()> {
        let label = format!("{:<10}", event);
        if self.color {
            let color = match event {
                EventType::Done => Color::Green,
                EventType::Closer => Color::Cyan,
                EventType::Nothing => Color::DarkGrey,
                EventType::LowerBound | EventType::UpperBound => Color::Yellow,
            };
            write!(self.out, "{}", style(label).with(color))?;
        } else {
            write!(self.out, "{}", label)?;
        }
        writeln!(
            self.out,
            " {:>12} {:<27} {:>2}",
            step,
            node.to_string(),
            node.total()
        )
    }
}

impl<B: Board, W: Write> Reporter<B> for ConsoleReporter<W> {
    fn report(&mut self, event: EventType, step: u64, node: &SearchNode<B>) {
        if !self.throttle.admits(event, step) {
            return;
        }
        if let Err(err) = self.write_line(event, step, node) {
            tracing::warn!("cannot write progress: {}", err);
        }
    }
}

/// Forwards admitted events to `tracing`.
#[derive(Debug, Clone)]
pub struct TracingReporter {
    throttle: Throttle,
}

impl TracingReporter {
    pub fn new(period: u64) -> Self {
        Self {
            throttle: Throttle::new(period),
        }
    }
}

impl Default for TracingReporter {
    fn default() -> Self {
        Self::new(DEFAULT_PERIOD)
    }
}

impl<B: Board> Reporter<B> for TracingReporter {
    fn report(&mut self, event: EventType, step: u64, node: &SearchNode<B>) {
        if !self.throttle.admits(event, step) {
            return;
        }
        match event {
            EventType::Nothing => tracing::debug!(step, total = node.total(), "{}", node),
            _ => tracing::info!(step, total = node.total(), event = %event, "{}", node),
        }
    }
}
