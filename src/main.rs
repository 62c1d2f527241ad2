use std::process::ExitCode;

use fifteen_solver::config::{DemoConfig, Progress};
use fifteen_solver::{
    ConfigError, ConsoleReporter, FifteenBoard, Move, Reporter, SilentReporter, Solver,
    TracingReporter,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let (start, end) = config.boards()?;

    println!("Start: {}", start);
    println!("Goal:  {}", end);

    info!("started");
    match config.progress {
        Progress::Console => solve(
            start,
            end,
            ConsoleReporter::stdout(config.report_period, config.color),
        ),
        Progress::Tracing => solve(start, end, TracingReporter::new(config.report_period)),
        Progress::Silent => solve(start, end, SilentReporter),
    }
    info!("done");
    Ok(())
}

fn solve<R: Reporter<FifteenBoard>>(start: FifteenBoard, end: FifteenBoard, reporter: R) {
    let solution = match Solver::new(start, end, reporter).solve() {
        Ok(solution) => solution,
        Err(err) => {
            error!("{}", err);
            return;
        }
    };
    if solution.reached_alternative() {
        println!("Unsolvable, reached {} instead", solution.node().board());
    }
    println!("Found optimal solution with: {} moves", solution.moves());
    for pair in solution.path().windows(2) {
        if let Some(m) = Move::between(&pair[0], &pair[1]) {
            println!("{:<5} {}", m.to_string(), pair[1]);
        }
    }
}
