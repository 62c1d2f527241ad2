use std::collections::{HashSet, VecDeque};

use fifteen_solver::{Board, EventType, FifteenBoard, SearchNode, SilentReporter, Solution, Solver};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn board(s: &str) -> FifteenBoard {
    s.parse().unwrap()
}

/// Solve while recording every event as (kind, step, past cost, future cost).
fn solve_recorded(
    start: FifteenBoard,
    end: FifteenBoard,
) -> (Solution<FifteenBoard>, Vec<(EventType, u64, u32, u32)>) {
    let mut events = Vec::new();
    let solution = Solver::new(
        start,
        end,
        |e: EventType, step: u64, node: &SearchNode<FifteenBoard>| {
            events.push((e, step, node.past_cost(), node.future_cost()))
        },
    )
    .solve()
    .unwrap();
    (solution, events)
}

/// Exact move count by breadth-first search.
fn bfs_distance(start: FifteenBoard, end: FifteenBoard) -> u32 {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0)]);
    while let Some((b, d)) = queue.pop_front() {
        if b == end {
            return d;
        }
        for c in b.children() {
            if seen.insert(c) {
                queue.push_back((c, d + 1));
            }
        }
    }
    panic!("{} cannot reach {}", start, end);
}

fn assert_valid_path(solution: &Solution<FifteenBoard>, start: FifteenBoard) {
    let path = solution.path();
    assert_eq!(path.len() as u32, solution.moves() + 1);
    assert_eq!(path[0], start);
    assert_eq!(path.last(), Some(solution.node().board()));
    for pair in path.windows(2) {
        assert!(pair[0].children().contains(&pair[1]), "{} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn test_three_tiles_in_last_row() {
    let start = board("1234_5678_9ABC_0DEF");
    let end = board("1234_5678_9ABC_DEF0");
    let (solution, events) = solve_recorded(start, end);
    assert_eq!(solution.moves(), 3);
    assert_eq!(solution.node().future_cost(), 0);
    assert_eq!(solution.node().board(), &end);
    assert!(!solution.reached_alternative());
    assert_eq!(events.last().map(|e| e.0), Some(EventType::Done));
    assert_valid_path(&solution, start);
}

#[test]
fn test_events_follow_protocol() {
    let end = FifteenBoard::solved();
    let start = end.scrambled(&mut StdRng::seed_from_u64(11), 24);
    let (solution, events) = solve_recorded(start, end);

    assert_eq!(events.len() as u64, solution.steps() + 1);
    let mut min_future = u32::MAX;
    for (i, &(kind, step, past, future)) in events.iter().enumerate() {
        assert_eq!(step, i as u64);
        match kind {
            EventType::Done => {
                assert_eq!(i, events.len() - 1);
                assert_eq!((past, future), (solution.moves(), 0));
            }
            EventType::Closer => {
                assert!(future < min_future);
                min_future = future;
            }
            EventType::Nothing => assert!(future >= min_future),
            EventType::LowerBound | EventType::UpperBound => panic!("unexpected {:?}", kind),
        }
    }
    if events.len() > 1 {
        assert_eq!(events[0].0, EventType::Closer);
    }
}

#[test]
fn test_matches_breadth_first_search() {
    let end = FifteenBoard::solved();
    for seed in 0..8 {
        let start = end.scrambled(&mut StdRng::seed_from_u64(seed), 14);
        let solution = Solver::new(start, end, SilentReporter).solve().unwrap();
        assert_eq!(solution.moves(), bfs_distance(start, end), "from {}", start);
        assert!(solution.moves() >= start.distance_to(&end));
        assert_valid_path(&solution, start);
    }
}

#[test]
fn test_deterministic() {
    let end = FifteenBoard::solved();
    let start = end.scrambled(&mut StdRng::seed_from_u64(5), 24);
    let (first, first_events) = solve_recorded(start, end);
    let (second, second_events) = solve_recorded(start, end);
    assert_eq!(first.moves(), second.moves());
    assert_eq!(first_events, second_events);
    assert_eq!(first.path(), second.path());
}

#[test]
fn test_other_parity_reaches_alternative() {
    let end = FifteenBoard::solved();
    let alternative = end.alternative();
    for seed in 0..4 {
        let start = alternative.scrambled(&mut StdRng::seed_from_u64(seed), 12);
        let (solution, events) = solve_recorded(start, end);
        assert!(solution.reached_alternative());
        assert_eq!(solution.node().board(), &alternative);
        assert_eq!(events.last().map(|e| e.0), Some(EventType::Done));
        assert_eq!(solution.moves(), bfs_distance(start, alternative));
        assert_valid_path(&solution, start);
    }
}

#[test]
fn test_other_goal() {
    let end = board("0123_4567_89AB_CDEF");
    let start = end.scrambled(&mut StdRng::seed_from_u64(99), 25);
    let solution = Solver::new(start, end, SilentReporter).solve().unwrap();
    assert_eq!(solution.node().board(), &end);
    assert!(solution.moves() <= 25);
    assert_valid_path(&solution, start);
}
