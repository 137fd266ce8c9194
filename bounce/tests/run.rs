use bounce::app::{run, RunConfig};
use bounce::trace::TraceRecord;
use physics::Simulation;
use std::fs;

#[test]
fn headless_run_matches_direct_stepping() {
    let mut sim = Simulation::demo();
    let config = RunConfig {
        ticks: 400,
        log_every: 0,
        ..RunConfig::default()
    };
    let summary = run(&mut sim, &config).unwrap();

    let mut reference = Simulation::demo();
    let state = reference.run(400).unwrap();
    assert_eq!(summary.ticks, 400);
    assert_eq!(summary.final_state, state);
    assert_eq!(summary.stats, reference.stats());
}

#[test]
fn trace_file_has_a_line_per_tick() {
    let path = std::env::temp_dir().join(format!("bounce-trace-{}.jsonl", std::process::id()));
    let mut sim = Simulation::demo();
    let config = RunConfig {
        ticks: 120,
        log_every: 0,
        trace: Some(path.clone()),
        ..RunConfig::default()
    };
    let summary = run(&mut sim, &config).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();
    let records: Vec<TraceRecord> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

    assert_eq!(records.len(), 120);
    assert_eq!(records[0].tick, 1);
    assert_eq!(records.last().unwrap().center, summary.final_state.pos.to_array());
    assert!(records.iter().any(|r| r.boxes == vec![0]), "demo should hit the right cube");
}

#[test]
fn realtime_run_takes_at_least_the_tick_budget() {
    let mut sim = Simulation::demo();
    let config = RunConfig {
        ticks: 10,
        realtime: true,
        log_every: 0,
        ..RunConfig::default()
    };
    let start = std::time::Instant::now();
    run(&mut sim, &config).unwrap();
    assert!(start.elapsed() >= config.tick_interval * 10);
}
