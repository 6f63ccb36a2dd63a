use std::process::{Command, Output};

fn run_headless(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_road_runner"))
        .args(args)
        .env("RUST_LOG", "warn,road_runner=info")
        .output()
        .expect("Failed to execute road runner")
}

/// Find `label` in the log and parse the value that follows it
fn parse_stat<T: std::str::FromStr>(stderr: &str, label: &str) -> T {
    let line = stderr
        .lines()
        .find(|line| line.contains(label))
        .unwrap_or_else(|| panic!("Could not find '{}' line", label));

    // Handle log format with timestamp
    let parts: Vec<&str> = line.split(label).collect();
    parts
        .get(1)
        .map(|s| s.trim().trim_end_matches('s'))
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("Could not parse value from line: {}", line))
}

/// Test that the game runs in headless mode without crashing the process
#[test]
fn test_headless_simulation_runs() {
    let output = run_headless(&["--ticks", "600", "--seed", "7"]);

    assert!(
        output.status.success(),
        "Road runner failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
}

/// Test that run statistics are logged
#[test]
fn test_simulation_statistics_logged() {
    let output = run_headless(&["--ticks", "600", "--seed", "7"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);

    let ticks: u64 = parse_stat(&stderr, "Total ticks:");
    assert_eq!(ticks, 600);

    let recycled: u64 = parse_stat(&stderr, "Segments recycled:");
    assert!(recycled > 0, "Road never scrolled past a segment");

    let top_speed: f32 = parse_stat(&stderr, "Top speed:");
    assert!(top_speed > 240.0 && top_speed <= 540.0);

    for label in ["Crashes:", "Restarts:", "Best score:", "Simulated time:"] {
        assert!(stderr.contains(label), "Missing '{}' statistic", label);
    }
}

/// Test that the map flag draws the road on stdout
#[test]
fn test_map_printed_when_requested() {
    let output = run_headless(&["--ticks", "60", "--seed", "3", "--map"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Road Map ==="));
    assert!(stdout.contains("=== Road Runner Summary ==="));
    assert!(
        stdout.lines().any(|line| line.contains('|') && line.contains("CC")),
        "Car missing from the map"
    );
}

/// Test that nonsensical frame times are rejected with an error, not a panic
#[test]
fn test_zero_delta_is_rejected() {
    for delta in ["0", "inf", "NaN"] {
        let output = run_headless(&["--ticks", "10", "--delta", delta]);
        assert!(!output.status.success(), "delta {} was accepted", delta);

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("delta must be a positive number of seconds"),
            "delta {} not reported cleanly. stderr: {}",
            delta,
            stderr
        );
        assert!(!stderr.contains("panicked"), "delta {} panicked: {}", delta, stderr);
    }
}
