//! End-to-end checks of the farm binary.

use std::{fs, path::Path, process::Command};

use sudostep_core::Board;

fn farm_binary() -> &'static str {
    env!("CARGO_BIN_EXE_sudostep-farm")
}

#[test]
fn test_rejects_missing_output_directory_flag() {
    let output = Command::new(farm_binary())
        .args(["--target", "1"])
        .output()
        .expect("failed to launch farm binary");
    assert!(!output.status.success());
}

fn check_puzzle_file(path: &Path, target: usize) {
    let content = fs::read_to_string(path).expect("readable puzzle file");
    let lines: Vec<&str> = content.lines().collect();
    assert!(
        lines.len() >= target,
        "{}: {} lines, expected at least {target}",
        path.display(),
        lines.len()
    );
    for line in lines {
        let (puzzle_text, solution_text) = line.split_once(' ').expect("two boards per line");
        let puzzle = Board::from_short(puzzle_text).expect("valid puzzle");
        let solution = Board::from_short(solution_text).expect("valid solution");
        assert!(solution.is_solved());
        assert_eq!(puzzle.solution_count(2), 1);
        let mut solved = puzzle.clone();
        assert_eq!(solved.brute_force(1), 1);
        assert_eq!(solved.to_short(), solution.to_short());
    }
}

// Runs the whole farm; the master bucket can take a long while to fill, so
// this is opt-in: `cargo test -p sudostep-farm -- --ignored`.
#[test]
#[ignore = "generates puzzles until every difficulty bucket fills; slow"]
fn test_farm_fills_every_bucket() {
    let dir = std::env::temp_dir().join("sudostep-farm-test");
    let _ = fs::remove_dir_all(&dir);
    let target = 3;

    let status = Command::new(farm_binary())
        .args(["--out"])
        .arg(&dir)
        .args(["--target", "3", "--workers", "4"])
        .status()
        .expect("failed to launch farm binary");
    assert!(status.success());

    let expected = [
        "trivial.txt",
        "casual.txt",
        "beginner.txt",
        "intermediate.txt",
        "advanced.txt",
        "expert.txt",
        "master.txt",
    ];
    for name in expected {
        check_puzzle_file(&dir.join(name), target);
    }
}
