//! The puzzle farm: parallel generation of graded minimal puzzles.
//!
//! A fixed pool of worker threads generates minimal puzzles, grades them,
//! and merges them in batches into seven shared difficulty buckets. The
//! coordinator logs progress every five seconds, latches the done flag once
//! every bucket meets its quota, and writes one text file per difficulty
//! band after the workers have joined. Each line holds a puzzle and its unique
//! solution in short form.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write as _},
    path::PathBuf,
    process::ExitCode,
    sync::{Arc, Condvar, Mutex},
    thread,
    time::Duration,
};

use clap::Parser;
use log::{error, info};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sudostep_core::Board;
use sudostep_generator::{Symmetry, minimal_puzzle};
use sudostep_solver::{Grade, grade};

/// Generate Sudoku puzzles in parallel until every difficulty bucket meets
/// its quota, then write one file per band.
#[derive(Parser)]
#[command(name = "sudostep-farm", version, about)]
struct Args {
    /// Output directory for the seven puzzle files.
    #[arg(long)]
    out: PathBuf,

    /// Number of puzzles to collect per difficulty band.
    #[arg(long, default_value_t = 1000)]
    target: usize,

    /// Number of worker threads.
    #[arg(long, default_value_t = 4)]
    workers: usize,
}

#[derive(Default)]
struct FarmState {
    buckets: [Vec<Board>; 7],
    done: bool,
}

impl FarmState {
    fn counts(&self) -> [usize; 7] {
        let mut counts = [0; 7];
        for (count, bucket) in counts.iter_mut().zip(&self.buckets) {
            *count = bucket.len();
        }
        counts
    }

    fn quota_met(&self, target: usize) -> bool {
        self.buckets.iter().all(|bucket| bucket.len() >= target)
    }
}

type Shared = (Mutex<FarmState>, Condvar);

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> io::Result<()> {
    fs::create_dir_all(&args.out)?;
    let workers = args.workers.max(1);
    let target = args.target;
    // Batches cap merge contention; small quotas merge sooner.
    let save_every = target.clamp(1, 1000);

    let shared: Arc<Shared> = Arc::new((Mutex::new(FarmState::default()), Condvar::new()));
    info!("starting puzzle generation with {workers} worker thread(s)");
    let handles: Vec<_> = (0..workers)
        .map(|index| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || worker(index, target, save_every, &shared))
        })
        .collect();

    coordinate(target, &shared);

    for handle in handles {
        if handle.join().is_err() {
            return Err(io::Error::other("a worker thread panicked"));
        }
    }

    let state = lock_state(&shared);
    for grade in Grade::ALL {
        let path = args.out.join(format!("{grade}.txt"));
        info!("writing {}", path.display());
        let mut file = BufWriter::new(File::create(&path)?);
        for puzzle in &state.buckets[grade.index()] {
            let mut solution = puzzle.clone();
            solution.brute_force(1);
            writeln!(file, "{} {}", puzzle.to_short(), solution.to_short())?;
        }
        file.flush()?;
    }
    info!("all done");
    Ok(())
}

/// Waits for the quota, logging bucket sizes roughly every five seconds,
/// then latches the done flag for the workers to observe.
fn coordinate(target: usize, shared: &Shared) {
    let (lock, cvar) = shared;
    let mut state = lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    loop {
        info!("generated puzzle count by difficulty: {:?}", state.counts());
        if state.quota_met(target) {
            state.done = true;
            cvar.notify_all();
            return;
        }
        let (next, _timeout) = cvar
            .wait_timeout(state, Duration::from_secs(5))
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        state = next;
    }
}

fn worker(index: usize, target: usize, save_every: usize, shared: &Shared) {
    let seed: u64 = rand::rng().random();
    info!("worker {index} seeded with {seed:#018x}");
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut local: [Vec<Board>; 7] = Default::default();
    let mut generated = 0usize;
    loop {
        let symmetry = if rng.random_range(0..2) == 0 {
            Symmetry::Rotational
        } else {
            Symmetry::Mirror
        };
        let puzzle = minimal_puzzle(symmetry, &mut rng);
        local[grade(&puzzle).index()].push(puzzle);
        generated += 1;
        if generated % save_every != 0 {
            continue;
        }

        let (lock, cvar) = shared;
        let mut state = lock.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        for (bucket, batch) in state.buckets.iter_mut().zip(&mut local) {
            if bucket.len() < target {
                bucket.append(batch);
            } else {
                batch.clear();
            }
        }
        cvar.notify_all();
        if state.done {
            return;
        }
    }
}

fn lock_state(shared: &Shared) -> std::sync::MutexGuard<'_, FarmState> {
    shared
        .0
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farm_state_counts_and_quota() {
        let mut state = FarmState::default();
        assert_eq!(state.counts(), [0; 7]);
        assert!(state.quota_met(0));
        assert!(!state.quota_met(1));

        for bucket in &mut state.buckets {
            bucket.push(Board::empty());
        }
        assert_eq!(state.counts(), [1; 7]);
        assert!(state.quota_met(1));
        assert!(!state.quota_met(2));
    }
}
