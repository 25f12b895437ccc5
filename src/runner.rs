use std::path::Path;
use std::process::Command;
use std::time::Duration;

use anyhow::Result;

use crate::display;
use crate::errors::BenchrunError;
use crate::timer::Stopwatch;

/// Number of timed executions per benchmark run.
pub const NUM_EXECUTIONS: usize = 30;

/// Check that the target exists as a filesystem entry.
///
/// Runs before anything is spawned, so a bad path means zero invocations.
pub fn validate_executable(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BenchrunError::ExecutableNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

/// Run the target once with no arguments and inherited stdio, blocking until
/// it exits. Returns the wall-clock elapsed time.
///
/// The child's exit status is not inspected — a failing target is timed like
/// any other run. An OS-level launch failure (e.g. permission denied) is an
/// error and aborts the benchmark.
pub fn time_execution(path: &Path) -> Result<Duration> {
    let sw = Stopwatch::start_new();
    let _ = Command::new(path)
        .status()
        .map_err(|source| BenchrunError::SpawnFailed {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(sw.elapsed())
}

/// The sequential benchmark loop: `NUM_EXECUTIONS` timed runs, progress
/// printed as it goes, nanosecond samples collected in execution order.
pub fn run_benchmark(path: &Path) -> Result<Vec<u128>> {
    let mut samples = Vec::with_capacity(NUM_EXECUTIONS);

    for i in 0..NUM_EXECUTIONS {
        println!("{}", display::format_execution(i));
        let elapsed = time_execution(path)?;
        println!("{}", display::format_elapsed(elapsed));
        samples.push(elapsed.as_nanos());
    }

    Ok(samples)
}
