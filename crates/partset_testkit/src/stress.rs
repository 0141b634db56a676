//! Stress tests for the active part set.
//!
//! These helpers hammer one [`ActivePartSet`] from several threads: writers
//! register the parts of a simulated history while readers take listings
//! and check that every snapshot they see is an antichain.

use crate::generators::MergeHistory;
use partset_core::{ActivePartSet, FormatVersion};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Result of a stress test run.
#[derive(Debug, Clone)]
pub struct StressTestResult {
    /// Total operations performed.
    pub total_ops: usize,
    /// Successful operations.
    pub successful_ops: usize,
    /// Failed operations, including reads that saw a broken snapshot.
    pub failed_ops: usize,
    /// Total duration.
    pub duration: Duration,
    /// Operations per second.
    pub ops_per_second: f64,
}

impl StressTestResult {
    /// Creates a new result.
    pub fn new(successful: usize, failed: usize, duration: Duration) -> Self {
        let total = successful + failed;
        let ops_per_second = if duration.as_secs_f64() > 0.0 {
            total as f64 / duration.as_secs_f64()
        } else {
            0.0
        };

        Self {
            total_ops: total,
            successful_ops: successful,
            failed_ops: failed,
            duration,
            ops_per_second,
        }
    }
}

/// Configuration for stress tests.
#[derive(Debug, Clone)]
pub struct StressConfig {
    /// Number of writer threads.
    pub writers: usize,
    /// Number of reader threads.
    pub readers: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            writers: 4,
            readers: 2,
        }
    }
}

/// Registers every part of `history` from concurrent writers while readers
/// validate snapshots.
///
/// Writer `w` adds the parts at positions `w, w + writers, ...` in creation
/// order. Returns the populated set along with the run statistics.
pub fn stress_concurrent_history(
    history: &MergeHistory,
    config: &StressConfig,
) -> (Arc<ActivePartSet>, StressTestResult) {
    let set = Arc::new(ActivePartSet::empty(FormatVersion::CUSTOM_PARTITIONING));
    let names = Arc::new(history.created_names());
    let successful = Arc::new(AtomicUsize::new(0));
    let failed = Arc::new(AtomicUsize::new(0));
    let done = Arc::new(AtomicBool::new(false));
    let writers = config.writers.max(1);

    let start = Instant::now();

    let writer_handles: Vec<_> = (0..writers)
        .map(|w| {
            let set = Arc::clone(&set);
            let names = Arc::clone(&names);
            let successful = Arc::clone(&successful);
            let failed = Arc::clone(&failed);

            thread::spawn(move || {
                for name in names.iter().skip(w).step_by(writers) {
                    match set.add(name.as_str()) {
                        Ok(()) => successful.fetch_add(1, Ordering::Relaxed),
                        Err(_) => failed.fetch_add(1, Ordering::Relaxed),
                    };
                }
            })
        })
        .collect();

    let reader_handles: Vec<_> = (0..config.readers)
        .map(|_| {
            let set = Arc::clone(&set);
            let successful = Arc::clone(&successful);
            let failed = Arc::clone(&failed);
            let done = Arc::clone(&done);

            thread::spawn(move || loop {
                let finished = done.load(Ordering::Acquire);
                let infos = set.get_part_infos();
                let antichain = infos.iter().enumerate().all(|(i, a)| {
                    infos[i + 1..]
                        .iter()
                        .all(|b| !a.contains(b) && !b.contains(a))
                });
                if antichain {
                    successful.fetch_add(1, Ordering::Relaxed);
                } else {
                    failed.fetch_add(1, Ordering::Relaxed);
                }
                if finished {
                    break;
                }
            })
        })
        .collect();

    for handle in writer_handles {
        handle.join().expect("Writer thread panicked");
    }
    done.store(true, Ordering::Release);
    for handle in reader_handles {
        handle.join().expect("Reader thread panicked");
    }

    let result = StressTestResult::new(
        successful.load(Ordering::Relaxed),
        failed.load(Ordering::Relaxed),
        start.elapsed(),
    );
    (set, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{HistoryStep, MergeSimulator};

    #[test]
    fn concurrent_history_converges() {
        let mut sim = MergeSimulator::new(vec!["a".into(), "b".into()]);
        for i in 0..200usize {
            let step = match i % 5 {
                0 | 1 | 2 => HistoryStep::Insert { partition: i },
                3 => HistoryStep::Merge {
                    partition: i,
                    start: i * 7,
                    extra: i % 3,
                },
                _ => HistoryStep::Mutate {
                    partition: i,
                    part: i * 3,
                },
            };
            sim.apply(&step);
        }
        let history = sim.finish();

        let (set, result) = stress_concurrent_history(&history, &StressConfig::default());

        assert_eq!(result.failed_ops, 0);
        assert_eq!(set.get_parts(), history.active_names());
    }
}
