//! Property-based test generators using proptest.
//!
//! Random part names are almost never related by containment, so most
//! strategies here go through [`MergeSimulator`], which replays inserts,
//! merges and mutations the way a storage engine would. Every part it
//! creates belongs to one laminar family: two parts of a partition either
//! share no blocks or one contains the other.

use partset_core::PartInfo;
use proptest::prelude::*;

/// Strategy for generating valid partition ids.
pub fn partition_id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9][a-z0-9-]{0,7}").expect("Invalid regex")
}

/// Strategy for generating syntactically valid part identities.
///
/// The generated parts are unrelated to each other; use
/// [`merge_history_strategy`] when containment matters.
pub fn part_info_strategy() -> impl Strategy<Value = PartInfo> {
    (
        partition_id_strategy(),
        any::<i64>(),
        any::<u32>(),
        0u32..16,
        prop_oneof![3 => Just(0i64), 1 => any::<i64>()],
    )
        .prop_map(|(partition, min, len, level, mutation)| {
            let max = min.saturating_add(i64::from(len));
            PartInfo::new(partition, min, max, level).with_mutation(mutation)
        })
}

/// Strategy for generating names that must fail to parse.
pub fn malformed_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("detached".to_string()),
        prop::string::string_regex("tmp_merge_[a-z]{1,4}").expect("Invalid regex"),
        prop::string::string_regex("[a-z]{1,4}_[0-9]{1,3}").expect("Invalid regex"),
        prop::string::string_regex("[a-z]{1,4}_[0-9]{1,3}_x_[0-9]").expect("Invalid regex"),
        (1u32..100, 1u32..100).prop_map(|(a, b)| format!("p_{}_{}_0", a + b, a)),
    ]
}

/// One step of a simulated part history.
#[derive(Debug, Clone)]
pub enum HistoryStep {
    /// Insert a new single-block part.
    Insert {
        /// Partition selector.
        partition: usize,
    },
    /// Merge a run of adjacent active parts.
    Merge {
        /// Partition selector.
        partition: usize,
        /// Start of the run, modulo the number of active parts.
        start: usize,
        /// Extra parts beyond two in the run.
        extra: usize,
    },
    /// Rewrite an active part with a new mutation version.
    Mutate {
        /// Partition selector.
        partition: usize,
        /// Part selector, modulo the number of active parts.
        part: usize,
    },
}

/// Strategy for generating history steps.
pub fn history_step_strategy() -> impl Strategy<Value = HistoryStep> {
    prop_oneof![
        4 => any::<usize>().prop_map(|partition| HistoryStep::Insert { partition }),
        2 => (any::<usize>(), any::<usize>(), 0usize..3)
            .prop_map(|(partition, start, extra)| HistoryStep::Merge { partition, start, extra }),
        1 => (any::<usize>(), any::<usize>())
            .prop_map(|(partition, part)| HistoryStep::Mutate { partition, part }),
    ]
}

/// Replays inserts, merges and mutations over a set of partitions.
#[derive(Debug, Clone)]
pub struct MergeSimulator {
    partitions: Vec<String>,
    /// Active parts per partition, sorted by block range.
    active: Vec<Vec<PartInfo>>,
    created: Vec<PartInfo>,
    next_block: i64,
    next_mutation: i64,
}

impl MergeSimulator {
    /// Creates a simulator over the given partitions.
    ///
    /// # Panics
    ///
    /// Panics if `partitions` is empty.
    pub fn new(partitions: Vec<String>) -> Self {
        assert!(!partitions.is_empty(), "at least one partition is required");
        let active = vec![Vec::new(); partitions.len()];
        Self {
            partitions,
            active,
            created: Vec::new(),
            next_block: 1,
            next_mutation: 1,
        }
    }

    /// Applies one step. Steps that cannot apply (merging fewer than two
    /// parts, mutating an empty partition) are ignored.
    pub fn apply(&mut self, step: &HistoryStep) {
        match *step {
            HistoryStep::Insert { partition } => {
                let p = partition % self.partitions.len();
                let block = self.next_block;
                self.next_block += 1;
                let part = PartInfo::new(self.partitions[p].clone(), block, block, 0);
                self.active[p].push(part.clone());
                self.created.push(part);
            }
            HistoryStep::Merge {
                partition,
                start,
                extra,
            } => {
                let p = partition % self.partitions.len();
                let parts = &mut self.active[p];
                if parts.len() < 2 {
                    return;
                }
                let start = start % (parts.len() - 1);
                let end = (start + 2 + extra).min(parts.len());
                let sources: Vec<PartInfo> = parts.drain(start..end).collect();

                let level = sources.iter().map(PartInfo::level).max().unwrap_or(0) + 1;
                let mutation = sources.iter().map(PartInfo::mutation).max().unwrap_or(0);
                let merged = PartInfo::new(
                    self.partitions[p].clone(),
                    sources[0].min_block(),
                    sources[sources.len() - 1].max_block(),
                    level,
                )
                .with_mutation(mutation);

                parts.insert(start, merged.clone());
                self.created.push(merged);
            }
            HistoryStep::Mutate { partition, part } => {
                let p = partition % self.partitions.len();
                if self.active[p].is_empty() {
                    return;
                }
                let i = part % self.active[p].len();
                let source = &self.active[p][i];
                let mutated = PartInfo::new(
                    source.partition_id(),
                    source.min_block(),
                    source.max_block(),
                    source.level(),
                )
                .with_mutation(self.next_mutation);
                self.next_mutation += 1;

                self.active[p][i] = mutated.clone();
                self.created.push(mutated);
            }
        }
    }

    /// Finishes the simulation.
    pub fn finish(self) -> MergeHistory {
        let mut active: Vec<PartInfo> = self.active.into_iter().flatten().collect();
        active.sort();
        MergeHistory {
            created: self.created,
            active,
        }
    }
}

/// Outcome of a simulated history.
#[derive(Debug, Clone)]
pub struct MergeHistory {
    /// Every part ever created, in creation order.
    pub created: Vec<PartInfo>,
    /// Parts not superseded at the end, in key order.
    pub active: Vec<PartInfo>,
}

impl MergeHistory {
    /// Names of every created part, in creation order.
    pub fn created_names(&self) -> Vec<String> {
        self.created.iter().map(PartInfo::part_name).collect()
    }

    /// Names of the final active parts, in key order.
    pub fn active_names(&self) -> Vec<String> {
        self.active.iter().map(PartInfo::part_name).collect()
    }
}

/// Strategy for generating a simulated history of up to `max_steps` steps
/// over one to three partitions.
pub fn merge_history_strategy(max_steps: usize) -> impl Strategy<Value = MergeHistory> {
    (
        prop::collection::btree_set(partition_id_strategy(), 1..=3),
        prop::collection::vec(history_step_strategy(), 0..max_steps),
    )
        .prop_map(|(partitions, steps)| {
            let mut sim = MergeSimulator::new(partitions.into_iter().collect());
            for step in &steps {
                sim.apply(step);
            }
            sim.finish()
        })
}

/// Strategy for a history together with its created part names in a random
/// order.
pub fn shuffled_history_strategy(
    max_steps: usize,
) -> impl Strategy<Value = (MergeHistory, Vec<String>)> {
    merge_history_strategy(max_steps).prop_flat_map(|history| {
        let names = history.created_names();
        (Just(history), Just(names).prop_shuffle())
    })
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
