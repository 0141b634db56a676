//! Benchmark utilities.

#![warn(missing_docs)]

use partset_core::PartInfo;
use rand::seq::SliceRandom;

/// Names of `count` single-block parts in `partition`, blocks `1..=count`.
pub fn leaf_names(partition: &str, count: i64) -> Vec<String> {
    (1..=count)
        .map(|block| PartInfo::new(partition, block, block, 0).part_name())
        .collect()
}

/// Names of every part in a tiered merge history over `count` blocks.
///
/// Level `n` merges runs of `fanout^n` blocks, so the history holds the
/// leaves plus each intermediate merge. The last level covers all blocks
/// when `count` is a power of `fanout`.
pub fn tiered_history(partition: &str, count: i64, fanout: i64) -> Vec<String> {
    let fanout = fanout.max(2);
    let mut names = leaf_names(partition, count);
    let mut width = fanout;
    let mut level = 1u32;

    while width <= count {
        let mut start = 1;
        while start + width - 1 <= count {
            names.push(PartInfo::new(partition, start, start + width - 1, level).part_name());
            start += width;
        }
        width *= fanout;
        level += 1;
    }
    names
}

/// Returns `names` in a random order.
pub fn shuffled(mut names: Vec<String>) -> Vec<String> {
    names.shuffle(&mut rand::thread_rng());
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiered_history_levels() {
        let names = tiered_history("p", 4, 2);
        assert_eq!(
            names,
            vec!["p_1_1_0", "p_2_2_0", "p_3_3_0", "p_4_4_0", "p_1_2_1", "p_3_4_1", "p_1_4_2"]
        );
    }
}
