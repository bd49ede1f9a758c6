//! Batch optimization over many pool snapshots.
//!
//! Every snapshot is searched independently, so batches fan out across Rayon
//! workers without coordination. Results keep the input order.

use rayon::prelude::*;

use crate::data::snapshot::PoolSnapshot;
use crate::optimizer::{optimize_snapshot, PoolOutcome};
use crate::parallel::pool::WorkerPool;

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; earlier batches take the remainder.
///
/// # Example
/// ```
/// # use fairway::parallel::batch_ranges;
/// let ranges = batch_ranges(10, 3);
/// assert_eq!(ranges, vec![(0, 4), (4, 7), (7, 10)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let end = start + base + usize::from(i < remainder);
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Optimize every snapshot in parallel on `pool`.
pub fn optimize_pools(
    snapshots: &[PoolSnapshot],
    default_min_points: u32,
    pool: &WorkerPool,
) -> Vec<PoolOutcome> {
    pool.install(|| optimize_all(snapshots, default_min_points))
}

/// Like [optimize_pools] but works through `num_batches` chunks and calls
/// `on_progress(done, total)` after each one. All chunks share one pool.
pub fn optimize_pools_with_progress<F>(
    snapshots: &[PoolSnapshot],
    default_min_points: u32,
    pool: &WorkerPool,
    num_batches: usize,
    mut on_progress: F,
) -> Vec<PoolOutcome>
where
    F: FnMut(usize, usize) + Send,
{
    let total = snapshots.len();
    pool.install(|| {
        let mut outcomes = Vec::with_capacity(total);
        on_progress(0, total);
        for (start, end) in batch_ranges(total, num_batches) {
            outcomes.extend(optimize_all(&snapshots[start..end], default_min_points));
            on_progress(end, total);
        }
        outcomes
    })
}

fn optimize_all(snapshots: &[PoolSnapshot], default_min_points: u32) -> Vec<PoolOutcome> {
    snapshots
        .par_iter()
        .map(|snapshot| optimize_snapshot(snapshot, default_min_points))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::golfer::GolferCandidate;

    #[test]
    fn batch_ranges_even_split() {
        assert_eq!(
            batch_ranges(100, 4),
            vec![(0, 25), (25, 50), (50, 75), (75, 100)]
        );
    }

    #[test]
    fn batch_ranges_more_batches_than_items() {
        assert_eq!(batch_ranges(3, 10), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn batch_ranges_empty() {
        assert!(batch_ranges(0, 5).is_empty());
        assert!(batch_ranges(10, 0).is_empty());
    }

    fn snapshot(id: &str, shift: i32) -> PoolSnapshot {
        let golfers = (1..=6)
            .map(|tier| GolferCandidate::new(format!("{id}-{tier}"), "G", tier, i32::from(tier) + shift))
            .collect();
        PoolSnapshot::new(id, golfers)
    }

    #[test]
    fn outcomes_keep_input_order() {
        let snapshots: Vec<PoolSnapshot> =
            (0..9).map(|i| snapshot(&format!("pool{i}"), i)).collect();
        let outcomes = optimize_pools(&snapshots, 21, &WorkerPool::with_workers(3));
        let ids: Vec<&str> = outcomes.iter().map(|o| o.pool_id.as_str()).collect();
        let expected: Vec<String> = (0..9).map(|i| format!("pool{i}")).collect();
        assert_eq!(ids, expected);
        for (i, outcome) in outcomes.iter().enumerate() {
            let team = outcome.result.as_ref().expect("full field has a team");
            // Tiers 1-4 count: 1+2+3+4 plus four shifts.
            assert_eq!(team.total_score, 10 + 4 * i as i32);
        }
    }

    #[test]
    fn progress_reports_every_batch() {
        let snapshots: Vec<PoolSnapshot> = (0..5).map(|i| snapshot("p", i)).collect();
        let mut reports = Vec::new();
        let outcomes = optimize_pools_with_progress(
            &snapshots,
            21,
            &WorkerPool::default(),
            2,
            |done, total| reports.push((done, total)),
        );
        assert_eq!(outcomes.len(), 5);
        assert_eq!(reports, vec![(0, 5), (3, 5), (5, 5)]);
    }

    #[test]
    fn progress_batches_share_one_sized_pool() {
        let snapshots: Vec<PoolSnapshot> = (0..6).map(|i| snapshot("p", i)).collect();
        let mut pool_sizes = Vec::new();
        let outcomes = optimize_pools_with_progress(
            &snapshots,
            21,
            &WorkerPool::with_workers(3),
            3,
            |_, _| pool_sizes.push(rayon::current_num_threads()),
        );
        assert_eq!(outcomes.len(), 6);
        assert_eq!(pool_sizes, vec![3; 4]);
    }
}
