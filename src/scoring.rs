//! Entry scoring: an entry of [ROSTER_SIZE] golfers scores the sum of its best
//! [COUNTED_SCORES] scores to par. The remaining golfers are dropped.

use serde::Serialize;

/// Golfers per pool entry.
pub const ROSTER_SIZE: usize = 6;
/// Golfer scores that count toward an entry's total.
pub const COUNTED_SCORES: usize = 4;

/// Narrow scoring view of one golfer in an entry. Display fields (position,
/// rounds, progress) stay on the golfer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredEntry<'a> {
    pub golfer_id: &'a str,
    pub name: &'a str,
    pub tier: u8,
    pub score: i32,
    pub made_cut: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryScore<'a> {
    pub counted: Vec<ScoredEntry<'a>>,
    pub dropped: Vec<ScoredEntry<'a>>,
    pub total: i32,
}

impl EntryScore<'_> {
    pub fn is_counted(&self, golfer_id: &str) -> bool {
        self.counted.iter().any(|entry| entry.golfer_id == golfer_id)
    }
}

/// Scoring rule applied to a pool entry. Implementations must be
/// deterministic, and lowering one golfer's score must never raise the total;
/// the roster optimizer depends on both.
pub trait EntryScorer {
    fn score_entry<'a>(&self, entries: &[ScoredEntry<'a>]) -> EntryScore<'a>;
}

/// Counts the lowest `counted` scores. Ties order made-cut golfers ahead of
/// missed-cut golfers, then keep input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestOfScorer {
    pub counted: usize,
}

impl Default for BestOfScorer {
    fn default() -> Self {
        Self {
            counted: COUNTED_SCORES,
        }
    }
}

impl EntryScorer for BestOfScorer {
    fn score_entry<'a>(&self, entries: &[ScoredEntry<'a>]) -> EntryScore<'a> {
        let mut ranked = entries.to_vec();
        ranked.sort_by_key(|entry| (entry.score, !entry.made_cut));

        let dropped = ranked.split_off(self.counted.min(ranked.len()));
        let total = ranked
            .iter()
            .fold(0i32, |total, entry| total.saturating_add(entry.score));
        EntryScore {
            counted: ranked,
            dropped,
            total,
        }
    }
}
