use std::ptr;

use serde::Serialize;

use crate::optimizer::multiset::TierMultiset;
use crate::optimizer::roster::CandidateRoster;
use crate::scoring::{EntryScorer, ScoredEntry};

/// Display record for one golfer of the winning roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnicornGolfer {
    pub golfer_id: String,
    pub name: String,
    pub tier: u8,
    pub score: i32,
    pub counted: bool,
    pub made_cut: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thru: Option<u8>,
    /// "CUT", "F", "thru N" or "-".
    pub progress: String,
    pub rounds: Vec<Option<i32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnicornResult {
    /// Counted golfers first, then dropped golfers.
    pub golfers: Vec<UnicornGolfer>,
    pub total_score: i32,
    pub total_points: u32,
    pub multiset: TierMultiset,
    /// Other multisets whose greedy roster reaches the same total score.
    pub alternative_count: usize,
}

impl UnicornResult {
    pub fn counted(&self) -> impl Iterator<Item = &UnicornGolfer> {
        self.golfers.iter().filter(|golfer| golfer.counted)
    }

    pub fn dropped(&self) -> impl Iterator<Item = &UnicornGolfer> {
        self.golfers.iter().filter(|golfer| !golfer.counted)
    }

    pub fn contains(&self, golfer_id: &str) -> bool {
        self.golfers.iter().any(|golfer| golfer.golfer_id == golfer_id)
    }
}

/// Rescore the winning roster for counted/dropped flags and join the scoring
/// view back to the full golfer records.
///
/// Entries borrow their id from the roster record they were built from, so the
/// join matches on that exact record rather than on id text, which the board
/// does not guarantee to be unique.
pub(crate) fn assemble<S: EntryScorer + ?Sized>(
    scorer: &S,
    roster: &CandidateRoster<'_>,
    tie_count: usize,
) -> UnicornResult {
    let score = scorer.score_entry(&roster.scored_entries());
    let record_of = |entry: &ScoredEntry<'_>| {
        roster
            .golfers
            .iter()
            .copied()
            .find(|golfer| ptr::eq(golfer.id.as_str(), entry.golfer_id))
    };

    let display = |entry: &ScoredEntry<'_>, counted: bool| {
        let record = record_of(entry);
        UnicornGolfer {
            golfer_id: entry.golfer_id.to_string(),
            name: entry.name.to_string(),
            tier: entry.tier,
            score: entry.score,
            counted,
            made_cut: entry.made_cut,
            position: record.and_then(|golfer| golfer.position.clone()),
            thru: record.and_then(|golfer| golfer.thru),
            progress: record
                .map(|golfer| golfer.progress_label())
                .unwrap_or_else(|| "-".to_string()),
            rounds: record.map(|golfer| golfer.rounds.clone()).unwrap_or_default(),
        }
    };

    let golfers = score
        .counted
        .iter()
        .map(|entry| display(entry, true))
        .chain(score.dropped.iter().map(|entry| display(entry, false)))
        .collect();

    UnicornResult {
        golfers,
        total_score: score.total,
        total_points: roster.points(),
        multiset: roster.multiset,
        alternative_count: tie_count.saturating_sub(1),
    }
}
