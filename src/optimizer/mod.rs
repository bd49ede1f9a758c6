pub mod multiset;
pub mod result;
pub mod roster;

use std::cmp::Ordering;

use serde::Serialize;

use crate::data::snapshot::PoolSnapshot;
use crate::data::tiers::TierBoard;
use crate::optimizer::multiset::generate_valid_multisets;
use crate::optimizer::roster::CandidateRoster;
use crate::scoring::{BestOfScorer, EntryScorer};

pub use multiset::{TierMultiset, MAX_POINTS};
pub use result::{UnicornGolfer, UnicornResult};

/// Minimum tier points a golf pool entry must spend unless the pool overrides it.
pub const DEFAULT_MIN_POINTS: u32 = 21;

/// Counters from one search, for logs and API responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Multisets meeting the point minimum.
    pub multisets: usize,
    /// Multisets every tier of which had enough golfers.
    pub buildable: usize,
    /// Buildable multisets scoring the winning total, winner included.
    pub tied_best: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnicornSearch {
    pub result: Option<UnicornResult>,
    pub stats: SearchStats,
}

/// Optimal roster for one pool snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolOutcome {
    pub pool_id: String,
    pub min_points: u32,
    pub result: Option<UnicornResult>,
    pub stats: SearchStats,
}

/// Best-scoring 6-golfer roster spending at least `min_points` tier points,
/// under the standard best-4-of-6 rule. `None` when no roster is buildable.
pub fn find_unicorn_team(board: &TierBoard, min_points: u32) -> Option<UnicornResult> {
    find_unicorn_team_with(&BestOfScorer::default(), board, min_points)
}

pub fn find_unicorn_team_with<S: EntryScorer + ?Sized>(
    scorer: &S,
    board: &TierBoard,
    min_points: u32,
) -> Option<UnicornResult> {
    search_unicorn_team(scorer, board, min_points).result
}

/// Evaluate the greedy roster of every qualifying multiset and keep the lowest
/// total. The first multiset (in generation order) reaching the best total is
/// the one reported; later multisets matching it only add to the tie count.
pub fn search_unicorn_team<S: EntryScorer + ?Sized>(
    scorer: &S,
    board: &TierBoard,
    min_points: u32,
) -> UnicornSearch {
    let multisets = generate_valid_multisets(min_points);
    let mut stats = SearchStats {
        multisets: multisets.len(),
        ..SearchStats::default()
    };
    let mut best: Option<(i32, CandidateRoster<'_>)> = None;

    for multiset in multisets {
        let Some(roster) = CandidateRoster::build(board, multiset) else {
            continue;
        };
        stats.buildable += 1;

        let total = scorer.score_entry(&roster.scored_entries()).total;
        match best.as_ref().map(|(best_total, _)| total.cmp(best_total)) {
            Some(Ordering::Greater) => {}
            Some(Ordering::Equal) => stats.tied_best += 1,
            Some(Ordering::Less) | None => {
                best = Some((total, roster));
                stats.tied_best = 1;
            }
        }
    }

    let result = best.map(|(_, roster)| result::assemble(scorer, &roster, stats.tied_best));
    match &result {
        Some(team) => tracing::debug!(
            min_points,
            multisets = stats.multisets,
            buildable = stats.buildable,
            total_score = team.total_score,
            alternatives = team.alternative_count,
            "unicorn team found"
        ),
        None => tracing::debug!(
            min_points,
            multisets = stats.multisets,
            golfers = board.total_golfers(),
            "no buildable roster meets the point minimum"
        ),
    }

    UnicornSearch { result, stats }
}

/// Run the search for a snapshot, using its own minimum when it sets one.
pub fn optimize_snapshot(snapshot: &PoolSnapshot, default_min_points: u32) -> PoolOutcome {
    let min_points = snapshot.effective_min_points(default_min_points);
    let board = snapshot.board();
    let search = search_unicorn_team(&BestOfScorer::default(), &board, min_points);
    PoolOutcome {
        pool_id: snapshot.pool_id.clone(),
        min_points,
        result: search.result,
        stats: search.stats,
    }
}
