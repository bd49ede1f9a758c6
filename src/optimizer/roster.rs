use crate::data::golfer::GolferCandidate;
use crate::data::tiers::{TierBoard, MAX_TIER};
use crate::optimizer::multiset::TierMultiset;
use crate::scoring::{ScoredEntry, ROSTER_SIZE};

/// Six golfers picked for one multiset shape, tier by tier in ascending tier order.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRoster<'a> {
    pub multiset: TierMultiset,
    pub golfers: Vec<&'a GolferCandidate>,
}

impl<'a> CandidateRoster<'a> {
    /// Take the first `count` golfers of every tier the multiset uses. `None`
    /// when some tier has fewer golfers than the multiset needs.
    ///
    /// Tiers are ordered best-first, so for a fixed shape no other choice of
    /// golfers can score better under a monotone best-k rule.
    pub fn build(board: &'a TierBoard, multiset: TierMultiset) -> Option<Self> {
        let counts = multiset.tier_counts();
        if !is_buildable(board, &counts) {
            return None;
        }

        let mut golfers = Vec::with_capacity(ROSTER_SIZE);
        for (tier, &count) in (0..=MAX_TIER).zip(counts.iter()) {
            golfers.extend(board.tier(tier).iter().take(count));
        }
        Some(Self { multiset, golfers })
    }

    pub fn points(&self) -> u32 {
        self.multiset.points()
    }

    pub fn scored_entries(&self) -> Vec<ScoredEntry<'a>> {
        self.golfers
            .iter()
            .map(|&golfer| ScoredEntry {
                golfer_id: &golfer.id,
                name: &golfer.name,
                tier: golfer.tier,
                score: golfer.score,
                made_cut: golfer.made_cut,
            })
            .collect()
    }
}

fn is_buildable(board: &TierBoard, counts: &[usize]) -> bool {
    (0..=MAX_TIER)
        .zip(counts)
        .all(|(tier, &needed)| board.available(tier) >= needed)
}
