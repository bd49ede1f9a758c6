//! Tier multisets: how many golfers a roster takes from each tier.
//!
//! There are only 924 multisets of six tiers, so enumerating the ones that meet
//! a point minimum replaces searching every 6-golfer combination of the field.

use serde::{Serialize, Serializer};

use crate::data::tiers::{MAX_TIER, TIER_COUNT};
use crate::scoring::ROSTER_SIZE;

/// Highest tier-point total a roster can reach (six top-tier picks).
pub const MAX_POINTS: u32 = MAX_TIER as u32 * ROSTER_SIZE as u32;

/// Six tier values in non-decreasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TierMultiset([u8; ROSTER_SIZE]);

impl TierMultiset {
    /// Sorts `tiers` so equal multisets compare equal regardless of input
    /// order. `None` when a tier is above [MAX_TIER].
    pub fn new(mut tiers: [u8; ROSTER_SIZE]) -> Option<Self> {
        if tiers.iter().any(|&tier| tier > MAX_TIER) {
            return None;
        }
        tiers.sort_unstable();
        Some(Self(tiers))
    }

    pub fn tiers(&self) -> &[u8; ROSTER_SIZE] {
        &self.0
    }

    pub fn points(&self) -> u32 {
        self.0.iter().map(|&tier| u32::from(tier)).sum()
    }

    /// Golfers required per tier, indexed by tier value.
    pub fn tier_counts(&self) -> [usize; TIER_COUNT] {
        let mut counts = [0; TIER_COUNT];
        for &tier in &self.0 {
            counts[usize::from(tier)] += 1;
        }
        counts
    }
}

impl Serialize for TierMultiset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Every multiset of [ROSTER_SIZE] tiers whose point total is at least
/// `min_points`, in lexicographic order. Empty when `min_points` exceeds
/// [MAX_POINTS].
pub fn generate_valid_multisets(min_points: u32) -> Vec<TierMultiset> {
    let mut multisets = Vec::new();
    let mut current = [0u8; ROSTER_SIZE];
    extend_multisets(min_points, 0, 0, 0, &mut current, &mut multisets);
    multisets
}

fn extend_multisets(
    min_points: u32,
    depth: usize,
    start_tier: u8,
    current_sum: u32,
    current: &mut [u8; ROSTER_SIZE],
    out: &mut Vec<TierMultiset>,
) {
    if depth == ROSTER_SIZE {
        if current_sum >= min_points {
            out.push(TierMultiset(*current));
        }
        return;
    }

    let remaining_slots = (ROSTER_SIZE - depth) as u32;
    if current_sum + remaining_slots * u32::from(MAX_TIER) < min_points {
        return;
    }

    for tier in start_tier..=MAX_TIER {
        current[depth] = tier;
        extend_multisets(
            min_points,
            depth + 1,
            tier,
            current_sum + u32::from(tier),
            current,
            out,
        );
    }
}
