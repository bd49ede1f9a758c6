//! Tier board: golfers partitioned by tier value, each tier ordered best score first.

use crate::data::golfer::GolferCandidate;
use crate::scoring::ROSTER_SIZE;

/// Number of tiers (values 0 through [MAX_TIER]).
pub const TIER_COUNT: usize = 7;
/// Highest tier value, and the highest point cost of a single pick.
pub const MAX_TIER: u8 = 6;

/// Fixed-size tier -> golfers table. Each tier list is kept in the order it was
/// supplied; the optimizer relies on that order being best-first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierBoard {
    tiers: [Vec<GolferCandidate>; TIER_COUNT],
}

impl TierBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from tier lists that are already sorted best-first. Tiers missing
    /// from the input are empty. Lists keyed outside 0-6 are dropped.
    pub fn from_sorted_tiers<I>(tiers: I) -> Self
    where
        I: IntoIterator<Item = (u8, Vec<GolferCandidate>)>,
    {
        let mut board = Self::default();
        for (tier, golfers) in tiers {
            match board.tiers.get_mut(usize::from(tier)) {
                Some(slot) => slot.extend(golfers),
                None => tracing::warn!(tier, dropped = golfers.len(), "ignoring out-of-range tier"),
            }
        }
        board
    }

    /// Group a flat golfer list by tier and order each tier by score
    /// (stable, so equal scores keep their input order).
    pub fn from_golfers<I>(golfers: I) -> Self
    where
        I: IntoIterator<Item = GolferCandidate>,
    {
        let mut board = Self::default();
        for golfer in golfers {
            let tier = golfer.tier;
            match board.tiers.get_mut(usize::from(tier)) {
                Some(slot) => slot.push(golfer),
                None => tracing::warn!(tier, golfer = %golfer.id, "ignoring golfer with out-of-range tier"),
            }
        }
        for tier in &mut board.tiers {
            tier.sort_by_key(|golfer| golfer.score);
        }
        board
    }

    /// Golfers in `tier`, best first. Unknown tiers read as empty.
    pub fn tier(&self, tier: u8) -> &[GolferCandidate] {
        self.tiers
            .get(usize::from(tier))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn available(&self, tier: u8) -> usize {
        self.tier(tier).len()
    }

    pub fn total_golfers(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_golfers() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &[GolferCandidate])> {
        (0..=MAX_TIER).map(move |tier| (tier, self.tier(tier)))
    }

    pub fn is_tier_sorted(&self, tier: u8) -> bool {
        self.tier(tier).windows(2).all(|pair| pair[0].score <= pair[1].score)
    }

    /// Largest tier-point sum any 6 available golfers can reach, or `None`
    /// when the board cannot field a full roster.
    pub fn max_reachable_points(&self) -> Option<u32> {
        let mut remaining = ROSTER_SIZE;
        let mut points = 0u32;
        for tier in (0..=MAX_TIER).rev() {
            let take = self.available(tier).min(remaining);
            points += u32::from(tier) * take as u32;
            remaining -= take;
            if remaining == 0 {
                return Some(points);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::TierBoard;
    use crate::data::golfer::GolferCandidate;

    fn golfer(id: &str, tier: u8, score: i32) -> GolferCandidate {
        GolferCandidate::new(id, id.to_uppercase(), tier, score)
    }

    #[test]
    fn absent_tiers_read_as_empty() {
        let board = TierBoard::from_sorted_tiers([(2, vec![golfer("a", 2, -1)])]);
        assert_eq!(board.available(2), 1);
        assert_eq!(board.available(0), 0);
        assert!(board.tier(6).is_empty());
        assert!(board.tier(42).is_empty());
    }

    #[test]
    fn sorted_tiers_keep_supplied_order() {
        let board = TierBoard::from_sorted_tiers([(
            1,
            vec![golfer("late", 1, 3), golfer("early", 1, -3)],
        )]);
        let ids: Vec<&str> = board.tier(1).iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early"]);
        assert!(!board.is_tier_sorted(1));
    }

    #[test]
    fn from_golfers_groups_and_sorts_stably() {
        let board = TierBoard::from_golfers(vec![
            golfer("b", 3, 2),
            golfer("a", 3, -1),
            golfer("c", 3, 2),
            golfer("x", 0, -8),
            golfer("bad", 9, -20),
        ]);
        let ids: Vec<&str> = board.tier(3).iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(board.available(0), 1);
        assert_eq!(board.total_golfers(), 4);
        assert!(board.is_tier_sorted(3));
    }

    #[test]
    fn max_reachable_points_prefers_expensive_tiers() {
        let board = TierBoard::from_golfers(vec![
            golfer("a", 6, 0),
            golfer("b", 6, 0),
            golfer("c", 5, 0),
            golfer("d", 1, 0),
            golfer("e", 1, 0),
            golfer("f", 0, 0),
            golfer("g", 0, 0),
        ]);
        assert_eq!(board.max_reachable_points(), Some(6 + 6 + 5 + 1 + 1));

        let short = TierBoard::from_golfers(vec![golfer("a", 6, 0)]);
        assert_eq!(short.max_reachable_points(), None);
    }
}
