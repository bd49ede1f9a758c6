use serde::{Deserialize, Serialize};

/// Holes in a completed round; `thru` at this value means the round is finished.
pub const HOLES_PER_ROUND: u8 = 18;
/// Largest plausible distance from par for a whole tournament, either side.
pub const MAX_SCORE_TO_PAR: i32 = 200;

/// A golfer as seen by a pool: tier assignment plus current tournament standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GolferCandidate {
    pub id: String,
    pub name: String,
    /// Tier 0-6. The tier value is also the golfer's point cost.
    pub tier: u8,
    /// Score relative to par; lower is better.
    pub score: i32,
    #[serde(default = "default_made_cut")]
    pub made_cut: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thru: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Raw strokes per round; `None` for rounds not yet played.
    #[serde(default)]
    pub rounds: Vec<Option<i32>>,
}

fn default_made_cut() -> bool {
    true
}

impl GolferCandidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tier: u8, score: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier,
            score,
            made_cut: true,
            thru: None,
            position: None,
            rounds: Vec::new(),
        }
    }

    pub fn missed_cut(mut self) -> Self {
        self.made_cut = false;
        self
    }

    /// Short progress label for leaderboards: "CUT", "F", "thru N" or "-".
    pub fn progress_label(&self) -> String {
        if !self.made_cut {
            return "CUT".to_string();
        }
        match self.thru {
            Some(hole) if hole >= HOLES_PER_ROUND => "F".to_string(),
            Some(hole) => format!("thru {hole}"),
            None => "-".to_string(),
        }
    }
}
