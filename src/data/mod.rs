pub mod golfer;
pub mod snapshot;
pub mod tiers;
pub mod validate;

pub use golfer::GolferCandidate;
pub use snapshot::{load_snapshot, PoolSnapshot, SnapshotError};
pub use tiers::{TierBoard, MAX_TIER, TIER_COUNT};
