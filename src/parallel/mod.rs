pub mod batch;
pub mod pool;

pub use batch::{batch_ranges, optimize_pools, optimize_pools_with_progress};
pub use pool::WorkerPool;
