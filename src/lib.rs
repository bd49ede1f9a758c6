//! Golf tier-pool tooling centred on the "Unicorn Team" optimizer: the
//! hindsight-best 6-golfer entry under a best-4-of-6 scoring rule and a
//! minimum tier-point requirement.

pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod optimizer;
pub mod parallel;
pub mod scoring;
pub mod server;
