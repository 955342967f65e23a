// Team domain module
// Contains the team aggregate and its validated field set

#![allow(clippy::module_inception)]

pub mod team;

// Re-export main types for convenience
pub use team::{Team, TeamDetails};
