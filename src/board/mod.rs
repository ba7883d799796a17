//! Spatial engine: grid heights, workers and legality predicates.
//!
//! The board is stateless with respect to turn order. It validates and
//! applies individual placements, moves and builds, and reports per-player
//! capabilities and win/loss predicates. Sequencing lives in `game`.

pub mod engine;
pub mod grid;
pub mod worker;

pub use engine::{Board, Candidates};
pub use grid::Grid;
pub use worker::Worker;
