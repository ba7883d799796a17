//! # santorini-rules
//!
//! Rules engine for Santorini-style building games on a rectangular grid.
//!
//! ## Design Principles
//!
//! 1. **Board Knows Space, Manager Knows Time**: The `Board` answers legality
//!    questions and applies legal mutations. The `GameManager` decides who may
//!    act and when, and settles eliminations and wins.
//!
//! 2. **N-Player First**: The turn order is an arbitrary list of player ids.
//!    Blue and white are only the defaults.
//!
//! 3. **All or Nothing**: An action either commits completely (board, log,
//!    rotations) or is rejected with a typed error and changes nothing.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`. Every accepted
//!   action keeps a full board snapshot, and every action is staged on a
//!   clone of the manager.
//!
//! - **Replay**: A game is fully described by its configuration and action
//!   list. Rebuilding a game means feeding those actions back through
//!   `GameManager::apply_action`.
//!
//! ## Modules
//!
//! - `core`: Player ids, positions, phases, actions, configuration, errors
//! - `board`: Height grid, workers, legality predicates and enumeration
//! - `game`: Turn state machine, snapshot log, outcomes
//! - `record`: Text and binary game records, replay

pub mod board;
pub mod core;
pub mod game;
pub mod record;

// Re-export commonly used types
pub use crate::core::{Action, BoardConfig, GameConfig, Phase, PlayerId, Position, RulesError};

pub use crate::board::{Board, Candidates, Grid, Worker};

pub use crate::game::{GameLog, GameManager, GameOutcome, Rotation, Snapshot, Status, WinReason};

pub use crate::record::{GameRecord, RecordError};
