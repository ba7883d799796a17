//! Turn engine: player and phase rotation, snapshot log, eliminations, wins.
//!
//! `GameManager` is the single writer for one game. It validates ordering,
//! delegates spatial checks to the `Board`, appends a snapshot per accepted
//! action and settles eliminations and wins before the next action.

pub mod manager;
pub mod outcome;
pub mod rotation;
pub mod snapshot;

pub use manager::GameManager;
pub use outcome::{GameOutcome, Status, WinReason};
pub use rotation::Rotation;
pub use snapshot::{GameLog, Snapshot};
