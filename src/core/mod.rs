//! Core engine types: players, coordinates, actions, configuration, errors.
//!
//! These are shared by the spatial board and the turn engine. Games
//! configure board size and player order via `GameConfig` rather than
//! modifying the core.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod position;

pub use action::{Action, Phase};
pub use config::{BoardConfig, GameConfig};
pub use error::RulesError;
pub use player::PlayerId;
pub use position::Position;
