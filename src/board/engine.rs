//! Spatial rules: placement, movement, building and end-state predicates.
//!
//! The `Board` knows nothing about turn order. It answers "is this legal
//! here?" and applies legal mutations; the game manager decides who may act
//! and when.
//!
//! ## Legality
//!
//! - Placement: on the board, cell free, player under the worker cap.
//! - Move: neighbouring cell, on the board, free, at most one level up, and
//!   strictly below the capped level.
//! - Build: neighbouring cell, on the board, free, strictly below the capped
//!   level.
//!
//! A worker standing at `max_height - 1` puts its player in a win state.

use std::fmt;

use im::Vector;
use smallvec::SmallVec;
use tracing::debug;

use super::grid::Grid;
use super::worker::Worker;
use crate::core::{Action, BoardConfig, PlayerId, Position, RulesError};

/// Candidate actions for one worker (at most 8 neighbours).
pub type Candidates = SmallVec<[Action; 8]>;

/// Board state: heights plus workers.
///
/// Cloning is O(1); heights and workers are persistent vectors.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Board {
    config: BoardConfig,
    grid: Grid,
    workers: Vector<Worker>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::InvalidConfig` if the configuration is unplayable.
    pub fn new(config: BoardConfig) -> Result<Self, RulesError> {
        config.validate()?;
        Ok(Self {
            config,
            grid: Grid::new(config.width, config.length),
            workers: Vector::new(),
        })
    }

    /// Board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.config.width
    }

    /// Number of rows.
    #[must_use]
    pub fn length(&self) -> u8 {
        self.config.length
    }

    /// Capped building level.
    #[must_use]
    pub fn max_height(&self) -> u8 {
        self.config.max_height
    }

    /// Height grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Building height at a position, `None` if off the board.
    #[must_use]
    pub fn height_at(&self, pos: Position) -> Option<u8> {
        self.grid.height(pos)
    }

    // === Workers ===

    /// All workers in placement order.
    pub fn workers(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter()
    }

    /// Workers owned by `player`.
    pub fn workers_of(&self, player: PlayerId) -> impl Iterator<Item = &Worker> {
        self.workers.iter().filter(move |w| w.player == player)
    }

    /// Number of workers `player` has placed.
    #[must_use]
    pub fn worker_count(&self, player: PlayerId) -> usize {
        self.workers_of(player).count()
    }

    /// Worker standing at a position.
    #[must_use]
    pub fn worker_at(&self, pos: Position) -> Option<&Worker> {
        self.workers.iter().find(|w| w.position == pos)
    }

    fn worker_index(&self, pos: Position) -> Option<usize> {
        self.workers.iter().position(|w| w.position == pos)
    }

    fn is_occupied(&self, pos: Position) -> bool {
        self.worker_at(pos).is_some()
    }

    // === Mutators ===

    /// Place a new worker for `player` at `at`.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::IllegalPlacement` if the player already has the
    /// maximum number of workers, or the cell is off the board or occupied.
    pub fn place(&mut self, player: PlayerId, at: Position) -> Result<(), RulesError> {
        if !self.player_can_place(player) {
            return Err(rejected(RulesError::placement(format!(
                "too many workers for {player}, max is {}",
                self.config.max_workers_per_player
            ))));
        }
        if !self.grid.contains(at) {
            return Err(rejected(RulesError::placement(format!("{at} is off the board"))));
        }
        if self.is_occupied(at) {
            return Err(rejected(RulesError::placement(format!("a worker already occupies {at}"))));
        }

        self.workers.push_back(Worker::new(player, at));
        Ok(())
    }

    /// Move `player`'s worker from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::IllegalMove` if there is no worker at `from`, it
    /// belongs to another player, or `to` is not a valid destination.
    pub fn move_worker(
        &mut self,
        player: PlayerId,
        from: Position,
        to: Position,
    ) -> Result<(), RulesError> {
        let index = self
            .worker_index(from)
            .ok_or_else(|| rejected(RulesError::movement(format!("no worker at {from}"))))?;
        let worker = self.workers[index];

        if worker.player != player {
            return Err(rejected(RulesError::movement(format!(
                "{player} cannot move the worker at {from}, it belongs to {}",
                worker.player
            ))));
        }
        if !self.is_valid_move(&worker, to) {
            return Err(rejected(RulesError::movement(format!("invalid move {from} -> {to}"))));
        }

        let height = self
            .grid
            .height(to)
            .ok_or_else(|| RulesError::board_state(format!("no height recorded for {to}")))?;
        if let Some(worker) = self.workers.get_mut(index) {
            worker.relocate(to, height);
        }
        Ok(())
    }

    /// Build at `at` with `player`'s worker standing on `worker`.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::IllegalBuild` if there is no worker at `worker`, it
    /// belongs to another player, or `at` is not a valid build target.
    pub fn build(
        &mut self,
        player: PlayerId,
        worker: Position,
        at: Position,
    ) -> Result<(), RulesError> {
        let builder = *self
            .worker_at(worker)
            .ok_or_else(|| rejected(RulesError::build(format!("no worker at {worker}"))))?;

        if builder.player != player {
            return Err(rejected(RulesError::build(format!(
                "{player} cannot build with the worker at {worker}, it belongs to {}",
                builder.player
            ))));
        }
        if !self.is_valid_build(&builder, at) {
            return Err(rejected(RulesError::build(format!(
                "worker at {worker} cannot build at {at}"
            ))));
        }

        self.grid
            .raise(at)
            .ok_or_else(|| RulesError::board_state(format!("no height recorded for {at}")))?;
        Ok(())
    }

    /// Remove all workers and buildings.
    pub fn reset(&mut self) {
        self.workers = Vector::new();
        self.grid.clear();
    }

    // === Predicates ===

    /// Check if `player` may place a worker at `at`.
    #[must_use]
    pub fn is_valid_placement(&self, player: PlayerId, at: Position) -> bool {
        self.grid.contains(at) && self.player_can_place(player) && !self.is_occupied(at)
    }

    /// Check if `worker` may move to `to`.
    ///
    /// The capped level is never a legal destination, even when it is only
    /// one step up.
    #[must_use]
    pub fn is_valid_move(&self, worker: &Worker, to: Position) -> bool {
        match self.grid.height(to) {
            Some(height) => {
                u16::from(height) <= u16::from(worker.height) + 1
                    && height < self.config.max_height
                    && !self.is_occupied(to)
                    && worker.position.is_adjacent(to)
            }
            None => false,
        }
    }

    /// Check if `worker` may build at `at`.
    #[must_use]
    pub fn is_valid_build(&self, worker: &Worker, at: Position) -> bool {
        match self.grid.height(at) {
            Some(height) => {
                height < self.config.max_height
                    && !self.is_occupied(at)
                    && worker.position.is_adjacent(at)
            }
            None => false,
        }
    }

    /// Check if `worker` may move to `to` and then build at `at`.
    ///
    /// The build is judged from the destination, with the vacated cell free.
    #[must_use]
    pub fn is_valid_turn(&self, worker: &Worker, to: Position, at: Position) -> bool {
        if !self.is_valid_move(worker, to) {
            return false;
        }
        let mut after = self.clone();
        after.move_worker(worker.player, worker.position, to).is_ok()
            && after
                .worker_at(to)
                .is_some_and(|moved| after.is_valid_build(moved, at))
    }

    // === Enumeration ===

    /// All legal placements for `player`, row-major.
    #[must_use]
    pub fn valid_placements(&self, player: PlayerId) -> Vec<Action> {
        self.grid
            .positions()
            .filter(|&at| self.is_valid_placement(player, at))
            .map(|at| Action::Place { player, at })
            .collect()
    }

    /// All legal moves for `worker`.
    #[must_use]
    pub fn valid_moves(&self, worker: &Worker) -> Candidates {
        worker
            .position
            .neighbors()
            .filter(|&to| self.is_valid_move(worker, to))
            .map(|to| Action::Move {
                player: worker.player,
                from: worker.position,
                to,
            })
            .collect()
    }

    /// All legal builds for `worker`.
    #[must_use]
    pub fn valid_builds(&self, worker: &Worker) -> Candidates {
        worker
            .position
            .neighbors()
            .filter(|&at| self.is_valid_build(worker, at))
            .map(|at| Action::Build {
                player: worker.player,
                worker: worker.position,
                at,
            })
            .collect()
    }

    // === Player capabilities ===

    /// Check if `player` is still under the worker cap.
    #[must_use]
    pub fn player_can_place(&self, player: PlayerId) -> bool {
        self.worker_count(player) < usize::from(self.config.max_workers_per_player)
    }

    /// Check if any of `player`'s workers can move.
    #[must_use]
    pub fn player_can_move(&self, player: PlayerId) -> bool {
        self.workers_of(player).any(|w| !self.valid_moves(w).is_empty())
    }

    /// Check if any of `player`'s workers can build.
    #[must_use]
    pub fn player_can_build(&self, player: PlayerId) -> bool {
        self.workers_of(player).any(|w| !self.valid_builds(w).is_empty())
    }

    // === End states ===

    /// Check if `player` has a worker on the winning level.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::IllegalBoardState` if more than one of the
    /// player's workers stands on the winning level.
    pub fn player_in_win_state(&self, player: PlayerId) -> Result<bool, RulesError> {
        let winning_height = self.config.winning_height();
        let on_top: SmallVec<[Position; 2]> = self
            .workers_of(player)
            .filter(|w| w.height == winning_height)
            .map(|w| w.position)
            .collect();

        if on_top.len() > 1 {
            let cells: Vec<String> = on_top.iter().map(ToString::to_string).collect();
            return Err(RulesError::board_state(format!(
                "{player} has {} workers on the winning level: {}",
                on_top.len(),
                cells.join(", ")
            )));
        }
        Ok(on_top.len() == 1)
    }

    /// True if `player` has no legal move with any worker.
    #[must_use]
    pub fn player_in_loss_state_before_move(&self, player: PlayerId) -> bool {
        !self.player_can_move(player)
    }

    /// True if the worker at `worker` (which just moved) cannot build.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::IllegalBuild` if there is no worker at `worker`.
    pub fn player_in_loss_state_after_move(&self, worker: Position) -> Result<bool, RulesError> {
        let mover = self
            .worker_at(worker)
            .ok_or_else(|| RulesError::build(format!("no worker at {worker}")))?;
        Ok(self.valid_builds(mover).is_empty())
    }
}

fn rejected(err: RulesError) -> RulesError {
    debug!(error = %err, "board rejected action");
    err
}

impl fmt::Display for Board {
    /// One line per row; each cell is the worker symbol (if any) followed by
    /// the building height.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = usize::from(self.config.max_height) + 1;

        for (y, row) in self.grid.rows().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(x, height)| {
                    let pos = Position::new(x as i32, y as i32);
                    let symbol = self.worker_at(pos).map_or(' ', |w| w.player.symbol());
                    format!("{:>cell_width$}", format!("{symbol}{height}"))
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
