//! Turn engine: whose turn it is, which phase is due, and when the game ends.
//!
//! ## Turn structure
//!
//! 1. Players place workers in rotation until nobody is under the cap.
//! 2. Each turn is then a MOVE followed by a BUILD with the same worker.
//!
//! The required phase is recomputed on every query: `Place` while any
//! remaining player can still place, otherwise the head of the MOVE/BUILD
//! rotation.
//!
//! ## End of turn
//!
//! After every accepted action the manager settles the next turn:
//! - a player whose last move left the worker unable to build is eliminated
//! - a player who must move but cannot is eliminated
//! - the last remaining player wins
//! - a player with a worker on the winning level wins
//!
//! ## Atomicity
//!
//! `apply_action` stages the whole transition on a clone (O(1), every field
//! is a persistent structure) and swaps it in only on success.

use im::Vector;
use tracing::{debug, info, instrument};

use super::outcome::{GameOutcome, Status, WinReason};
use super::rotation::Rotation;
use super::snapshot::{GameLog, Snapshot};
use crate::board::Board;
use crate::core::{Action, GameConfig, Phase, PlayerId, Position, RulesError};

/// Post-placement phases, in the order they are first required.
const TURN_PHASES: [Phase; 2] = [Phase::Move, Phase::Build];

/// Game state machine.
///
/// ## Example
///
/// ```
/// use santorini_rules::core::{BoardConfig, GameConfig, Phase, PlayerId};
/// use santorini_rules::game::{GameManager, Status};
///
/// let config = GameConfig::default().with_board(BoardConfig::new(3, 3, 2, 1));
/// let mut game = GameManager::new(config).unwrap();
///
/// game.apply_action(Phase::Place, &[0, 0], Some(PlayerId::BLUE)).unwrap();
/// let status = game.apply_action(Phase::Place, &[1, 1], None).unwrap();
///
/// let expected = Status::InProgress {
///     player: PlayerId::BLUE,
///     phase: Phase::Move,
/// };
/// assert_eq!(status, expected);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameManager {
    config: GameConfig,
    board: Board,
    players: Rotation<PlayerId>,
    phases: Rotation<Phase>,
    log: GameLog,
    eliminated: Vector<PlayerId>,
    outcome: Option<GameOutcome>,
}

impl GameManager {
    /// Start a new game.
    ///
    /// A game configured with a single player is won immediately.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::InvalidConfig` if the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self, RulesError> {
        config.validate()?;
        let board = Board::new(config.board)?;
        let players = Rotation::new(config.players.iter().copied())
            .ok_or_else(|| RulesError::config("turn order must be non-empty and distinct"))?;

        let mut manager = Self {
            config,
            board,
            players,
            phases: Rotation::from_distinct(TURN_PHASES),
            log: GameLog::new(),
            eliminated: Vector::new(),
            outcome: None,
        };
        manager.declare_last_player_standing();
        Ok(manager)
    }

    // === Accessors ===

    /// Configuration the game started from.
    #[must_use]
    pub fn initial_config(&self) -> &GameConfig {
        &self.config
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All completed actions.
    #[must_use]
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        *self.players.front()
    }

    /// Remaining players, starting with the active one.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().copied()
    }

    /// Players eliminated so far, in elimination order.
    pub fn eliminated(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.eliminated.iter().copied()
    }

    /// Phase the next action must have.
    #[must_use]
    pub fn required_phase(&self) -> Phase {
        if self.any_player_can_place() {
            Phase::Place
        } else {
            *self.phases.front()
        }
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// What the game expects next.
    #[must_use]
    pub fn status(&self) -> Status {
        match self.outcome {
            Some(outcome) => Status::Finished(outcome),
            None => Status::InProgress {
                player: self.active_player(),
                phase: self.required_phase(),
            },
        }
    }

    /// Every action the active player may take now.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_over() {
            return Vec::new();
        }

        let active = self.active_player();
        match self.required_phase() {
            Phase::Place => self.board.valid_placements(active),
            Phase::Move => self
                .board
                .workers_of(active)
                .flat_map(|worker| self.board.valid_moves(worker))
                .collect(),
            Phase::Build => match self.log.last().map(|s| s.action) {
                Some(Action::Move { to, .. }) => self
                    .board
                    .worker_at(to)
                    .map(|worker| self.board.valid_builds(worker).into_vec())
                    .unwrap_or_default(),
                _ => Vec::new(),
            },
        }
    }

    // === Actions ===

    /// Apply one action for the active player.
    ///
    /// `coordinates` is the flat form of the action: `[x, y]` for a
    /// placement, `[x0, y0, x1, y1]` for a move or build. If
    /// `expected_player` is given it must be the active player.
    ///
    /// Either the whole action is committed (board, log, rotations,
    /// eliminations) or nothing changes.
    ///
    /// # Errors
    ///
    /// - `RulesError::OutOfOrder` for the wrong player or phase, or if the
    ///   game is already over
    /// - `RulesError::IllegalPlacement` / `IllegalMove` / `IllegalBuild` if
    ///   the board rejects the action
    /// - `RulesError::IllegalBoardState` if the resulting board is corrupt
    #[instrument(level = "debug", skip(self))]
    pub fn apply_action(
        &mut self,
        phase: Phase,
        coordinates: &[i32],
        expected_player: Option<PlayerId>,
    ) -> Result<Status, RulesError> {
        let mut next = self.clone();
        let status = next.transition(phase, coordinates, expected_player)?;
        *self = next;
        Ok(status)
    }

    /// Apply a typed action; its player must be the active player.
    ///
    /// # Errors
    ///
    /// Same as [`GameManager::apply_action`].
    pub fn apply(&mut self, action: &Action) -> Result<Status, RulesError> {
        self.apply_action(action.phase(), &action.coordinates(), Some(action.player()))
    }

    /// Return to the initial configuration with an empty log.
    pub fn reset(&mut self) {
        self.board.reset();
        self.players = Rotation::from_distinct(self.config.players.iter().copied());
        self.phases = Rotation::from_distinct(TURN_PHASES);
        self.log = GameLog::new();
        self.eliminated = Vector::new();
        self.outcome = None;
        info!("game reset");
        self.declare_last_player_standing();
    }

    fn transition(
        &mut self,
        phase: Phase,
        coordinates: &[i32],
        expected_player: Option<PlayerId>,
    ) -> Result<Status, RulesError> {
        if let Some(outcome) = self.outcome {
            return Err(RulesError::out_of_order(format!(
                "game is over, {} already won",
                outcome.winner
            )));
        }

        let active = self.active_player();
        if let Some(expected) = expected_player {
            if expected != active {
                return Err(RulesError::out_of_order(format!(
                    "player turn out of order: expected {active}, got {expected}"
                )));
            }
        }

        let required = self.required_phase();
        if phase != required {
            return Err(RulesError::out_of_order(format!(
                "action out of order: expected {required}, got {phase}"
            )));
        }

        let action = Action::from_coordinates(phase, active, coordinates)?;
        let mut cant_build_after_move = false;
        match action {
            Action::Place { player, at } => self.board.place(player, at)?,
            Action::Move { player, from, to } => {
                self.board.move_worker(player, from, to)?;
                cant_build_after_move = self.board.player_in_loss_state_after_move(to)?;
            }
            Action::Build { player, worker, at } => {
                self.check_builder_just_moved(worker)?;
                self.board.build(player, worker, at)?;
            }
        }

        debug!(%action, "action applied");
        self.log.push(Snapshot {
            active_player: active,
            board: self.board.clone(),
            action,
        });

        if self.board.player_in_win_state(active)? {
            self.finish(active, WinReason::ReachedTop);
            return Ok(self.status());
        }

        // A move hands the turn on only when the mover is stuck
        if phase != Phase::Move || cant_build_after_move {
            self.players.rotate();
        }
        if !cant_build_after_move && phase != Phase::Place && !self.any_player_can_place() {
            self.phases.rotate();
        }

        self.end_turn()?;
        Ok(self.status())
    }

    fn check_builder_just_moved(&self, worker: Position) -> Result<(), RulesError> {
        match self.log.last().map(|s| s.action) {
            Some(Action::Move { to, .. }) if to == worker => Ok(()),
            Some(Action::Move { to, .. }) => Err(RulesError::build(format!(
                "must build with the worker that just moved to {to}, not the worker at {worker}"
            ))),
            Some(previous) => Err(RulesError::build(format!(
                "must move before building, previous action was {}",
                previous.phase()
            ))),
            None => Err(RulesError::build("cannot build as the opening action")),
        }
    }

    // === End of turn ===

    fn end_turn(&mut self) -> Result<(), RulesError> {
        self.eliminate_stuck_builder()?;
        self.eliminate_stuck_movers();

        if self.declare_last_player_standing() {
            return Ok(());
        }

        let active = self.active_player();
        if !self.log.is_empty() && self.board.player_in_win_state(active)? {
            self.finish(active, WinReason::ReachedTop);
        }
        Ok(())
    }

    fn eliminate_stuck_builder(&mut self) -> Result<(), RulesError> {
        let stuck = match self.log.last() {
            Some(Snapshot {
                active_player,
                board,
                action: Action::Move { to, .. },
            }) => board.player_in_loss_state_after_move(*to)?.then_some(*active_player),
            _ => None,
        };

        if let Some(player) = stuck {
            if self.players.len() > 1 {
                self.eliminate(player, "no valid builds");
            }
        }
        Ok(())
    }

    fn eliminate_stuck_movers(&mut self) {
        while !self.log.is_empty()
            && self.players.len() > 1
            && self.required_phase() == Phase::Move
        {
            let active = self.active_player();
            if !self.board.player_in_loss_state_before_move(active) {
                break;
            }
            self.eliminate(active, "no valid moves");
        }
    }

    fn eliminate(&mut self, player: PlayerId, reason: &str) {
        if self.players.remove(&player) {
            info!(%player, reason, "player eliminated");
            self.eliminated.push_back(player);
        }
    }

    fn declare_last_player_standing(&mut self) -> bool {
        if self.players.len() != 1 {
            return false;
        }
        self.finish(self.active_player(), WinReason::LastPlayerStanding);
        true
    }

    fn finish(&mut self, winner: PlayerId, reason: WinReason) {
        info!(%winner, ?reason, "player won");
        self.outcome = Some(GameOutcome { winner, reason });
    }

    fn any_player_can_place(&self) -> bool {
        self.players.iter().any(|&p| self.board.player_can_place(p))
    }
}
