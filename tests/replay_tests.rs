//! Random playout and replay tests.
//!
//! Games are played by picking from `GameManager::legal_actions` with
//! proptest-chosen indices. Every accepted action must keep the board
//! consistent, and replaying any prefix of the log must rebuild exactly the
//! state the live game had at that point.

use proptest::prelude::*;

use santorini_rules::board::Board;
use santorini_rules::core::{Action, BoardConfig, GameConfig, PlayerId};
use santorini_rules::game::GameManager;
use santorini_rules::record::GameRecord;

/// Any configuration, including ones the engine must reject.
fn any_config() -> impl Strategy<Value = GameConfig> {
    (1u8..=5, 1u8..=5, 1u8..=4, 0u8..=2, 1u8..=3).prop_map(|(w, l, h, n, p)| {
        GameConfig::new(BoardConfig::new(w, l, h, n), (0..p).map(PlayerId::new))
    })
}

fn game_config() -> impl Strategy<Value = GameConfig> {
    any_config().prop_filter("configuration is rejected", |c| c.validate().is_ok())
}

/// Play `choices` against `config`, returning the manager after every action.
fn play(config: GameConfig, choices: &[usize]) -> Vec<GameManager> {
    let mut game = GameManager::new(config).unwrap();
    let mut history = vec![game.clone()];

    for &choice in choices {
        let legal = game.legal_actions();
        if legal.is_empty() {
            break;
        }
        game.apply(&legal[choice % legal.len()]).unwrap();
        history.push(game.clone());
    }
    history
}

fn assert_consistent(board: &Board) -> Result<(), TestCaseError> {
    let max_height = board.max_height();
    let mut seen = Vec::new();

    for worker in board.workers() {
        prop_assert!(!seen.contains(&worker.position), "two workers at {}", worker.position);
        seen.push(worker.position);
        prop_assert_eq!(board.height_at(worker.position), Some(worker.height));

        for action in board.valid_moves(worker) {
            let Action::Move { to, .. } = action else {
                return Err(TestCaseError::fail("move candidate of another phase"));
            };
            let height = board.height_at(to);
            prop_assert!(height.is_some(), "move off the board to {}", to);
            let height = height.unwrap_or_default();
            prop_assert!(height < max_height);
            prop_assert!(height <= worker.height + 1);
            prop_assert!(board.worker_at(to).is_none());
        }

        for action in board.valid_builds(worker) {
            let Action::Build { at, .. } = action else {
                return Err(TestCaseError::fail("build candidate of another phase"));
            };
            prop_assert!(board.height_at(at).is_some_and(|h| h < max_height));
            prop_assert!(board.worker_at(at).is_none());
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Random legal play never produces an inconsistent board, a legal
    /// candidate is never rejected, and every accepted configuration plays
    /// to a result instead of stalling.
    #[test]
    fn prop_random_play_stays_consistent(
        config in any_config(),
        choices in prop::collection::vec(any::<usize>(), 0..120),
    ) {
        if config.validate().is_err() {
            prop_assert!(GameManager::new(config).is_err());
            return Ok(());
        }

        let history = play(config, &choices);
        let last = history.last().unwrap();

        for snapshot in last.log().iter() {
            assert_consistent(&snapshot.board)?;
        }

        if last.legal_actions().is_empty() {
            prop_assert!(last.is_over(), "stalled without a result:\n{}", last.board());
        }
    }

    /// Moving never changes heights; the worker takes the destination's height.
    #[test]
    fn prop_move_takes_destination_height(
        config in game_config(),
        choices in prop::collection::vec(any::<usize>(), 0..120),
    ) {
        let history = play(config, &choices);
        let log = history.last().unwrap().log();

        for i in 1..log.len() {
            let (before, after) = (log.get(i - 1).unwrap(), log.get(i).unwrap());
            if let Action::Move { to, .. } = after.action {
                prop_assert_eq!(before.board.grid(), after.board.grid());
                let moved = after.board.worker_at(to).map(|w| w.height);
                prop_assert_eq!(moved, before.board.height_at(to));
            }
        }
    }

    /// Replaying any prefix of the log rebuilds the live state at that point.
    #[test]
    fn prop_replay_matches_every_boundary(
        config in game_config(),
        choices in prop::collection::vec(any::<usize>(), 0..60),
    ) {
        let history = play(config, &choices);
        let record = GameRecord::from_manager(history.last().unwrap());

        for (len, live) in history.iter().enumerate() {
            let prefix = GameRecord {
                actions: record.actions[..len].to_vec(),
                ..record.clone()
            };
            let replayed = prefix.replay().unwrap();
            prop_assert_eq!(&replayed, live);
        }
    }

    /// The text and binary record forms describe the same game.
    #[test]
    fn prop_record_forms_agree(
        config in game_config(),
        choices in prop::collection::vec(any::<usize>(), 0..60),
    ) {
        let history = play(config, &choices);
        let record = GameRecord::from_manager(history.last().unwrap());

        let from_text: GameRecord = record.to_string().parse().unwrap();
        let from_bytes = GameRecord::from_bytes(&record.to_bytes().unwrap()).unwrap();
        prop_assert_eq!(&from_text, &record);
        prop_assert_eq!(&from_bytes, &record);
    }
}

/// Snapshots and the record serialize through serde as plain data.
#[test]
fn test_serde_json_snapshot() {
    let history = play(GameConfig::default(), &[0, 3, 7, 11, 2, 5, 1]);
    let last = history.last().unwrap();
    let snapshot = last.log().last().unwrap();

    let json = serde_json::to_string(snapshot).unwrap();
    let back: santorini_rules::game::Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, snapshot);

    let record = GameRecord::from_manager(last);
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["players"].as_array().map(Vec::len), Some(2));
}
