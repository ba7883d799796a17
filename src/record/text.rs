//! Line-oriented text form of a game record.
//!
//! ```text
//! 5|5|4|2                 length|width|max_height|max_workers
//! b|w                     turn order
//! b|place_worker|0|0      player|phase|coordinates...
//! w|place_worker|4|4
//! ```
//!
//! Fields are separated by `|`. Blank lines are ignored.

use std::fmt;
use std::str::FromStr;

use super::error::RecordError;
use super::GameRecord;
use crate::core::{Action, BoardConfig, Phase, PlayerId};

const DELIMITER: char = '|';

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = &self.board;
        writeln!(
            f,
            "{}|{}|{}|{}",
            board.length, board.width, board.max_height, board.max_workers_per_player
        )?;

        let tokens: Vec<String> = self.players.iter().map(|p| p.token()).collect();
        writeln!(f, "{}", tokens.join("|"))?;

        for action in &self.actions {
            write!(f, "{}|{}", action.player().token(), action.phase().name())?;
            for value in action.coordinates() {
                write!(f, "|{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for GameRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line, header) = lines
            .next()
            .ok_or_else(|| RecordError::parse(1, "missing board line"))?;
        let board = parse_board(line, header)?;

        let (line, order) = lines
            .next()
            .ok_or_else(|| RecordError::parse(line + 1, "missing turn order line"))?;
        let players = order
            .split(DELIMITER)
            .map(|token| parse_player(line, token))
            .collect::<Result<Vec<_>, _>>()?;

        let actions = lines
            .map(|(line, text)| parse_action(line, text))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            board,
            players,
            actions,
        })
    }
}

fn parse_board(line: usize, text: &str) -> Result<BoardConfig, RecordError> {
    let values = text
        .split(DELIMITER)
        .map(|field| {
            field
                .trim()
                .parse::<u8>()
                .map_err(|e| {
                    RecordError::parse(line, format!("bad board parameter {field:?}: {e}"))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match values[..] {
        [length, width, max_height, max_workers] => {
            Ok(BoardConfig::new(width, length, max_height, max_workers))
        }
        _ => Err(RecordError::parse(
            line,
            format!("expected 4 board parameters, got {}", values.len()),
        )),
    }
}

fn parse_player(line: usize, token: &str) -> Result<PlayerId, RecordError> {
    PlayerId::from_token(token.trim())
        .ok_or_else(|| RecordError::parse(line, format!("unknown player {token:?}")))
}

fn parse_action(line: usize, text: &str) -> Result<Action, RecordError> {
    let mut fields = text.split(DELIMITER).map(str::trim);

    let player = parse_player(line, fields.next().unwrap_or_default())?;
    let name = fields
        .next()
        .ok_or_else(|| RecordError::parse(line, "missing phase"))?;
    let phase = Phase::from_name(name)
        .ok_or_else(|| RecordError::parse(line, format!("unknown phase {name:?}")))?;
    let coordinates = fields
        .map(|field| {
            field
                .parse::<i32>()
                .map_err(|e| RecordError::parse(line, format!("bad coordinate {field:?}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Action::from_coordinates(phase, player, &coordinates)
        .map_err(|e| RecordError::parse(line, e.to_string()))
}
