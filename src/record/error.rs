//! Errors raised while reading, writing or replaying game records.

use std::io;

use thiserror::Error;

use crate::core::RulesError;

/// Errors raised by the record layer.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The text form could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A recorded action was rejected during replay.
    #[error("action {index} rejected: {source}")]
    Replay {
        /// 0-based index of the rejected action.
        index: usize,
        /// The rules violation.
        source: RulesError,
    },

    /// The recorded configuration was rejected.
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// Reading or writing a record file failed.
    #[error("record I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Binary encoding or decoding failed.
    #[error("record encoding failed: {0}")]
    Encode(#[from] bincode::Error),
}

impl RecordError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
