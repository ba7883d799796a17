//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. The standard two-player game uses
//! [`PlayerId::BLUE`] and [`PlayerId::WHITE`], but the engine never assumes
//! two players: any set of distinct ids can be configured.
//!
//! Each id has a short text token used by game records:
//! `b` for blue, `w` for white and `p<N>` for every other id.

use serde::{Deserialize, Serialize};

/// Player identifier supporting up to 256 distinct players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Blue player of the standard game.
    pub const BLUE: PlayerId = PlayerId(0);

    /// White player of the standard game.
    pub const WHITE: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Short text token for game records.
    ///
    /// ```
    /// use santorini_rules::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::BLUE.token(), "b");
    /// assert_eq!(PlayerId::WHITE.token(), "w");
    /// assert_eq!(PlayerId::new(7).token(), "p7");
    /// ```
    #[must_use]
    pub fn token(self) -> String {
        match self {
            Self::BLUE => "b".to_string(),
            Self::WHITE => "w".to_string(),
            Self(id) => format!("p{id}"),
        }
    }

    /// Parse a token produced by [`PlayerId::token`].
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "b" => Some(Self::BLUE),
            "w" => Some(Self::WHITE),
            other => other
                .strip_prefix('p')?
                .parse()
                .ok()
                .map(Self)
                .filter(|player| player.token() == other),
        }
    }

    /// Single character used when drawing the board.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::BLUE => 'b',
            Self::WHITE => 'w',
            // 2.. map onto digits, larger ids share a generic marker
            Self(id) => char::from_digit(u32::from(id), 10).unwrap_or('*'),
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::BLUE => write!(f, "blue"),
            Self::WHITE => write!(f, "white"),
            Self(id) => write!(f, "player {id}"),
        }
    }
}
