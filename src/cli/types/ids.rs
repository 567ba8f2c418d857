//! ID types for players and tournaments.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Player nickname as it appears on the tournament data source.
///
/// Nicknames are matched by exact, case-sensitive equality against both
/// participants of a match.
///
/// # Examples
///
/// ```rust
/// use hockey_stats::Nickname;
///
/// let nick = Nickname::new("Player1");
/// assert_eq!(nick.as_str(), "Player1");
/// assert_eq!(nick.to_string(), "Player1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Nickname(pub String);

impl Nickname {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self(nickname.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Nickname {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// Raw tournament id as sent by the API: either a string or a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTournamentId {
    Text(String),
    Number(i64),
}

/// Type-safe wrapper for tournament identifiers.
///
/// The data source is inconsistent about whether ids are strings or numbers,
/// so both are accepted and normalized to their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawTournamentId")]
pub struct TournamentId(pub String);

impl TournamentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawTournamentId> for TournamentId {
    fn from(raw: RawTournamentId) -> Self {
        match raw {
            RawTournamentId::Text(s) => Self(s),
            RawTournamentId::Number(n) => Self(n.to_string()),
        }
    }
}

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
