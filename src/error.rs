use std::fmt;

use thiserror::Error;

/// The three embedded arrays the page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Games,
    Clubs,
    Divisions,
}

impl Dataset {
    /// Name of the client-side variable the page assigns the array to.
    pub fn key(self) -> &'static str {
        match self {
            Dataset::Games => "games",
            Dataset::Clubs => "clubs",
            Dataset::Divisions => "divisions",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("no <script> block containing \"{marker}\" found in page")]
    ScriptNotFound { marker: &'static str },

    #[error("failed to decode {which} json")]
    Decode {
        which: Dataset,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown team id {0}")]
    UnknownTeam(String),
}

pub type Result<T, E = StandingsError> = std::result::Result<T, E>;
