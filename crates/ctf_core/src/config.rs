//! Leader-tracking configuration.

use serde::{Deserialize, Serialize};

use crate::error::CtfError;

/// Tunables for the leader tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtfConfig {
    /// Election grace window in seconds (default: 32).
    ///
    /// An election normally ends when the bot announces the outcome. If
    /// nobody votes no such announcement ever arrives, so the minute tick
    /// force-closes any election older than this window. Slightly longer
    /// than the bot's 30-second voting prompt so a legitimate outcome
    /// message always wins the race against the tick.
    pub election_grace_secs: u64,
}

impl Default for CtfConfig {
    fn default() -> Self {
        Self {
            election_grace_secs: 32,
        }
    }
}

impl CtfConfig {
    /// Parse a config from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CtfError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Grace window in milliseconds, the unit leader records are stamped in.
    pub fn election_grace_ms(&self) -> u64 {
        self.election_grace_secs * 1000
    }
}
