//! Per-team leader records.

use serde::{Deserialize, Serialize};

use crate::players::{PlayerId, Team};

/// Leader bookkeeping for one team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderRecord {
    /// The player credited with controlling this team's bots, or `None`
    /// when no leader is known.
    pub leader_id: Option<PlayerId>,
    /// Millisecond timestamp of the last `leader_id` write, 0 if never set.
    pub updated_at: u64,
    /// True while the team is mid-vote for a new leader.
    pub election_active: bool,
    /// Millisecond timestamp the current election began. Meaningful only
    /// while `election_active` is true.
    pub election_started_at: u64,
}

/// The two leader records, one per team, alive for the whole match.
///
/// Read-only for everything outside the leader tracker; other subsystems
/// (e.g. a team-status display) borrow this through
/// [`LeaderTracker::leaders`](super::LeaderTracker::leaders).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamLeaders {
    pub blue: LeaderRecord,
    pub red: LeaderRecord,
}

impl TeamLeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, team: Team) -> &LeaderRecord {
        match team {
            Team::Blue => &self.blue,
            Team::Red => &self.red,
        }
    }

    pub(crate) fn record_mut(&mut self, team: Team) -> &mut LeaderRecord {
        match team {
            Team::Blue => &mut self.blue,
            Team::Red => &mut self.red,
        }
    }
}
