//! Team-leader inference.
//!
//! The team-control bots broadcast leader changes into team chat as plain
//! text. This module watches those broadcasts, correlates the extracted
//! names against the player registry and keeps one [`LeaderRecord`] per
//! team, so other subsystems can answer "who controls this team's bots"
//! without parsing chat themselves.
//!
//! The tracker is driven exclusively by [`GameEvent`]s: bot chat, player
//! disconnect, team switch, match start and the minute tick. All handlers
//! run synchronously on the dispatch thread.

pub mod classify;
pub mod storage;

use log::debug;

use crate::clock::Clock;
use crate::config::CtfConfig;
use crate::events::{GameEvent, System};
use crate::players::{GameContext, PlayerId, Team};

pub use classify::{classify, BotMessage, ELECTION_PROMPT};
pub use storage::{LeaderRecord, TeamLeaders};

/// Leader state machine for both teams.
pub struct LeaderTracker {
    leaders: TeamLeaders,
    config: CtfConfig,
    clock: Box<dyn Clock>,
}

impl LeaderTracker {
    pub fn new(config: CtfConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            leaders: TeamLeaders::new(),
            config,
            clock,
        }
    }

    /// Read access to both leader records.
    pub fn leaders(&self) -> &TeamLeaders {
        &self.leaders
    }

    /// Sole mutator for `leader_id`.
    ///
    /// The name must be in active use and resolvable through the name
    /// history. The team comes from the explicit hint when the message
    /// carried one, otherwise from the named player's current membership;
    /// when neither determines a team the write is skipped entirely so a
    /// stale history entry can never land on the wrong team's record.
    fn set_leader(&mut self, name: &str, team_hint: Option<Team>, stop_elections: bool, ctx: &GameContext) {
        if !ctx.names().has_active(name) {
            debug!("team leader not found: {:?}", name);
            return;
        }

        let Some(id) = ctx.names().resolve(name) else {
            debug!("team leader not found: {:?}", name);
            return;
        };

        let Some(team) = team_hint.or_else(|| ctx.roster().team_of(id)) else {
            debug!("cannot resolve team for leader {:?} ({})", name, id);
            return;
        };

        let now = self.clock.now_ms();
        let record = self.leaders.record_mut(team);
        record.leader_id = Some(id);
        record.updated_at = now;

        if stop_elections {
            record.election_active = false;
            debug!("{} team leader elections finished", team.as_str());
        }

        debug!("detected {} team leader {:?} ({})", team.as_str(), name, id);
    }

    /// Disconnect/team-switch invalidation: drop the player from whichever
    /// record credits them. Leaves `updated_at` and the election flags
    /// alone.
    fn clear_player_leader_status(&mut self, player: PlayerId) {
        if self.leaders.blue.leader_id == Some(player) {
            self.leaders.blue.leader_id = None;
        } else if self.leaders.red.leader_id == Some(player) {
            self.leaders.red.leader_id = None;
        }
    }

    fn on_bot_chat(&mut self, sender: PlayerId, text: &str, ctx: &GameContext) {
        if !ctx.roster().is_connected(sender) {
            return;
        }

        match classify(text) {
            BotMessage::ElectionStart => {
                // The prompt names no team; it is the sending bot's own.
                if let Some(team) = ctx.roster().team_of(sender) {
                    self.on_election_start(team);
                }
            }
            BotMessage::ControlledBy { team, name } => {
                // Informational status line: records the controller but
                // never ends an in-progress vote.
                self.set_leader(&name, Some(team), false, ctx);
            }
            BotMessage::Chosen { name } => {
                self.set_leader(&name, None, true, ctx);
            }
            BotMessage::StillLeader { name } => {
                self.set_leader(&name, None, true, ctx);
            }
            BotMessage::Unrecognized => {
                debug!("unrecognized bot chat line: {:?}", text);
            }
        }
    }

    fn on_election_start(&mut self, team: Team) {
        let now = self.clock.now_ms();
        let record = self.leaders.record_mut(team);
        record.election_active = true;
        record.election_started_at = now;

        debug!("{} team leader elections started", team.as_str());
    }

    /// Match restart: forget leader identities. The election flags are
    /// intentionally left as-is; a stale flag self-heals on the next
    /// terminating announcement or minute tick.
    fn on_match_start(&mut self) {
        self.leaders.blue.leader_id = None;
        self.leaders.red.leader_id = None;
        self.leaders.blue.updated_at = 0;
        self.leaders.red.updated_at = 0;
    }

    /// Election timeout recovery. If nobody votes, no terminating message
    /// ever arrives and the flag would stay stuck; close any election
    /// older than the grace window.
    fn on_minute_tick(&mut self) {
        let expired_before = self.clock.now_ms().saturating_sub(self.config.election_grace_ms());

        for team in [Team::Blue, Team::Red] {
            let record = self.leaders.record_mut(team);
            if record.election_active && record.election_started_at < expired_before {
                record.election_active = false;

                debug!("reset {} elections status", team.as_str());
            }
        }
    }
}

impl System for LeaderTracker {
    fn on_event(&mut self, event: &GameEvent, ctx: &GameContext) {
        match event {
            GameEvent::BotTeamChat { sender, text } => self.on_bot_chat(*sender, text, ctx),
            GameEvent::PlayerSwitchedTeam { player } => self.clear_player_leader_status(*player),
            GameEvent::PlayersRemoved { player } => self.clear_player_leader_status(*player),
            GameEvent::MatchStart => self.on_match_start(),
            GameEvent::ClockMinute => self.on_minute_tick(),
        }
    }
}
