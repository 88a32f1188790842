//! Player registry: connected players, display names and name history.
//!
//! The leader tracker only ever reads these structures; mutation is driven
//! by the connection layer (connect, disconnect, team switch, rename).

pub mod names;
pub mod roster;

use serde::{Deserialize, Serialize};

use crate::error::CtfError;
pub use names::NameDirectory;
pub use roster::PlayerRoster;

/// Server-assigned player identifier, stable for the lifetime of a
/// connection.
pub type PlayerId = u32;

/// The two CTF teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "red")]
    Red,
}

impl Team {
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::Blue => "blue",
            Team::Red => "red",
        }
    }
}

/// A connected player (humans and the team-control bots alike).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: Team,
    /// True for the automated team-control bots whose broadcasts the
    /// leader tracker parses.
    pub bot: bool,
}

/// Shared read surface handed to systems during event dispatch.
///
/// Owns the roster and the name directory and keeps the two consistent:
/// every roster mutation goes through here so the active-name set and the
/// name-history index never drift from the connected-player list.
#[derive(Debug, Default)]
pub struct GameContext {
    roster: PlayerRoster,
    names: NameDirectory,
}

impl GameContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    pub fn names(&self) -> &NameDirectory {
        &self.names
    }

    /// Register a newly connected player under `name` on `team`.
    pub fn connect_player(&mut self, player: Player) -> Result<(), CtfError> {
        self.names.record(&player.name, player.id);
        self.roster.connect(player)
    }

    /// Drop a player from the roster. The display name leaves the active
    /// set but stays resolvable through history.
    pub fn disconnect_player(&mut self, id: PlayerId) -> Result<(), CtfError> {
        let player = self.roster.disconnect(id)?;
        self.names.release(&player.name);
        Ok(())
    }

    pub fn switch_player_team(&mut self, id: PlayerId, team: Team) -> Result<(), CtfError> {
        self.roster.switch_team(id, team)
    }

    /// Change a player's display name. The old name leaves the active set
    /// but keeps resolving to this player through history.
    pub fn rename_player(&mut self, id: PlayerId, new_name: &str) -> Result<(), CtfError> {
        let old_name = self.roster.rename(id, new_name)?;
        self.names.release(&old_name);
        self.names.record(new_name, id);
        Ok(())
    }

    /// Direct roster access so tests can put the two structures out of
    /// step, the way interleaved connection events can on a live server.
    #[cfg(test)]
    pub(crate) fn roster_mut(&mut self) -> &mut PlayerRoster {
        &mut self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: PlayerId, name: &str, team: Team) -> Player {
        Player {
            id,
            name: name.to_string(),
            team,
            bot: false,
        }
    }

    #[test]
    fn test_disconnect_keeps_name_history() {
        let mut ctx = GameContext::new();
        ctx.connect_player(player(7, "Alice", Team::Blue)).unwrap();
        assert!(ctx.names().has_active("Alice"));

        ctx.disconnect_player(7).unwrap();
        assert!(!ctx.roster().is_connected(7));
        assert!(!ctx.names().has_active("Alice"));
        assert_eq!(ctx.names().resolve("Alice"), Some(7));
    }

    #[test]
    fn test_rename_moves_active_name_and_extends_history() {
        let mut ctx = GameContext::new();
        ctx.connect_player(player(3, "Bob", Team::Red)).unwrap();
        ctx.rename_player(3, "Bobby").unwrap();

        assert!(!ctx.names().has_active("Bob"));
        assert!(ctx.names().has_active("Bobby"));
        assert_eq!(ctx.names().resolve("Bob"), Some(3));
        assert_eq!(ctx.names().resolve("Bobby"), Some(3));
        assert_eq!(ctx.roster().get(3).unwrap().name, "Bobby");
    }

    #[test]
    fn test_switch_team_updates_roster() {
        let mut ctx = GameContext::new();
        ctx.connect_player(player(1, "Cara", Team::Blue)).unwrap();
        ctx.switch_player_team(1, Team::Red).unwrap();
        assert_eq!(ctx.roster().get(1).unwrap().team, Team::Red);
    }
}
