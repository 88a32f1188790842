//! Connected-player registry.

use std::collections::HashMap;

use crate::error::CtfError;

use super::{Player, PlayerId, Team};

/// All currently connected players, keyed by id.
#[derive(Debug, Default)]
pub struct PlayerRoster {
    players: HashMap<PlayerId, Player>,
}

impl PlayerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self, id: PlayerId) -> bool {
        self.players.contains_key(&id)
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Current team of a connected player, if any.
    pub fn team_of(&self, id: PlayerId) -> Option<Team> {
        self.players.get(&id).map(|p| p.team)
    }

    pub fn connect(&mut self, player: Player) -> Result<(), CtfError> {
        if self.players.contains_key(&player.id) {
            return Err(CtfError::AlreadyConnected(player.id));
        }
        self.players.insert(player.id, player);
        Ok(())
    }

    pub fn disconnect(&mut self, id: PlayerId) -> Result<Player, CtfError> {
        self.players.remove(&id).ok_or(CtfError::NotConnected(id))
    }

    pub fn switch_team(&mut self, id: PlayerId, team: Team) -> Result<(), CtfError> {
        let player = self.players.get_mut(&id).ok_or(CtfError::NotConnected(id))?;
        player.team = team;
        Ok(())
    }

    /// Rename a connected player, returning the previous name.
    pub fn rename(&mut self, id: PlayerId, new_name: &str) -> Result<String, CtfError> {
        let player = self.players.get_mut(&id).ok_or(CtfError::NotConnected(id))?;
        Ok(std::mem::replace(&mut player.name, new_name.to_string()))
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
    fn test_connect_and_lookup() {
        let mut roster = PlayerRoster::new();
        roster.connect(player(1, "Alice", Team::Blue)).unwrap();

        assert!(roster.is_connected(1));
        assert_eq!(roster.team_of(1), Some(Team::Blue));
        assert_eq!(roster.team_of(2), None);
    }

    #[test]
    fn test_duplicate_connect_is_rejected() {
        let mut roster = PlayerRoster::new();
        roster.connect(player(1, "Alice", Team::Blue)).unwrap();
        let err = roster.connect(player(1, "Imposter", Team::Red)).unwrap_err();
        assert!(matches!(err, CtfError::AlreadyConnected(1)));
    }

    #[test]
    fn test_disconnect_unknown_player() {
        let mut roster = PlayerRoster::new();
        let err = roster.disconnect(9).unwrap_err();
        assert!(matches!(err, CtfError::NotConnected(9)));
    }
}
