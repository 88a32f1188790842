//! # ctf_core - CTF team-leader tracking
//!
//! Server-side bookkeeping of which human player currently controls each
//! team's automated bot squad in a capture-the-flag match. The squads are
//! run by team-control bots that announce leader changes only as free-form
//! team chat, so the crate watches those broadcasts, classifies them and
//! maintains one leader record per team.
//!
//! ## Structure
//! - [`leaders`] - the message classifier and the per-team leader state
//!   machine, driven by [`events::GameEvent`]s
//! - [`players`] - connected-player roster and the display-name directory
//!   (active names plus a rename/reconnect-surviving history index)
//! - [`events`] - the synchronous, single-threaded dispatch loop
//!
//! Everything runs on the dispatcher thread; handlers never block or spawn
//! work, and malformed chat is a logged no-op, never an error.

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod leaders;
pub mod players;

pub use clock::{Clock, SystemClock};
pub use config::CtfConfig;
pub use error::CtfError;
pub use events::{dispatch, GameEvent, System};
pub use leaders::{BotMessage, LeaderRecord, LeaderTracker, TeamLeaders};
pub use players::{GameContext, Player, PlayerId, Team};
