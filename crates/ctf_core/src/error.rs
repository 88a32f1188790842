use thiserror::Error;

use crate::players::PlayerId;

/// Errors surfaced by the fallible edges of the crate.
///
/// The leader-tracking path itself never returns errors: unresolvable
/// names, unresolvable teams and unrecognized chat lines are logged
/// no-ops. Only registry misuse and config parsing are hard failures.
#[derive(Error, Debug)]
pub enum CtfError {
    #[error("player {0} is not connected")]
    NotConnected(PlayerId),

    #[error("player {0} is already connected")]
    AlreadyConnected(PlayerId),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
