//! Bot-chat message classifier.
//!
//! The team-control bot announces leader changes as free-form chat text,
//! not as a structured protocol, so the only available decoder is ordered
//! substring scanning. Pattern order matters: earlier shapes take
//! precedence when a malformed line could satisfy more than one. The
//! numeric fallback widths (40 and 26 characters) reproduce the bot's
//! observed behavior for marker-at-start lines and are not tunable.

use crate::players::Team;

/// Exact voting prompt the bot broadcasts when an election opens.
pub const ELECTION_PROMPT: &str =
    "Type #yes in the next 30 seconds to become the new team leader.";

const CHOSEN_MARKER: &str = " has been chosen as the new team leader.";
const STILL_MARKER: &str = " is still the team leader.";
const BLUE_PREAMBLE: &str = "The blue team has";
const RED_PREAMBLE: &str = "The red team has";
const CONTROLLED_BY: &str = "controlled by";
const CONTROLLED_BY_PREFIX: &str = "controlled by ";

/// "controlled by" is only trusted beyond the team-size preamble.
const CONTROLLED_BY_MIN_OFFSET: usize = 20;

/// Prefix width used when the "has been chosen" marker sits at position 0.
const CHOSEN_FALLBACK_CHARS: usize = 40;
/// Prefix width used when the "is still" marker sits at position 0.
const STILL_FALLBACK_CHARS: usize = 26;

/// One classified bot broadcast.
#[derive(Debug, Clone, PartialEq)]
pub enum BotMessage {
    /// The 30-second voting window opened. The team is the sending bot's
    /// own team, which the caller resolves from the roster.
    ElectionStart,
    /// Squad-status line naming the current controller. Informational:
    /// never ends an election. Team is explicit in the preamble.
    ControlledBy { team: Team, name: String },
    /// A new leader was chosen; ends an election. Team must be resolved
    /// from the named player's membership.
    Chosen { name: String },
    /// The sitting leader was confirmed; ends an election. Team must be
    /// resolved from the named player's membership.
    StillLeader { name: String },
    /// Anything else. A no-op for the tracker.
    Unrecognized,
}

/// Classify one bot chat line.
pub fn classify(text: &str) -> BotMessage {
    if text == ELECTION_PROMPT {
        return BotMessage::ElectionStart;
    }

    let chosen_idx = text.find(CHOSEN_MARKER);
    let still_idx = text.find(STILL_MARKER);

    // "The blue team has 5 bots in auto mode controlled by playerName."
    if chosen_idx.is_none() && still_idx.is_none() {
        if text.starts_with(BLUE_PREAMBLE) && contains_controlled_by(text) {
            return BotMessage::ControlledBy {
                team: Team::Blue,
                name: controller_name(text),
            };
        }

        // "The red team has 7 bots in capture mode controlled by playerName."
        if text.starts_with(RED_PREAMBLE) && contains_controlled_by(text) {
            return BotMessage::ControlledBy {
                team: Team::Red,
                name: controller_name(text),
            };
        }
    }

    // "playerName has been chosen as the new team leader."
    //
    // Both markers can only legitimately co-occur when the "is still"
    // phrase sits at the very start of the line, i.e. is not actually
    // describing this subject.
    match (chosen_idx, still_idx) {
        (Some(idx), None) | (Some(idx), Some(0)) => BotMessage::Chosen {
            name: marker_prefix(text, idx, CHOSEN_FALLBACK_CHARS),
        },
        // "playerName is still the team leader."
        (_, Some(idx)) => BotMessage::StillLeader {
            name: marker_prefix(text, idx, STILL_FALLBACK_CHARS),
        },
        _ => BotMessage::Unrecognized,
    }
}

fn contains_controlled_by(text: &str) -> bool {
    text.get(CONTROLLED_BY_MIN_OFFSET..)
        .map_or(false, |tail| tail.contains(CONTROLLED_BY))
}

/// Text between "controlled by " and the trailing terminator character.
/// A line that matched the guard but lacks the trailing space yields an
/// empty name, which the resolution gate later drops.
fn controller_name(text: &str) -> String {
    match text.find(CONTROLLED_BY_PREFIX) {
        Some(idx) => strip_last_char(&text[idx + CONTROLLED_BY_PREFIX.len()..]).to_string(),
        None => String::new(),
    }
}

/// Line prefix before a marker, or a fixed-width prefix when the marker
/// sits at position 0 (zero-length name, observed on malformed lines).
fn marker_prefix(text: &str, marker_idx: usize, fallback_chars: usize) -> String {
    if marker_idx == 0 {
        text.chars().take(fallback_chars).collect()
    } else {
        text[..marker_idx].to_string()
    }
}

fn strip_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
