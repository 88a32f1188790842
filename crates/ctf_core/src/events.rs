//! Game events and the synchronous dispatch loop.
//!
//! Dispatch is single-threaded and cooperative: each event is delivered to
//! every system in slice order, and each handler runs to completion before
//! the next event is processed. Systems therefore need no locking around
//! their own state. Systems stay owned by the caller so their exposed
//! state (e.g. the leader records) remains readable between events.

use crate::players::{GameContext, PlayerId};

/// Events the leader tracker subscribes to.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A team-control bot broadcast a line into team chat.
    BotTeamChat { sender: PlayerId, text: String },
    /// A player moved to the other team.
    PlayerSwitchedTeam { player: PlayerId },
    /// A player disconnected.
    PlayersRemoved { player: PlayerId },
    /// A new match started.
    MatchStart,
    /// Periodic clock tick, fired once per minute.
    ClockMinute,
}

/// A state-owning event consumer.
pub trait System {
    fn on_event(&mut self, event: &GameEvent, ctx: &GameContext);
}

/// Deliver one event to every system, in slice order.
pub fn dispatch(event: &GameEvent, ctx: &GameContext, systems: &mut [&mut dyn System]) {
    for system in systems.iter_mut() {
        system.on_event(event, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        tag: &'static str,
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl System for Recorder {
        fn on_event(&mut self, event: &GameEvent, _ctx: &GameContext) {
            self.seen.borrow_mut().push(format!("{}:{:?}", self.tag, event));
        }
    }

    #[test]
    fn test_dispatch_order_follows_slice_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut first = Recorder {
            tag: "a",
            seen: seen.clone(),
        };
        let mut second = Recorder {
            tag: "b",
            seen: seen.clone(),
        };

        let ctx = GameContext::new();
        dispatch(&GameEvent::MatchStart, &ctx, &mut [&mut first, &mut second]);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].starts_with("a:"));
        assert!(seen[1].starts_with("b:"));
    }
}
