//! Change notification
//!
//! Observers register a callback and are invoked synchronously, in
//! registration order, after every successful mutation of a session.

use crate::core::Word;
use std::fmt;

/// An observable change to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Start and target were (re)set and the path cleared
    EndpointsConfigured { start: Word, target: Word },
    /// A move was accepted and appended to the path
    MoveAccepted { word: Word },
    /// The path was cleared back to the start word
    Reset,
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&SessionEvent)>;

/// Ordered list of registered callbacks
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &SessionEvent) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
