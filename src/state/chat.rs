#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::Message;

/// State for the chat panel: the ordered message display sequence.
///
/// Messages are appended in arrival order and never mutated afterwards; the
/// only removals are the explicit per-user and full clears below.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<Message>,
    /// Bumped once per successful append; the view scrolls to the newest
    /// entry whenever it changes, and never otherwise.
    pub scroll_seq: u64,
}

impl ChatState {
    /// Dedup-and-append step for one inbound message.
    ///
    /// Dedup keys on `body` alone: a candidate whose body already appears
    /// anywhere in the sequence is discarded with a diagnostic log, even if
    /// it was authored by a different user. Returns whether the message was
    /// appended.
    pub fn ingest(&mut self, message: Message) -> bool {
        let duplicate = self
            .messages
            .iter()
            .any(|existing| existing.body == message.body);
        if duplicate {
            leptos::logging::log!("duplicate message discarded: {}", message.body);
            return false;
        }

        self.messages.push(message);
        self.scroll_seq += 1;
        true
    }

    /// Remove every message authored by `name`. Pure filter; relative order
    /// of the remaining messages is preserved.
    pub fn clear_user(&mut self, name: &str) {
        self.messages.retain(|message| message.user.name != name);
    }

    /// Reset the display sequence to empty.
    pub fn clear_all(&mut self) {
        self.messages.clear();
    }
}
