//! Outbound chat message composition.
//!
//! Sending is a two-step: a pure builder decides whether the message may go
//! out at all (a selected identity is required), then a thin wrapper hands the
//! envelope to the shared sender. Nothing is appended locally; the display
//! pipeline only ever sees messages that came back from the relay.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use leptos::prelude::{GetUntracked, RwSignal};

use crate::app::EventSender;
use crate::net::types::{EVENT_MESSAGE, Envelope, Message, User};

/// Build the outbound envelope for one chat message.
///
/// Returns `None` when `author` is the "no user selected" placeholder. That
/// refusal is the only validation; an empty body is allowed to travel.
pub fn compose_message(body: &str, author: &User) -> Option<Envelope> {
    if author.is_empty() {
        return None;
    }

    let message = Message::new(body, author.clone());
    Some(Envelope {
        event: EVENT_MESSAGE.to_owned(),
        // A message is plain strings; serializing it cannot fail.
        data: serde_json::to_value(&message).unwrap_or_default(),
    })
}

/// Emit one chat message to the relay under the given identity.
///
/// Returns `false` when nothing went out, either because no identity is
/// selected or because no channel is connected.
pub fn send_chat_message(sender: RwSignal<EventSender>, body: &str, author: &User) -> bool {
    let Some(envelope) = compose_message(body, author) else {
        leptos::logging::warn!("send refused: no user selected");
        return false;
    };

    let sent = sender.get_untracked().send(&envelope);
    if !sent {
        leptos::logging::warn!("message not sent: channel closed");
    }
    sent
}
