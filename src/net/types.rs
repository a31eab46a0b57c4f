//! Wire-protocol DTOs and codec for the relay's event channel.
//!
//! DESIGN
//! ======
//! The relay speaks named events: every WebSocket text frame is a JSON
//! envelope `{"event": <name>, "data": <payload>}`. These types mirror that
//! externally defined schema so serde round-trips stay lossless and dispatch
//! code can match on event names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event name carrying chat messages, outbound and inbound.
pub const EVENT_MESSAGE: &str = "message";

/// Relay echo variant of [`EVENT_MESSAGE`] observed on the inbound side only.
pub const EVENT_MESSAGE_RELAY: &str = "message-r";

/// Error returned by [`decode_envelope`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text frame could not be decoded as a JSON envelope.
    #[error("failed to decode relay envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single named event on the relay channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Event name, e.g. `"message"`.
    pub event: String,
    /// Arbitrary JSON payload; shape depends on the event name.
    #[serde(default)]
    pub data: Value,
}

/// A chat participant as carried on the wire.
///
/// The default value (both fields empty) doubles as the "no user selected"
/// placeholder used by the roster's compose selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name; uniqueness is by convention, not enforced.
    #[serde(default)]
    pub name: String,
    /// Presentation color hint (any CSS color string).
    #[serde(default)]
    pub color: String,
}

impl User {
    /// Whether this is the "no user selected" placeholder.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.color.is_empty()
    }
}

/// A chat message as carried on the wire: `{body, type, user}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Free-form message text.
    pub body: String,
    /// Payload discriminator; the relay only ever uses `"message"`.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// Authoring user, embedded by value.
    #[serde(default)]
    pub user: User,
}

impl Message {
    /// Build an outbound chat message; `type` is always `"message"`.
    pub fn new(body: &str, user: User) -> Self {
        Self {
            body: body.to_owned(),
            kind: default_kind(),
            user,
        }
    }
}

fn default_kind() -> String {
    "message".to_owned()
}

/// Encode an envelope into its JSON text-frame representation.
#[must_use]
pub fn encode_envelope(envelope: &Envelope) -> String {
    // Serializing a string plus a Value cannot fail; an empty frame could
    // only arise from a serde_json bug and is ignored by the relay.
    serde_json::to_string(envelope).unwrap_or_default()
}

/// Decode a relay text frame into an envelope.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] when the text is not a valid JSON envelope.
pub fn decode_envelope(text: &str) -> Result<Envelope, CodecError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse an inbound message payload.
///
/// `body` is required; `type` defaults to `"message"`, and a missing or
/// partial `user` object degrades to empty fields so one sloppy producer
/// cannot stall the pipeline.
pub fn parse_message(data: &Value) -> Option<Message> {
    serde_json::from_value(data.clone()).ok()
}
