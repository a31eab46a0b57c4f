//! Networking modules for the relay's websocket event protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `channel` manages the websocket lifecycle and event routing, and `types`
//! defines the shared wire schema.

pub mod channel;
pub mod types;
