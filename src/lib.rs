//! # relaychat
//!
//! Leptos + WASM front-end for a minimal real-time chat. Messages travel
//! through an external named-event relay; the client keeps a local roster of
//! identities, sends under the selected one, and displays whatever comes back
//! with body-level duplicate suppression.
//!
//! This crate contains the root component, UI components, application state,
//! wire types, and the websocket channel to the relay.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;
