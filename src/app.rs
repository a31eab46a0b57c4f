//! Root application component and shared context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_panel::ChatPanel;
use crate::components::status_bar::StatusBar;
use crate::components::user_list_panel::UserListPanel;
use crate::net::types::Envelope;
use crate::state::chat::ChatState;
use crate::state::connection::ConnectionState;
use crate::state::roster::RosterState;

/// Context-provided handle for emitting envelopes to the relay.
///
/// `Default` is a detached sender whose `send` reports failure; the real
/// sender is installed once the channel task has started.
#[derive(Clone, Default)]
pub struct EventSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl EventSender {
    #[cfg(feature = "csr")]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Queue one envelope for the relay.
    ///
    /// Returns `false` when no channel is attached or the channel has closed.
    #[cfg(feature = "csr")]
    pub fn send(&self, envelope: &Envelope) -> bool {
        use crate::net::types::encode_envelope;

        self.tx
            .as_ref()
            .is_some_and(|tx| tx.unbounded_send(encode_envelope(envelope)).is_ok())
    }

    /// Queue one envelope for the relay. Without a browser socket this always
    /// reports failure.
    #[cfg(not(feature = "csr"))]
    #[allow(clippy::unused_self)]
    pub fn send(&self, _envelope: &Envelope) -> bool {
        false
    }
}

/// Root application component.
///
/// Provides the shared state contexts, starts the relay channel, and lays out
/// the chat screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let chat = RwSignal::new(ChatState::default());
    let roster = RwSignal::new(RosterState::default());
    let connection = RwSignal::new(ConnectionState::default());
    let sender = RwSignal::new(EventSender::default());

    provide_context(chat);
    provide_context(roster);
    provide_context(connection);
    provide_context(sender);

    #[cfg(feature = "csr")]
    {
        let tx = crate::net::channel::spawn_channel(chat, connection);
        sender.set(EventSender::new(tx));
    }

    view! {
        <Title text="Relay Chat"/>

        <div class="app">
            <div class="app__main">
                <ChatPanel/>
                <UserListPanel/>
            </div>
            <div class="app__status-bar">
                <StatusBar/>
            </div>
        </div>
    }
}
