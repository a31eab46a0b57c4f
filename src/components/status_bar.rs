//! Bottom status bar showing relay connection status and message count.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::connection::{ConnectionState, ConnectionStatus};

/// Status bar at the bottom of the page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let connection = expect_context::<RwSignal<ConnectionState>>();

    let status_class = move || {
        let status = connection.get().status;
        match status {
            ConnectionStatus::Connected => "status-bar__dot status-bar__dot--connected",
            ConnectionStatus::Connecting => "status-bar__dot status-bar__dot--connecting",
            ConnectionStatus::Disconnected => "status-bar__dot status-bar__dot--disconnected",
        }
    };

    let status_label = move || {
        let status = connection.get().status;
        match status {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Disconnected => "Disconnected",
        }
    };

    let message_count = move || chat.get().messages.len();

    view! {
        <div class="status-bar">
            <span class="status-bar__connection">
                <span class=status_class></span>
                {status_label}
            </span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__messages">{move || format!("{} messages", message_count())}</span>
        </div>
    }
}
