//! WebSocket event channel to the relay.
//!
//! The channel owns the single connection lifecycle: open the socket, forward
//! outbound envelopes from the shared sender, and dispatch inbound events into
//! chat state. There is no reconnect; when the socket closes the status drops
//! to `Disconnected` and stays there until the page is reloaded.
//!
//! Socket handling is gated behind `#[cfg(feature = "csr")]` since it requires
//! a browser environment. Event routing is plain code so it tests natively.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use crate::net::types::{EVENT_MESSAGE, EVENT_MESSAGE_RELAY, Envelope, parse_message};
use crate::state::chat::ChatState;
#[cfg(feature = "csr")]
use crate::state::connection::{ConnectionState, ConnectionStatus};

/// Relay endpoint the channel connects to.
pub const RELAY_URL: &str = "wss://chatws-pkxd.onrender.com/ws";

/// Route one inbound envelope into chat state.
///
/// `"message"` and its relay echo `"message-r"` both carry a chat message and
/// feed the same display pipeline. Every other event is logged and dropped;
/// inbound traffic never aborts the channel loop. Returns whether a message
/// was appended.
pub fn dispatch_event(envelope: &Envelope, chat: &mut ChatState) -> bool {
    let event = envelope.event.as_str();

    if event != EVENT_MESSAGE && event != EVENT_MESSAGE_RELAY {
        leptos::logging::log!("ignoring unknown event: {event}");
        return false;
    }

    let Some(message) = parse_message(&envelope.data) else {
        leptos::logging::warn!("unusable {event} payload: {}", envelope.data);
        return false;
    };

    chat.ingest(message)
}

/// Spawn the relay channel lifecycle as a local async task.
///
/// Returns the sender half of the outbound queue; envelopes pushed into it are
/// forwarded to the socket once the connection is up.
#[cfg(feature = "csr")]
pub fn spawn_channel(
    chat: leptos::prelude::RwSignal<ChatState>,
    connection: leptos::prelude::RwSignal<ConnectionState>,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();

    leptos::task::spawn_local(channel_loop(chat, connection, rx));

    tx
}

/// Single-connection channel loop with status updates.
#[cfg(feature = "csr")]
async fn channel_loop(
    chat: leptos::prelude::RwSignal<ChatState>,
    connection: leptos::prelude::RwSignal<ConnectionState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use leptos::prelude::Update;

    connection.update(|c| c.status = ConnectionStatus::Connecting);

    match connect_and_run(RELAY_URL, chat, connection, rx).await {
        Ok(()) => {
            leptos::logging::log!("relay channel closed");
        }
        Err(e) => {
            leptos::logging::warn!("relay channel error: {e}");
        }
    }

    connection.update(|c| c.status = ConnectionStatus::Disconnected);
}

/// Connect to the relay and process traffic until the socket closes.
#[cfg(feature = "csr")]
async fn connect_and_run(
    url: &str,
    chat: leptos::prelude::RwSignal<ChatState>,
    connection: leptos::prelude::RwSignal<ConnectionState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    connection.update(|c| c.status = ConnectionStatus::Connected);
    leptos::logging::log!("relay channel connected: {url}");

    // Forward outgoing envelopes from the shared queue to the socket.
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and route incoming events.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match crate::net::types::decode_envelope(&text) {
                    Ok(envelope) => {
                        chat.update(|c| {
                            dispatch_event(&envelope, c);
                        });
                    }
                    Err(e) => {
                        leptos::logging::warn!("undecodable relay frame: {e}");
                    }
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("relay recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run both tasks; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}
