#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

/// Lifecycle state of the single relay channel.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectionState {
    pub status: ConnectionStatus,
}

/// Relay channel connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}
