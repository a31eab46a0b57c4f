use super::*;

// =============================================================
// ConnectionStatus
// =============================================================

#[test]
fn connection_status_default_is_disconnected() {
    assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
}

#[test]
fn connection_status_variants_are_distinct() {
    assert_ne!(ConnectionStatus::Disconnected, ConnectionStatus::Connecting);
    assert_ne!(ConnectionStatus::Disconnected, ConnectionStatus::Connected);
    assert_ne!(ConnectionStatus::Connecting, ConnectionStatus::Connected);
}

// =============================================================
// ConnectionState defaults
// =============================================================

#[test]
fn connection_state_default_disconnected() {
    let state = ConnectionState::default();
    assert_eq!(state.status, ConnectionStatus::Disconnected);
}
