//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `roster`, `connection`) so individual
//! components can depend on small focused models.

pub mod chat;
pub mod connection;
pub mod roster;
