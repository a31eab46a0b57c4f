//! Utility helpers shared across UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate wire and environment concerns from component logic
//! to improve reuse and testability.

pub mod compose;
