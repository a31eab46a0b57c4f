//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surfaces while reading/writing shared state from
//! Leptos context providers.

pub mod chat_panel;
pub mod status_bar;
pub mod user_form;
pub mod user_list_panel;
