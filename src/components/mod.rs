//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod alert_stack;
pub mod copy_button;
pub mod search_box;
