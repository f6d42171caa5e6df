//! Shared client state provided through Leptos context.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (notices) apart from API-backed
//! list state (tasks, channels) so pages can evolve independently.

pub mod channels;
pub mod notices;
pub mod tasks;
