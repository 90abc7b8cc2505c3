//! Shared helpers that are not tied to a single state domain.

pub mod event_bus;
