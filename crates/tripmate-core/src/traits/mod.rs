//! Core port traits.

pub mod events;

pub use events::EventSink;
