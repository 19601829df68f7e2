//! User-facing messages.
//!
//! [`Message`] enumerates every piece of text kranos prints, [`display`]
//! holds the wording, and [`macros`] routes output to the console or to
//! `tracing` depending on debug mode.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
