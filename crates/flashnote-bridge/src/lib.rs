//! Shared types between the flash queue and the session layer.
//!
//! This crate defines the message record that gets carried to the next
//! request, and the single capability the queue needs from a session store:
//! - [`notification::Message`] and [`notification::Level`] describe what is
//!   shown to the user.
//! - [`session::SessionBridge`] stores a value under a key for exactly one
//!   request boundary.
//! - [`config::FlashConfig`] holds the session key and overlay defaults.
//!
//! Session storage itself lives outside of this crate. [`session::MemorySession`]
//! is an in-memory recorder suitable for tests and demos.

pub mod config;
pub mod notification;
pub mod session;

pub use config::FlashConfig;
pub use notification::{DEFAULT_OVERLAY_TITLE, Level, Message, ParseLevelError};
pub use session::{FLASH_SESSION_KEY, FlashRecord, MemorySession, SessionBridge};
