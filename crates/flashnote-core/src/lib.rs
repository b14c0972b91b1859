//! Flash notification queue and its public API surface.
//!
//! A [`FlashService`] lives for one request. Application code queues
//! messages through fluent builders, and every change is written through to
//! the [`SessionBridge`](flashnote_bridge::SessionBridge) so the next request
//! can render it. Ad hoc behaviors can be registered by name and invoked
//! with forwarded arguments.

pub mod config;
mod error;
mod extensions;
mod service;

pub use crate::error::{FlashError, FlashResult};
pub use crate::service::{FlashService, MessageHandle};
