use crate::notification::Message;

/// Session key under which the message queue is flashed by default.
pub const FLASH_SESSION_KEY: &str = "flash_notification";

/// Capability to carry a value across exactly one request boundary.
///
/// Implementations are expected to overwrite any value previously flashed
/// under the same key rather than append to it.
pub trait SessionBridge {
    /// Stores `value` under `key` for retrieval on the next request.
    fn flash(&mut self, key: &str, value: &[Message]);
}

impl<T: SessionBridge + ?Sized> SessionBridge for &mut T {
    fn flash(&mut self, key: &str, value: &[Message]) {
        (**self).flash(key, value);
    }
}

impl<T: SessionBridge + ?Sized> SessionBridge for Box<T> {
    fn flash(&mut self, key: &str, value: &[Message]) {
        (**self).flash(key, value);
    }
}

/// One recorded call to [`SessionBridge::flash`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashRecord {
    pub key: String,
    pub value: Vec<Message>,
}

/// In-memory session that keeps every flash call it receives.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    records: Vec<FlashRecord>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// All flash calls in the order they were made.
    pub fn records(&self) -> &[FlashRecord] {
        &self.records
    }

    /// Number of flash calls made under `key`.
    pub fn flash_count(&self, key: &str) -> usize {
        self.records.iter().filter(|record| record.key == key).count()
    }

    /// The value most recently flashed under `key`, which is what the next
    /// request would see.
    pub fn get(&self, key: &str) -> Option<&[Message]> {
        self.records
            .iter()
            .rev()
            .find(|record| record.key == key)
            .map(|record| record.value.as_slice())
    }
}

impl SessionBridge for MemorySession {
    fn flash(&mut self, key: &str, value: &[Message]) {
        log::trace!("Recording flash of {} message(s) under '{key}'", value.len());
        self.records.push(FlashRecord {
            key: key.to_string(),
            value: value.to_vec(),
        });
    }
}
