use serde::{Deserialize, Serialize};

use crate::notification::DEFAULT_OVERLAY_TITLE;
use crate::session::FLASH_SESSION_KEY;

/// Configuration of the flash notification queue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FlashConfig {
    /// Session key the whole queue is flashed under.
    pub session_key: String,
    /// Title given to overlay notices created without one.
    pub overlay_title: String,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            session_key: FLASH_SESSION_KEY.to_string(),
            overlay_title: DEFAULT_OVERLAY_TITLE.to_string(),
        }
    }
}
