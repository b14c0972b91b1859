use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Title given to overlay notices that were created without one.
pub const DEFAULT_OVERLAY_TITLE: &str = "Notice";

/// Severity or category of a flash message.
///
/// The variant decides how the view layer styles the message. Names follow
/// the usual stylesheet classes, so an error is rendered as `danger`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Neutral informational message. Default value.
    #[default]
    Info,
    /// Indicates a successful operation or positive outcome.
    Success,
    /// Indicates a non-critical issue the user should be aware of.
    Warning,
    /// Indicates an error or failure.
    #[serde(alias = "error")]
    Danger,
}

impl Level {
    /// Returns the lowercase name used in the session payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Danger => "danger",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error returned when a level name does not match any [`Level`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown flash level '{0}'")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "success" => Ok(Level::Success),
            "warning" => Ok(Level::Warning),
            "danger" | "error" => Ok(Level::Danger),
            _ => Err(ParseLevelError(raw.to_string())),
        }
    }
}

/// A single flash message queued for the next request render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
    /// Heading shown above the text. Empty unless set explicitly or the
    /// message is an overlay.
    pub title: String,
    /// The text content to display to the user.
    pub message: String,
    /// The severity of the message, determining its visual style.
    pub level: Level,
    /// Marks the message for emphasized display.
    pub important: bool,
    /// Marks the message for modal-style display.
    pub overlay: bool,
}

impl Message {
    /// Creates a message with default flags.
    pub fn new(message: impl Into<String>, title: impl Into<String>, level: Level) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level,
            important: false,
            overlay: false,
        }
    }

    /// Marks the message as an overlay, giving it `default_title` when no
    /// title is set yet.
    pub fn mark_overlay(&mut self, default_title: &str) {
        if self.title.is_empty() {
            self.title = default_title.to_string();
        }
        self.overlay = true;
    }

    /// Looks up a field by its serialized name, so templates can treat the
    /// message like a keyed record.
    pub fn attribute(&self, name: &str) -> Option<serde_json::Value> {
        use serde_json::Value;

        match name {
            "title" => Some(Value::from(self.title.as_str())),
            "message" => Some(Value::from(self.message.as_str())),
            "level" => Some(Value::from(self.level.as_str())),
            "important" => Some(Value::from(self.important)),
            "overlay" => Some(Value::from(self.overlay)),
            _ => None,
        }
    }
}
