use std::sync::Arc;

use flashnote_bridge::{FlashConfig, Level, Message, SessionBridge};
use serde_json::Value;

use crate::error::{FlashError, FlashResult};
use crate::extensions::Extensions;

/// Request-scoped queue of flash messages.
///
/// Every mutation writes the whole queue through to the session under the
/// configured key, so the session always holds the current state.
#[derive(Debug)]
pub struct FlashService<S> {
    session: S,
    config: FlashConfig,
    messages: Vec<Message>,
    extensions: Extensions<S>,
}

impl<S: SessionBridge> FlashService<S> {
    pub fn new(session: S) -> Self {
        Self::with_config(session, FlashConfig::default())
    }

    pub fn with_config(session: S, config: FlashConfig) -> Self {
        Self {
            session,
            config,
            messages: Vec::new(),
            extensions: Extensions::new(),
        }
    }

    /// Queues an info message without a title.
    pub fn message(&mut self, text: impl Into<String>) -> MessageHandle<'_, S> {
        self.message_with(text, "", Level::Info)
    }

    /// Queues a message with an explicit title and level.
    pub fn message_with(
        &mut self,
        text: impl Into<String>,
        title: impl Into<String>,
        level: Level,
    ) -> MessageHandle<'_, S> {
        self.push(Message::new(text, title, level))
    }

    /// Queues a message whose level is given by name. Unknown names fall
    /// back to [`Level::Info`].
    pub fn message_with_level_name(
        &mut self,
        text: impl Into<String>,
        title: impl Into<String>,
        level: &str,
    ) -> MessageHandle<'_, S> {
        let level = level.parse::<Level>().unwrap_or_else(|error| {
            log::warn!("{error}, using {}", Level::Info);
            Level::Info
        });
        self.message_with(text, title, level)
    }

    /// Queues an overlay notice carrying the configured default title.
    pub fn overlay(&mut self, text: impl Into<String>) -> MessageHandle<'_, S> {
        self.message(text).overlay()
    }

    /// Queues an overlay notice with `title`.
    pub fn overlay_with_title(
        &mut self,
        text: impl Into<String>,
        title: impl Into<String>,
    ) -> MessageHandle<'_, S> {
        self.message_with(text, title, Level::Info).overlay()
    }

    /// Empties the queue. The session is left as is until the next mutation.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Queued messages in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn config(&self) -> &FlashConfig {
        &self.config
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn into_session(self) -> S {
        self.session
    }

    /// Registers a named behavior that can later be invoked through
    /// [`FlashService::call`]. Registering an existing name replaces it.
    pub fn register_extension<F>(&mut self, name: impl Into<String>, extension: F)
    where
        F: Fn(&mut FlashService<S>, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.extensions.insert(name, Arc::new(extension));
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    /// Invokes the extension registered under `name` with `args` and returns
    /// its result unchanged.
    pub fn call(&mut self, name: &str, args: &[Value]) -> FlashResult<Value> {
        let Some(extension) = self.extensions.get(name) else {
            log::warn!("No flash extension registered under '{name}'");
            return Err(FlashError::UnknownOperation {
                name: name.to_string(),
            });
        };

        log::trace!("Calling flash extension '{name}' with {} argument(s)", args.len());
        Ok(extension(self, args))
    }

    fn push(&mut self, message: Message) -> MessageHandle<'_, S> {
        self.messages.push(message);
        self.flash();
        let index = self.messages.len() - 1;
        MessageHandle {
            service: self,
            index,
        }
    }

    fn flash(&mut self) {
        log::debug!(
            "Flashing {} message(s) under '{}'",
            self.messages.len(),
            self.config.session_key
        );
        self.session.flash(&self.config.session_key, &self.messages);
    }
}

/// Fluent handle to a message that was just queued.
///
/// The handle points into the owning queue. Each modifier updates the record
/// in place and flashes the queue again.
#[derive(Debug)]
pub struct MessageHandle<'a, S: SessionBridge> {
    service: &'a mut FlashService<S>,
    index: usize,
}

impl<S: SessionBridge> MessageHandle<'_, S> {
    /// The referenced message as currently stored in the queue.
    pub fn get(&self) -> &Message {
        &self.service.messages[self.index]
    }

    pub fn success(self) -> Self {
        self.level(Level::Success)
    }

    pub fn warning(self) -> Self {
        self.level(Level::Warning)
    }

    /// Marks the message as an error, rendered with the `danger` level.
    pub fn error(self) -> Self {
        self.level(Level::Danger)
    }

    pub fn important(self) -> Self {
        self.update(|message, _| message.important = true)
    }

    /// Turns the message into an overlay notice. A missing title becomes the
    /// configured overlay title.
    pub fn overlay(self) -> Self {
        self.update(|message, config| message.mark_overlay(&config.overlay_title))
    }

    fn level(self, level: Level) -> Self {
        self.update(|message, _| message.level = level)
    }

    fn update(self, apply: impl FnOnce(&mut Message, &FlashConfig)) -> Self {
        let service = &mut *self.service;
        apply(&mut service.messages[self.index], &service.config);
        service.flash();
        self
    }
}
