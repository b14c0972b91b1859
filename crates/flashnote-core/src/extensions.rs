use std::{collections::HashMap, fmt, sync::Arc};

use serde_json::Value;

use crate::service::FlashService;

/// A named behavior added to a [`FlashService`] at runtime. It receives the
/// service it was invoked on and the forwarded arguments.
pub(crate) type Extension<S> = Arc<dyn Fn(&mut FlashService<S>, &[Value]) -> Value + Send + Sync>;

/// Lookup table of registered extensions.
pub(crate) struct Extensions<S> {
    entries: HashMap<String, Extension<S>>,
}

impl<S> Extensions<S> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers `extension` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, extension: Extension<S>) {
        let name = name.into();
        if self.entries.insert(name.clone(), extension).is_some() {
            log::debug!("Replaced flash extension '{name}'");
        } else {
            log::trace!("Registered flash extension '{name}'");
        }
    }

    /// Whether an extension is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns a shared handle to the extension, so it can be invoked while
    /// the owning service is borrowed mutably.
    pub fn get(&self, name: &str) -> Option<Extension<S>> {
        self.entries.get(name).cloned()
    }
}

impl<S> fmt::Debug for Extensions<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        formatter.debug_set().entries(names).finish()
    }
}

#[cfg(test)]
mod tests {
    use flashnote_bridge::MemorySession;

    use super::*;

    #[test]
    fn registering_a_name_twice_keeps_the_latest() {
        let mut extensions: Extensions<MemorySession> = Extensions::new();
        assert!(!extensions.contains("greet"));

        extensions.insert("greet", Arc::new(|_: &mut FlashService<MemorySession>, _: &[Value]| Value::from("hello")));
        extensions.insert("greet", Arc::new(|_: &mut FlashService<MemorySession>, _: &[Value]| Value::from("hi")));

        assert!(extensions.contains("greet"));
        assert!(extensions.get("missing").is_none());
        assert_eq!(format!("{extensions:?}"), r#"{"greet"}"#);

        let greet = extensions.get("greet").expect("registered above");
        let mut flash = FlashService::new(MemorySession::new());
        assert_eq!(greet(&mut flash, &[]), Value::from("hi"));
    }
}
