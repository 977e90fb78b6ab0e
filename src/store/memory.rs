use crate::store::CookieStore;
use std::collections::BTreeMap;

/// In-memory cookie jar.
///
/// The client is single-threaded and event-driven, so a plain ordered map
/// is enough; ordering keeps the persisted JSON stable across runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryCookieStore {
    store: BTreeMap<String, String>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cookies currently stored.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterate all cookies in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.store.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        self.store.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.store.insert(name.to_owned(), value.to_owned());
    }

    fn remove(&mut self, name: &str) {
        self.store.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut jar = MemoryCookieStore::new();
        jar.set("hide_connect_quit", "true");
        assert_eq!(jar.get("hide_connect_quit").as_deref(), Some("true"));
    }

    #[test]
    fn test_absent_cookie_is_none() {
        let jar = MemoryCookieStore::new();
        assert_eq!(jar.get("no_such_cookie"), None);
    }

    #[test]
    fn test_set_replaces_existing() {
        let mut jar = MemoryCookieStore::new();
        jar.set("ignore_list", "alice");
        jar.set("ignore_list", "alice\nbob");
        assert_eq!(jar.get("ignore_list").as_deref(), Some("alice\nbob"));
        assert_eq!(jar.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut jar = MemoryCookieStore::new();
        jar.set("persistent_id", "abc123");
        jar.remove("persistent_id");
        assert_eq!(jar.get("persistent_id"), None);

        // Removing again is a no-op
        jar.remove("persistent_id");
        assert!(jar.is_empty());
    }
}
