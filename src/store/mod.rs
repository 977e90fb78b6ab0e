//! Cookie storage.
//!
//! This module provides the storage primitive the preferences manager
//! persists into:
//!
//! - **Trait**: [`CookieStore`] - get / set / remove by name
//! - **In-memory jar**: [`MemoryCookieStore`](memory::MemoryCookieStore)
//! - **Persistence**: [`persistence`] - save/load the jar as JSON on disk
//!
//! In the browser client the backing store is the document cookie jar; in
//! tests and native shells it is the in-memory jar, optionally persisted
//! to disk between runs. The manager never sees the difference: cookies
//! are opaque name/value strings, and a name that was never set simply
//! reads back as `None`.

pub mod memory;
pub mod persistence;

pub use memory::MemoryCookieStore;

/// A flat string key-value store with browser-cookie semantics.
///
/// Values are opaque; the preferences layer owns all encoding (presence
/// flags, `"true"`/`"false"` strings, newline- and comma-delimited lists).
/// Implementations are infallible: storage that can actually fail should
/// degrade to "cookie absent" rather than surface errors here.
pub trait CookieStore {
    /// Look up a cookie by name. Absent cookies return `None`.
    fn get(&self, name: &str) -> Option<String>;

    /// Set a cookie, replacing any existing value.
    fn set(&mut self, name: &str, value: &str);

    /// Remove a cookie. Removing an absent cookie is a no-op.
    fn remove(&mut self, name: &str);
}
