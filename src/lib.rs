//! # partyprefs
//!
//! A headless preferences manager for the browser client of a web-based
//! party game.
//!
//! `partyprefs` synchronizes user settings between form controls, browser
//! cookies, and process-wide client state, and drives the desktop
//! notification permission flow. The form layer, the cookie primitive, and
//! the notification API are all abstracted behind traits, so the full
//! load / display / edit / save / apply cycle runs headlessly.
//!
//! ## Features
//!
//! - **Cookie-backed settings**: connect/quit notices, persistent-identity
//!   opt-out, player ignore list, desktop notifications
//! - **Card-set filters**: banned / neutral / required partitions kept in
//!   display-weight order and reconciled against the card-set catalog
//! - **Permission flow**: single-shot async permission request with the
//!   granted / denied / dismissed outcomes mapped to UI prompts
//! - **Headless testing**: [`FormState`](prefs::view::FormState) stands in
//!   for the real form layer
//!
//! ## Quick Start
//!
//! ```rust
//! use partyprefs::catalog::CardSetCatalog;
//! use partyprefs::notifications::UnsupportedBackend;
//! use partyprefs::prefs::PreferencesManager;
//! use partyprefs::prefs::view::FormState;
//! use partyprefs::store::memory::MemoryCookieStore;
//!
//! let catalog = CardSetCatalog::new();
//! let mut prefs = PreferencesManager::new(
//!     MemoryCookieStore::new(),
//!     FormState::default(),
//!     UnsupportedBackend,
//! );
//! prefs.load(&catalog);
//! assert!(!prefs.state().hide_connect_quit);
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`store`] - Cookie storage trait, in-memory jar, and disk persistence
//! - [`catalog`] - Read-only card-set catalog consumed by the filter logic
//! - [`notifications`] - Permission request backend and outcome types
//! - [`prefs`] - The preferences manager: load, apply, save, filter sync
//!
//! ## Compatibility
//!
//! Cookie names and value formats (`hide_connect_quit`,
//! `no_persistent_id`, `persistent_id`, `ignore_list`,
//! `desktop_notifications`, `cardsets_banned`, `cardsets_required`) are a
//! compatibility surface shared with the game's existing web client and
//! must not change.

pub mod base;
pub mod catalog;
pub mod notifications;
pub mod prefs;
pub mod store;
