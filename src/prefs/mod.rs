//! The preferences manager.
//!
//! Composes the load / display / edit / save / apply cycle:
//!
//! - **Load**: populate the settings view from cookies (defaults when
//!   absent), then apply silently
//! - **Apply**: push view state into the process-wide [`ClientState`],
//!   optionally issuing the notification permission request
//! - **Save**: persist view state as cookies, then apply
//! - **Filter sync**: reconcile and transfer the banned / neutral /
//!   required card-set partitions
//!
//! # Architecture
//!
//! The original web client wired these operations straight to jQuery
//! selectors and document cookies. Here each collaborator sits behind a
//! trait so the cycle runs headlessly:
//!
//! | Web client | partyprefs | Responsibility |
//! |------------|------------|----------------|
//! | form controls | [`SettingsView`](view::SettingsView) | typed access to bound controls |
//! | document cookies | [`CookieStore`](crate::store::CookieStore) | persisted name/value strings |
//! | `Notification` API | [`NotificationBackend`](crate::notifications::NotificationBackend) | capability probe + permission request |
//! | ambient globals | [`ClientState`](state::ClientState) | settings the rest of the client reads |
//!
//! # Example
//!
//! ```rust
//! use partyprefs::catalog::{CardSet, CardSetCatalog};
//! use partyprefs::notifications::UnsupportedBackend;
//! use partyprefs::prefs::PreferencesManager;
//! use partyprefs::prefs::view::{FormState, SettingsView};
//! use partyprefs::store::memory::MemoryCookieStore;
//!
//! let mut catalog = CardSetCatalog::new();
//! catalog.insert(CardSet::new(1, "Base Set", 1));
//!
//! let mut prefs = PreferencesManager::new(
//!     MemoryCookieStore::new(),
//!     FormState::default(),
//!     UnsupportedBackend,
//! );
//! prefs.load(&catalog);
//!
//! prefs.view_mut().set_hide_connect_quit(true);
//! prefs.save(true);
//! assert!(prefs.state().hide_connect_quit);
//! ```

pub mod filters;
pub mod keys;
pub mod manager;
pub mod state;
pub mod view;

pub use filters::FilterPartition;
pub use manager::{PermissionRequest, PreferencesManager};
pub use state::ClientState;
