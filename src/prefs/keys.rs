//! Cookie names.
//!
//! These names and their value formats are shared with the game's
//! existing web client; changing any of them breaks returning users'
//! stored preferences.

/// Presence flag: hide connect/quit notices in chat.
pub const HIDE_CONNECT_QUIT: &str = "hide_connect_quit";

/// Presence flag: opt out of a persistent identity. Implies
/// [`PERSISTENT_ID`] is absent.
pub const NO_PERSISTENT_ID: &str = "no_persistent_id";

/// Opaque client-chosen identity token. Captured elsewhere in the client;
/// the preferences manager only ever reads or removes it.
pub const PERSISTENT_ID: &str = "persistent_id";

/// Newline-delimited set of ignored player names.
pub const IGNORE_LIST: &str = "ignore_list";

/// `"true"` / `"false"` string; notifications are disabled only when the
/// value is literally `"false"`.
pub const DESKTOP_NOTIFICATIONS: &str = "desktop_notifications";

/// Comma-delimited ordered list of banned card-set ids.
pub const CARDSETS_BANNED: &str = "cardsets_banned";

/// Comma-delimited ordered list of required card-set ids.
pub const CARDSETS_REQUIRED: &str = "cardsets_required";
