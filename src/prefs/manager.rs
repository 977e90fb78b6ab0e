//! Load, apply, and save.
//!
//! [`PreferencesManager`] owns the cookie store, the settings view, the
//! notification backend, and the process-wide [`ClientState`], and runs
//! the cycle between them. Everything here is synchronous; the only async
//! value is the [`PermissionRequest`] that an explicit user save may hand
//! back for the caller to await on the event loop.

use crate::catalog::CardSetCatalog;
use crate::notifications::{NotificationBackend, PermissionOutcome, PermissionPrompt};
use crate::prefs::filters::FilterPartition;
use crate::prefs::keys;
use crate::prefs::state::ClientState;
use crate::prefs::view::SettingsView;
use crate::store::CookieStore;

use futures::future::BoxFuture;
use std::collections::HashSet;

/// A pending OS notification permission request.
///
/// Single-shot: await it once, surface the prompt if any. There is no
/// cancellation and no timeout; dropping the request abandons it.
pub struct PermissionRequest {
    future: BoxFuture<'static, PermissionOutcome>,
}

impl PermissionRequest {
    /// Wait for the user's (or platform's) decision.
    pub async fn resolve(self) -> PermissionOutcome {
        self.future.await
    }

    /// Wait for the decision and map it to the UI prompt to surface, if
    /// any. Granted needs no follow-up.
    pub async fn prompt(self) -> Option<PermissionPrompt> {
        self.resolve().await.prompt()
    }
}

/// The preferences manager.
///
/// Generic over the three collaborator seams so the browser client, a
/// native shell, and the test suite can each plug in their own
/// implementations.
pub struct PreferencesManager<S, V, N> {
    pub(crate) store: S,
    pub(crate) view: V,
    notifier: N,
    state: ClientState,
}

impl<S, V, N> PreferencesManager<S, V, N>
where
    S: CookieStore,
    V: SettingsView,
    N: NotificationBackend,
{
    pub fn new(store: S, view: V, notifier: N) -> Self {
        Self {
            store,
            view,
            notifier,
            state: ClientState::default(),
        }
    }

    /// The settings the rest of the client reads.
    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable view access, for the UI layer to reflect user edits.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable store access. The persistent-id token is captured through
    /// this elsewhere in the client; the manager itself never writes it.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Populate every bound control from its cookie, falling back to the
    /// control's default when the cookie is absent, then apply silently.
    pub fn load(&mut self, catalog: &CardSetCatalog) {
        self.view
            .set_hide_connect_quit(self.cookie_truthy(keys::HIDE_CONNECT_QUIT));

        if self.cookie_truthy(keys::NO_PERSISTENT_ID) {
            self.view.set_no_persistent_id(true);
            // Future sessions must not reuse an id.
            self.state.persistent_id = None;
        } else {
            self.view.set_no_persistent_id(false);
            // Loaded verbatim, no validation.
            self.state.persistent_id = self.store.get(keys::PERSISTENT_ID);
        }

        let ignore_text = self.store.get(keys::IGNORE_LIST).unwrap_or_default();
        self.view.set_ignore_list_text(&ignore_text);

        if !self.notifier.is_supported() {
            // No support for desktop notifications: force the control
            // off and skip the permission flow entirely.
            self.set_desktop_notifications(false);
            self.view.set_desktop_notifications_enabled(false);
        } else {
            self.view.set_desktop_notifications_enabled(true);
            let enabled = self.store.get(keys::DESKTOP_NOTIFICATIONS).as_deref() != Some("false");
            self.set_desktop_notifications(enabled);
        }

        // If the server's card-set list hasn't arrived yet this yields
        // three empty partitions, silently.
        self.update_card_set_filters(catalog);

        tracing::debug!("preferences loaded from cookies");
        self.apply(false);
    }

    /// Push current control state into the process-wide [`ClientState`].
    ///
    /// `from_user_settings` distinguishes an explicit user save (true)
    /// from a programmatic load/save round-trip (false). A permission
    /// request is returned only for an explicit save with the
    /// notifications control checked; a silent load must never re-prompt
    /// the user on every page visit.
    pub fn apply(&mut self, from_user_settings: bool) -> Option<PermissionRequest> {
        self.state.hide_connect_quit = self.view.hide_connect_quit();
        self.state.no_persistent_id = self.view.no_persistent_id();
        self.state.ignore_list = ignore_lines(&self.view.ignore_list_text());
        self.state.desktop_notifications = self.view.desktop_notifications();

        tracing::debug!(
            from_user_settings,
            hide_connect_quit = self.state.hide_connect_quit,
            no_persistent_id = self.state.no_persistent_id,
            desktop_notifications = self.state.desktop_notifications,
            ignored = self.state.ignore_list.len(),
            "preferences applied"
        );

        if self.state.desktop_notifications && from_user_settings {
            tracing::debug!("requesting desktop notification permission");
            Some(PermissionRequest {
                future: self.notifier.request_permission(),
            })
        } else {
            None
        }
    }

    /// Read every control and persist it as a cookie, then apply.
    ///
    /// Flags are written when checked and removed when not. Checking the
    /// persistent-id opt-out also removes any stored `persistent_id`
    /// cookie and nulls the in-memory token immediately. The token itself
    /// is never written here: it is captured independently elsewhere in
    /// the client.
    pub fn save(&mut self, from_user_settings: bool) -> Option<PermissionRequest> {
        if self.view.hide_connect_quit() {
            self.store.set(keys::HIDE_CONNECT_QUIT, "true");
        } else {
            self.store.remove(keys::HIDE_CONNECT_QUIT);
        }

        if self.view.no_persistent_id() {
            self.store.set(keys::NO_PERSISTENT_ID, "true");
            self.store.remove(keys::PERSISTENT_ID);
            self.state.persistent_id = None;
        } else {
            self.store.remove(keys::NO_PERSISTENT_ID);
        }

        // Written verbatim, even when empty.
        let ignore_text = self.view.ignore_list_text();
        self.store.set(keys::IGNORE_LIST, &ignore_text);

        if self.notifier.is_supported() {
            let value = if self.view.desktop_notifications() {
                "true"
            } else {
                "false"
            };
            self.store.set(keys::DESKTOP_NOTIFICATIONS, value);
        }

        // Banned and required persist in display order; neutral is
        // derivable from the catalog and never persisted.
        self.store.set(
            keys::CARDSETS_BANNED,
            &join_ids(&self.view, FilterPartition::Banned),
        );
        self.store.set(
            keys::CARDSETS_REQUIRED,
            &join_ids(&self.view, FilterPartition::Required),
        );

        tracing::debug!(from_user_settings, "preferences saved to cookies");
        self.apply(from_user_settings)
    }

    /// Set the checked state of the desktop-notifications control.
    pub fn set_desktop_notifications(&mut self, enabled: bool) {
        self.view.set_desktop_notifications(enabled);
    }

    /// Presence-flag semantics: present and non-empty is truthy.
    fn cookie_truthy(&self, name: &str) -> bool {
        self.store.get(name).is_some_and(|value| !value.is_empty())
    }
}

/// Split the ignore-list text into set keys.
///
/// Lines are kept literal: no trimming, duplicates collapse via the set,
/// empty lines are skipped.
fn ignore_lines(text: &str) -> HashSet<String> {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Comma-join a partition control's ids in display order.
fn join_ids<V: SettingsView>(view: &V, which: FilterPartition) -> String {
    let ids: Vec<String> = view
        .partition_rows(which)
        .iter()
        .map(|row| row.id.to_string())
        .collect();
    ids.join(",")
}
