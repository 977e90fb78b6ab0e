use std::collections::HashSet;

/// Process-wide client settings.
///
/// The rest of the client reads this through
/// [`PreferencesManager::state`](super::manager::PreferencesManager::state);
/// only the manager's apply path (plus the persistent-id special cases in
/// load and save) writes it. Everything runs on the single UI thread, so
/// readers always observe the latest apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientState {
    /// Suppress connect/quit notices in chat.
    pub hide_connect_quit: bool,

    /// The user opted out of a persistent identity.
    pub no_persistent_id: bool,

    /// Player names whose chat is ignored. Keys are the literal lines the
    /// user typed: no trimming, duplicates collapse.
    pub ignore_list: HashSet<String>,

    /// Desktop notifications enabled.
    pub desktop_notifications: bool,

    /// Client-chosen identity token for returning users. `None` when the
    /// user opted out or no token is stored.
    pub persistent_id: Option<String>,
}

impl ClientState {
    /// Whether chat from `player` should be ignored.
    pub fn is_ignored(&self, player: &str) -> bool {
        self.ignore_list.contains(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ClientState::default();
        assert!(!state.hide_connect_quit);
        assert!(!state.no_persistent_id);
        assert!(!state.desktop_notifications);
        assert!(state.ignore_list.is_empty());
        assert_eq!(state.persistent_id, None);
    }

    #[test]
    fn test_is_ignored() {
        let mut state = ClientState::default();
        state.ignore_list.insert("rude_player".to_owned());
        assert!(state.is_ignored("rude_player"));
        assert!(!state.is_ignored("polite_player"));
    }
}
