//! Run the full preferences cycle headlessly.
//!
//! ```sh
//! cargo run --example headless_prefs
//! ```

use futures::future::BoxFuture;
use partyprefs::catalog::{CardSet, CardSetCatalog};
use partyprefs::notifications::{NotificationBackend, PermissionOutcome};
use partyprefs::prefs::view::{FormState, SettingsView};
use partyprefs::prefs::{FilterPartition, PreferencesManager};
use partyprefs::store::memory::MemoryCookieStore;

/// Pretend platform that always grants permission.
struct AlwaysGrant;

impl NotificationBackend for AlwaysGrant {
    fn is_supported(&self) -> bool {
        true
    }

    fn request_permission(&self) -> BoxFuture<'static, PermissionOutcome> {
        Box::pin(futures::future::ready(PermissionOutcome::Granted))
    }
}

fn main() {
    let mut catalog = CardSetCatalog::new();
    catalog.insert(CardSet::new(1, "Base Set", 1));
    catalog.insert(CardSet::new(2, "First Expansion", 2));
    catalog.insert(CardSet::new(3, "Holiday Pack", 3));

    let mut prefs =
        PreferencesManager::new(MemoryCookieStore::new(), FormState::new(), AlwaysGrant);
    prefs.load(&catalog);

    // The user hides connect/quit notices, ignores a player, and bans
    // the holiday pack.
    prefs.view_mut().set_hide_connect_quit(true);
    prefs.view_mut().set_ignore_list_text("loud_player");
    prefs.view_mut().select(FilterPartition::Neutral, 3);
    prefs.transfer_card_sets(&catalog, FilterPartition::Neutral, FilterPartition::Banned);

    if let Some(request) = prefs.save(true) {
        let prompt = futures::executor::block_on(request.prompt());
        println!("permission prompt to surface: {prompt:?}");
    }

    println!("client state: {:#?}", prefs.state());
    println!("banned ids:   {:?}", prefs.banned_card_set_ids());
    println!("required ids: {:?}", prefs.required_card_set_ids());
}
