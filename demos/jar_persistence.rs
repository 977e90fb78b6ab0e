//! Persist the cookie jar between runs.
//!
//! ```sh
//! cargo run --example jar_persistence
//! ```
//!
//! The first run saves edited preferences to `prefs.json`; later runs
//! load them back, the way a returning browser session sees its cookies.

use partyprefs::catalog::{CardSet, CardSetCatalog};
use partyprefs::notifications::UnsupportedBackend;
use partyprefs::prefs::view::{FormState, SettingsView};
use partyprefs::prefs::PreferencesManager;
use partyprefs::store::persistence;
use std::path::Path;

fn main() -> Result<(), partyprefs::base::PrefError> {
    let path = Path::new("prefs.json");

    let mut catalog = CardSetCatalog::new();
    catalog.insert(CardSet::new(1, "Base Set", 1));
    catalog.insert(CardSet::new(2, "First Expansion", 2));

    let jar = persistence::load_cookies(path)?;
    let mut prefs = PreferencesManager::new(jar, FormState::new(), UnsupportedBackend);
    prefs.load(&catalog);

    println!("loaded state: {:#?}", prefs.state());

    prefs.view_mut().set_hide_connect_quit(true);
    prefs
        .view_mut()
        .set_ignore_list_text("spammer\nloud_player");
    prefs.save(true);

    persistence::save_cookies(prefs.store(), path)?;
    println!("saved {} cookies to {}", prefs.store().len(), path.display());
    Ok(())
}
