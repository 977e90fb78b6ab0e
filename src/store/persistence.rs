//! Cookie persistence - save and load the jar to/from disk.
//!
//! Provides JSON-based persistence for [`MemoryCookieStore`], so native
//! shells keep preferences between runs the way the browser client keeps
//! its cookies.

use crate::base::PrefError;
use crate::store::{CookieStore, MemoryCookieStore};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Serializable representation of a cookie for persistence.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct PersistentCookie {
    name: String,
    value: String,
}

/// Save all cookies from a jar to a file.
///
/// # Example
/// ```ignore
/// persistence::save_cookies(&jar, Path::new("prefs.json"))?;
/// ```
pub fn save_cookies(jar: &MemoryCookieStore, path: &Path) -> Result<(), PrefError> {
    let all_cookies: Vec<PersistentCookie> = jar
        .iter()
        .map(|(name, value)| PersistentCookie {
            name: name.to_owned(),
            value: value.to_owned(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&all_cookies)?;
    fs::write(path, json)?;

    tracing::debug!(path = %path.display(), count = all_cookies.len(), "cookie jar saved");
    Ok(())
}

/// Load cookies from a file into a new jar.
///
/// A missing file is not an error: it loads as an empty jar, the same way
/// a fresh browser session has no cookies.
pub fn load_cookies(path: &Path) -> Result<MemoryCookieStore, PrefError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no cookie jar on disk, starting empty");
        return Ok(MemoryCookieStore::new());
    }

    let json = fs::read_to_string(path)?;
    let all_cookies: Vec<PersistentCookie> = serde_json::from_str(&json)?;

    let mut jar = MemoryCookieStore::new();
    for cookie in &all_cookies {
        jar.set(&cookie.name, &cookie.value);
    }

    tracing::debug!(path = %path.display(), count = all_cookies.len(), "cookie jar loaded");
    Ok(jar)
}
