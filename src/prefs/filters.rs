//! Card-set filter reconciliation and transfer.
//!
//! Every card set in the catalog occupies exactly one of three
//! partitions: banned, neutral, or required. Banned and required are
//! persisted as ordered id lists; neutral is always derived as "catalog
//! minus the other two" and never stored. Reconciliation rebuilds all
//! three partition controls from the cookies and the catalog; transfer
//! moves the user's selection between partitions and re-sorts the
//! destination by display weight.

use crate::catalog::CardSetCatalog;
use crate::prefs::keys;
use crate::prefs::manager::PreferencesManager;
use crate::prefs::view::{CardSetRow, SettingsView};
use crate::store::CookieStore;

use std::collections::HashSet;
use std::mem;

/// One of the three card-set filter partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPartition {
    Banned,
    Neutral,
    Required,
}

impl FilterPartition {
    /// Stable label, matching the control-id suffix in the web client.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterPartition::Banned => "banned",
            FilterPartition::Neutral => "neutral",
            FilterPartition::Required => "required",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            FilterPartition::Banned => 0,
            FilterPartition::Neutral => 1,
            FilterPartition::Required => 2,
        }
    }

    const ALL: [FilterPartition; 3] = [
        FilterPartition::Banned,
        FilterPartition::Neutral,
        FilterPartition::Required,
    ];
}

impl<S, V, N> PreferencesManager<S, V, N>
where
    S: CookieStore,
    V: SettingsView,
{
    /// Banned card-set ids as persisted, in cookie order.
    ///
    /// Absent or empty cookie yields an empty list; unparsable entries
    /// are dropped. No dedup, no bounds checks against the catalog.
    pub fn banned_card_set_ids(&self) -> Vec<i64> {
        parse_id_list(self.store.get(keys::CARDSETS_BANNED))
    }

    /// Required card-set ids as persisted, in cookie order.
    pub fn required_card_set_ids(&self) -> Vec<i64> {
        parse_id_list(self.store.get(keys::CARDSETS_REQUIRED))
    }

    /// Rebuild all three partition controls from cookies and the catalog.
    ///
    /// Walks the catalog in ascending weight order and classifies each
    /// card set: banned wins over required, everything else is neutral.
    /// An empty or not-yet-populated catalog yields three empty
    /// partitions; that is the expected state before the server's list
    /// arrives, not an error.
    pub fn update_card_set_filters(&mut self, catalog: &CardSetCatalog) {
        let banned = self.banned_card_set_ids();
        let required = self.required_card_set_ids();

        let mut rows: [Vec<CardSetRow>; 3] = Default::default();
        for card_set in catalog.iter_by_weight() {
            let which = if banned.contains(&card_set.id) {
                FilterPartition::Banned
            } else if required.contains(&card_set.id) {
                FilterPartition::Required
            } else {
                FilterPartition::Neutral
            };
            rows[which.index()].push(CardSetRow::new(card_set.id, card_set.name.clone()));
        }

        tracing::debug!(
            banned = rows[FilterPartition::Banned.index()].len(),
            neutral = rows[FilterPartition::Neutral.index()].len(),
            required = rows[FilterPartition::Required.index()].len(),
            "card-set filters reconciled"
        );

        for which in FilterPartition::ALL {
            self.view
                .set_partition_rows(which, mem::take(&mut rows[which.index()]));
        }
    }

    /// Move the rows currently selected in `source` to `dest`, then
    /// re-sort `dest` ascending by catalog weight.
    ///
    /// This is the only ordering-sensitive user operation: the persisted
    /// banned/required lists are whatever order the controls end up in.
    /// Ids missing from the catalog sort last; they can only come from
    /// stale cookies.
    pub fn transfer_card_sets(
        &mut self,
        catalog: &CardSetCatalog,
        source: FilterPartition,
        dest: FilterPartition,
    ) {
        if source == dest {
            return;
        }

        let moving: HashSet<i64> = self.view.selected_ids(source).into_iter().collect();
        if moving.is_empty() {
            return;
        }

        let (moved, kept): (Vec<CardSetRow>, Vec<CardSetRow>) = self
            .view
            .partition_rows(source)
            .into_iter()
            .partition(|row| moving.contains(&row.id));

        let mut dest_rows = self.view.partition_rows(dest);
        dest_rows.extend(moved);
        dest_rows.sort_by_key(|row| catalog.weight_of(row.id).unwrap_or(i64::MAX));

        tracing::debug!(
            source = source.as_str(),
            dest = dest.as_str(),
            moved = moving.len(),
            "card sets transferred"
        );

        self.view.set_partition_rows(source, kept);
        self.view.set_partition_rows(dest, dest_rows);
    }
}

/// Parse a comma-separated id cookie into an ordered list.
fn parse_id_list(cookie: Option<String>) -> Vec<i64> {
    let Some(value) = cookie else {
        return Vec::new();
    };
    if value.is_empty() {
        return Vec::new();
    }
    value
        .split(',')
        .filter_map(|token| token.parse::<i64>().ok())
        .collect()
}
