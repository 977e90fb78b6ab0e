//! Card-set catalog.
//!
//! The catalog of card sets the server can include in play. It is an
//! external collaborator from the preferences manager's point of view:
//! the server populates it after connect, the filter logic only reads it.
//! Before the server's list arrives the catalog is simply empty, and
//! filter reconciliation produces three empty partitions.

use std::collections::{BTreeMap, HashMap};

/// A named, weighted collection of game content.
///
/// `weight` is the display order: lower weights sort first everywhere the
/// user sees card sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSet {
    pub id: i64,
    pub name: String,
    pub weight: i64,
}

impl CardSet {
    pub fn new(id: i64, name: impl Into<String>, weight: i64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
        }
    }
}

/// Read-only catalog of card sets, iterable in ascending weight order.
///
/// Two indexes are kept: by weight for display-order iteration, and by id
/// for weight lookups when re-sorting a filter partition after a
/// transfer. Inserting a second card set at an existing weight replaces
/// the first; weights are expected to be unique.
#[derive(Debug, Default, Clone)]
pub struct CardSetCatalog {
    by_weight: BTreeMap<i64, CardSet>,
    by_id: HashMap<i64, CardSet>,
}

impl CardSetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card set to the catalog.
    pub fn insert(&mut self, card_set: CardSet) {
        if let Some(replaced) = self.by_weight.insert(card_set.weight, card_set.clone()) {
            // The weight index owns display order; drop the shadowed
            // entry's id index too so both indexes agree.
            self.by_id.remove(&replaced.id);
        }
        self.by_id.insert(card_set.id, card_set);
    }

    /// Look up a card set by id.
    pub fn get(&self, id: i64) -> Option<&CardSet> {
        self.by_id.get(&id)
    }

    /// Display weight for a card-set id, if the id is in the catalog.
    pub fn weight_of(&self, id: i64) -> Option<i64> {
        self.by_id.get(&id).map(|cs| cs.weight)
    }

    /// Iterate card sets in ascending weight order.
    pub fn iter_by_weight(&self) -> impl Iterator<Item = &CardSet> {
        self.by_weight.values()
    }

    pub fn len(&self) -> usize {
        self.by_weight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_weight.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> CardSetCatalog {
        let mut catalog = CardSetCatalog::new();
        catalog.insert(CardSet::new(10, "Second Expansion", 3));
        catalog.insert(CardSet::new(1, "Base Set", 1));
        catalog.insert(CardSet::new(7, "First Expansion", 2));
        catalog
    }

    #[test]
    fn test_iteration_is_weight_ordered() {
        let catalog = sample_catalog();
        let ids: Vec<i64> = catalog.iter_by_weight().map(|cs| cs.id).collect();
        assert_eq!(ids, vec![1, 7, 10]);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get(7).unwrap().name, "First Expansion");
        assert_eq!(catalog.weight_of(10), Some(3));
        assert_eq!(catalog.weight_of(99), None);
    }

    #[test]
    fn test_duplicate_weight_replaces() {
        let mut catalog = sample_catalog();
        catalog.insert(CardSet::new(42, "Replacement", 2));

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(7), None);
        assert_eq!(catalog.get(42).unwrap().weight, 2);
        let ids: Vec<i64> = catalog.iter_by_weight().map(|cs| cs.id).collect();
        assert_eq!(ids, vec![1, 42, 10]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = CardSetCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter_by_weight().count(), 0);
    }
}
