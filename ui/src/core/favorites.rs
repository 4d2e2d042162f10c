//! App-wide favorite flags.
//!
//! One `FavoriteSet` is provided through context at the app root and every
//! screen reads it from there, so toggling a heart on the browse screen is
//! visible on the detail and favorites screens. Nothing here is persisted.

use std::collections::BTreeSet;

use crate::core::catalog::Property;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: BTreeSet<String>,
}

impl FavoriteSet {
    /// Seed from the catalog's initial `is_favorite` flags.
    pub fn seeded_from<'a>(properties: impl IntoIterator<Item = &'a Property>) -> Self {
        Self {
            ids: properties
                .into_iter()
                .filter(|p| p.is_favorite)
                .map(|p| p.id.clone())
                .collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip the flag for `id`; returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Copy of `property` with its flag taken from this set.
    pub fn apply_to(&self, property: &Property) -> Property {
        let mut property = property.clone();
        property.is_favorite = self.contains(&property.id);
        property
    }

    /// Favorited properties from `catalog`, in catalog order.
    pub fn select(&self, catalog: &[Property]) -> Vec<Property> {
        catalog
            .iter()
            .filter(|p| self.contains(&p.id))
            .map(|p| self.apply_to(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::browse_catalog;

    #[test]
    fn seeded_from_catalog_flags() {
        let catalog = browse_catalog();
        let favorites = FavoriteSet::seeded_from(&catalog);
        assert_eq!(favorites.len(), 2);
        assert!(favorites.contains("2"));
        assert!(favorites.contains("5"));
    }

    #[test]
    fn toggle_flips_and_reports_state() {
        let mut favorites = FavoriteSet::default();
        assert!(favorites.toggle("3"));
        assert!(favorites.contains("3"));
        assert!(!favorites.toggle("3"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn select_keeps_catalog_order_and_flags() {
        let catalog = browse_catalog();
        let mut favorites = FavoriteSet::seeded_from(&catalog);
        favorites.toggle("1");
        let picked = favorites.select(&catalog);
        let ids: Vec<&str> = picked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "5"]);
        assert!(picked.iter().all(|p| p.is_favorite));
    }
}
