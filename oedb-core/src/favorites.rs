//! Pure favorite set operations on immutable snapshots.

use std::collections::BTreeSet;

use crate::entities::*;

/// Direction of a toggle derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// Immutable snapshot of one user's favorite listings.
///
/// All operations return new values; the stored set remains the
/// authoritative state and callers reconcile against it after failed
/// writes instead of mutating a snapshot in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: BTreeSet<Id>,
}

impl FavoriteSet {
    pub fn is_favorited(&self, listing_id: &Id) -> bool {
        self.ids.contains(listing_id)
    }

    /// Flipped membership of the listing plus the direction of change.
    pub fn toggled(&self, listing_id: &Id) -> (Self, FavoriteChange) {
        let mut ids = self.ids.clone();
        let change = if ids.remove(listing_id) {
            FavoriteChange::Removed
        } else {
            ids.insert(listing_id.clone());
            FavoriteChange::Added
        };
        (Self { ids }, change)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<Id> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
