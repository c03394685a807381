//! Row selection keyed by row id.

use super::value::RowId;
use std::collections::HashSet;

/// Set of selected row ids.
///
/// Keyed by id rather than position, so a selection survives sorting,
/// searching and paging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<RowId>,
}

impl Selection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is selected.
    pub fn contains(&self, id: &RowId) -> bool {
        self.ids.contains(id)
    }

    /// Flips `id`; returns whether it is now selected.
    pub fn toggle(&mut self, id: RowId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Selects `id`.
    pub fn insert(&mut self, id: RowId) {
        self.ids.insert(id);
    }

    /// Deselects `id`.
    pub fn remove(&mut self, id: &RowId) -> bool {
        self.ids.remove(id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// True when `ids` is non-empty and every one of them is selected.
    pub fn contains_all<'a>(&self, ids: impl IntoIterator<Item = &'a RowId>) -> bool {
        let mut any = false;
        for id in ids {
            if !self.ids.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Select-all toggle over a scope: deselects `ids` if all are selected,
    /// otherwise selects them all. Ids outside the scope are untouched.
    pub fn toggle_all(&mut self, ids: &[RowId]) {
        if self.contains_all(ids) {
            for id in ids {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(ids.iter().cloned());
        }
    }

    /// Keeps only ids for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&RowId) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    /// Iterates the selected ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RowId> {
        self.ids.iter()
    }
}
