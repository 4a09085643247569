//! Row selection keyed by record id

use std::collections::HashSet;

use shared::RecordId;

/// Set of checked record ids
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`; returns whether it is now selected
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.clone());
            true
        }
    }

    /// Header checkbox state: visible rows exist and all are selected
    pub fn all_selected(&self, visible: &[RecordId]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.selected.contains(id))
    }

    /// Deselect the visible rows if all are selected, otherwise select them all
    ///
    /// Rows outside `visible` are left untouched.
    pub fn toggle_all(&mut self, visible: &[RecordId]) {
        if self.all_selected(visible) {
            for id in visible {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(visible.iter().cloned());
        }
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.contains(id)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in a stable order
    pub fn ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<RecordId> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }
}
