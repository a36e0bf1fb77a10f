use std::collections::HashSet;

use super::record::RecordId;

/// Identities whose detail panel is open
#[derive(Debug, Clone, Default)]
pub struct ExpansionSet {
    members: HashSet<RecordId>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership, returning the new state (true = expanded)
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.members.remove(id) {
            false
        } else {
            self.members.insert(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.members.contains(id)
    }

    pub fn remove(&mut self, id: &RecordId) -> bool {
        self.members.remove(id)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Drop every member not in `visible`; returns how many were dropped
    pub fn prune(&mut self, visible: &HashSet<&RecordId>) -> usize {
        let before = self.members.len();
        self.members.retain(|id| visible.contains(id));
        before - self.members.len()
    }
}
