use std::collections::HashSet;

use super::record::RecordId;

/// LIFO stack of removed record identities
///
/// Insertion order is removal order. An identity is held at most once.
#[derive(Debug, Clone, Default)]
pub struct RemovalStack {
    order: Vec<RecordId>,
    members: HashSet<RecordId>,
}

impl RemovalStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an identity; returns false if it is already on the stack
    pub fn push(&mut self, id: RecordId) -> bool {
        if !self.members.insert(id.clone()) {
            return false;
        }
        self.order.push(id);
        true
    }

    /// Pop the most recently removed identity
    pub fn pop(&mut self) -> Option<RecordId> {
        let id = self.order.pop()?;
        self.members.remove(&id);
        Some(id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = RemovalStack::new();
        assert!(stack.push(RecordId::from("a-0")));
        assert!(stack.push(RecordId::from("b-1")));
        assert!(stack.push(RecordId::from("c-2")));

        assert_eq!(stack.pop(), Some(RecordId::from("c-2")));
        assert_eq!(stack.pop(), Some(RecordId::from("b-1")));
        assert_eq!(stack.len(), 1);
        assert!(stack.contains(&RecordId::from("a-0")));
        assert!(!stack.contains(&RecordId::from("b-1")));
    }

    #[test]
    fn test_duplicate_push_is_rejected() {
        let mut stack = RemovalStack::new();
        assert!(stack.push(RecordId::from("a-0")));
        assert!(!stack.push(RecordId::from("a-0")));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_pop_empty() {
        let mut stack = RemovalStack::new();
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut stack = RemovalStack::new();
        stack.push(RecordId::from("a-0"));
        stack.push(RecordId::from("b-1"));

        stack.clear();

        assert!(stack.is_empty());
        assert!(!stack.contains(&RecordId::from("a-0")));
        assert_eq!(stack.len(), 0);
    }
}
