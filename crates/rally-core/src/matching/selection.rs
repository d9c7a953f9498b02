use std::collections::HashSet;

use super::domain::CandidateId;

/// Membership-only record of which candidates a user has marked selected.
///
/// Ordering is never observed from the set itself; callers that need a stable
/// presentation order keep their own ordered id list and rehydrate records via
/// `CandidateRoster::get_all`.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    members: HashSet<CandidateId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership for an id; returns true when the id is now selected.
    pub fn toggle(&mut self, id: CandidateId) -> bool {
        if self.members.remove(&id) {
            false
        } else {
            self.members.insert(id);
            true
        }
    }

    pub fn is_selected(&self, id: &CandidateId) -> bool {
        self.members.contains(id)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let mut selection = SelectionSet::new();
        let id = CandidateId::new("inf-001");

        assert!(selection.toggle(id.clone()));
        assert!(selection.is_selected(&id));
        assert_eq!(selection.count(), 1);

        assert!(!selection.toggle(id.clone()));
        assert!(!selection.is_selected(&id));
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn toggling_twice_does_not_duplicate() {
        let mut selection = SelectionSet::new();
        selection.toggle(CandidateId::new("inf-001"));
        selection.toggle(CandidateId::new("inf-002"));
        selection.toggle(CandidateId::new("inf-001"));
        selection.toggle(CandidateId::new("inf-001"));
        assert_eq!(selection.count(), 2);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut selection = SelectionSet::new();
        selection.toggle(CandidateId::new("inf-001"));
        selection.toggle(CandidateId::new("inf-002"));
        selection.clear();
        assert_eq!(selection.count(), 0);
        assert!(!selection.is_selected(&CandidateId::new("inf-001")));
    }
}
