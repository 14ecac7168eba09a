//! Ordered set of checked labels.

/// The labels currently checked, in the order they were checked.
///
/// Inserting an already-present label is a no-op; removing a label keeps the
/// relative order of the remaining ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.contains(&label) {
            self.items.push(label);
        }
    }

    pub fn remove(&mut self, label: &str) {
        self.items.retain(|item| item != label);
    }

    pub fn contains(&self, label: &str) -> bool {
        self.items.iter().any(|item| item == label)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_click_order() {
        let mut set = SelectionSet::new();
        set.insert("C");
        set.insert("A");
        assert_eq!(set.items(), ["C", "A"]);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut set = SelectionSet::new();
        set.insert("A");
        set.insert("A");
        assert_eq!(set.items(), ["A"]);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut set = SelectionSet::new();
        set.insert("A");
        set.insert("B");
        set.insert("C");
        set.remove("B");
        assert_eq!(set.items(), ["A", "C"]);
    }

    #[test]
    fn test_check_then_uncheck_restores_prior_set() {
        let mut set = SelectionSet::new();
        set.insert("B");
        set.insert("A");
        let before = set.clone();
        set.insert("C");
        set.remove("C");
        assert_eq!(set, before);
    }

    #[test]
    fn test_toggle_sequence_reports_expected_sets() {
        // click A, click C, click A over ["A", "B", "C"]
        let mut set = SelectionSet::new();
        set.insert("A");
        assert_eq!(set.items(), ["A"]);
        set.insert("C");
        assert_eq!(set.items(), ["A", "C"]);
        set.remove("A");
        assert_eq!(set.items(), ["C"]);
    }

    #[test]
    fn test_starts_empty() {
        assert!(SelectionSet::new().is_empty());
    }
}
