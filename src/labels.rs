//! Internal variable label management
//!
//! [`LabelManager`] keeps variable names in position order together with a
//! name -> position index. Positions without a caller-supplied name get an
//! auto-generated `{PREFIX}{n}` label that does not collide with existing ones.

use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub(crate) struct LabelManager<const PREFIX: char> {
    labels: Vec<Arc<str>>,
    label_map: HashMap<Arc<str>, usize>,
}

impl<const PREFIX: char> LabelManager<PREFIX> {
    pub(crate) fn new() -> Self {
        Self {
            labels: Vec::new(),
            label_map: HashMap::new(),
        }
    }

    /// Create from caller-supplied names; the first occurrence of a repeated
    /// name wins the lookup
    pub(crate) fn from_labels<S: AsRef<str>>(names: &[S]) -> Self {
        let mut manager = Self::new();
        for name in names {
            manager.push(Arc::from(name.as_ref()));
        }
        manager
    }

    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }

    pub(crate) fn as_slice(&self) -> &[Arc<str>] {
        &self.labels
    }

    pub(crate) fn find_position(&self, name: &str) -> Option<usize> {
        self.label_map.get(name).copied()
    }

    /// Append generated labels until `target_size` positions exist
    pub(crate) fn backfill_to(&mut self, target_size: usize) {
        while self.labels.len() < target_size {
            let label = self.next_available(self.labels.len());
            self.push(label);
        }
    }

    /// First `{PREFIX}{n}` with `n >= start` that is not taken yet
    fn next_available(&self, start: usize) -> Arc<str> {
        let mut n = start;
        loop {
            let candidate: Arc<str> = Arc::from(format!("{}{}", PREFIX, n).as_str());
            if !self.label_map.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn push(&mut self, label: Arc<str>) {
        let position = self.labels.len();
        self.label_map.entry(Arc::clone(&label)).or_insert(position);
        self.labels.push(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backfill_generates_sequential_labels() {
        let mut labels = LabelManager::<'x'>::new();
        labels.backfill_to(3);
        let names: Vec<&str> = labels.as_slice().iter().map(|s| s.as_ref()).collect();
        assert_eq!(names, ["x0", "x1", "x2"]);
    }

    #[test]
    fn test_backfill_skips_taken_labels() {
        let mut labels = LabelManager::<'x'>::from_labels(&["x1"]);
        labels.backfill_to(3);
        let names: Vec<&str> = labels.as_slice().iter().map(|s| s.as_ref()).collect();
        assert_eq!(names, ["x1", "x2", "x3"]);
    }

    #[test]
    fn test_find_position() {
        let labels = LabelManager::<'x'>::from_labels(&["a", "b", "a"]);
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.find_position("b"), Some(1));
        assert_eq!(labels.find_position("a"), Some(0));
        assert_eq!(labels.find_position("c"), None);
    }
}
