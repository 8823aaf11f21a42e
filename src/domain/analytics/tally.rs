//! Insertion-ordered tally keyed by label.

use std::collections::HashMap;

/// Accumulators keyed by label, iterated in first-seen order.
///
/// Tie-breaks across the analytics ("first tag encountered wins") depend on
/// this ordering, which a plain `HashMap` would not guarantee.
#[derive(Debug, Clone)]
pub(crate) struct OrderedTally<T> {
    index: HashMap<String, usize>,
    entries: Vec<(String, T)>,
}

impl<T: Default> OrderedTally<T> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Returns the accumulator for `key`, creating it on first sight.
    pub(crate) fn entry(&mut self, key: &str) -> &mut T {
        let existing = self.index.get(key).copied();
        let position = match existing {
            Some(position) => position,
            None => {
                self.entries.push((key.to_string(), T::default()));
                let position = self.entries.len() - 1;
                self.index.insert(key.to_string(), position);
                position
            }
        };
        &mut self.entries[position].1
    }

    /// 0-based first-seen position of `key`.
    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn into_entries(self) -> Vec<(String, T)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let mut tally: OrderedTally<usize> = OrderedTally::new();
        for key in ["b", "a", "b", "c", "a"] {
            *tally.entry(key) += 1;
        }

        let entries = tally.into_entries();
        assert_eq!(
            entries,
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn position_reports_insertion_index() {
        let mut tally: OrderedTally<()> = OrderedTally::new();
        tally.entry("x");
        tally.entry("y");
        assert_eq!(tally.position("y"), Some(1));
        assert_eq!(tally.position("z"), None);
    }
}
