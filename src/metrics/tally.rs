use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Insertion-ordered counts keyed by label.
///
/// Serializes as a JSON object whose keys keep the tally's order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A tally whose keys are present up front with a zero count.
    #[must_use]
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tally = Self::new();
        for key in keys {
            let _ = tally.slot(key.as_ref());
        }
        tally
    }

    fn slot(&mut self, key: &str) -> &mut u64 {
        let position = if let Some(&position) = self.index.get(key) {
            position
        } else {
            let position = self.entries.len();
            self.entries.push((key.to_string(), 0));
            let _ = self.index.insert(key.to_string(), position);
            position
        };

        &mut self.entries[position].1
    }

    pub fn increment(&mut self, key: &str) {
        *self.slot(key) += 1;
    }

    #[must_use]
    pub fn get(&self, key: &str) -> u64 {
        self.index.get(key).map_or(0, |&position| self.entries[position].1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Whether any key has been counted at least once.
    #[must_use]
    pub fn has_counts(&self) -> bool {
        self.entries.iter().any(|(_, count)| *count > 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// The `n` highest counts, descending; equal counts keep their first-seen order.
    #[must_use]
    pub fn top(&self, n: usize) -> Self {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let mut top = Self::new();
        for (key, count) in ranked.into_iter().take(n) {
            *top.slot(key) = count;
        }
        top
    }
}

impl Serialize for Tally {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}
