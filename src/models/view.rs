use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewEntry {
    pub key: String,
    pub value: u64,
}

/// Categorical key to numeric measure, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedView {
    pub key_label: String,
    pub measure_label: String,
    pub entries: Vec<ViewEntry>,
}

impl AggregatedView {
    pub fn new(key_label: &str, measure_label: &str, entries: Vec<ViewEntry>) -> Self {
        Self {
            key_label: key_label.to_string(),
            measure_label: measure_label.to_string(),
            entries,
        }
    }

    pub fn from_pairs<I>(key_label: &str, measure_label: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(key, value)| ViewEntry { key, value })
            .collect();
        Self::new(key_label, measure_label, entries)
    }

    /// Order by measure, largest first. Equal measures keep their order.
    pub fn sorted_desc(mut self) -> Self {
        self.entries.sort_by(|a, b| b.value.cmp(&a.value));
        self
    }

    pub fn top(mut self, n: usize) -> Self {
        self.entries.truncate(n);
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    pub fn total(&self) -> u64 {
        self.values().sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
