//! Ordered name/value pairs rendered as card facts.

use std::fmt::Display;

/// Insertion-ordered collection of facts.
///
/// Values are converted to strings when inserted, so numbers and other
/// displayable values render exactly as their `Display` output.
/// Duplicate names are kept; nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<(String, String)>,
}

impl Fields {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a fact and returns the collection (builder form).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Appends a fact.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.entries.push((name.into(), value.to_string()));
    }

    /// Number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates facts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        fields.extend(iter);
        fields
    }
}

impl<K, V> Extend<(K, V)> for Fields
where
    K: Into<String>,
    V: Display,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_stringified_on_insert() {
        let fields = Fields::new()
            .with("customer_id", 28390)
            .with("ratio", 0.5)
            .with("active", true);

        let collected: Vec<_> = fields.iter().collect();
        assert_eq!(
            collected,
            vec![
                ("customer_id", "28390"),
                ("ratio", "0.5"),
                ("active", "true")
            ]
        );
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let fields: Fields = [("branch", "main"), ("branch", "dev")].into_iter().collect();

        assert_eq!(fields.len(), 2);
        assert_eq!(
            fields.iter().map(|(_, v)| v).collect::<Vec<_>>(),
            vec!["main", "dev"]
        );
    }

    #[test]
    fn default_is_empty() {
        assert!(Fields::default().is_empty());
    }
}
