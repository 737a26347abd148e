//! Query-string parameters.

use std::fmt::Display;

/// Ordered query parameters, form-urlencoded when applied to a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.pairs.push((name.into(), value.to_string()));
        self
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Appends the parameters to `url`'s query string.
    ///
    /// An empty query leaves the URL untouched (no dangling `?`).
    pub fn apply_to(&self, url: &mut url::Url) {
        if self.is_empty() {
            return;
        }
        url.query_pairs_mut().extend_pairs(&self.pairs);
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |query, (name, value)| query.with(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> url::Url {
        url::Url::parse(s).unwrap()
    }

    #[test]
    fn appends_with_leading_question_mark() {
        let mut target = url("https://api.example.com/v1/items");
        Query::new().with("page", 2).with("q", "a b&c").apply_to(&mut target);

        assert_eq!(
            target.as_str(),
            "https://api.example.com/v1/items?page=2&q=a+b%26c"
        );
    }

    #[test]
    fn extends_existing_query() {
        let mut target = url("https://api.example.com/v1/items?limit=10");
        Query::new().with("page", 2).apply_to(&mut target);

        assert_eq!(target.query(), Some("limit=10&page=2"));
    }

    #[test]
    fn empty_query_leaves_url_unchanged() {
        let mut target = url("https://api.example.com/v1/items");
        Query::new().apply_to(&mut target);

        assert_eq!(target.as_str(), "https://api.example.com/v1/items");
        assert!(target.query().is_none());
    }

    #[test]
    fn collects_from_pairs() {
        let query: Query = [("a", 1), ("b", 2)].into_iter().collect();

        assert!(!query.is_empty());
    }
}
