use std::collections::HashMap;
use std::collections::hash_map::Iter;

/// A named group of key/value pairs introduced by a `[name]` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    keys: HashMap<String, String>,
}

impl Section {
    #[must_use]
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            keys: HashMap::with_capacity(16),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw value stored for `key`, including empty values.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.keys.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the key/value pairs in no particular order.
    pub fn iter(&self) -> Keys<'_> {
        Keys {
            inner: self.keys.iter(),
        }
    }

    /// Inserts `value` under `key`, replacing any earlier value.
    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.keys.insert(key, value);
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a str, &'a str);
    type IntoIter = Keys<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`Section::iter`].
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    inner: Iter<'a, String, String>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_insert_wins() {
        let mut section = Section::new("db".to_owned());
        section.insert("k".to_owned(), "1".to_owned());
        section.insert("k".to_owned(), "2".to_owned());

        assert_eq!(section.get("k"), Some("2"));
        assert_eq!(section.len(), 1);
    }

    #[test]
    fn empty_value_is_still_stored() {
        let mut section = Section::new("db".to_owned());
        section.insert("k".to_owned(), String::new());

        assert_eq!(section.get("k"), Some(""));
        assert!(!section.is_empty());
    }

    #[test]
    fn iter_yields_every_pair() {
        let mut section = Section::new("users".to_owned());
        section.insert("alice".to_owned(), "admin".to_owned());
        section.insert("bob".to_owned(), "guest".to_owned());

        let mut pairs = section.iter().collect::<Vec<_>>();
        pairs.sort_unstable();

        assert_eq!(pairs, vec![("alice", "admin"), ("bob", "guest")]);
    }
}
