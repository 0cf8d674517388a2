//! Per-element attribute map.

/// Attributes of a [`Node`](crate::Node).
///
/// Keys are unique. Iteration follows the order in which keys were first
/// inserted so that serialized output keeps the source attribute order, but
/// equality ignores order.
#[derive(Debug, Clone, Default, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Get an attribute value, or `""` if the attribute is absent.
    ///
    /// Use [`contains`](Self::contains) or [`find`](Self::find) when an
    /// absent key must be told apart from a stored empty value.
    pub fn get(&self, key: &str) -> &str {
        self.find(key).unwrap_or_default()
    }

    /// Get an attribute value if present.
    pub fn find(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether the attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Set an attribute.
    ///
    /// A non-empty value inserts or overwrites; an empty value removes the
    /// key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        if value.is_empty() {
            self.remove(&key);
        } else {
            self.insert(key, value);
        }
    }

    /// Insert or overwrite an attribute, keeping empty values.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.find(k) == Some(v))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_is_empty() {
        let attrs = Attributes::new();
        assert_eq!(attrs.get("name"), "");
        assert!(!attrs.contains("name"));
    }

    #[test]
    fn test_set_overwrites() {
        let mut attrs = Attributes::new();
        attrs.set("name", "Foo");
        attrs.set("name", "Bar");
        assert_eq!(attrs.get("name"), "Bar");
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_set_empty_removes_by_key() {
        let mut attrs: Attributes = [("name", "Foo"), ("type", "s")].into_iter().collect();
        attrs.set("name", "");
        assert_eq!(attrs.get("name"), "");
        assert!(!attrs.contains("name"));
        assert_eq!(attrs.iter().collect::<Vec<_>>(), vec![("type", "s")]);
    }

    #[test]
    fn test_set_empty_on_missing_key_is_noop() {
        let mut attrs: Attributes = [("type", "s")].into_iter().collect();
        attrs.set("name", "");
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_insert_keeps_empty_values() {
        let mut attrs = Attributes::new();
        attrs.insert("name", "");
        assert!(attrs.contains("name"));
        assert_eq!(attrs.find("name"), Some(""));
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let attrs: Attributes = [("name", "x"), ("type", "i"), ("direction", "in")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "type", "direction"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: Attributes = [("name", "x"), ("type", "i")].into_iter().collect();
        let b: Attributes = [("type", "i"), ("name", "x")].into_iter().collect();
        let c: Attributes = [("type", "i")].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
