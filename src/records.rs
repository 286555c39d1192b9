//! Name/value records collected from the console or a file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single named, non-negative value (a meal or a student).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub value: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Ordered mapping from record name to value.
///
/// Iteration follows insertion order. Inserting a name that already exists
/// replaces its value but keeps the position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Records {
    entries: IndexMap<String, f64>,
}

impl Records {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `name`. Returns the previous value, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.entries.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.values().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<Record> for Records {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut records = Records::new();
        for r in iter {
            records.insert(r.name, r.value);
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut r = Records::new();
        r.insert("Carol", 1.0);
        r.insert("Alice", 2.0);
        r.insert("Bob", 3.0);

        let names: Vec<_> = r.names().collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn test_duplicate_overwrites_in_place() {
        let mut r = Records::new();
        r.insert("Alice", 50.0);
        r.insert("Bob", 60.0);
        let previous = r.insert("Alice", 95.0);

        assert_eq!(previous, Some(50.0));
        assert_eq!(r.len(), 2);
        assert_eq!(r.get("Alice"), Some(95.0));
        assert_eq!(r.names().next(), Some("Alice"));
    }

    #[test]
    fn test_from_records_iterator() {
        let r: Records = vec![Record::new("a", 1.0), Record::new("b", 2.0)]
            .into_iter()
            .collect();
        assert_eq!(r.values(), vec![1.0, 2.0]);
    }
}
