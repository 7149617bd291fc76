//! Insertion-ordered header map with HTTP header-name semantics: lookups
//! are case-insensitive, but the spelling and position of the first
//! insertion are preserved.

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Headers(IndexMap<String, String>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or stable-replace: a name already present (compared
    /// case-insensitively) keeps its original spelling and position, only
    /// the value changes.
    pub fn insert(&mut self, name: &str, value: &str) {
        let existing = self
            .0
            .keys()
            .find(|k| k.eq_ignore_ascii_case(name))
            .cloned();
        match existing {
            Some(key) => {
                self.0.insert(key, value.to_owned());
            }
            None => {
                self.0.insert(name.to_owned(), value.to_owned());
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
