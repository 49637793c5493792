use models::FormValue;
use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};

/// Validated, flat form data.
///
/// Only `parse` can build one, so every key here passed key validation and
/// appears exactly once. Lookups never see anything but inserted entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeFormData {
    fields: BTreeMap<String, FormValue>,
}

impl SafeFormData {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: String, value: FormValue) {
        self.fields.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FormValue> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, FormValue> {
        self.fields
    }
}

impl<'a> IntoIterator for &'a SafeFormData {
    type Item = (&'a String, &'a FormValue);
    type IntoIter = btree_map::Iter<'a, String, FormValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for SafeFormData {
    type Item = (String, FormValue);
    type IntoIter = btree_map::IntoIter<String, FormValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
