//! Insertion-ordered grouping.
//!
//! [`OrderedGroups`] is a sequence of `(key, items)` pairs. Groups appear in the
//! order their key was first seen; items keep their input order within a group.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Group<T> {
    pub key: String,
    pub items: Vec<T>,
}

impl<T> Group<T> {
    /// The first `limit` items (or all of them when fewer).
    #[must_use]
    pub fn head(&self, limit: usize) -> &[T] {
        &self.items[..self.items.len().min(limit)]
    }

    /// How many items fall outside [`Group::head`].
    #[must_use]
    pub fn remainder(&self, limit: usize) -> usize {
        self.items.len().saturating_sub(limit)
    }

    /// Distinct values of `attr` (empty string included), in first-seen order.
    pub fn distinct<'a, F>(&'a self, attr: F) -> Vec<&'a str>
    where
        F: Fn(&'a T) -> &'a str,
    {
        let mut seen = Vec::new();
        for value in self.items.iter().map(attr) {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen
    }
}

#[derive(Debug, Clone)]
pub struct OrderedGroups<T> {
    groups: Vec<Group<T>>,
    index: HashMap<String, usize>,
}

impl<T> Default for OrderedGroups<T> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> OrderedGroups<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Group `items` by the key `key_of` returns for each.
    pub fn group_by<I, F>(items: I, key_of: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> String,
    {
        let mut groups = Self::new();
        for item in items {
            let key = key_of(&item);
            groups.push(key, item);
        }
        groups
    }

    pub fn push(&mut self, key: impl Into<String>, item: T) {
        let key = key.into();
        if let Some(&slot) = self.index.get(&key) {
            self.groups[slot].items.push(item);
            return;
        }
        self.index.insert(key.clone(), self.groups.len());
        self.groups.push(Group {
            key,
            items: vec![item],
        });
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Group<T>> {
        self.index.get(key).map(|&slot| &self.groups[slot])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group<T>> {
        self.groups.iter()
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.groups.iter().map(|group| group.key.as_str()).collect()
    }

    /// Consume into owned groups, in first-seen order.
    pub fn into_groups(self) -> std::vec::IntoIter<Group<T>> {
        self.groups.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedGroups<T> {
    type Item = &'a Group<T>;
    type IntoIter = std::slice::Iter<'a, Group<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
