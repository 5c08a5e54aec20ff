//! Copy-on-write set of fonts picked for side-by-side comparison

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const EMPTY_SUMMARY: &str = "add fonts to compare";

#[derive(Debug, Clone, Default)]
struct Members {
    lookup: HashSet<String>,
    order: Vec<String>,
}

/// Display names selected for comparison.
///
/// Cloning is cheap: clones share storage until one of them is toggled, and a
/// toggle always returns a new set, so a value handed out earlier never
/// changes underneath its holder.
#[derive(Debug, Clone, Default)]
pub struct CompareSet {
    members: Arc<Members>,
}

impl CompareSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// New set with `key` removed if present, added otherwise.
    #[must_use]
    pub fn toggled(&self, key: &str) -> Self {
        let mut members = (*self.members).clone();
        if members.lookup.remove(key) {
            members.order.retain(|name| name != key);
        } else {
            members.lookup.insert(key.to_string());
            members.order.push(key.to_string());
        }
        Self {
            members: Arc::new(members),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.members.lookup.contains(key)
    }

    pub fn len(&self) -> usize {
        self.members.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.lookup.is_empty()
    }

    /// Members in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.order.iter().map(String::as_str)
    }

    /// Human readable line for the compare bar.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            EMPTY_SUMMARY.to_string()
        } else {
            self.members.order.join(", ")
        }
    }

    /// True when both values share the same storage.
    pub fn shares_storage_with(&self, other: &CompareSet) -> bool {
        Arc::ptr_eq(&self.members, &other.members)
    }
}

impl PartialEq for CompareSet {
    fn eq(&self, other: &Self) -> bool {
        self.members.lookup == other.members.lookup
    }
}

impl Eq for CompareSet {}

impl<S: Into<String>> FromIterator<S> for CompareSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut members = Members::default();
        for key in iter {
            let key = key.into();
            if members.lookup.insert(key.clone()) {
                members.order.push(key);
            }
        }
        Self {
            members: Arc::new(members),
        }
    }
}

impl Serialize for CompareSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.members.order.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CompareSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Vec<String> = Vec::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}
