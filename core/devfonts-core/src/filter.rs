//! Filter state and the catalog filter

use serde::{Deserialize, Serialize};

use crate::catalog::FontDescriptor;
use crate::compare::CompareSet;

/// User-facing filters. Always replaced as a whole value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Only fonts without a price.
    pub free: bool,
    /// Only fonts with ligature support.
    pub ligatures: bool,
    /// Case-insensitive substring of the display name; empty disables it.
    pub name: String,
}

/// A single filter field together with its new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FilterField {
    Free(bool),
    Ligatures(bool),
    Name(String),
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_free(mut self, yes: bool) -> Self {
        self.free = yes;
        self
    }

    pub fn require_ligatures(mut self, yes: bool) -> Self {
        self.ligatures = yes;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Copy of this state with exactly one field replaced.
    pub fn with_field(&self, field: FilterField) -> Self {
        let mut next = self.clone();
        match field {
            FilterField::Free(yes) => next.free = yes,
            FilterField::Ligatures(yes) => next.ligatures = yes,
            FilterField::Name(name) => next.name = name,
        }
        next
    }

    /// Check the font against the free, ligature and name filters.
    pub fn matches(&self, font: &FontDescriptor) -> bool {
        if self.free && !font.is_free() {
            return false;
        }

        if self.ligatures && !font.ligatures {
            return false;
        }

        if !self.name.is_empty()
            && !font
                .display_name
                .to_lowercase()
                .contains(&self.name.to_lowercase())
        {
            return false;
        }

        true
    }
}

/// Fonts retained by every active criterion, in catalog order.
///
/// With `compare_mode` on, only fonts whose display name is in `compare` are
/// considered; the other filters still apply on top.
pub fn filter<'a>(
    fonts: &'a [FontDescriptor],
    state: &FilterState,
    compare_mode: bool,
    compare: &CompareSet,
) -> Vec<&'a FontDescriptor> {
    fonts
        .iter()
        .filter(|font| !compare_mode || compare.contains(&font.display_name))
        .filter(|font| state.matches(font))
        .collect()
}
