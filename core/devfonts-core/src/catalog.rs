//! Static font catalog and its loaders

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// One programming font the browser can preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDescriptor {
    /// CSS family name; unique across the catalog.
    pub family_name: String,
    /// Name shown to the user and used as the compare key.
    pub display_name: String,
    /// Any price marks the font as paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default)]
    pub ligatures: bool,
}

impl FontDescriptor {
    pub fn new(family_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            family_name: family_name.into(),
            display_name: display_name.into(),
            price: None,
            ligatures: false,
        }
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_ligatures(mut self, yes: bool) -> Self {
        self.ligatures = yes;
        self
    }

    pub fn is_free(&self) -> bool {
        self.price.is_none()
    }
}

/// A language the preview can highlight, with the name of its highlighting mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDescriptor {
    pub name: String,
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub name: String,
}

/// Everything the browser knows at startup. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub fonts: Vec<FontDescriptor>,
    #[serde(default)]
    pub languages: Vec<LanguageDescriptor>,
    #[serde(default)]
    pub themes: Vec<ThemeDescriptor>,
    /// Sample source shown in every preview.
    #[serde(default)]
    pub code: String,
}

impl Catalog {
    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("parsing built-in catalog")
    }

    /// Parse and validate a catalog document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        log::debug!(
            "catalog loaded: {} fonts, {} languages, {} themes",
            catalog.fonts.len(),
            catalog.languages.len(),
            catalog.themes.len()
        );
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing catalog {}", path.display()))
    }

    pub fn language(&self, name: &str) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|l| l.name == name)
    }

    pub fn theme(&self, name: &str) -> Option<&ThemeDescriptor> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Highlighting mode for a language name, `None` when the language is unknown.
    pub fn mode_for(&self, language: &str) -> Option<&str> {
        self.language(language).map(|l| l.mode.as_str())
    }

    pub fn font_by_display_name(&self, display_name: &str) -> Option<&FontDescriptor> {
        self.fonts.iter().find(|f| f.display_name == display_name)
    }

    fn validate(&self) -> Result<()> {
        ensure_unique(self.fonts.iter().map(|f| f.family_name.as_str()), "font family")?;
        ensure_unique(self.languages.iter().map(|l| l.name.as_str()), "language")?;
        ensure_unique(self.themes.iter().map(|t| t.name.as_str()), "theme")?;
        Ok(())
    }
}

fn ensure_unique<'a>(names: impl Iterator<Item = &'a str>, what: &str) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(anyhow!("duplicate {what} name: {name}"));
        }
    }
    Ok(())
}

/// Display names containing `input` case-insensitively, in catalog order.
pub fn suggest<'a>(catalog: &'a Catalog, input: &str) -> Vec<&'a str> {
    let needle = input.to_lowercase();
    catalog
        .fonts
        .iter()
        .map(|f| f.display_name.as_str())
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses_and_has_defaults() {
        let catalog = Catalog::builtin().expect("builtin");
        assert!(!catalog.fonts.is_empty());
        assert!(catalog.theme("material-palenight").is_some());
        assert_eq!(catalog.mode_for("JavaScript"), Some("javascript"));
        assert!(!catalog.code.is_empty());
    }

    #[test]
    fn rejects_duplicate_family_names() {
        let raw = r#"{"fonts":[
            {"familyName":"A","displayName":"A"},
            {"familyName":"A","displayName":"A2"}
        ]}"#;
        let err = Catalog::from_json(raw).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate font family name: A"));
    }

    #[test]
    fn missing_price_means_free() {
        let raw = r#"{"fonts":[
            {"familyName":"A","displayName":"A","ligatures":true},
            {"familyName":"B","displayName":"B","price":"$10"}
        ]}"#;
        let catalog = Catalog::from_json(raw).expect("parse");
        assert!(catalog.fonts[0].is_free());
        assert!(!catalog.fonts[1].is_free());
        assert!(!catalog.fonts[1].ligatures);
    }

    #[test]
    fn suggest_is_case_insensitive_and_ordered() {
        let catalog = Catalog {
            fonts: vec![
                FontDescriptor::new("Fira Code", "Fira Code"),
                FontDescriptor::new("Hack", "Hack"),
                FontDescriptor::new("Fira Mono", "Fira Mono"),
            ],
            ..Catalog::default()
        };
        assert_eq!(suggest(&catalog, "FIRA"), vec!["Fira Code", "Fira Mono"]);
        assert_eq!(suggest(&catalog, "").len(), 3);
    }
}
