//! Theme and language selection

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::SelectionError;

pub const DEFAULT_THEME: &str = "material-palenight";
pub const DEFAULT_LANGUAGE: &str = "JavaScript";

/// Currently chosen theme and language. Both names exist in the catalog the
/// selection was built against; `mode` is the highlighting mode of `language`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    theme: String,
    language: String,
    mode: String,
}

impl SelectionState {
    /// Default pair, falling back to the first entries when the catalog does
    /// not carry the defaults.
    pub fn for_catalog(catalog: &Catalog) -> Result<Self, SelectionError> {
        let theme = match catalog.theme(DEFAULT_THEME) {
            Some(theme) => theme,
            None => catalog.themes.first().ok_or(SelectionError::NoThemes)?,
        };
        let language = match catalog.language(DEFAULT_LANGUAGE) {
            Some(language) => language,
            None => catalog.languages.first().ok_or(SelectionError::NoLanguages)?,
        };

        Ok(Self {
            theme: theme.name.clone(),
            language: language.name.clone(),
            mode: language.mode.clone(),
        })
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn with_theme(&self, catalog: &Catalog, name: &str) -> Result<Self, SelectionError> {
        if catalog.theme(name).is_none() {
            return Err(SelectionError::UnknownTheme(name.to_string()));
        }
        Ok(Self {
            theme: name.to_string(),
            ..self.clone()
        })
    }

    pub fn with_language(&self, catalog: &Catalog, name: &str) -> Result<Self, SelectionError> {
        let language = catalog
            .language(name)
            .ok_or_else(|| SelectionError::UnknownLanguage(name.to_string()))?;
        Ok(Self {
            theme: self.theme.clone(),
            language: language.name.clone(),
            mode: language.mode.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LanguageDescriptor, ThemeDescriptor};

    fn small_catalog() -> Catalog {
        Catalog {
            languages: vec![
                LanguageDescriptor {
                    name: "Rust".into(),
                    mode: "rust".into(),
                },
                LanguageDescriptor {
                    name: "Python".into(),
                    mode: "python".into(),
                },
            ],
            themes: vec![
                ThemeDescriptor {
                    name: "nord".into(),
                },
                ThemeDescriptor {
                    name: "dracula".into(),
                },
            ],
            ..Catalog::default()
        }
    }

    #[test]
    fn falls_back_to_first_entries() {
        let selection = SelectionState::for_catalog(&small_catalog()).expect("selection");
        assert_eq!(selection.theme(), "nord");
        assert_eq!(selection.language(), "Rust");
        assert_eq!(selection.mode(), "rust");
    }

    #[test]
    fn setters_replace_one_field() {
        let catalog = small_catalog();
        let selection = SelectionState::for_catalog(&catalog).expect("selection");

        let themed = selection.with_theme(&catalog, "dracula").expect("theme");
        assert_eq!(themed.theme(), "dracula");
        assert_eq!(themed.language(), "Rust");

        assert_eq!(themed.mode(), "rust");

        let spoken = themed.with_language(&catalog, "Python").expect("language");
        assert_eq!(spoken.theme(), "dracula");
        assert_eq!(spoken.language(), "Python");
        assert_eq!(spoken.mode(), "python");
    }

    #[test]
    fn unknown_names_are_rejected() {
        let catalog = small_catalog();
        let selection = SelectionState::for_catalog(&catalog).expect("selection");

        assert_eq!(
            selection.with_theme(&catalog, "solarized"),
            Err(SelectionError::UnknownTheme("solarized".into()))
        );
        assert_eq!(
            selection.with_language(&catalog, "Cobol"),
            Err(SelectionError::UnknownLanguage("Cobol".into()))
        );
    }

    #[test]
    fn empty_catalog_has_no_selection() {
        assert_eq!(
            SelectionState::for_catalog(&Catalog::default()),
            Err(SelectionError::NoThemes)
        );
    }
}
