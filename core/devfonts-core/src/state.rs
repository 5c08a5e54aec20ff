//! Session state for one browsing user and the actions that move it

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::assets::{AssetRequest, AssetResolver};
use crate::catalog::{Catalog, FontDescriptor};
use crate::compare::CompareSet;
use crate::error::SelectionError;
use crate::filter::{filter, FilterField, FilterState};
use crate::selection::SelectionState;

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    SetTheme { theme: String },
    SetLanguage { language: String },
    SetFilter { filter: FilterField },
    SetCompareMode { enabled: bool },
    ToggleCompare { font: String },
    SetCode { code: String },
    ResetCode,
}

/// Everything the browser tracks for a session.
///
/// Transitions take `&self` and hand back a new state; the receiver is never
/// modified, so earlier snapshots stay valid for whoever still holds them.
#[derive(Debug, Clone)]
pub struct BrowserState {
    catalog: Arc<Catalog>,
    selection: SelectionState,
    filters: FilterState,
    compare_mode: bool,
    compare: CompareSet,
    code: String,
}

/// A font as the render surface sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontView {
    #[serde(flatten)]
    pub font: FontDescriptor,
    pub in_compare: bool,
}

/// Snapshot handed to a render surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub theme: String,
    pub language: String,
    pub mode: String,
    pub code: String,
    pub filters: FilterState,
    pub compare_mode: bool,
    pub compare: CompareSet,
    pub compare_summary: String,
    /// Number of fonts shown.
    pub count: usize,
    pub fonts: Vec<FontView>,
}

impl BrowserState {
    pub fn new(catalog: Arc<Catalog>) -> Result<Self, SelectionError> {
        let selection = SelectionState::for_catalog(&catalog)?;
        let code = catalog.code.clone();

        Ok(Self {
            catalog,
            selection,
            filters: FilterState::default(),
            compare_mode: false,
            compare: CompareSet::new(),
            code,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn mode(&self) -> &str {
        self.selection.mode()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn compare_mode(&self) -> bool {
        self.compare_mode
    }

    pub fn compare(&self) -> &CompareSet {
        &self.compare
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn apply(&self, action: Action) -> Result<Self, SelectionError> {
        log::debug!("applying {action:?}");
        match action {
            Action::SetTheme { theme } => self.with_theme(&theme),
            Action::SetLanguage { language } => self.with_language(&language),
            Action::SetFilter { filter } => Ok(self.with_filter_field(filter)),
            Action::SetCompareMode { enabled } => Ok(self.with_compare_mode(enabled)),
            Action::ToggleCompare { font } => Ok(self.toggle_compare(&font)),
            Action::SetCode { code } => Ok(self.with_code(code)),
            Action::ResetCode => Ok(self.with_code(self.catalog.code.clone())),
        }
    }

    pub fn with_theme(&self, theme: &str) -> Result<Self, SelectionError> {
        let selection = self.selection.with_theme(&self.catalog, theme)?;
        Ok(Self {
            selection,
            ..self.clone()
        })
    }

    /// Switch language; the highlighting mode follows the language.
    pub fn with_language(&self, language: &str) -> Result<Self, SelectionError> {
        let selection = self.selection.with_language(&self.catalog, language)?;
        Ok(Self {
            selection,
            ..self.clone()
        })
    }

    pub fn with_filters(&self, filters: FilterState) -> Self {
        Self {
            filters,
            ..self.clone()
        }
    }

    pub fn with_filter_field(&self, field: FilterField) -> Self {
        self.with_filters(self.filters.with_field(field))
    }

    pub fn with_compare_mode(&self, enabled: bool) -> Self {
        Self {
            compare_mode: enabled,
            ..self.clone()
        }
    }

    pub fn toggle_compare(&self, display_name: &str) -> Self {
        Self {
            compare: self.compare.toggled(display_name),
            ..self.clone()
        }
    }

    pub fn with_code(&self, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..self.clone()
        }
    }

    /// Fonts the render surface should draw, in catalog order.
    pub fn visible_fonts(&self) -> Vec<&FontDescriptor> {
        filter(
            &self.catalog.fonts,
            &self.filters,
            self.compare_mode,
            &self.compare,
        )
    }

    pub fn assets(&self, resolver: &AssetResolver) -> AssetRequest {
        resolver.resolve(self.selection.mode(), self.selection.theme())
    }

    pub fn view(&self) -> ViewModel {
        let fonts: Vec<FontView> = self
            .visible_fonts()
            .into_iter()
            .map(|font| FontView {
                in_compare: self.compare.contains(&font.display_name),
                font: font.clone(),
            })
            .collect();

        ViewModel {
            theme: self.selection.theme().to_string(),
            language: self.selection.language().to_string(),
            mode: self.selection.mode().to_string(),
            code: self.code.clone(),
            filters: self.filters.clone(),
            compare_mode: self.compare_mode,
            compare: self.compare.clone(),
            compare_summary: self.compare.summary(),
            count: fonts.len(),
            fonts,
        }
    }
}
