//! Error types for devfonts-core

use thiserror::Error;

/// Rejected theme or language selection. The state it was raised against is
/// left as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("catalog defines no themes")]
    NoThemes,

    #[error("catalog defines no languages")]
    NoLanguages,
}
