//! devfonts-core: the logic behind the programming font browser
//!
//! The browser shows a fixed catalog of programming fonts, each previewed with
//! the same sample code in a chosen highlighting theme and language. Users
//! narrow the list down and pick fonts to compare side by side. This crate
//! holds that logic and nothing about drawing it.
//!
//! - [`catalog`]: fonts, languages and themes loaded once at startup
//! - [`filter`]: the free/ligature/name filters and the catalog filter
//! - [`compare`]: copy-on-write set of fonts picked for comparison
//! - [`selection`]: theme and language choice, validated against the catalog
//! - [`state`]: the session container and the actions that move it
//! - [`assets`]: URLs of the highlighting mode and theme stylesheet
//!
//! ```rust
//! use std::sync::Arc;
//! use devfonts_core::catalog::Catalog;
//! use devfonts_core::filter::FilterField;
//! use devfonts_core::state::BrowserState;
//!
//! let state = BrowserState::new(Arc::new(Catalog::builtin()?))?;
//! let state = state
//!     .with_filter_field(FilterField::Ligatures(true))
//!     .toggle_compare("Fira Code")
//!     .with_compare_mode(true);
//!
//! let names: Vec<&str> = state
//!     .visible_fonts()
//!     .iter()
//!     .map(|f| f.display_name.as_str())
//!     .collect();
//! assert_eq!(names, vec!["Fira Code"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assets;
pub mod catalog;
pub mod compare;
pub mod error;
pub mod filter;
pub mod output;
pub mod selection;
pub mod state;
