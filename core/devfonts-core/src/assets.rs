//! Highlighting assets for the active theme and language

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// CodeMirror release the preview assets are taken from.
pub const DEFAULT_ASSET_BASE: &str = "https://cdnjs.cloudflare.com/ajax/libs/codemirror/5.52.2";

/// The pair of resources a preview needs: the mode script and the theme stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRequest {
    pub mode: String,
    pub theme: String,
    pub mode_script: String,
    pub theme_stylesheet: String,
}

/// Builds resource URLs from a mode identifier and a theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    base: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

impl AssetResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn resolve(&self, mode: &str, theme: &str) -> AssetRequest {
        AssetRequest {
            mode: mode.to_string(),
            theme: theme.to_string(),
            mode_script: format!("{}/mode/{mode}/{mode}.min.js", self.base),
            theme_stylesheet: format!("{}/theme/{theme}.css", self.base),
        }
    }
}

/// Something that can bring the assets into the render surface.
pub trait AssetLoader {
    fn load(&self, request: &AssetRequest) -> Result<()>;
}

/// Loader for surfaces that fetch the assets themselves; it only records the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAssetLoader;

impl AssetLoader for LogAssetLoader {
    fn load(&self, request: &AssetRequest) -> Result<()> {
        log::info!(
            "assets requested: {} {}",
            request.mode_script,
            request.theme_stylesheet
        );
        Ok(())
    }
}

/// Hand the request to `loader` without letting a failure escape.
pub fn load_best_effort(loader: &dyn AssetLoader, request: &AssetRequest) {
    if let Err(err) = loader.load(request) {
        log::warn!(
            "failed to load assets for mode {} / theme {}: {err:#}",
            request.mode,
            request.theme
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn resolves_codemirror_paths() {
        let request = AssetResolver::default().resolve("python", "dracula");
        assert_eq!(
            request.mode_script,
            "https://cdnjs.cloudflare.com/ajax/libs/codemirror/5.52.2/mode/python/python.min.js"
        );
        assert_eq!(
            request.theme_stylesheet,
            "https://cdnjs.cloudflare.com/ajax/libs/codemirror/5.52.2/theme/dracula.css"
        );
    }

    #[test]
    fn trailing_slash_in_base_is_ignored() {
        let request = AssetResolver::new("http://localhost/cm/").resolve("go", "nord");
        assert_eq!(request.mode_script, "http://localhost/cm/mode/go/go.min.js");
    }

    struct FailingLoader {
        calls: Cell<usize>,
    }

    impl AssetLoader for FailingLoader {
        fn load(&self, _request: &AssetRequest) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            Err(anyhow!("offline"))
        }
    }

    #[test]
    fn best_effort_swallows_failures() {
        let loader = FailingLoader {
            calls: Cell::new(0),
        };
        let request = AssetResolver::default().resolve("rust", "nord");

        load_best_effort(&loader, &request);

        assert_eq!(loader.calls.get(), 1, "no retries");
    }
}
