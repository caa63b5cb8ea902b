//! Driver configuration.

use std::path::PathBuf;

/// Environment variable naming a binding manifest when `--manifest` is not
/// given.
pub const MANIFEST_ENV: &str = "COLLIDE_MANIFEST";

/// Configuration for a demo run.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Binding manifest to load instead of the built-in table.
    pub manifest: Option<PathBuf>,
    /// Print the bound pairs before running the script.
    pub list_bindings: bool,
}

impl AppConfig {
    /// Create a config that uses the built-in bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load bindings from `path`.
    #[must_use]
    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest = Some(path.into());
        self
    }

    /// Toggle printing of the bound pairs.
    #[must_use]
    pub fn with_list_bindings(mut self, list: bool) -> Self {
        self.list_bindings = list;
        self
    }

    /// Fill in the manifest from [`MANIFEST_ENV`] if none was set.
    #[must_use]
    pub fn with_env_fallback(self) -> Self {
        self.with_env_value(std::env::var(MANIFEST_ENV).ok())
    }

    fn with_env_value(mut self, value: Option<String>) -> Self {
        if self.manifest.is_none() {
            self.manifest = value.filter(|v| !v.is_empty()).map(PathBuf::from);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_builtin_bindings() {
        let config = AppConfig::new();
        assert!(config.manifest.is_none());
        assert!(!config.list_bindings);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new()
            .with_manifest("bindings.json")
            .with_list_bindings(true);
        assert_eq!(config.manifest, Some(PathBuf::from("bindings.json")));
        assert!(config.list_bindings);
    }

    #[test]
    fn test_env_value_fills_missing_manifest() {
        let config = AppConfig::new().with_env_value(Some("from_env.json".into()));
        assert_eq!(config.manifest, Some(PathBuf::from("from_env.json")));
    }

    #[test]
    fn test_explicit_manifest_beats_env() {
        let config = AppConfig::new()
            .with_manifest("cli.json")
            .with_env_value(Some("from_env.json".into()));
        assert_eq!(config.manifest, Some(PathBuf::from("cli.json")));
    }

    #[test]
    fn test_empty_env_value_ignored() {
        let config = AppConfig::new().with_env_value(Some(String::new()));
        assert!(config.manifest.is_none());
    }
}
