//! Configuration management for mdsite.
//!
//! Parses `mdsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. The conventional
//! paths (`docs`, `_site`, `_site/rust`) are defaults here rather than
//! hard-coded call sites, so the conversion and injection logic stays
//! path-agnostic.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdsite.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override Markdown source directory.
    pub source_dir: Option<PathBuf>,
    /// Override site output directory.
    pub output_dir: Option<PathBuf>,
    /// Override project root for allow-listed files.
    pub root_dir: Option<PathBuf>,
    /// Override rustdoc HTML directory for injection.
    pub rustdoc_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site conversion configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Rustdoc injection configuration.
    rustdoc: RustdocConfigRaw,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Resolved rustdoc configuration (set after loading).
    #[serde(skip)]
    pub rustdoc_resolved: RustdocConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
    root_dir: Option<String>,
}

/// Resolved site conversion configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Markdown source tree.
    pub source_dir: PathBuf,
    /// Output root for the generated site.
    pub output_dir: PathBuf,
    /// Project root holding the allow-listed files.
    pub root_dir: PathBuf,
}

/// Raw rustdoc configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RustdocConfigRaw {
    dir: Option<String>,
}

/// Resolved rustdoc injection configuration.
#[derive(Debug, Default)]
pub struct RustdocConfig {
    /// Root of the generated rustdoc HTML tree.
    pub dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a configured path string to be non-empty.
fn require_non_empty(value: Option<&str>, field: &str) -> Result<(), ConfigError> {
    if value.is_some_and(str::is_empty) {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdsite.toml` in current directory and
    /// parents, falling back to defaults relative to the current directory.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.site_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.site_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(root_dir) = &settings.root_dir {
            self.site_resolved.root_dir.clone_from(root_dir);
        }
        if let Some(rustdoc_dir) = &settings.rustdoc_dir {
            self.rustdoc_resolved.dir.clone_from(rustdoc_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            rustdoc: RustdocConfigRaw::default(),
            site_resolved: SiteConfig {
                source_dir: base.join("docs"),
                output_dir: base.join("_site"),
                root_dir: base.to_path_buf(),
            },
            rustdoc_resolved: RustdocConfig {
                dir: base.join("_site/rust"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.validate()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate raw configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any configured path is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(self.site.source_dir.as_deref(), "site.source_dir")?;
        require_non_empty(self.site.output_dir.as_deref(), "site.output_dir")?;
        require_non_empty(self.site.root_dir.as_deref(), "site.root_dir")?;
        require_non_empty(self.rustdoc.dir.as_deref(), "rustdoc.dir")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.site_resolved = SiteConfig {
            source_dir: resolve(self.site.source_dir.as_deref(), "docs"),
            output_dir: resolve(self.site.output_dir.as_deref(), "_site"),
            root_dir: resolve(self.site.root_dir.as_deref(), "."),
        };
        self.rustdoc_resolved = RustdocConfig {
            dir: resolve(self.rustdoc.dir.as_deref(), "_site/rust"),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(config.site_resolved.output_dir, PathBuf::from("/test/_site"));
        assert_eq!(config.site_resolved.root_dir, PathBuf::from("/test"));
        assert_eq!(
            config.rustdoc_resolved.dir,
            PathBuf::from("/test/_site/rust")
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.site.source_dir.is_none());
        assert!(config.rustdoc.dir.is_none());
    }

    #[test]
    fn test_resolve_paths_defaults() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.site_resolved.source_dir,
            PathBuf::from("/project/docs")
        );
        assert_eq!(
            config.site_resolved.output_dir,
            PathBuf::from("/project/_site")
        );
        assert_eq!(
            config.rustdoc_resolved.dir,
            PathBuf::from("/project/_site/rust")
        );
    }

    #[test]
    fn test_resolve_paths_configured() {
        let toml = r#"
[site]
source_dir = "documentation"
output_dir = "public"

[rustdoc]
dir = "public/api"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.site_resolved.source_dir,
            PathBuf::from("/project/documentation")
        );
        assert_eq!(
            config.site_resolved.output_dir,
            PathBuf::from("/project/public")
        );
        assert_eq!(
            config.rustdoc_resolved.dir,
            PathBuf::from("/project/public/api")
        );
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.site_resolved.source_dir,
            PathBuf::from("/custom/docs")
        );
        // Other paths unchanged
        assert_eq!(config.site_resolved.output_dir, PathBuf::from("/test/_site"));
    }

    #[test]
    fn test_apply_cli_settings_rustdoc_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            rustdoc_dir: Some(PathBuf::from("target/doc")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.rustdoc_resolved.dir, PathBuf::from("target/doc"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.site_resolved.source_dir, before.site_resolved.source_dir);
        assert_eq!(config.rustdoc_resolved.dir, before.rustdoc_resolved.dir);
    }

    #[test]
    fn test_validate_empty_path_rejected() {
        let config: Config = toml::from_str("[site]\nsource_dir = \"\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.source_dir"));
    }

    #[test]
    fn test_validate_default_passes() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/mdsite.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
