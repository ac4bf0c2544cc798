//! Configuration loading and discovery.
//!
//! Configuration is merged from, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. User config: `~/.config/textly/config.toml`
//! 3. Project config: `textly.toml` / `.textly.toml`, found by walking up
//!    from the working directory (stopping at a `.git` boundary)
//! 4. Explicit files (e.g. from a `--config` flag)
//! 5. `TEXTLY_*` environment variables
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use textly_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::analyze::{
    DEFAULT_MAX_FILE_BYTES, DEFAULT_MAX_TEXT_CHARS, DEFAULT_PREVIEW_CHARS, Limits,
};
use crate::error::{ConfigError, ConfigResult};

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "textly";

/// The configuration for textly.
///
/// Deserialized from config files found during discovery, then overridden
/// by `TEXTLY_*` environment variables.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for log files (logging to file is off when unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Maximum text length for the analyze operation, in characters.
    pub max_text_chars: Option<usize>,
    /// Maximum upload size for the process-file operation, in bytes.
    pub max_file_bytes: Option<usize>,
    /// Extracted-text preview length, in characters.
    pub preview_chars: Option<usize>,
    /// Runtime toggle for PDF extraction. The `pdf` cargo feature must
    /// also be enabled for PDFs to be processed.
    pub enable_pdf: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            max_text_chars: None,
            max_file_bytes: None,
            preview_chars: None,
            enable_pdf: true,
        }
    }
}

impl Config {
    /// Fold this configuration into the boundary [`Limits`].
    ///
    /// PDF processing requires both the `pdf` cargo feature and the
    /// `enable_pdf` setting.
    pub fn limits(&self) -> Limits {
        Limits {
            max_text_chars: self.max_text_chars.unwrap_or(DEFAULT_MAX_TEXT_CHARS),
            max_file_bytes: self.max_file_bytes.unwrap_or(DEFAULT_MAX_FILE_BYTES),
            preview_chars: self.preview_chars.unwrap_or(DEFAULT_PREVIEW_CHARS),
            pdf_enabled: self.enable_pdf && cfg!(feature = "pdf"),
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from the XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from the XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/textly/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Disable the boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Returns the merged config alongside metadata about which files were
    /// loaded.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        // User config first (lowest precedence of file sources)
        if self.include_user_config
            && let Some(user_config) = find_user_config()
        {
            figment = figment.merge(Toml::file_exact(user_config.as_str()));
            sources.user_file = Some(user_config);
        }

        // Project configs (ordered low→high precedence)
        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = figment.merge(Toml::file_exact(pc.as_str()));
            }
            sources.project_files = project_configs;
        }

        // Explicit files
        for file in &self.explicit_files {
            figment = figment.merge(Toml::file_exact(file.as_str()));
        }
        sources.explicit_files = self.explicit_files;

        // Environment variables (highest precedence)
        // TEXTLY_LOG_LEVEL=debug, TEXTLY_ENABLE_PDF=false, etc.
        figment = figment.merge(Env::prefixed("TEXTLY_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(log_level = config.log_level.as_str(), "configuration loaded");
        Ok((config, sources))
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns the matches from the closest directory that has any,
    /// ordered low-to-high precedence: dotfile before regular file.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            let dotfile = dir.join(format!(".{APP_NAME}.toml"));
            if dotfile.is_file() {
                found.push(dotfile);
            }
            let regular = dir.join(format!("{APP_NAME}.toml"));
            if regular.is_file() {
                found.push(regular);
            }

            if !found.is_empty() {
                return found;
            }

            // Check for the boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }
}

/// Find user config in the XDG config directory.
fn find_user_config() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        return Utf8PathBuf::from_path_buf(config_path).ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert!(config.enable_pdf);
    }

    #[test]
    fn default_limits_fall_back_to_constants() {
        let limits = Config::default().limits();
        assert_eq!(limits.max_text_chars, DEFAULT_MAX_TEXT_CHARS);
        assert_eq!(limits.max_file_bytes, DEFAULT_MAX_FILE_BYTES);
        assert_eq!(limits.preview_chars, DEFAULT_PREVIEW_CHARS);
    }

    #[test]
    fn enable_pdf_false_disables_limits_gate() {
        let config = Config {
            enable_pdf: false,
            ..Config::default()
        };
        assert!(!config.limits().pdf_enabled);
    }

    #[test]
    fn loader_builds_with_defaults() {
        let loader = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker();

        let (config, sources) = loader.load().unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn single_file_overrides_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(
            &config_path,
            r#"log_level = "debug"
max_text_chars = 1000
"#,
        )
        .unwrap();

        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.max_text_chars, Some(1000));
        assert_eq!(sources.primary_file(), Some(config_path.as_path()));
    }

    #[test]
    fn later_file_overrides_earlier() {
        let tmp = TempDir::new().unwrap();

        let base_config = tmp.path().join("base.toml");
        fs::write(&base_config, r#"log_level = "warn""#).unwrap();

        let override_config = tmp.path().join("override.toml");
        fs::write(&override_config, r#"log_level = "error""#).unwrap();

        let base_config = Utf8PathBuf::try_from(base_config).unwrap();
        let override_config = Utf8PathBuf::try_from(override_config).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base_config)
            .with_file(&override_config)
            .load()
            .unwrap();

        // Later file wins
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn project_config_discovery() {
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("src").join("deep");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = project_dir.join(".textly.toml");
        fs::write(&config_path, r#"log_level = "debug""#).unwrap();

        let sub_dir = Utf8PathBuf::try_from(sub_dir).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&sub_dir)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!sources.project_files.is_empty());
    }

    #[test]
    fn boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();

        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();
        fs::create_dir_all(child.join(".git")).unwrap();

        // Config above the .git boundary must not be found.
        fs::write(parent.join("textly.toml"), r#"log_level = "error""#).unwrap();

        let work = Utf8PathBuf::try_from(work).unwrap();
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&work)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }
}
