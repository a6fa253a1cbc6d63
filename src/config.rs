use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocsPublishError, Result};

/// Represents the complete configuration for docs-publish.
///
/// Contains the site repository paths, the version selection policy, and
/// the component repositories whose documentation gets published.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub components: Vec<ComponentConfig>,
}

/// Paths and settings for the site generator and the publishing repository.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SiteConfig {
    /// Repository holding the Hugo site sources (its `hugo/` directory).
    #[serde(default = "default_generator_repo")]
    pub generator_repo: PathBuf,

    /// Repository the generated site is committed to.
    #[serde(default = "default_output_repo")]
    pub output_repo: PathBuf,

    /// Name or path of the hugo binary.
    #[serde(default = "default_hugo_bin")]
    pub hugo_bin: String,

    /// Commit message used on the publishing repository.
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

fn default_generator_repo() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_repo() -> PathBuf {
    PathBuf::from("../generated-website")
}

fn default_hugo_bin() -> String {
    "hugo".to_string()
}

fn default_commit_message() -> String {
    "updates website".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            generator_repo: default_generator_repo(),
            output_repo: default_output_repo(),
            hugo_bin: default_hugo_bin(),
            commit_message: default_commit_message(),
        }
    }
}

/// Which versions of each component get a published snapshot.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SelectionConfig {
    #[serde(default)]
    pub mode: SelectionModeConfig,

    /// Number of most-recent minor version lines whose documentation
    /// stays published (the version dropdown window).
    #[serde(default = "default_window_size")]
    pub window_size: usize,
}

fn default_window_size() -> usize {
    3
}

impl Default for SelectionConfig {
    fn default() -> Self {
        SelectionConfig {
            mode: SelectionModeConfig::default(),
            window_size: default_window_size(),
        }
    }
}

/// Selection policy. `derived-window` reads live repository tags;
/// `explicit-list` reads `{component}-doc-versions.txt` from the
/// generator repository.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionModeConfig {
    #[default]
    DerivedWindow,
    ExplicitList,
}

/// One upstream component repository whose docs tree is published.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ComponentConfig {
    /// Component name, used in content directory names and data files.
    pub name: String,

    /// Path to the component's working copy.
    pub repo: PathBuf,

    /// Branch holding in-development documentation.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Single-line file in the component repo declaring the
    /// in-development version.
    #[serde(default = "default_version_file")]
    pub version_file: String,

    /// Documentation directory inside the component repo.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_version_file() -> String {
    "VERSION".to_string()
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site: SiteConfig::default(),
            selection: SelectionConfig::default(),
            components: Vec::new(),
        }
    }
}

impl Config {
    /// Apply environment overrides for the parameters the CI pipeline
    /// traditionally passes through the environment.
    ///
    /// Recognized variables:
    /// - `SOURCE_PATH` - generator repository path
    /// - `DOCS_OUTPUT_PATH` - publishing repository path
    /// - `RELEASES_TO_INCLUDE` - window size
    /// - `{NAME}_PATH` - per-component repository path (name uppercased)
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(path) = env::var("SOURCE_PATH") {
            self.site.generator_repo = PathBuf::from(path);
        }
        if let Ok(path) = env::var("DOCS_OUTPUT_PATH") {
            self.site.output_repo = PathBuf::from(path);
        }
        if let Ok(window) = env::var("RELEASES_TO_INCLUDE") {
            self.selection.window_size = window.parse().map_err(|_| {
                DocsPublishError::config(format!(
                    "RELEASES_TO_INCLUDE must be a positive integer, got '{}'",
                    window
                ))
            })?;
        }

        for component in &mut self.components {
            let var = format!("{}_PATH", component.name.to_uppercase());
            if let Ok(path) = env::var(&var) {
                component.repo = PathBuf::from(path);
            }
        }

        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `docspublish.toml` in current directory
/// 3. `.docspublish.toml` in user config directory
/// 4. Default configuration if no file found
///
/// Environment overrides are applied on top of whichever source won.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        Some(fs::read_to_string(path)?)
    } else if Path::new("./docspublish.toml").exists() {
        Some(fs::read_to_string("./docspublish.toml")?)
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".docspublish.toml");
        if config_path.exists() {
            Some(fs::read_to_string(config_path)?)
        } else {
            None
        }
    } else {
        None
    };

    let mut config = match config_str {
        Some(contents) => toml::from_str(&contents)
            .map_err(|e| DocsPublishError::config(format!("cannot parse config: {}", e)))?,
        None => Config::default(),
    };

    config.apply_env_overrides()?;
    Ok(config)
}
