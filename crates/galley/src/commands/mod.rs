//! CLI commands and shared configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use galley_checks::config::DEFAULT_PLACEHOLDER;
use galley_checks::HarnessConfig;
use serde::Deserialize;

pub mod hash;
pub mod run;

/// Configuration file structure (galley.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    site: SiteConfig,
    #[serde(default)]
    paths: PathsConfig,
    #[serde(default)]
    check: CheckConfig,
}

#[derive(Debug, Deserialize)]
struct SiteConfig {
    #[serde(default = "default_site_dir")]
    dir: String,
    #[serde(default = "default_project")]
    project: String,
    #[serde(default = "default_command")]
    command: String,
}

#[derive(Debug, Deserialize)]
struct PathsConfig {
    #[serde(default = "default_docs_dir")]
    docs: String,
    #[serde(default = "default_assets_dir")]
    assets: String,
    #[serde(default = "default_output_dir")]
    output: String,
    #[serde(default = "default_static_css_dir")]
    static_css: String,
    #[serde(default = "default_baseline_css")]
    baseline_css: String,
}

#[derive(Debug, Deserialize)]
struct CheckConfig {
    #[serde(default = "default_placeholder")]
    placeholder: String,
    #[serde(default)]
    keep_output: bool,
}

fn default_site_dir() -> String {
    "website".to_string()
}
fn default_project() -> String {
    "site".to_string()
}
fn default_command() -> String {
    "yarn build".to_string()
}
fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_assets_dir() -> String {
    "docs/assets".to_string()
}
fn default_output_dir() -> String {
    "website/build".to_string()
}
fn default_static_css_dir() -> String {
    "website/static/css".to_string()
}
fn default_baseline_css() -> String {
    "website/static/css/main.css".to_string()
}
fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dir: default_site_dir(),
            project: default_project(),
            command: default_command(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            docs: default_docs_dir(),
            assets: default_assets_dir(),
            output: default_output_dir(),
            static_css: default_static_css_dir(),
            baseline_css: default_baseline_css(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            keep_output: false,
        }
    }
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

impl ConfigFile {
    /// Convert the file representation into the harness configuration.
    pub fn into_harness_config(self) -> HarnessConfig {
        HarnessConfig {
            site_dir: PathBuf::from(self.site.dir),
            project_name: self.site.project,
            build_command: self
                .site
                .command
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            docs_dir: PathBuf::from(self.paths.docs),
            assets_dir: PathBuf::from(self.paths.assets),
            output_dir: PathBuf::from(self.paths.output),
            static_css_dir: PathBuf::from(self.paths.static_css),
            baseline_css: PathBuf::from(self.paths.baseline_css),
            placeholder: self.check.placeholder,
            keep_output: self.check.keep_output,
        }
    }
}
