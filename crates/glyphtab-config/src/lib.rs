//! # glyphtab configuration
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments (applied by the binary)
//! 2. Environment variables (`GLYPHTAB_FONT__SPACE_WIDTH=3`)
//! 3. An explicit `--config` file, or else:
//!    - project config (`./glyphtab.toml`)
//!    - user config (`~/.config/glyphtab/config.toml`)
//! 4. Built-in defaults

use anyhow::Context;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use glyphtab_codegen::{EmitOptions, OutputFormat};
use glyphtab_core::{Charset, GeneratorOptions, InkRule, DEFAULT_CHARSET, DEFAULT_SPACE_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the per-project config
pub const PROJECT_CONFIG: &str = "glyphtab.toml";

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "GLYPHTAB_";

/// Charset override, read verbatim: figment would parse `0123456789` as a
/// number and `{}[]` as a table or array
pub const CHARSET_ENV: &str = "GLYPHTAB_FONT__CHARSET";

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "glyphtab", "glyphtab")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/glyphtab"))
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Font sheet layout
    pub font: FontConfig,
    /// Ink predicate
    pub ink: InkRule,
    /// Listing target
    pub output: OutputConfig,
}

/// What the font sheet contains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Characters in sheet order, left to right
    pub charset: String,
    /// Width of the synthesized space glyph
    pub space_width: usize,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            charset: DEFAULT_CHARSET.to_string(),
            space_width: DEFAULT_SPACE_WIDTH,
        }
    }
}

/// Where and how the listing is written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Target language
    pub format: OutputFormat,
    /// Cells per table entry (format default when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    /// Listing file (stdout when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Generator inputs, with the charset validated
    pub fn generator_options(&self) -> glyphtab_core::Result<GeneratorOptions> {
        Ok(GeneratorOptions {
            charset: Charset::new(&self.font.charset)?,
            space_width: self.font.space_width,
            ink: self.ink,
        })
    }

    /// Emitter inputs for a listing of `source`
    pub fn emit_options(&self, source: &Path) -> EmitOptions {
        EmitOptions {
            format: self.output.format,
            capacity: self.output.capacity,
            source_name: source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| source.display().to_string()),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Collects configuration layers
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    explicit: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
    use_env: bool,
}

impl ConfigLoader {
    /// Default search: user config, then project config
    pub fn new() -> Self {
        Self {
            explicit: None,
            search_paths: vec![config_dir().join("config.toml"), PathBuf::from(PROJECT_CONFIG)],
            use_env: true,
        }
    }

    /// Use only this file; it must exist
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some(path.into());
        self
    }

    /// Replace the optional search paths
    pub fn with_search_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.search_paths = paths;
        self
    }

    /// Skip `GLYPHTAB_*` environment variables
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    fn figment(&self) -> anyhow::Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        match &self.explicit {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("config file {} does not exist", path.display());
                }
                tracing::debug!("Using config file {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
            None => {
                for path in self.search_paths.iter().filter(|p| p.is_file()) {
                    tracing::debug!("Merging config file {}", path.display());
                    figment = figment.merge(Toml::file(path));
                }
            }
        }

        if self.use_env {
            figment = figment.merge(
                Env::prefixed(ENV_PREFIX)
                    .split("__")
                    .ignore(&["font.charset"]),
            );
            if let Ok(charset) = std::env::var(CHARSET_ENV) {
                tracing::debug!("Charset taken from {}", CHARSET_ENV);
                figment = figment.merge(Serialized::default("font.charset", charset));
            }
        }

        Ok(figment)
    }

    /// Load the merged configuration
    pub fn load(&self) -> anyhow::Result<Config> {
        self.figment()?
            .extract()
            .context("Failed to load configuration")
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
