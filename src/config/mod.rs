//! Build configuration management for `otto.toml`.
//!
//! The file is optional: every field has a default, so a bare checkout
//! builds with `otto build`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[build]`   | Output/asset paths, minify, sitemap, robots    |
//! | `[serve]`   | Preview server (interface, port)               |
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"
//! minify = true
//!
//! [build.sitemap]
//! enable = true
//!
//! [serve]
//! port = 5277
//! ```

mod build;
pub mod defaults;
mod error;
mod serve;

pub use error::ConfigError;

use build::BuildConfig;
use serve::ServeConfig;

use crate::cli::{BuildArgs, Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    net::IpAddr,
    path::{Path, PathBuf},
};

/// Default config filename, looked up under the project root.
pub const CONFIG_FILE: &str = "otto.toml";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing otto.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project root (set from CLI, never read from the file)
    #[serde(skip)]
    pub root: PathBuf,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Preview server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl Config {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load `otto.toml` under the CLI root, falling back to defaults when absent,
    /// then apply CLI overrides and validate.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = Self::normalize_path(cli.root.as_deref().unwrap_or(Path::new("./")));
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args);
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Check | Commands::Meta { .. } => {}
        }

        self.update_path_with_root(&root);
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());
        if args.clean {
            self.build.clean = true;
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve directory paths against the root and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Absolute path of the generated sitemap.
    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.build.sitemap.path)
    }

    /// Absolute path of the generated robots.txt.
    pub fn robots_path(&self) -> PathBuf {
        self.build.output.join(&self.build.robots.path)
    }

    /// Validate configuration after CLI overrides are applied
    pub fn validate(&self) -> Result<()> {
        if self.build.sitemap.path.is_absolute() {
            bail!(ConfigError::Validation(
                "[build.sitemap.path] must be relative to [build.output]".into()
            ));
        }

        if self.build.robots.path.is_absolute() {
            bail!(ConfigError::Validation(
                "[build.robots.path] must be relative to [build.output]".into()
            ));
        }

        if self.build.output == self.build.assets {
            bail!(ConfigError::Validation(
                "[build.output] and [build.assets] must be different directories".into()
            ));
        }

        if self.serve.interface.parse::<IpAddr>().is_err() {
            bail!(ConfigError::Validation(format!(
                "[serve.interface] `{}` is not a valid IP address",
                self.serve.interface
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
