//! `[build]` section configuration.
//!
//! Output location, asset source, minification, and the generated
//! `sitemap.xml` / `robots.txt` files.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in otto.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"   # Output directory
/// assets = "assets"   # Copied verbatim into output
/// minify = true       # Minify HTML
///
/// [build.sitemap]
/// enable = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static assets directory (banner, favicon, brand marks, textures).
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Minify HTML and XML output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Remove the output directory before building.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Sitemap generation settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// robots.txt generation settings.
    #[serde(default)]
    pub robots: RobotsConfig,
}

/// `[build.sitemap]` section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Path relative to the output directory.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

/// `[build.robots]` section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RobotsConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Path relative to the output directory.
    #[serde(default = "defaults::build::robots::path")]
    #[educe(Default = defaults::build::robots::path())]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::Config;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.assets, PathBuf::from("assets"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
        assert!(config.build.robots.enable);
        assert_eq!(config.build.robots.path, PathBuf::from("robots.txt"));
    }

    #[test]
    fn test_build_config_full() {
        let config = r#"
            [build]
            output = "dist"
            assets = "static"
            minify = false
            clean = true

            [build.sitemap]
            enable = false
            path = "maps/sitemap.xml"

            [build.robots]
            path = "robots-custom.txt"
        "#;
        let config: Config = toml::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.assets, PathBuf::from("static"));
        assert!(!config.build.minify);
        assert!(config.build.clean);
        assert!(!config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("maps/sitemap.xml"));
        // enable keeps its default when only path is given
        assert!(config.build.robots.enable);
        assert_eq!(config.build.robots.path, PathBuf::from("robots-custom.txt"));
    }

    #[test]
    fn test_build_config_partial_override() {
        let config = r#"
            [build]
            minify = false
        "#;
        let config: Config = toml::from_str(config).unwrap();

        assert!(!config.build.minify);
        assert_eq!(config.build.output, PathBuf::from("public"));
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [build.sitemap]
            enable = true
            changefreq = "daily"
        "#;
        let result: Result<Config, _> = toml::from_str(config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }
}
