//! robots.txt generation.
//!
//! ```text
//! User-agent: *
//! Allow: /
//! Disallow: /agents
//!
//! Sitemap: https://otto.lk/sitemap.xml
//! ```

use crate::{config::Config, log, page::Route, site::SITE_CONFIG};
use anyhow::{Context, Result};
use std::{fmt::Write as _, fs};

/// Build robots.txt if enabled in config.
pub fn build_robots(config: &Config, routes: &[Route]) -> Result<()> {
    if !config.build.robots.enable {
        return Ok(());
    }

    let sitemap = config
        .build
        .sitemap
        .enable
        .then(|| sitemap_url(config));
    let content = render(routes, sitemap.as_deref());

    let path = config.robots_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)
        .with_context(|| format!("Failed to write robots.txt to {}", path.display()))?;

    log!("robots"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

/// Absolute URL of the sitemap, using `/` separators regardless of platform.
fn sitemap_url(config: &Config) -> String {
    let relative = config
        .build
        .sitemap
        .path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    SITE_CONFIG.absolute(&relative)
}

/// Non-public routes are disallowed; the sitemap line is optional.
fn render(routes: &[Route], sitemap: Option<&str>) -> String {
    let mut out = String::from("User-agent: *\nAllow: /\n");
    for route in routes.iter().filter(|route| !route.public) {
        let _ = writeln!(out, "Disallow: {}", route.path);
    }
    if let Some(url) = sitemap {
        let _ = write!(out, "\nSitemap: {url}\n");
    }
    out
}
