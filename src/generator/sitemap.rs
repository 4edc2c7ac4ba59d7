//! Sitemap generation.
//!
//! Lists every public route for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://otto.lk/suna</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::Config,
    log,
    page::Route,
    site::SITE_CONFIG,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use std::fs;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled in config.
pub fn build_sitemap(config: &Config, routes: &[Route], lastmod: &str) -> Result<()> {
    if config.build.sitemap.enable {
        Sitemap::from_routes(routes, lastmod).write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    /// Absolute URL
    loc: String,
    /// YYYY-MM-DD
    lastmod: Option<String>,
}

impl Sitemap {
    /// Collect public routes, in declaration order.
    fn from_routes(routes: &[Route], lastmod: &str) -> Self {
        let urls = routes
            .iter()
            .filter(|route| route.public)
            .map(|route| UrlEntry {
                loc: SITE_CONFIG.absolute(route.path),
                lastmod: (!lastmod.is_empty()).then(|| lastmod.to_owned()),
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &Config) -> Result<()> {
        let sitemap_path = config.sitemap_path();
        let count = self.urls.len();
        let xml = self.into_xml();
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{} ({count} urls)", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::PageMetadata;
    use crate::page::{Body, ROUTES};

    fn route(path: &'static str, public: bool) -> Route {
        Route {
            path,
            metadata: PageMetadata::EMPTY,
            body: Body::Shell,
            public,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_lists_public_routes_only() {
        let xml = Sitemap::from_routes(&ROUTES, "2025-01-01").into_xml();

        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://otto.lk/</loc>"));
        assert!(xml.contains("<loc>https://otto.lk/suna</loc>"));
        assert!(!xml.contains("/agents"));
        assert!(!xml.contains("/settings/api-keys"));
        assert_eq!(xml.matches("<lastmod>2025-01-01</lastmod>").count(), 2);
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap::from_routes(&[route("/private", false)], "").into_xml();

        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_without_lastmod() {
        let xml = Sitemap::from_routes(&[route("/about", true)], "").into_xml();

        assert!(xml.contains("<loc>https://otto.lk/about</loc>"));
        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let xml = Sitemap::from_routes(&[route("/search?q=a&b=c", true)], "").into_xml();
        assert!(xml.contains("<loc>https://otto.lk/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let xml = Sitemap::from_routes(&ROUTES, "2025-01-01").into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
    }

    #[test]
    fn test_build_sitemap_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.build.output = dir.path().to_path_buf();
        config.build.minify = false;

        build_sitemap(&config, &ROUTES, "2025-01-01").unwrap();

        let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://otto.lk/suna</loc>"));
    }

    #[test]
    fn test_build_sitemap_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.build.output = dir.path().to_path_buf();
        config.build.sitemap.enable = false;

        build_sitemap(&config, &ROUTES, "2025-01-01").unwrap();
        assert!(!dir.path().join("sitemap.xml").exists());
    }
}
