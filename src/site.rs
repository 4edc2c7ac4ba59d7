//! Site-wide product identity.
//!
//! A single immutable record read by every route that needs default
//! metadata. Nothing here is loaded from disk: `otto.toml` controls how the
//! site is built, this controls what the site says about itself.

use serde::Serialize;

/// The product's canonical identity.
pub const SITE_CONFIG: SiteConfig = SiteConfig {
    name: "Otto OS",
    url: "https://otto.lk",
    description: "Open Source Generalist AI Worker. Otto is a fully open source AI assistant \
                  that helps you accomplish real-world tasks with ease through natural conversation.",
    links: SocialLinks {
        twitter: "https://x.com/OttolabsAI",
        github: "https://github.com/OttolabsAI/",
        linkedin: "https://www.linkedin.com/company/ottolabsai/",
    },
};

/// Canonical name, URL, description and social profiles of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub name: &'static str,
    /// Absolute, scheme included, no trailing slash.
    pub url: &'static str,
    pub description: &'static str,
    pub links: SocialLinks,
}

/// Platform name → absolute profile URL.
///
/// Serializes as a map with exactly the keys `twitter`, `github`, `linkedin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub twitter: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

impl SocialLinks {
    /// Platforms in declaration order.
    pub const PLATFORMS: [&'static str; 3] = ["twitter", "github", "linkedin"];

    /// Ordered `(platform, url)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        [
            ("twitter", self.twitter),
            ("github", self.github),
            ("linkedin", self.linkedin),
        ]
        .into_iter()
    }

    /// Case-insensitive lookup by platform name.
    pub fn get(&self, platform: &str) -> Option<&'static str> {
        self.iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(platform))
            .map(|(_, url)| url)
    }
}

impl SiteConfig {
    /// Make a root-relative path absolute against [`SiteConfig::url`].
    ///
    /// Already absolute URLs are returned unchanged.
    ///
    /// ```ignore
    /// SITE_CONFIG.absolute("/banner.png") // → "https://otto.lk/banner.png"
    /// ```
    pub fn absolute(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_owned();
        }
        let base = self.url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

/// `http(s)://host...` check used for metadata and link validation.
pub fn is_absolute_url(s: &str) -> bool {
    let rest = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
}
