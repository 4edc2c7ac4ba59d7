//! `otto check`: metadata and asset checks without writing output.

use crate::{
    config::Config,
    log,
    meta::MetaIssue,
    page::{Body, ROUTES, Route, document::FAVICON, landing},
    site::{SITE_CONFIG, SocialLinks, is_absolute_url},
};
use anyhow::{Result, bail};
use std::{collections::BTreeSet, path::Path};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteIssue {
    #[error("{route}: {issue}")]
    Meta {
        route: &'static str,
        issue: MetaIssue,
    },

    #[error("{route}: `{asset}` not found in assets directory")]
    MissingAsset {
        route: &'static str,
        asset: String,
    },

    #[error("{route}: listed in the sitemap but marked noindex")]
    PublicNoIndex { route: &'static str },

    #[error("site link `{platform}` is missing or not an absolute URL")]
    SocialLink { platform: &'static str },
}

/// Run every check and fail if anything was reported.
pub fn check_site(config: &Config) -> Result<()> {
    let mut issues = site_issues(&SITE_CONFIG.links);
    issues.extend(collect_issues(&ROUTES, &config.build.assets));

    if issues.is_empty() {
        log!("check"; "{} routes ok", ROUTES.len());
        return Ok(());
    }

    let report = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    log!("error"; "{} issue(s)\n{report}", issues.len());
    bail!("check failed with {} issue(s)", issues.len())
}

/// Every known platform must map to an absolute URL.
fn site_issues(links: &SocialLinks) -> Vec<SiteIssue> {
    SocialLinks::PLATFORMS
        .into_iter()
        .filter(|platform| !links.get(platform).is_some_and(is_absolute_url))
        .map(|platform| SiteIssue::SocialLink { platform })
        .collect()
}

/// Metadata issues (on resolved metadata) followed by missing assets, per route.
pub fn collect_issues(routes: &[Route], assets_dir: &Path) -> Vec<SiteIssue> {
    let mut issues = Vec::new();

    for route in routes {
        let meta = route.resolved_metadata();
        if route.public && !meta.indexable() {
            issues.push(SiteIssue::PublicNoIndex { route: route.path });
        }

        issues.extend(
            meta.check()
                .into_iter()
                .map(|issue| SiteIssue::Meta {
                    route: route.path,
                    issue,
                }),
        );

        issues.extend(
            referenced_assets(route)
                .into_iter()
                .filter(|asset| !assets_dir.join(asset.trim_start_matches('/')).is_file())
                .map(|asset| SiteIssue::MissingAsset {
                    route: route.path,
                    asset,
                }),
        );
    }

    issues
}

/// Root-relative paths of every local file a route's document points at.
fn referenced_assets(route: &Route) -> BTreeSet<String> {
    let meta = route.resolved_metadata();
    let mut urls = vec![FAVICON];

    if let Some(og) = &meta.open_graph {
        urls.extend(og.images.iter().map(|image| image.url));
    }
    if let Some(twitter) = &meta.twitter {
        urls.extend(twitter.images.iter().copied());
    }
    if route.body == Body::Landing {
        urls.extend(landing::ASSETS);
    }

    urls.into_iter().filter_map(local_path).collect()
}

/// Map a URL to a path under the site root. Other hosts are not checked.
fn local_path(url: &str) -> Option<String> {
    let path = if is_absolute_url(url) {
        url.strip_prefix(SITE_CONFIG.url.trim_end_matches('/'))?
    } else {
        url
    };
    let path = path.split(['?', '#']).next().unwrap_or_default();
    (!path.trim_matches('/').is_empty()).then(|| format!("/{}", path.trim_start_matches('/')))
}
