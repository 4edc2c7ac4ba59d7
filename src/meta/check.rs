//! Authoring checks for page metadata.
//!
//! Metadata is static, so every problem found here is a content mistake,
//! not a runtime fault. [`PageMetadata::check`] reports all of them at once
//! instead of stopping at the first.

use super::PageMetadata;
use crate::site::is_absolute_url;
use thiserror::Error;

/// A single authoring problem in a [`PageMetadata`] declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaIssue {
    #[error("title is empty")]
    EmptyTitle,

    #[error("description is empty")]
    EmptyDescription,

    #[error("{field}[{index}] has an empty url")]
    EmptyImageUrl { field: &'static str, index: usize },

    #[error("{field} `{url}` is not an absolute http(s) URL")]
    RelativeUrl {
        field: &'static str,
        url: &'static str,
    },

    #[error("openGraph.images[{index}] has a zero dimension ({width}x{height})")]
    ZeroImageSize {
        index: usize,
        width: u32,
        height: u32,
    },
}

impl PageMetadata {
    /// Collect every authoring issue. Run on resolved metadata so inherited
    /// fields are checked too.
    pub fn check(&self) -> Vec<MetaIssue> {
        let mut issues = Vec::new();

        if self.title.trim().is_empty() {
            issues.push(MetaIssue::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            issues.push(MetaIssue::EmptyDescription);
        }

        if let Some(og) = &self.open_graph {
            for (index, image) in og.images.iter().enumerate() {
                if image.url.trim().is_empty() {
                    issues.push(MetaIssue::EmptyImageUrl {
                        field: "openGraph.images",
                        index,
                    });
                }
                if image.width == 0 || image.height == 0 {
                    issues.push(MetaIssue::ZeroImageSize {
                        index,
                        width: image.width,
                        height: image.height,
                    });
                }
            }
            if let Some(url) = og.url
                && !is_absolute_url(url)
            {
                issues.push(MetaIssue::RelativeUrl {
                    field: "openGraph.url",
                    url,
                });
            }
        }

        if let Some(twitter) = &self.twitter {
            for (index, url) in twitter.images.iter().enumerate() {
                if url.trim().is_empty() {
                    issues.push(MetaIssue::EmptyImageUrl {
                        field: "twitter.images",
                        index,
                    });
                }
            }
        }

        if let Some(alternates) = &self.alternates
            && !is_absolute_url(alternates.canonical)
        {
            issues.push(MetaIssue::RelativeUrl {
                field: "alternates.canonical",
                url: alternates.canonical,
            });
        }

        issues
    }
}
