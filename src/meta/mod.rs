//! Per-route page metadata.
//!
//! Each route owns one static [`PageMetadata`]. Routes below the root are
//! resolved against the root declaration the same way nested layouts are:
//! a top-level field the child leaves unset is inherited, a set field
//! replaces the parent's value wholesale.
//!
//! - [`routes`]: the declarations
//! - [`head`]: serialization into `<head>` tags
//! - [`check`]: authoring checks

pub mod check;
pub mod head;
pub mod routes;

pub use check::MetaIssue;

use serde::Serialize;

/// Metadata for one route, consumed by [`head::write_head`].
///
/// Empty strings and slices mean "not set" and are inherited on
/// [`PageMetadata::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "is_empty")]
    pub keywords: &'static [&'static str],
    #[serde(skip_serializing_if = "is_empty")]
    pub authors: &'static [Author],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternates: Option<Alternates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<Robots>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
}

/// Open Graph block (`og:*` tags).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub og_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<&'static str>,
    #[serde(skip_serializing_if = "is_empty")]
    pub images: &'static [OgImage],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OgImage {
    /// Root-relative or absolute.
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

/// Twitter card block (`twitter:*` tags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<&'static str>,
    #[serde(skip_serializing_if = "is_empty")]
    pub images: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alternates {
    pub canonical: &'static str,
}

/// Crawler directives (`robots` and `googlebot` meta tags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_bot: Option<GoogleBot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    /// Seconds; `-1` means no limit.
    pub max_video_preview: i32,
    /// `none`, `standard` or `large`.
    pub max_image_preview: &'static str,
    /// Characters; `-1` means no limit.
    pub max_snippet: i32,
}

impl PageMetadata {
    /// Metadata with nothing set. Declarations spread over this.
    pub const EMPTY: PageMetadata = PageMetadata {
        title: "",
        description: "",
        keywords: &[],
        authors: &[],
        creator: None,
        open_graph: None,
        twitter: None,
        alternates: None,
        robots: None,
    };

    /// Fill every unset top-level field from `parent`.
    pub fn resolve(&self, parent: &PageMetadata) -> PageMetadata {
        PageMetadata {
            title: or_str(self.title, parent.title),
            description: or_str(self.description, parent.description),
            keywords: or_slice(self.keywords, parent.keywords),
            authors: or_slice(self.authors, parent.authors),
            creator: self.creator.or(parent.creator),
            open_graph: self.open_graph.or(parent.open_graph),
            twitter: self.twitter.or(parent.twitter),
            alternates: self.alternates.or(parent.alternates),
            robots: self.robots.or(parent.robots),
        }
    }

    /// Whether crawlers may index this page. Unset robots means indexable.
    pub fn indexable(&self) -> bool {
        self.robots.is_none_or(|robots| robots.index)
    }
}

impl Robots {
    /// `index, follow` style directive list.
    pub fn directives(&self) -> String {
        directives(self.index, self.follow, &[])
    }
}

impl GoogleBot {
    pub fn directives(&self) -> String {
        directives(
            self.index,
            self.follow,
            &[
                ("max-video-preview", self.max_video_preview.to_string()),
                ("max-image-preview", self.max_image_preview.to_string()),
                ("max-snippet", self.max_snippet.to_string()),
            ],
        )
    }
}

fn directives(index: bool, follow: bool, extended: &[(&str, String)]) -> String {
    let mut parts = vec![
        if index { "index" } else { "noindex" }.to_owned(),
        if follow { "follow" } else { "nofollow" }.to_owned(),
    ];
    parts.extend(extended.iter().map(|(key, value)| format!("{key}:{value}")));
    parts.join(", ")
}

fn is_empty<T>(slice: &&[T]) -> bool {
    slice.is_empty()
}

#[inline]
fn or_str(child: &'static str, parent: &'static str) -> &'static str {
    if child.is_empty() { parent } else { child }
}

#[inline]
fn or_slice<T>(child: &'static [T], parent: &'static [T]) -> &'static [T] {
    if child.is_empty() { parent } else { child }
}
