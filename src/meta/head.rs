//! `<head>` tag rendering for resolved page metadata.
//!
//! Tag mapping:
//!
//! | field                     | tag                                                   |
//! |---------------------------|-------------------------------------------------------|
//! | `title`                   | `<title>`                                             |
//! | `description`, `keywords` | `<meta name=…>`                                       |
//! | `authors`, `creator`      | `<link rel=author>`, `<meta name=author\|creator>`    |
//! | `robots`                  | `<meta name=robots\|googlebot>`                       |
//! | `alternates.canonical`    | `<link rel=canonical>`                                |
//! | `open_graph`              | `<meta property=og:*>`                                |
//! | `twitter`                 | `<meta name=twitter:*>`                               |
//!
//! Root-relative image URLs are made absolute against the site URL, since
//! link-preview crawlers do not resolve them.

use super::PageMetadata;
use crate::site::SITE_CONFIG;
use crate::utils::xml::{XmlWriter, write_text_element, write_void_elem};
use anyhow::Result;

/// Write every head tag for `meta`. Unset fields produce no tags.
pub fn write_head(writer: &mut XmlWriter, meta: &PageMetadata) -> Result<()> {
    if !meta.title.is_empty() {
        write_text_element(writer, "title", &[], meta.title)?;
    }
    write_name(writer, "description", meta.description)?;

    for author in meta.authors {
        if let Some(url) = author.url {
            write_void_elem(writer, "link", &[("rel", "author"), ("href", url)])?;
        }
        write_name(writer, "author", author.name)?;
    }
    if !meta.keywords.is_empty() {
        write_name(writer, "keywords", &meta.keywords.join(","))?;
    }
    if let Some(creator) = meta.creator {
        write_name(writer, "creator", creator)?;
    }

    if let Some(robots) = &meta.robots {
        write_name(writer, "robots", &robots.directives())?;
        if let Some(bot) = &robots.google_bot {
            write_name(writer, "googlebot", &bot.directives())?;
        }
    }

    if let Some(alternates) = &meta.alternates {
        write_void_elem(
            writer,
            "link",
            &[("rel", "canonical"), ("href", alternates.canonical)],
        )?;
    }

    if let Some(og) = &meta.open_graph {
        write_property(writer, "og:title", og.title)?;
        write_property(writer, "og:description", og.description)?;
        if let Some(url) = og.url {
            write_property(writer, "og:url", url)?;
        }
        if let Some(site_name) = og.site_name {
            write_property(writer, "og:site_name", site_name)?;
        }
        if let Some(locale) = og.locale {
            write_property(writer, "og:locale", locale)?;
        }
        for image in og.images {
            write_property(writer, "og:image", &SITE_CONFIG.absolute(image.url))?;
            write_property(writer, "og:image:width", &image.width.to_string())?;
            write_property(writer, "og:image:height", &image.height.to_string())?;
            write_property(writer, "og:image:alt", image.alt)?;
        }
        write_property(writer, "og:type", og.og_type)?;
    }

    if let Some(twitter) = &meta.twitter {
        write_name(writer, "twitter:card", twitter.card)?;
        if let Some(creator) = twitter.creator {
            write_name(writer, "twitter:creator", creator)?;
        }
        write_name(writer, "twitter:title", twitter.title)?;
        write_name(writer, "twitter:description", twitter.description)?;
        for url in twitter.images {
            write_name(writer, "twitter:image", &SITE_CONFIG.absolute(url))?;
        }
    }

    Ok(())
}

/// `<meta name=… content=…>`, skipped when content is empty.
fn write_name(writer: &mut XmlWriter, name: &str, content: &str) -> Result<()> {
    if content.is_empty() {
        return Ok(());
    }
    write_void_elem(writer, "meta", &[("name", name), ("content", content)])
}

/// `<meta property=… content=…>`, skipped when content is empty.
fn write_property(writer: &mut XmlWriter, property: &str, content: &str) -> Result<()> {
    if content.is_empty() {
        return Ok(());
    }
    write_void_elem(writer, "meta", &[("property", property), ("content", content)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::routes;
    use crate::utils::xml::{into_string, new_writer};

    fn head(meta: &PageMetadata) -> String {
        let mut writer = new_writer();
        write_head(&mut writer, meta).unwrap();
        into_string(writer).unwrap()
    }

    #[test]
    fn test_empty_metadata_writes_nothing() {
        assert_eq!(head(&PageMetadata::EMPTY), "");
    }

    #[test]
    fn test_root_head() {
        let html = head(&routes::ROOT);

        assert!(html.starts_with("<title>Otto OS</title>"));
        assert!(html.contains(r#"<meta name="creator" content="OttolabsAI"/>"#));
        assert!(html.contains(r#"<link rel="author" href="https://otto.lk"/>"#));
        assert!(html.contains(r#"<meta name="author" content="Ottolabs"/>"#));
        assert!(html.contains(r#"<meta name="robots" content="index, follow"/>"#));
        assert!(html.contains(
            r#"<meta name="googlebot" content="index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"/>"#
        ));
        assert!(html.contains(r#"<meta property="og:locale" content="en_US"/>"#));
        assert!(html.contains(r#"<meta name="twitter:creator" content="@ottolabsai"/>"#));
    }

    #[test]
    fn test_keywords_comma_joined() {
        let html = head(&routes::ROOT);
        assert!(html.contains(r#"<meta name="keywords" content="Otto,Otto AI,Suna,"#));
    }

    #[test]
    fn test_images_are_absolute() {
        let html = head(&routes::LANDING.resolve(&routes::ROOT));

        assert!(html.contains(r#"<meta property="og:image" content="https://otto.lk/banner.png"/>"#));
        assert!(html.contains(r#"<meta property="og:image:width" content="1200"/>"#));
        assert!(html.contains(r#"<meta property="og:image:height" content="630"/>"#));
        assert!(html.contains(r#"<meta name="twitter:image" content="https://otto.lk/banner.png"/>"#));
        assert!(!html.contains(r#"content="/banner.png""#));
    }

    #[test]
    fn test_landing_canonical_and_og() {
        let html = head(&routes::LANDING.resolve(&routes::ROOT));

        assert!(html.contains(r#"<link rel="canonical" href="https://app.otto.lk/"/>"#));
        assert!(html.contains(r#"<meta property="og:site_name" content="Otto App"/>"#));
        assert!(html.contains(r#"<meta property="og:type" content="website"/>"#));
        // landing has its own robots without googlebot
        assert!(!html.contains("googlebot"));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = head(&routes::AGENTS);
        assert!(html.contains("<title>Agent Conversation | Otto</title>"));

        let meta = PageMetadata {
            title: "A & B",
            ..PageMetadata::EMPTY
        };
        assert_eq!(head(&meta), "<title>A &amp; B</title>");
    }

    #[test]
    fn test_deterministic() {
        let meta = routes::LANDING.resolve(&routes::ROOT);
        assert_eq!(head(&meta), head(&meta));
    }
}
