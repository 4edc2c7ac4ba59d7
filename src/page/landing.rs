//! The "we renamed our product" landing page.
//!
//! [`render`] takes no input and always produces the same fragment: two
//! JSON-LD blocks followed by the `<main>` tree. Class names are the
//! utility classes the site stylesheet targets.

use super::icon::Icon;
use super::jsonld::{BREADCRUMBS, ORGANIZATION, write_json_ld};
use crate::utils::xml::{
    XmlWriter, into_string, new_writer, write_empty_elem, write_end, write_start, write_text,
    write_text_element, write_void_elem,
};
use anyhow::Result;

/// Internal call-to-action target.
pub const HOME_ROUTE: &str = "/";
/// External call-to-action target.
pub const REPOSITORY_URL: &str = "https://github.com/OttolabsAI/otto";
/// `rel` for links that open a new browsing context.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

pub const SYMBOL: &str = "/kortix-symbol.svg";
pub const WORDMARK: &str = "/wordmark.svg";
pub const GRAIN_TEXTURE: &str = "/grain-texture.png";

/// Every asset the fragment references.
pub const ASSETS: [&str; 3] = [SYMBOL, GRAIN_TEXTURE, WORDMARK];

const HEADING: &str = "Otto";
const SUBHEADING: &str = "Same powerful open source AI worker. New name.";
const FOOTER: &str = "Looking for Otto? You've found us. Otto is the next evolution of Agents \u{2014} \
                      An AI assistant and generalist AI worker, to help you realize your vision.";

const SECTION_HEADING_CLASS: &str = "text-2xl md:text-3xl lg:text-4xl font-medium tracking-tighter";
const SECTION_TEXT_CLASS: &str = "text-base md:text-lg text-muted-foreground font-medium";
const FILL_STYLE: &str =
    "position:absolute;height:100%;width:100%;inset:0;object-fit:contain;mix-blend-mode:normal";

/// One explanatory block below the hero.
struct Section {
    heading: &'static str,
    body: SectionBody,
}

enum SectionBody {
    /// Several short lines stacked in a group.
    Lines(&'static [&'static str]),
    /// A single paragraph.
    Line(&'static str),
}

const SECTIONS: [Section; 3] = [
    Section {
        heading: "What changed?",
        body: SectionBody::Lines(&["Our domain is now Otto.lk"]),
    },
    Section {
        heading: "What stayed the same?",
        body: SectionBody::Lines(&[
            "Fully open source (Apache 2.0)",
            "Same powerful AI capabilities",
            "All your existing agents and workflows",
        ]),
    },
    Section {
        heading: "Where to find us?",
        body: SectionBody::Line("Our GitHub remains at github.com/OttolabsAI"),
    },
];

/// Render the landing fragment.
pub fn render() -> Result<String> {
    let mut writer = new_writer();
    write(&mut writer)?;
    into_string(writer)
}

/// Write the landing fragment into an existing document.
pub fn write(w: &mut XmlWriter) -> Result<()> {
    write_json_ld(w, &ORGANIZATION)?;
    write_json_ld(w, &BREADCRUMBS)?;

    write_start(w, "main", &[("class", "w-full relative overflow-hidden bg-background")])?;
    write_start(
        w,
        "div",
        &[("class", "relative flex flex-col items-center w-full px-4 sm:px-6")],
    )?;
    write_hero(w)?;
    write_sections(w)?;
    write_wordmark(w)?;
    write_footer(w)?;
    write_end(w, "div")?;
    write_end(w, "main")
}

fn write_hero(w: &mut XmlWriter) -> Result<()> {
    write_start(
        w,
        "div",
        &[(
            "class",
            "relative z-10 pt-16 sm:pt-24 md:pt-32 mx-auto h-full w-full max-w-6xl flex flex-col items-center justify-center",
        )],
    )?;
    write_start(
        w,
        "div",
        &[(
            "class",
            "flex flex-col items-center justify-center gap-3 sm:gap-4 pt-8 sm:pt-20 max-w-4xl mx-auto pb-10",
        )],
    )?;

    // brand mark with grain masked to its shape
    write_start(
        w,
        "div",
        &[("class", "relative mb-8 sm:mb-12"), ("style", "width:80px;height:80px")],
    )?;
    write_image(w, SYMBOL, "object-contain dark:invert")?;
    write_grain_overlay(w, SYMBOL)?;
    write_end(w, "div")?;

    write_text_element(
        w,
        "h1",
        &[(
            "class",
            "text-4xl md:text-5xl lg:text-6xl xl:text-7xl font-medium tracking-tighter text-balance text-center",
        )],
        HEADING,
    )?;
    write_text_element(
        w,
        "p",
        &[(
            "class",
            "text-lg md:text-xl text-muted-foreground font-medium text-center tracking-tight max-w-2xl pt-2",
        )],
        SUBHEADING,
    )?;
    write_end(w, "div")?;

    write_actions(w)?;
    write_end(w, "div")
}

fn write_actions(w: &mut XmlWriter) -> Result<()> {
    write_start(
        w,
        "div",
        &[(
            "class",
            "flex flex-col sm:flex-row items-center justify-center gap-3 w-full max-w-3xl mx-auto px-2 sm:px-0 pb-16",
        )],
    )?;

    write_start(
        w,
        "a",
        &[
            ("href", HOME_ROUTE),
            (
                "class",
                "flex h-12 items-center justify-center w-full sm:w-auto px-8 text-center rounded-full bg-primary text-primary-foreground hover:bg-primary/90 transition-all shadow-sm font-medium",
            ),
        ],
    )?;
    write_text(w, "Go to Otto")?;
    Icon::ArrowRight.write(w, "ml-2 size-4")?;
    write_end(w, "a")?;

    write_start(
        w,
        "a",
        &[
            ("href", REPOSITORY_URL),
            ("target", "_blank"),
            ("rel", EXTERNAL_REL),
            (
                "class",
                "flex h-12 items-center justify-center w-full sm:w-auto px-8 text-center rounded-full border border-border bg-background hover:bg-accent/50 transition-all font-medium",
            ),
        ],
    )?;
    Icon::Github.write(w, "mr-2 size-4")?;
    write_text(w, "View on GitHub")?;
    write_end(w, "a")?;

    write_end(w, "div")
}

fn write_sections(w: &mut XmlWriter) -> Result<()> {
    write_start(
        w,
        "div",
        &[("class", "relative z-10 w-full max-w-4xl mx-auto pb-20 sm:pb-32")],
    )?;
    write_start(w, "div", &[("class", "space-y-20 sm:space-y-32 text-center")])?;

    for (i, section) in SECTIONS.iter().enumerate() {
        if i > 0 {
            write_empty_elem(w, "div", &[("class", "w-12 h-px bg-border mx-auto")])?;
        }
        write_start(w, "div", &[("class", "space-y-6")])?;
        write_text_element(w, "h2", &[("class", SECTION_HEADING_CLASS)], section.heading)?;
        match section.body {
            SectionBody::Lines(lines) => {
                let class = format!("space-y-3 {SECTION_TEXT_CLASS}");
                write_start(w, "div", &[("class", class.as_str())])?;
                for line in lines {
                    write_text_element(w, "p", &[], line)?;
                }
                write_end(w, "div")?;
            }
            SectionBody::Line(line) => {
                write_text_element(w, "p", &[("class", SECTION_TEXT_CLASS)], line)?;
            }
        }
        write_end(w, "div")?;
    }

    write_end(w, "div")?;
    write_end(w, "div")
}

fn write_wordmark(w: &mut XmlWriter) -> Result<()> {
    write_start(
        w,
        "div",
        &[("class", "relative w-full mx-auto overflow-hidden pb-20 sm:pb-32")],
    )?;
    write_start(
        w,
        "div",
        &[(
            "class",
            "relative w-full max-w-5xl mx-auto aspect-[1150/344] px-8 md:px-16",
        )],
    )?;
    write_start(
        w,
        "div",
        &[("class", "relative w-full h-full"), ("style", "isolation:isolate")],
    )?;
    write_image(w, WORDMARK, "object-contain dark:invert opacity-10")?;
    write_grain_overlay(w, WORDMARK)?;
    write_end(w, "div")?;
    write_end(w, "div")?;
    write_end(w, "div")
}

fn write_footer(w: &mut XmlWriter) -> Result<()> {
    write_start(
        w,
        "div",
        &[(
            "class",
            "relative z-10 text-center max-w-2xl mx-auto pb-20 pt-12 border-t border-border/50",
        )],
    )?;
    write_text_element(
        w,
        "p",
        &[(
            "class",
            "text-sm text-muted-foreground/60 leading-relaxed font-medium",
        )],
        FOOTER,
    )?;
    write_end(w, "div")
}

/// Eager, container-filling image.
fn write_image(w: &mut XmlWriter, src: &str, class: &str) -> Result<()> {
    write_void_elem(
        w,
        "img",
        &[
            ("src", src),
            ("alt", HEADING),
            ("loading", "eager"),
            ("fetchpriority", "high"),
            ("decoding", "async"),
            ("class", class),
            ("style", FILL_STYLE),
        ],
    )
}

/// Grain texture overlay clipped to the shape of `mask`.
fn write_grain_overlay(w: &mut XmlWriter, mask: &str) -> Result<()> {
    write_empty_elem(
        w,
        "div",
        &[
            ("class", "absolute inset-0 pointer-events-none"),
            ("style", grain_style(mask).as_str()),
        ],
    )
}

fn grain_style(mask: &str) -> String {
    format!(
        "background-image:url({GRAIN_TEXTURE});background-size:100px 100px;background-repeat:repeat;\
         mix-blend-mode:multiply;opacity:0.6;\
         mask-image:url({mask});-webkit-mask-image:url({mask});\
         mask-size:contain;-webkit-mask-size:contain;\
         mask-repeat:no-repeat;-webkit-mask-repeat:no-repeat;\
         mask-position:center;-webkit-mask-position:center"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    /// Bodies of every `<script type="application/ld+json">` block, parsed.
    fn json_ld_blocks(html: &str) -> Vec<Value> {
        const OPEN: &str = r#"<script type="application/ld+json">"#;
        html.split(OPEN)
            .skip(1)
            .map(|rest| {
                let body = &rest[..rest.find("</script>").unwrap()];
                serde_json::from_str(body).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render().unwrap(), render().unwrap());
    }

    #[test]
    fn test_json_ld_blocks_come_first() {
        let html = render().unwrap();
        assert!(html.starts_with(r#"<script type="application/ld+json">{"@context""#));
        assert!(html.find("<main").unwrap() > html.rfind("</script>").unwrap());
    }

    #[test]
    fn test_organization_block() {
        let blocks = json_ld_blocks(&render().unwrap());
        assert_eq!(blocks.len(), 2);

        let org = &blocks[0];
        assert_eq!(org["@context"], "https://schema.org");
        assert_eq!(org["@type"], "Organization");
        assert_eq!(
            org["sameAs"],
            serde_json::json!([
                "https://github.com/OttolabsAI",
                "https://x.com/OttolabsAI",
                "https://linkedin.com/company/ottolabs",
            ])
        );
    }

    #[test]
    fn test_breadcrumb_block() {
        let blocks = json_ld_blocks(&render().unwrap());
        let items = blocks[1]["itemListElement"].as_array().unwrap();

        assert_eq!(blocks[1]["@type"], "BreadcrumbList");
        let positions: Vec<_> = items.iter().map(|i| i["position"].as_u64().unwrap()).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn test_call_to_action_links() {
        let html = render().unwrap();

        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains(r#"<a href="/" class="#));
        assert!(html.contains(
            r#"<a href="https://github.com/OttolabsAI/otto" target="_blank" rel="noopener noreferrer" class="#
        ));
    }

    #[test]
    fn test_heading_and_sections() {
        let html = render().unwrap();

        assert_eq!(html.matches("<h1 ").count(), 1);
        assert!(html.contains(">Otto</h1>"));
        assert!(html.contains(SUBHEADING));
        assert_eq!(html.matches("<h2 ").count(), 3);
        assert!(html.contains(">What changed?</h2>"));
        assert!(html.contains("<p>Fully open source (Apache 2.0)</p>"));
        assert!(html.contains("Our GitHub remains at github.com/OttolabsAI</p>"));
        // dividers only between sections
        assert_eq!(html.matches(r#"<div class="w-12 h-px bg-border mx-auto"></div>"#).count(), 2);
    }

    #[test]
    fn test_images_and_masks() {
        let html = render().unwrap();

        assert!(html.contains(r#"<img src="/kortix-symbol.svg""#));
        assert!(html.contains(r#"<img src="/wordmark.svg""#));
        assert!(html.contains("mask-image:url(/kortix-symbol.svg)"));
        assert!(html.contains("-webkit-mask-image:url(/wordmark.svg)"));
        assert_eq!(html.matches("background-image:url(/grain-texture.png)").count(), 2);
    }

    #[test]
    fn test_footer_sentence() {
        let html = render().unwrap();
        assert!(html.contains("found us. Otto is the next evolution of Agents \u{2014} An AI assistant"));
    }

    #[test]
    fn test_no_self_closing_divs() {
        let html = render().unwrap();
        assert!(!html.contains("<div/>"));
        assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
    }

    #[test]
    fn test_grain_style_single_line() {
        let style = grain_style(WORDMARK);
        assert!(!style.contains('\n'));
        assert!(!style.contains("  "));
        assert!(style.contains("opacity:0.6;mask-image"));
    }
}
