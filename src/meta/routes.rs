//! Static metadata declarations, one per route.

use super::{
    Alternates, Author, GoogleBot, OgImage, OpenGraph, PageMetadata, Robots, TwitterCard,
};
use crate::site::SITE_CONFIG;

/// Social preview banner shared by the root and the landing page.
pub const BANNER: &str = "/banner.png";

/// Root layout: site-wide defaults derived from [`SITE_CONFIG`].
pub const ROOT: PageMetadata = PageMetadata {
    title: SITE_CONFIG.name,
    description: SITE_CONFIG.description,
    keywords: &[
        "Otto",
        "Otto AI",
        "Suna",
        "Ottolabs",
        "AI",
        "Agent",
        "Open Source",
        "AI assistant",
        "generalist AI worker",
        "AI Orchestrator",
        "AI Employee",
    ],
    authors: &[Author {
        name: "Ottolabs",
        url: Some("https://otto.lk"),
    }],
    creator: Some("OttolabsAI"),
    open_graph: Some(OpenGraph {
        title: SITE_CONFIG.name,
        description: SITE_CONFIG.description,
        og_type: "website",
        url: Some(SITE_CONFIG.url),
        site_name: Some(SITE_CONFIG.name),
        locale: Some("en_US"),
        images: &[OgImage {
            url: BANNER,
            width: 1200,
            height: 630,
            alt: SITE_CONFIG.name,
        }],
    }),
    twitter: Some(TwitterCard {
        card: "summary_large_image",
        title: SITE_CONFIG.name,
        description: SITE_CONFIG.description,
        creator: Some("@ottolabsai"),
        images: &[BANNER],
    }),
    alternates: None,
    robots: Some(Robots {
        index: true,
        follow: true,
        google_bot: Some(GoogleBot {
            index: true,
            follow: true,
            max_video_preview: -1,
            max_image_preview: "large",
            max_snippet: -1,
        }),
    }),
};

/// `/suna`: the rename landing page.
pub const LANDING: PageMetadata = PageMetadata {
    title: "Otto | Otto Agent - Open Source AI Orchestrator",
    description: "Otto is a powerful open source AI assistant/Generalist AI worker & AI Agent \
                  Orchestrator to help you realize your dream.",
    keywords: &[
        "Otto",
        "Ottolabs",
        "Otto AI",
        "Otto Assistant",
        "Otto.lk",
        "where is Otto",
        "Otto Agent",
        "AI assistant",
        "open source AI",
        "generalist AI worker",
        "AI Orchestrator",
        "AI worker",
        "autonomous AI",
    ],
    open_graph: Some(OpenGraph {
        title: "Otto",
        description: "AI Agent Orchestrator",
        og_type: "website",
        url: Some("https://app.otto.lk"),
        site_name: Some("Otto App"),
        locale: None,
        images: &[OgImage {
            url: BANNER,
            width: 1200,
            height: 630,
            alt: "Otto",
        }],
    }),
    twitter: Some(TwitterCard {
        card: "summary_large_image",
        title: "Otto",
        description: "Otto - open source AI Agent Orchestrator.",
        creator: None,
        images: &[BANNER],
    }),
    alternates: Some(Alternates {
        canonical: "https://app.otto.lk/",
    }),
    robots: Some(Robots {
        index: true,
        follow: true,
        google_bot: None,
    }),
    ..PageMetadata::EMPTY
};

/// `/agents`: dashboard conversation shell.
pub const AGENTS: PageMetadata = PageMetadata {
    title: "Agent Conversation | Otto",
    description: "Interactive agent conversation powered by Ottolabs",
    open_graph: Some(OpenGraph {
        title: "Agent Conversation | Otto",
        description: "Interactive agent conversation powered by Ottolabs",
        og_type: "website",
        url: None,
        site_name: None,
        locale: None,
        images: &[],
    }),
    ..PageMetadata::EMPTY
};

/// `/settings/api-keys`: dashboard API key management shell.
pub const API_KEYS: PageMetadata = PageMetadata {
    title: "API Keys | Otto",
    description: "Manage your API keys for programmatic access to Otto",
    open_graph: Some(OpenGraph {
        title: "API Keys | Otto",
        description: "Manage your API keys for programmatic access to Otto",
        og_type: "website",
        url: None,
        site_name: None,
        locale: None,
        images: &[],
    }),
    ..PageMetadata::EMPTY
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [(&str, PageMetadata); 4] = [
        ("/", ROOT),
        ("/suna", LANDING),
        ("/agents", AGENTS),
        ("/settings/api-keys", API_KEYS),
    ];

    #[test]
    fn test_titles_and_descriptions_non_empty() {
        for (route, meta) in ALL {
            assert!(!meta.title.is_empty(), "{route} has empty title");
            assert!(!meta.description.is_empty(), "{route} has empty description");
        }
    }

    #[test]
    fn test_image_urls_non_empty() {
        for (route, meta) in ALL {
            let resolved = meta.resolve(&ROOT);
            if let Some(og) = resolved.open_graph {
                for image in og.images {
                    assert!(!image.url.is_empty(), "{route} has an og image without url");
                }
            }
            if let Some(twitter) = resolved.twitter {
                for url in twitter.images {
                    assert!(!url.is_empty(), "{route} has a twitter image without url");
                }
            }
        }
    }

    #[test]
    fn test_root_follows_site_config() {
        assert_eq!(ROOT.title, SITE_CONFIG.name);
        assert_eq!(ROOT.description, SITE_CONFIG.description);
        let og = ROOT.open_graph.unwrap();
        assert_eq!(og.url, Some(SITE_CONFIG.url));
        assert_eq!(og.site_name, Some(SITE_CONFIG.name));
        assert_eq!(og.images[0].alt, SITE_CONFIG.name);
    }

    #[test]
    fn test_root_google_bot() {
        let bot = ROOT.robots.unwrap().google_bot.unwrap();
        assert_eq!(bot.max_video_preview, -1);
        assert_eq!(bot.max_image_preview, "large");
        assert_eq!(bot.max_snippet, -1);
    }

    #[test]
    fn test_landing_description_continuation() {
        assert_eq!(
            LANDING.description,
            "Otto is a powerful open source AI assistant/Generalist AI worker & AI Agent Orchestrator to help you realize your dream."
        );
    }

    #[test]
    fn test_landing_overrides_root() {
        let resolved = LANDING.resolve(&ROOT);
        assert_eq!(resolved.title, "Otto | Otto Agent - Open Source AI Orchestrator");
        assert_eq!(resolved.keywords.len(), 13);
        assert_eq!(resolved.alternates.unwrap().canonical, "https://app.otto.lk/");
        // landing robots carry no googlebot block
        assert!(resolved.robots.unwrap().google_bot.is_none());
        // authors and creator come from the root layout
        assert_eq!(resolved.authors, ROOT.authors);
        assert_eq!(resolved.creator, Some("OttolabsAI"));
    }

    #[test]
    fn test_dashboard_inherits_twitter_and_keywords() {
        for meta in [AGENTS, API_KEYS] {
            let resolved = meta.resolve(&ROOT);
            assert_eq!(resolved.twitter, ROOT.twitter);
            assert_eq!(resolved.keywords, ROOT.keywords);
            assert!(resolved.open_graph.unwrap().images.is_empty());
        }
    }
}
