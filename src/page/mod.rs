//! Route table and page rendering.
//!
//! Every route the site serves is listed in [`ROUTES`]. A route pairs its
//! declared metadata with a body: the static landing fragment, or an empty
//! application shell the client-side dashboard mounts into.

pub mod document;
pub mod icon;
pub mod jsonld;
pub mod landing;

use crate::meta::{PageMetadata, routes};
use std::path::PathBuf;

/// What goes inside `<body>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Landing,
    /// `<main id="app"></main>`, filled in by the dashboard bundle.
    Shell,
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    /// Declared metadata, before inheritance.
    pub metadata: PageMetadata,
    pub body: Body,
    /// Listed in the sitemap and allowed in robots.txt.
    pub public: bool,
}

pub static ROUTES: [Route; 4] = [
    Route {
        path: "/",
        metadata: routes::ROOT,
        body: Body::Shell,
        public: true,
    },
    Route {
        path: "/suna",
        metadata: routes::LANDING,
        body: Body::Landing,
        public: true,
    },
    Route {
        path: "/agents",
        metadata: routes::AGENTS,
        body: Body::Shell,
        public: false,
    },
    Route {
        path: "/settings/api-keys",
        metadata: routes::API_KEYS,
        body: Body::Shell,
        public: false,
    },
];

/// Look up a route by path. A trailing slash is ignored.
pub fn find(path: &str) -> Option<&'static Route> {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    ROUTES.iter().find(|route| route.path == path)
}

impl Route {
    pub fn is_root(&self) -> bool {
        self.path == "/"
    }

    /// Declared metadata with unset fields inherited from the root layout.
    pub fn resolved_metadata(&self) -> PageMetadata {
        if self.is_root() {
            self.metadata
        } else {
            self.metadata.resolve(&routes::ROOT)
        }
    }

    /// Output file relative to the build directory: `/suna` → `suna/index.html`.
    pub fn output_path(&self) -> PathBuf {
        let relative = self.path.trim_matches('/');
        if relative.is_empty() {
            PathBuf::from("index.html")
        } else {
            PathBuf::from(relative).join("index.html")
        }
    }
}
