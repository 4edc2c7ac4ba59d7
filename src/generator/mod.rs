//! Crawler-facing files generated alongside the pages.

pub mod robots;
pub mod sitemap;

pub use robots::build_robots;
pub use sitemap::build_sitemap;
