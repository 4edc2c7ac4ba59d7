//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()
//!     │
//!     ├── rayon::join
//!     │       ├── render_routes() ──► <route>/index.html
//!     │       └── copy_assets()   ──► assets/** mirrored into output
//!     │
//!     └── build_sitemap() + build_robots()
//! ```

use crate::{
    config::Config,
    generator::{build_robots, build_sitemap},
    log,
    page::{ROUTES, Route, document::render_document},
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};
use walkdir::WalkDir;

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Render every route, copy static assets, then write sitemap.xml and robots.txt.
///
/// When `config.build.clean` is set the output directory is removed first.
pub fn build_site(config: &Config) -> Result<()> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let asset_files = collect_all_files(&config.build.assets);
    let has_error = AtomicBool::new(false);

    log!("build"; "rendering {} routes, {} assets", ROUTES.len(), asset_files.len());

    let (pages_result, assets_result) = rayon::join(
        || render_routes(&ROUTES, config, &has_error),
        || copy_assets(&asset_files, config, &has_error),
    );
    pages_result?;
    assets_result?;

    let lastmod = chrono::Local::now().format("%Y-%m-%d").to_string();
    build_sitemap(config, &ROUTES, &lastmod)?;
    build_robots(config, &ROUTES)?;

    log!("build"; "done");
    Ok(())
}

/// Create the output directory, clearing it first when `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

fn render_routes(routes: &[Route], config: &Config, has_error: &AtomicBool) -> Result<()> {
    routes.par_iter().try_for_each(|route| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = write_route(route, config) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", route.path, e);
            }
            return Err(anyhow!("Build failed"));
        }
        Ok(())
    })
}

fn write_route(route: &Route, config: &Config) -> Result<()> {
    let html = render_document(route)?;
    let html = minify(MinifyType::Html(html.as_bytes()), config);

    let dest = config.build.output.join(route.output_path());
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&dest, &*html).with_context(|| format!("Failed to write {}", dest.display()))?;
    Ok(())
}

fn copy_assets(files: &[PathBuf], config: &Config, has_error: &AtomicBool) -> Result<()> {
    files.par_iter().try_for_each(|path| {
        if has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        if let Err(e) = copy_asset(path, config) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{}: {:#}", path.display(), e);
            }
            return Err(anyhow!("Build failed"));
        }
        Ok(())
    })
}

/// Copy one file from the assets directory to the same relative path in the output.
fn copy_asset(path: &Path, config: &Config) -> Result<()> {
    let relative = path.strip_prefix(&config.build.assets)?;
    let dest = config.build.output.join(relative);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(path, &dest)?;
    Ok(())
}

/// Collect all files from a directory recursively. A missing directory yields nothing.
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.build.output = dir.path().join("public");
        config.build.assets = dir.path().join("assets");
        config.build.minify = false;
        (dir, config)
    }

    #[test]
    fn test_build_writes_every_route() {
        let (_dir, config) = setup();
        build_site(&config).unwrap();

        for route in &ROUTES {
            assert!(config.build.output.join(route.output_path()).is_file(), "{}", route.path);
        }
        let landing = fs::read_to_string(config.build.output.join("suna/index.html")).unwrap();
        assert!(landing.starts_with("<!DOCTYPE html>"));
        assert!(landing.contains("View on GitHub"));
    }

    #[test]
    fn test_build_writes_crawler_files() {
        let (_dir, config) = setup();
        build_site(&config).unwrap();

        let sitemap = fs::read_to_string(config.sitemap_path()).unwrap();
        assert!(sitemap.contains("<loc>https://otto.lk/suna</loc>"));
        let start = sitemap.find("<lastmod>").unwrap() + "<lastmod>".len();
        let lastmod = &sitemap[start..start + 10];
        assert!(chrono::NaiveDate::parse_from_str(lastmod, "%Y-%m-%d").is_ok());

        let robots = fs::read_to_string(config.robots_path()).unwrap();
        assert!(robots.contains("Disallow: /agents"));
    }

    #[test]
    fn test_build_copies_assets() {
        let (_dir, config) = setup();
        fs::create_dir_all(config.build.assets.join("fonts")).unwrap();
        fs::write(config.build.assets.join("banner.png"), b"png").unwrap();
        fs::write(config.build.assets.join("fonts/inter.woff2"), b"font").unwrap();
        fs::write(config.build.assets.join(".DS_Store"), b"junk").unwrap();

        build_site(&config).unwrap();

        assert_eq!(fs::read(config.build.output.join("banner.png")).unwrap(), b"png");
        assert!(config.build.output.join("fonts/inter.woff2").is_file());
        assert!(!config.build.output.join(".DS_Store").exists());
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let (_dir, mut config) = setup();
        fs::create_dir_all(&config.build.output).unwrap();
        let stale = config.build.output.join("stale.html");
        fs::write(&stale, "old").unwrap();

        build_site(&config).unwrap();
        assert!(stale.exists());

        config.build.clean = true;
        build_site(&config).unwrap();
        assert!(!stale.exists());
        assert!(config.build.output.join("index.html").is_file());
    }

    #[test]
    fn test_minified_build_keeps_json_ld() {
        let (_dir, mut config) = setup();
        config.build.minify = true;
        build_site(&config).unwrap();

        let landing = fs::read_to_string(config.build.output.join("suna/index.html")).unwrap();
        assert!(landing.contains(r#""@type":"Organization""#));
        assert!(landing.contains(r#""@type":"BreadcrumbList""#));
    }

    #[test]
    fn test_build_is_deterministic() {
        let (_dir, config) = setup();
        build_site(&config).unwrap();
        let first = fs::read(config.build.output.join("suna/index.html")).unwrap();
        build_site(&config).unwrap();
        let second = fs::read(config.build.output.join("suna/index.html")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_collect_missing_dir() {
        assert!(collect_all_files(Path::new("/definitely/not/here")).is_empty());
    }
}
