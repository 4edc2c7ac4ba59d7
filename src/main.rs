//! Otto - static generator for the Otto public pages.

mod build;
mod check;
mod cli;
mod config;
mod generator;
mod logger;
mod meta;
mod page;
mod serve;
mod site;
mod utils;

use anyhow::{Result, anyhow};
use build::build_site;
use check::check_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use serve::serve_site;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static Config = Box::leak(Box::new(Config::load(cli)?));

    match &cli.command {
        Commands::Build { .. } => build_site(config),
        Commands::Serve { .. } => {
            build_site(config)?;
            serve_site(config)
        }
        Commands::Check => check_site(config),
        Commands::Meta { route } => print_metadata(route),
    }
}

/// Print the resolved metadata of `route` as pretty JSON.
fn print_metadata(route: &str) -> Result<()> {
    let page = page::find(route).ok_or_else(|| {
        let known: Vec<_> = page::ROUTES.iter().map(|r| r.path).collect();
        anyhow!("unknown route `{route}` (known: {})", known.join(", "))
    })?;
    println!("{}", serde_json::to_string_pretty(&page.resolved_metadata())?);
    Ok(())
}
