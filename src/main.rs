//! vitae - static generator for single-page portfolio sites.

use anyhow::Result;
use clap::Parser;
use vitae::{
    build::build_site,
    cli::{Cli, Commands},
    config::{SiteConfig, cfg, init_config},
    init::new_site,
    serve::serve_site,
};

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Init { .. } => new_site(&cfg()),
        Commands::Build { .. } => build_site(&cfg()),
        Commands::Serve { .. } => {
            build_site(&cfg())?;
            serve_site()
        }
    }
}
