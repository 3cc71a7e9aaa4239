//! docsite - validate documentation-site configuration and hand it to the
//! site renderer.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, common::resolve_config_path};

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(e) = run(&cli) {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Init { dir, force, dry } => {
            let dir = match dir {
                Some(dir) => dir.clone(),
                None => std::env::current_dir()?,
            };
            cli::init::new_config(&dir, &cli.config, *force, *dry).map(|_| ())
        }
        Commands::Check { preview } => {
            let path = resolve_config_path(&cli.config)?;
            cli::check::run_check(&path, *preview)
        }
        Commands::Emit { args } => {
            let path = resolve_config_path(&cli.config)?;
            cli::emit::run_emit(&path, args)
        }
    }
}
