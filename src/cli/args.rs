//! Command-line interface definitions.

use crate::render::EmitFormat;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Documentation site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented config template
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create the config in (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Validate the config and print a summary
    #[command(visible_alias = "c")]
    Check {
        /// Validate the local preview variant (no base path)
        #[arg(short, long)]
        preview: bool,
    },

    /// Write the renderer document
    #[command(visible_alias = "e")]
    Emit {
        #[command(flatten)]
        args: EmitArgs,
    },
}

/// Arguments of the `emit` command
#[derive(clap::Args, Debug, Clone)]
pub struct EmitArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = EmitFormat::Json)]
    pub format: EmitFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Emit the local preview variant (no base path)
    #[arg(short, long)]
    pub preview: bool,

    /// Re-emit whenever the config file changes
    #[arg(short, long, requires = "output")]
    pub watch: bool,
}
