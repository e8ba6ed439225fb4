//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Opener and recorded sequences are passed as text and parsed by the
//!   compare command: comma or space separated ids, `0` or `*` is the
//!   catch-all, `-n` refers to action group `n`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Job;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Opener - author openers and review recorded rotations
#[derive(Parser, Debug)]
#[command(name = "opener")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./opener.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare recorded actions against an opener
    Compare {
        /// Reference opener, e.g. "15989,-1,0,16007" (`*` is also a catch-all)
        #[arg(short, long, allow_hyphen_values = true, value_name = "IDS")]
        opener: String,

        /// Recorded actions, e.g. "15989,15999,15990,16007"
        #[arg(short, long, allow_hyphen_values = true, value_name = "IDS")]
        used: String,

        /// Action data sheet (overrides [catalog] path)
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,

        /// Exit with status 1 when any action was wrong
        #[arg(long)]
        strict: bool,
    },

    /// Search the action catalog by name
    Search {
        /// Case-insensitive part of the action name
        #[arg(default_value = "")]
        query: String,

        /// Only actions usable by this job (e.g. DNC)
        #[arg(short, long, default_value = "any")]
        job: Job,

        /// Action data sheet (overrides [catalog] path)
        #[arg(long, value_name = "PATH")]
        catalog: Option<PathBuf>,
    },

    /// List configured action groups
    Groups,
}
