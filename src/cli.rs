//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CodeInsight - explore and filter repository ingestion digests
#[derive(Parser, Debug)]
#[command(name = "codeinsight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./.codeinsight.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the digest comes from
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// `-` for stdin, a digest file, a `.json` ingest result, an ingest
    /// output directory, or a repository id/URL
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Repository id inside an ingest output directory (default: latest)
    #[arg(long, value_name = "ID")]
    pub repo: Option<String>,
}

/// Non-interactive selection, applied to an all-selected store in order:
/// --none, --only, --exclude, --dir
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Start from an empty selection
    #[arg(long)]
    pub none: bool,

    /// Select only these files (repeatable)
    #[arg(long, value_name = "PATH")]
    pub only: Vec<String>,

    /// Deselect these files (repeatable)
    #[arg(long, value_name = "PATH")]
    pub exclude: Vec<String>,

    /// Toggle every file under a directory (repeatable)
    #[arg(long = "dir", value_name = "DIR")]
    pub dirs: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the files detected in a digest
    Files {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show the directory tree with selection markers
    Tree {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Print the digest limited to the selected files
    Filter {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Copy to the system clipboard instead of stdout
        #[arg(short, long, conflicts_with = "output")]
        copy: bool,
    },

    /// Pick files interactively, then print the filtered digest
    Select {
        #[command(flatten)]
        input: InputArgs,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Copy to the system clipboard instead of stdout
        #[arg(short, long, conflicts_with = "output")]
        copy: bool,
    },

    /// Print the summary and file tree text of an ingestion
    Show {
        #[command(flatten)]
        input: InputArgs,
    },

    /// List ingested repositories
    Repos {
        /// Ingest output directory (default: from config)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Print only the most recently processed repository id
        #[arg(long)]
        latest: bool,
    },
}
