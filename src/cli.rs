//! Command-line interface definitions for the example binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ini::path::{ExecutableRelative, PathResolver, WorkingDirectory};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "ini",
    author,
    about = "Load an INI file and print its sections or a single typed value.",
    version
)]
pub struct CliArgs {
    /// Bare file names are looked up next to this executable unless
    /// `--relative-to working-directory` is given.
    #[arg(default_value = "config.ini", help = "Path to the INI file to load.")]
    pub path: PathBuf,

    #[arg(
        long = "relative-to",
        value_enum,
        default_value_t = RelativeTo::Executable,
        help = "Where bare file names are resolved from."
    )]
    pub relative_to: RelativeTo,

    #[arg(
        short = 's',
        long = "section",
        help = "Print every key of this section, or the section holding --key."
    )]
    pub section: Option<String>,

    #[arg(
        short = 'k',
        long = "key",
        requires = "section",
        help = "Print only this key from --section."
    )]
    pub key: Option<String>,

    #[arg(
        long = "as",
        value_enum,
        default_value_t = ValueKind::String,
        help = "Type to convert --key to before printing."
    )]
    pub kind: ValueKind,

    #[arg(
        long = "log-level",
        help = "Tracing filter directive, e.g. `debug`. Overrides RUST_LOG."
    )]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RelativeTo {
    Executable,
    WorkingDirectory,
}

impl RelativeTo {
    pub fn resolver(self) -> &'static dyn PathResolver {
        match self {
            Self::Executable => &ExecutableRelative,
            Self::WorkingDirectory => &WorkingDirectory,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    String,
    Bool,
    Int,
    Int64,
    Float64,
}
