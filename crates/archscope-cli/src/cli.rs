//! CLI argument parsing using clap.

use archscope_core::ReaderConfig;
use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "archscope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the directory tree of an archive
    Tree(TreeArgs),
    /// List everything below a path inside an archive
    Content(ContentArgs),
    /// Compare the structure and content of two archives
    Diff(DiffArgs),
    /// List every directory with its subdirectories and files
    Walk(WalkArgs),
    /// Generate shell completion script
    Completion(CompletionArgs),
}

/// Limits applied while reading archives.
#[derive(clap::Args)]
pub struct ReaderArgs {
    /// Maximum number of entries read from one archive
    #[arg(long, default_value = "10000")]
    pub max_entries: usize,

    /// Maximum total uncompressed size declared by one archive
    #[arg(long, value_parser = parse_byte_size)]
    pub max_total_size: Option<u64>,
}

impl ReaderArgs {
    pub fn to_config(&self) -> ReaderConfig {
        let mut config = ReaderConfig {
            max_entry_count: self.max_entries,
            ..ReaderConfig::default()
        };
        if let Some(size) = self.max_total_size {
            config.max_total_size = size;
        }
        config
    }
}

#[derive(clap::Args)]
pub struct TreeArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Maximum depth to display (0 for unlimited)
    #[arg(short = 'L', long, value_name = "N", default_value = "0")]
    pub level: usize,

    /// List directories only
    #[arg(short = 'd', long)]
    pub dirs_only: bool,

    #[command(flatten)]
    pub reader: ReaderArgs,
}

#[derive(clap::Args)]
pub struct ContentArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Path inside the archive (default: archive root)
    #[arg(value_name = "SUBPATH")]
    pub subpath: Option<String>,

    /// Show size, checksum and compression of each entry
    #[arg(short, long)]
    pub long: bool,

    #[command(flatten)]
    pub reader: ReaderArgs,
}

#[derive(clap::Args)]
pub struct DiffArgs {
    /// Path to the left (old) archive
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Path to the right (new) archive
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,

    /// Include unchanged entries
    #[arg(short, long)]
    pub all: bool,

    #[command(flatten)]
    pub reader: ReaderArgs,
}

#[derive(clap::Args)]
pub struct WalkArgs {
    /// Path to the archive file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    #[command(flatten)]
    pub reader: ReaderArgs,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Parse byte size with optional suffix (K, M, G, T)
#[allow(clippy::option_if_let_else)]
fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty byte size".to_string());
    }

    let (num_str, multiplier) = if let Some(stripped) = s.strip_suffix('T') {
        (stripped, 1024_u64.pow(4))
    } else if let Some(stripped) = s.strip_suffix('G') {
        (stripped, 1024_u64.pow(3))
    } else if let Some(stripped) = s.strip_suffix('M') {
        (stripped, 1024_u64.pow(2))
    } else if let Some(stripped) = s.strip_suffix('K') {
        (stripped, 1024)
    } else {
        (s, 1)
    };

    num_str
        .parse::<u64>()
        .map_err(|_| format!("invalid byte size: {s}"))
        .and_then(|n| {
            n.checked_mul(multiplier)
                .ok_or_else(|| format!("byte size overflow: {s}"))
        })
}
