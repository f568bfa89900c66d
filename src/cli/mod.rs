use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "depmap",
    version,
    about = "Render the dependency tree of a node from an edge list",
    long_about = "Load `master->dependency` edges from FILE (one per line) and print the full transitive dependency tree of START. Every path is expanded; a node that re-enters its own ancestor path is marked <circ>. Settings may also come from a depmap.toml next to FILE or from --config."
)]
pub struct Cli {
    /// Edge-list file, one `master->dependency` per line
    pub file: PathBuf,
    /// Node to use as the root of the tree
    pub start: String,
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output format (defaults to the config value, then text)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Also write the whole graph as Graphviz DOT to this path
    #[arg(long)]
    pub dot: Option<PathBuf>,
    /// Suppress the banner and timing lines
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a config value; unknown values yield `None`.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
