use crate::cli::{Cli, OutputFormat};
use crate::errors::DepMapError;
use crate::graph::DependencyGraph;
use crate::utils::config::{self, Config};
use crate::visualization::{tree, DotGenerator, DotOptions, DotTheme, RankDir, TreeRenderer};
use std::fs;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct Settings {
    format: OutputFormat,
    quiet: bool,
    dot: DotOptions,
}

// CLI flags win over config values, config values over defaults.
fn resolve_settings(cli: &Cli, cfg: &Config) -> Settings {
    let output = cfg.output.clone().unwrap_or_default();
    let format = cli
        .format
        .or_else(|| output.format.as_deref().and_then(OutputFormat::from_config))
        .unwrap_or(OutputFormat::Text);
    let quiet = cli.quiet || output.quiet.unwrap_or(false);

    let mut dot = DotOptions::default();
    if let Some(d) = cfg.dot.as_ref() {
        if let Some(v) = d.theme.as_deref() {
            dot.theme = if v == "dark" { DotTheme::Dark } else { DotTheme::Light };
        }
        if let Some(v) = d.rankdir.as_deref() {
            dot.rankdir = if v == "TB" { RankDir::TB } else { RankDir::LR };
        }
    }
    Settings { format, quiet, dot }
}

fn load_config(cli: &Cli) -> Config {
    let found = match cli.config.as_deref() {
        Some(path) => config::load_config_at(path),
        None => cli.file.parent().and_then(config::load_config_near),
    };
    found.unwrap_or_default()
}

fn write_output(path: &Path, content: &str) -> Result<(), DepMapError> {
    fs::write(path, content).map_err(|source| DepMapError::Io { file: path.to_path_buf(), source })
}

/// Run the CLI logic in-process.
///
/// Returns an exit code (0 = success). Nothing is written to stdout when the
/// edge list fails to load.
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    let started = Instant::now();
    let settings = resolve_settings(&cli, &load_config(&cli));

    let mut graph = DependencyGraph::new();
    if let Err(e) = graph.load_file(&cli.file) {
        tracing::error!(error = %e, "load failed");
        eprintln!("Load failed: {e}");
        return 1;
    }
    let snapshot = graph.snapshot();
    let renderer = TreeRenderer::new();

    if let Some(dot_path) = cli.dot.as_deref() {
        let content = DotGenerator::new().generate_dot_with_options(&snapshot, settings.dot);
        if let Err(e) = write_output(dot_path, &content) {
            eprintln!("Failed to write DOT output: {e}");
        }
    }

    match settings.format {
        OutputFormat::Text => {
            let layout = renderer.render(&snapshot, &cli.start);
            if !settings.quiet {
                println!("Dependency Map:");
            }
            println!("{layout}");
            if !settings.quiet {
                println!("Execution time: {} ms", started.elapsed().as_millis());
            }
        }
        OutputFormat::Json => match renderer.build(&snapshot, &cli.start) {
            Some(tree) => match serde_json::to_string_pretty(&tree) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("JSON encode error: {e}");
                    return 1;
                }
            },
            None => println!("{}", tree::missing_root(&cli.start)),
        },
    }

    tracing::info!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        elapsed_ms = started.elapsed().as_millis(),
        "complete"
    );
    0
}
