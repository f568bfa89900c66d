use crate::graph::GraphSnapshot;
use std::fmt::Write as _;

pub mod tree;

pub use tree::{DependencyTree, TreeNode, TreeRenderer, CYCLE_MARKER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotTheme { Light, Dark }

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDir { LR, TB }

#[derive(Debug, Clone, Copy)]
pub struct DotOptions {
    pub theme: DotTheme,
    pub rankdir: RankDir,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self { theme: DotTheme::Light, rankdir: RankDir::LR }
    }
}

#[derive(Debug, Default)]
pub struct DotGenerator;

impl DotGenerator {
    #[must_use]
    pub fn new() -> Self { Self {} }

    #[must_use]
    pub fn generate_dot(&self, graph: &GraphSnapshot<'_>) -> String {
        self.generate_dot_with_options(graph, DotOptions::default())
    }

    /// Write the whole graph as Graphviz DOT.
    ///
    /// Nodes are emitted in name order and each node's edges in insertion
    /// order, so equal graphs produce identical output.
    #[must_use]
    pub fn generate_dot_with_options(&self, graph: &GraphSnapshot<'_>, opts: DotOptions) -> String {
        let (bg, fg, edge) = match opts.theme {
            DotTheme::Light => ("white", "black", "gray40"),
            DotTheme::Dark => ("#1e1e1e", "#e0e0e0", "#9e9e9e"),
        };
        let rankdir = match opts.rankdir {
            RankDir::LR => "LR",
            RankDir::TB => "TB",
        };

        let mut out = String::new();
        out.push_str("digraph dependencies {\n");
        let _ = writeln!(out, "  rankdir={rankdir};");
        let _ = writeln!(out, "  bgcolor=\"{bg}\";");
        let _ = writeln!(out, "  node [shape=box, style=rounded, color=\"{fg}\", fontcolor=\"{fg}\"];");
        let _ = writeln!(out, "  edge [color=\"{edge}\"];");

        let names = graph.names();
        for name in &names {
            let _ = writeln!(out, "  {};", quote(name));
        }
        for name in &names {
            let Some(node) = graph.get(name) else { continue };
            for dep in node.dependencies() {
                let _ = writeln!(out, "  {} -> {};", quote(name), quote(dep));
            }
        }
        out.push('}');
        out.push('\n');
        out
    }
}

fn quote(name: &str) -> String {
    let mut s = String::with_capacity(name.len() + 2);
    s.push('"');
    for ch in name.chars() {
        if ch == '"' || ch == '\\' {
            s.push('\\');
        }
        s.push(ch);
    }
    s.push('"');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_and_escapes_names() {
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
