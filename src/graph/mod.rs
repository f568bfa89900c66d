//! Graph model and store for the crate.
//!
//! `DependencyGraph` owns every node seen so far, keyed by name. Each `Node`
//! keeps its dependencies as an ordered list of *names*; the name-keyed map is
//! the only owner, so cycles in the graph never become ownership cycles.
//!
//! Build a graph with `DependencyGraph::add_edge` or the bulk loaders, then
//! hand `DependencyGraph::snapshot` to the renderers in `crate::visualization`.
use crate::errors::{DepMapError, FormatError, ParseError};
use crate::parser::EdgeListParser;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::path::Path;

/// A named vertex with its ordered, duplicate-free dependency names.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    dependencies: Vec<String>,
}

impl Node {
    fn new(name: &str) -> Self {
        Self { name: name.to_string(), dependencies: Vec::new() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dependency names in insertion order.
    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    #[must_use]
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d == name)
    }
}

// Identity is the name alone.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A validated `master -> dependency` pair with trimmed endpoint names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub master: String,
    pub dependency: String,
}

impl Edge {
    /// Validate and normalize an edge.
    ///
    /// # Errors
    /// `FormatError::MissingVertex` when either name is blank after trimming,
    /// `FormatError::SelfDependency` when both names are equal.
    pub fn new(master: &str, dependency: &str) -> Result<Self, FormatError> {
        let master = master.trim();
        let dependency = dependency.trim();
        if master.is_empty() || dependency.is_empty() {
            return Err(FormatError::MissingVertex);
        }
        if master == dependency {
            return Err(FormatError::SelfDependency);
        }
        Ok(Self { master: master.to_string(), dependency: dependency.to_string() })
    }
}

/// Borrowed, read-only view of a `DependencyGraph`.
#[derive(Debug, Clone, Copy)]
pub struct GraphSnapshot<'a> {
    nodes: &'a HashMap<String, Node>,
}

impl<'a> GraphSnapshot<'a> {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Node> {
        self.nodes.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// All node names, sorted for deterministic output.
    #[must_use]
    pub fn names(&self) -> Vec<&'a str> {
        let mut names: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: HashMap<String, Node>,
}

impl DependencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `master` depends on `dependency`, creating either node if needed.
    ///
    /// Returns `Ok(true)` when the edge is new and `Ok(false)` when it was
    /// already present. A rejected edge leaves the graph untouched.
    ///
    /// # Errors
    /// Returns `FormatError` for a blank endpoint or a self-dependency.
    pub fn add_edge(&mut self, master: &str, dependency: &str) -> Result<bool, FormatError> {
        let edge = Edge::new(master, dependency)?;
        Ok(self.insert(edge))
    }

    fn insert(&mut self, edge: Edge) -> bool {
        if !self.nodes.contains_key(&edge.dependency) {
            self.nodes.insert(edge.dependency.clone(), Node::new(&edge.dependency));
        }
        let master = self
            .nodes
            .entry(edge.master)
            .or_insert_with_key(|name| Node::new(name));
        if master.has_dependency(&edge.dependency) {
            return false;
        }
        tracing::trace!(master = %master.name, dependency = %edge.dependency, "edge added");
        master.dependencies.push(edge.dependency);
        true
    }

    /// Load `master->dependency` lines.
    ///
    /// Every line is parsed and validated before the graph is touched, so a
    /// failing load applies nothing. Returns the number of new edges.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first bad line.
    pub fn load_edges<I, S>(&mut self, lines: I) -> Result<usize, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let edges = EdgeListParser::parse_lines(lines)?;
        let total = edges.len();
        let mut added = 0;
        for edge in edges {
            if self.insert(edge) {
                added += 1;
            }
        }
        tracing::debug!(lines = total, added, nodes = self.nodes.len(), "edges loaded");
        Ok(added)
    }

    /// Read an edge-list file and load it with `load_edges`.
    ///
    /// # Errors
    /// Returns `DepMapError::Io` if the file cannot be read and
    /// `DepMapError::Parse` naming the file and line for malformed content.
    pub fn load_file(&mut self, path: &Path) -> Result<usize, DepMapError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| DepMapError::Io { file: path.to_path_buf(), source })?;
        self.load_edges(content.lines())
            .map_err(|source| DepMapError::Parse { file: path.to_path_buf(), source })
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot<'_> {
        GraphSnapshot { nodes: &self.nodes }
    }

    #[must_use]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|n| n.dependencies.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps<'a>(g: &'a DependencyGraph, name: &str) -> Vec<&'a str> {
        g.node(name).map(|n| n.dependencies().iter().map(String::as_str).collect()).unwrap_or_default()
    }

    #[test]
    fn single_edge_creates_both_nodes() {
        let mut g = DependencyGraph::new();
        assert_eq!(g.add_edge("A", "B"), Ok(true));
        assert!(g.contains("A"));
        assert!(g.contains("B"));
        assert_eq!(deps(&g, "A"), vec!["B"]);
        assert!(deps(&g, "B").is_empty());
    }

    #[test]
    fn duplicate_edge_is_a_no_op() {
        let mut g = DependencyGraph::new();
        assert_eq!(g.add_edge("A", "B"), Ok(true));
        assert_eq!(g.add_edge("A", "B"), Ok(false));
        assert_eq!(deps(&g, "A"), vec!["B"]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn dependencies_keep_insertion_order() {
        let mut g = DependencyGraph::new();
        for d in ["C", "A", "B"] {
            g.add_edge("M", d).unwrap();
        }
        assert_eq!(deps(&g, "M"), vec!["C", "A", "B"]);
    }

    #[test]
    fn rejects_blank_and_self_edges_without_mutation() {
        let mut g = DependencyGraph::new();
        assert_eq!(g.add_edge("A", "A"), Err(FormatError::SelfDependency));
        assert_eq!(g.add_edge("", "A"), Err(FormatError::MissingVertex));
        assert_eq!(g.add_edge("A", ""), Err(FormatError::MissingVertex));
        assert_eq!(g.add_edge("  ", "A"), Err(FormatError::MissingVertex));
        assert!(g.is_empty());
    }

    #[test]
    fn names_are_trimmed() {
        let mut g = DependencyGraph::new();
        g.add_edge(" A", "B ").unwrap();
        assert_eq!(g.add_edge("A", "B"), Ok(false));
        assert_eq!(g.add_edge("A ", " A"), Err(FormatError::SelfDependency));
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn failed_load_applies_nothing() {
        let mut g = DependencyGraph::new();
        let err = g.load_edges(["A->B", "B->C", "C-D"]).unwrap_err();
        assert_eq!(err.line_no(), 3);
        assert!(g.is_empty());
    }

    #[test]
    fn clear_empties_the_store() {
        let mut g = DependencyGraph::new();
        g.load_edges(["A->B", "B->C"]).unwrap();
        assert_eq!(g.len(), 3);
        g.clear();
        assert!(g.is_empty());
        assert!(g.snapshot().is_empty());
    }

    #[test]
    fn node_equality_is_by_name() {
        let mut g = DependencyGraph::new();
        g.add_edge("A", "B").unwrap();
        let a = g.node("A").cloned().unwrap();
        assert_eq!(a, Node::new("A"));
        assert_ne!(a, Node::new("B"));
    }
}
