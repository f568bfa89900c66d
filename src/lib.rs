//! depmap — dependency tree rendering from plain edge lists
//!
//! Load `master->dependency` edges into a graph and print the full transitive
//! dependency tree of any node, with `<circ>` marking a path that re-enters
//! one of its own ancestors.
//!
//! # Features
//! - Idempotent, validated edge insertion (`graph::DependencyGraph`)
//! - All-or-nothing loading of edge-list files with line-accurate errors
//! - Text trees with `|_` / `\_` connectors, JSON trees, and DOT export
//!
//! # Quickstart (Library)
//! ```
//! use depmap::graph::DependencyGraph;
//! use depmap::visualization::TreeRenderer;
//!
//! let mut graph = DependencyGraph::new();
//! graph.load_edges(["A->B", "B->C", "A->C"]).expect("valid edges");
//! let layout = TreeRenderer::new().render(&graph.snapshot(), "A");
//! assert_eq!(layout, "A\n|_B\n|  \\_C\n\\_C");
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! depmap graph.txt A
//! depmap graph.txt A --format json --dot graph.dot
//! ```
pub mod app;
pub mod cli;
pub mod errors;
pub mod graph;
pub mod parser;
pub mod utils;
pub mod visualization;
