//! Path-sensitive dependency tree rendering.
//!
//! Every path from the root is expanded on its own: a node reached through two
//! different parents is printed twice. Only re-entering a node that is already
//! on the current root-to-node path counts as a cycle; such an occurrence is
//! printed with [`CYCLE_MARKER`] and not expanded further.
//!
//! Both renderers walk the graph with an explicit stack of frames, so deep
//! chains do not consume native stack.
use crate::graph::GraphSnapshot;
use serde::Serialize;
use std::collections::HashSet;

/// Appended to a node name that closes a cycle on the current path.
pub const CYCLE_MARKER: &str = "<circ>";

const BRANCH: &str = "|_";
const LAST_BRANCH: &str = "\\_";
const CONTINUED: &str = "|  ";
const BLANK: &str = "   ";

/// Result reported for a root that is not in the graph.
#[must_use]
pub fn missing_root(root: &str) -> String {
    format!("Does not contain {root}")
}

/// One occurrence of a node in the expanded tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    /// True when this occurrence re-enters an ancestor and was not expanded.
    pub cycle: bool,
    pub dependencies: Vec<TreeNode>,
}

impl TreeNode {
    fn new(name: &str, cycle: bool) -> Self {
        Self { name: name.to_string(), cycle, dependencies: Vec::new() }
    }
}

/// Fully expanded tree for one root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyTree {
    pub root: TreeNode,
    /// Number of dependency occurrences below the root.
    pub total_dependencies: usize,
    /// Depth of the deepest occurrence; the root is depth 0.
    pub max_depth: usize,
}

// A node being expanded: its dependencies and the index of the next one to visit.
struct Frame<'a> {
    name: &'a str,
    deps: &'a [String],
    depth: usize,
    next: usize,
}

struct BuildFrame<'a> {
    node: TreeNode,
    deps: &'a [String],
    depth: usize,
    next: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TreeRenderer;

impl TreeRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render the tree rooted at `root` as text.
    ///
    /// The root line is unprefixed. Every other line is indented with `"|  "`
    /// for each shallower level that still has siblings to print and `"   "`
    /// otherwise, followed by `"|_"` (more siblings follow) or `"\_"` (last
    /// sibling). A missing root yields `"Does not contain <root>"`.
    #[must_use]
    pub fn render(&self, graph: &GraphSnapshot<'_>, root: &str) -> String {
        let Some(node) = graph.get(root) else {
            return missing_root(root);
        };

        let mut out = String::from(node.name());
        let mut ancestors: HashSet<&str> = HashSet::new();
        // Depths whose sibling group is still open.
        let mut continuation: HashSet<usize> = HashSet::new();
        ancestors.insert(node.name());
        let mut stack = vec![Frame { name: node.name(), deps: node.dependencies(), depth: 0, next: 0 }];

        while let Some(frame) = stack.last_mut() {
            let deps = frame.deps;
            let Some(dep) = deps.get(frame.next) else {
                ancestors.remove(frame.name);
                stack.pop();
                continue;
            };
            frame.next += 1;
            let depth = frame.depth;
            let is_last = frame.next == deps.len();

            out.push('\n');
            for level in 0..depth {
                out.push_str(if continuation.contains(&level) { CONTINUED } else { BLANK });
            }
            if is_last {
                out.push_str(LAST_BRANCH);
                continuation.remove(&depth);
            } else {
                out.push_str(BRANCH);
                continuation.insert(depth);
            }
            out.push_str(dep);

            if ancestors.contains(dep.as_str()) {
                out.push_str(CYCLE_MARKER);
            } else if let Some(child) = graph.get(dep) {
                ancestors.insert(child.name());
                stack.push(Frame {
                    name: child.name(),
                    deps: child.dependencies(),
                    depth: depth + 1,
                    next: 0,
                });
            }
        }
        out
    }

    /// Expand the tree rooted at `root` into a `DependencyTree`.
    ///
    /// Uses the same traversal as [`TreeRenderer::render`]; returns `None` when
    /// the root is not in the graph.
    #[must_use]
    pub fn build(&self, graph: &GraphSnapshot<'_>, root: &str) -> Option<DependencyTree> {
        let node = graph.get(root)?;
        let mut ancestors: HashSet<&str> = HashSet::new();
        ancestors.insert(node.name());
        let mut stack = vec![BuildFrame {
            node: TreeNode::new(node.name(), false),
            deps: node.dependencies(),
            depth: 0,
            next: 0,
        }];
        let mut total_dependencies = 0;
        let mut max_depth = 0;

        while let Some(frame) = stack.last_mut() {
            let deps = frame.deps;
            if let Some(dep) = deps.get(frame.next) {
                frame.next += 1;
                let depth = frame.depth + 1;
                total_dependencies += 1;
                max_depth = max_depth.max(depth);
                if ancestors.contains(dep.as_str()) {
                    frame.node.dependencies.push(TreeNode::new(dep, true));
                } else if let Some(child) = graph.get(dep) {
                    ancestors.insert(child.name());
                    stack.push(BuildFrame {
                        node: TreeNode::new(child.name(), false),
                        deps: child.dependencies(),
                        depth,
                        next: 0,
                    });
                }
                continue;
            }

            let Some(done) = stack.pop() else { break };
            ancestors.remove(done.node.name.as_str());
            match stack.last_mut() {
                Some(parent) => parent.node.dependencies.push(done.node),
                None => return Some(DependencyTree { root: done.node, total_dependencies, max_depth }),
            }
        }
        None
    }
}
