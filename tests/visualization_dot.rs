use depmap::graph::DependencyGraph;
use depmap::visualization::{DotGenerator, DotOptions, DotTheme, RankDir};

fn sample() -> DependencyGraph {
    let mut g = DependencyGraph::new();
    g.load_edges(["web->db", "web->cache", "cache->db", "db->web"]).unwrap();
    g
}

#[test]
fn dot_lists_nodes_sorted_and_edges_in_insertion_order() {
    let g = sample();
    let dot = DotGenerator::new().generate_dot(&g.snapshot());
    assert!(dot.starts_with("digraph dependencies {\n"));
    assert!(dot.ends_with("}\n"));

    let cache = dot.find("  \"cache\";").unwrap();
    let db = dot.find("  \"db\";").unwrap();
    let web = dot.find("  \"web\";").unwrap();
    assert!(cache < db && db < web);

    let first = dot.find("\"web\" -> \"db\";").unwrap();
    let second = dot.find("\"web\" -> \"cache\";").unwrap();
    assert!(first < second);
    assert!(dot.contains("\"db\" -> \"web\";"));
    assert_eq!(dot.matches(" -> ").count(), 4);
}

#[test]
fn dot_options_change_header() {
    let g = sample();
    let opts = DotOptions { theme: DotTheme::Dark, rankdir: RankDir::TB };
    let dot = DotGenerator::new().generate_dot_with_options(&g.snapshot(), opts);
    assert!(dot.contains("rankdir=TB;"));
    assert!(dot.contains("bgcolor=\"#1e1e1e\";"));
}

#[test]
fn empty_graph_is_valid_dot() {
    let g = DependencyGraph::new();
    let dot = DotGenerator::new().generate_dot(&g.snapshot());
    assert!(!dot.contains(" -> "));
    assert!(dot.contains("rankdir=LR;"));
}
