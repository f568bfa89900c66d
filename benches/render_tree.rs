use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use depmap::graph::DependencyGraph;
use depmap::visualization::TreeRenderer;

// Layered graph where every node depends on every node of the next layer.
fn layered(layers: usize, width: usize) -> DependencyGraph {
    let mut g = DependencyGraph::new();
    for l in 0..layers {
        for i in 0..width {
            let master = if l == 0 { "root".to_string() } else { format!("l{l}n{i}") };
            for j in 0..width {
                g.add_edge(&master, &format!("l{}n{j}", l + 1)).expect("valid edge");
            }
            if l == 0 {
                break;
            }
        }
    }
    g
}

fn chain(len: usize) -> DependencyGraph {
    let mut g = DependencyGraph::new();
    for i in 0..len {
        g.add_edge(&format!("c{i}"), &format!("c{}", i + 1)).expect("valid edge");
    }
    g
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_tree");
    let renderer = TreeRenderer::new();

    for (layers, width) in [(3, 4), (4, 4), (3, 8)] {
        let g = layered(layers, width);
        group.bench_function(BenchmarkId::new("layered", format!("{layers}x{width}")), |b| {
            b.iter(|| black_box(renderer.render(&g.snapshot(), black_box("root")).len()))
        });
    }

    let g = chain(500);
    group.bench_function(BenchmarkId::new("chain", 500), |b| {
        b.iter(|| black_box(renderer.render(&g.snapshot(), black_box("c0")).len()))
    });

    group.finish();
}

criterion_group!(name = benches; config = Criterion::default(); targets = bench_render);
criterion_main!(benches);
