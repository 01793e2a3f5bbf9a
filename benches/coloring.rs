//! Benchmarks for graph building, coloring and guard selection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use art_gallery::coloring::{color_graph, ColoringOptions, GuardSet};
use art_gallery::graph::AdjacencyGraph;
use art_gallery::polygon::Polygon;
use art_gallery::triangulation::{normalize, EarClipping, Triangle, Triangulator};
use art_gallery::Point2;

/// Generates a star-shaped polygon with deterministic "random" radii.
fn generate_star(num_points: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut state = seed;
    (0..num_points)
        .map(|i| {
            // Simple xorshift for deterministic radii
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;

            let radius = 1.0 + (state % 1000) as f64 / 100.0;
            let angle = (i as f64 + 0.5) / num_points as f64 * std::f64::consts::TAU;
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

fn triangulate(points: &[Point2<f64>]) -> Vec<Triangle<f64>> {
    let polygon = Polygon::from_vertices(points).expect("star polygons are simple");
    let ring = polygon.ring().expect("polygon is closed");
    normalize(&EarClipping.triangulate(&ring).expect("triangulation")).expect("non-empty")
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");

    for size in [10, 100, 500] {
        let triangles = triangulate(&generate_star(size, 12345));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("star", size), &triangles, |b, tris| {
            b.iter(|| AdjacencyGraph::build(black_box(tris), black_box(6)))
        });
    }

    group.finish();
}

fn bench_coloring(c: &mut Criterion) {
    let mut group = c.benchmark_group("coloring");
    let options = ColoringOptions::default();

    for size in [10, 100, 500] {
        let triangles = triangulate(&generate_star(size, 12345));
        let graph = AdjacencyGraph::build(&triangles, 6).expect("finite coordinates");
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("star", size), &graph, |b, g| {
            b.iter(|| color_graph(black_box(g), black_box(&options)))
        });
    }

    group.finish();
}

fn bench_guards(c: &mut Criterion) {
    let triangles = triangulate(&generate_star(500, 12345));
    let graph = AdjacencyGraph::build(&triangles, 6).expect("finite coordinates");
    let coloring = color_graph(&graph, &ColoringOptions::default()).expect("3-colorable");

    c.bench_function("guard_set_500", |b| {
        b.iter(|| GuardSet::from_coloring(black_box(&coloring)))
    });
}

criterion_group!(benches, bench_graph_build, bench_coloring, bench_guards);
criterion_main!(benches);
