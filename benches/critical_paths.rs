//! Criterion benchmarks for ggst-team critical paths
//!
//! - Catalog: alias resolution
//! - Team: member-string parsing and assembly
//! - Layout: slot computation
//! - Color: option color parsing
//! - Renderer: full team render to PNG

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ggst_team::catalog::Catalog;
use ggst_team::color::parse_color;
use ggst_team::layout::{compute_slots, LayoutParams, Orientation};
use ggst_team::options::RenderOptionsInput;
use ggst_team::renderer::Renderer;
use ggst_team::team::Team;

// =============================================================================
// Catalog Benchmarks
// =============================================================================

fn bench_catalog(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let mut group = c.benchmark_group("catalog");

    group.bench_function("resolve_id", |b| b.iter(|| catalog.resolve_character_id(black_box("sol"))));
    group.bench_function("resolve_alias_mixed_case", |b| {
        b.iter(|| catalog.resolve_character_id(black_box("  NaGo ")))
    });
    group.bench_function("resolve_localized", |b| {
        b.iter(|| catalog.resolve_character_id(black_box("ポチョ")))
    });
    group.bench_function("resolve_miss", |b| {
        b.iter(|| catalog.resolve_character_id(black_box("not_a_character")))
    });

    group.finish();
}

// =============================================================================
// Team Benchmarks
// =============================================================================

fn bench_team(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let mut group = c.benchmark_group("team");

    group.bench_function("assemble", |b| {
        b.iter(|| {
            Team::assemble(
                catalog,
                black_box("Bench Team"),
                black_box("Alice:sol, Bob:ky, Carol:ram"),
            )
        })
    });

    group.finish();
}

// =============================================================================
// Layout Benchmarks
// =============================================================================

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let params = LayoutParams::new(orientation, 1920, 1080);
        group.bench_with_input(
            BenchmarkId::new("compute_slots", orientation),
            &params,
            |b, params| b.iter(|| compute_slots(black_box(3), params)),
        );
    }

    group.finish();
}

// =============================================================================
// Color Benchmarks
// =============================================================================

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    group.bench_function("parse_hex_6", |b| b.iter(|| parse_color(black_box("#1a1a2e"))));
    group.bench_function("parse_named", |b| b.iter(|| parse_color(black_box("white"))));
    group.bench_function("parse_rgb", |b| {
        b.iter(|| parse_color(black_box("rgb(26, 26, 46)")))
    });

    group.finish();
}

// =============================================================================
// Renderer Benchmarks
// =============================================================================

fn bench_renderer(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let team = Team::assemble(catalog, "Bench Team", "Alice:sol, Bob:ky, Carol:may")
        .expect("bench team should assemble");
    let renderer = Renderer::new(catalog, "assets");

    let mut group = c.benchmark_group("renderer");
    group.sample_size(10);

    for (width, height) in [(640u32, 360u32), (1920, 1080)] {
        let input =
            RenderOptionsInput { width: Some(width), height: Some(height), ..Default::default() };
        group.bench_with_input(
            BenchmarkId::new("render", format!("{}x{}", width, height)),
            &input,
            |b, input| b.iter(|| renderer.render(black_box(&team), input)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_catalog, bench_team, bench_layout, bench_color, bench_renderer);

criterion_main!(benches);
