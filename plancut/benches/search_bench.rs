use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;
use plancut::config::{NestingConfig, ScrapConfig};
use plancut::entities::{PartShape, PartSpec, Sheet};
use plancut::geometry::Rect;
use plancut::nesting::prepare_units;
use plancut::packer::{Heuristic, RectPacker};
use plancut::scrap::find_scraps;
use plancut::search::{bin_sizes, pack_rects, search_min_sheets};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

criterion_main!(benches);
criterion_group!(benches, heuristic_bench, min_sheets_bench, scrap_bench);

const N_PART_TYPES: [usize; 3] = [10, 40, 120];

fn random_parts(n_types: usize, rng: &mut SmallRng) -> Vec<PartSpec> {
    (0..n_types)
        .map(|i| {
            let shape = match i % 3 {
                0 => PartShape::Rectangle {
                    width: rng.random_range(50.0..900.0),
                    height: rng.random_range(50.0..600.0),
                },
                1 => PartShape::Circle {
                    diameter: rng.random_range(50.0..400.0),
                },
                _ => PartShape::RightTriangle {
                    base: rng.random_range(50.0..600.0),
                    height: rng.random_range(50.0..600.0),
                },
            };
            PartSpec::new(format!("part-{i}"), shape, rng.random_range(1..5))
        })
        .collect_vec()
}

/// A single packing run of every heuristic on a generous sheet pool
fn heuristic_bench(c: &mut Criterion) {
    let sheet = Sheet::try_new(3000.0, 1500.0, 10.0).unwrap();
    let mut group = c.benchmark_group("heuristic_pack");
    for n_types in N_PART_TYPES {
        let mut rng = SmallRng::seed_from_u64(0);
        let units = prepare_units(&random_parts(n_types, &mut rng), 8.0).unwrap();
        let rects = pack_rects(&units);
        let bins = bin_sizes(&sheet.pool(units.len()));
        for heuristic in Heuristic::ALL {
            group.bench_with_input(
                BenchmarkId::new(heuristic.to_string(), units.len()),
                &rects,
                |b, rects| b.iter(|| heuristic.pack(rects, &bins, true)),
            );
        }
    }
    group.finish();
}

/// The complete minimum sheet count search
fn min_sheets_bench(c: &mut Criterion) {
    let sheet = Sheet::try_new(3000.0, 1500.0, 10.0).unwrap();
    let config = NestingConfig::default();
    let pool = sheet.pool(config.max_sheets);
    let mut group = c.benchmark_group("min_sheets_search");
    group.sample_size(10);
    for n_types in N_PART_TYPES {
        let mut rng = SmallRng::seed_from_u64(0);
        let units = prepare_units(&random_parts(n_types, &mut rng), 8.0).unwrap();
        group.bench_function(BenchmarkId::from_parameter(units.len()), |b| {
            b.iter(|| search_min_sheets(&units, &pool, &config.search, None))
        });
    }
    group.finish();
}

/// Leftover extraction on square grids of pieces, every other row shifted
fn scrap_bench(c: &mut Criterion) {
    let config = ScrapConfig::default();
    let mut group = c.benchmark_group("find_scraps");
    for side in [10, 20, 30] {
        let pieces = (0..side)
            .cartesian_product(0..side)
            .map(|(i, j)| {
                let shift = (j % 2) as f64 * 20.0;
                Rect::from_xywh(i as f64 * 60.0 + shift, j as f64 * 50.0, 40.0, 30.0)
            })
            .collect_vec();
        let (width, height) = (side as f64 * 60.0 + 20.0, side as f64 * 50.0);
        group.bench_function(BenchmarkId::from_parameter(pieces.len()), |b| {
            b.iter(|| find_scraps(width, height, &pieces, &config))
        });
    }
    group.finish();
}
