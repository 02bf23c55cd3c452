// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use chronograph_index::Area;
use chronograph_layout::{Calculator, LayoutConfig, LayoutRequest};
use chronograph_model::{Classifier, DataAccess, Storage};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

#[derive(Clone)]
struct Job {
    id: u32,
    site: u32,
    team: u32,
    host: u32,
    start: i64,
    end: i64,
}

struct Jobs(Vec<Job>);

impl DataAccess<Job> for Jobs {
    fn fetch_all(&self, filter: &dyn Fn(&Job) -> bool) -> Vec<Job> {
        self.0.iter().filter(|j| filter(j)).cloned().collect()
    }

    fn brick_id(&self, job: &Job) -> String {
        format!("job-{}", job.id)
    }

    fn start(&self, job: &Job) -> i64 {
        job.start
    }

    fn end(&self, job: &Job) -> i64 {
        job.end
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn below(&mut self, bound: u32) -> u32 {
        (self.next_u64() % u64::from(bound)) as u32
    }
}

/// `count` jobs spread over 4 sites, 8 teams and 16 hosts.
fn gen_jobs(count: u32) -> Jobs {
    let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
    Jobs(
        (0..count)
            .map(|id| {
                let start = i64::from(rng.below(1_000));
                Job {
                    id,
                    site: rng.below(4),
                    team: rng.below(8),
                    host: rng.below(16),
                    start,
                    end: start + 1 + i64::from(rng.below(50)),
                }
            })
            .collect(),
    )
}

fn structure() -> Vec<Arc<dyn Classifier<Job>>> {
    let site: Arc<dyn Classifier<Job>> = Arc::new(|j: &Job| Some(format!("site-{}", j.site)));
    let team: Arc<dyn Classifier<Job>> = Arc::new(|j: &Job| Some(format!("team-{}", j.team)));
    let host: Arc<dyn Classifier<Job>> = Arc::new(|j: &Job| Some(format!("host-{}", j.host)));
    vec![site, team, host]
}

fn storage_of(n: u32) -> Storage<Job> {
    let mut storage = Storage::new();
    let _ = storage.restructure(&gen_jobs(n), &structure());
    storage
}

fn request() -> LayoutRequest {
    LayoutRequest {
        scroll_x: 100,
        pixels_per_unit: 4,
        ..LayoutRequest::new(Area::new(0, 0, 1600, 900))
    }
}

fn bench_compute_layout(c: &mut Criterion) {
    let request = request();
    let mut group = c.benchmark_group("compute_layout");
    for &n in &[100u32, 1_000, 10_000] {
        let storage = storage_of(n);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(BenchmarkId::new("bricks", n), |b| {
            let mut calculator = Calculator::new(LayoutConfig::default());
            b.iter(|| {
                calculator.compute_layout(&storage, &request);
                black_box(calculator.content_height())
            });
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let request = request();
    let mut rng = Rng::new(0x81FD_BEE7_94F0_AF1A);
    let points: Vec<(i32, i32)> = (0..256)
        .map(|_| (rng.below(1600) as i32, rng.below(900) as i32))
        .collect();

    let mut group = c.benchmark_group("hit_test");
    for &n in &[100u32, 1_000, 10_000] {
        let storage = storage_of(n);
        let mut calculator = Calculator::new(LayoutConfig::default());
        calculator.compute_layout(&storage, &request);

        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(BenchmarkId::new("brick_at", n), |b| {
            b.iter(|| {
                black_box(
                    points
                        .iter()
                        .filter(|&&(x, y)| calculator.brick_at(x, y).is_some())
                        .count(),
                )
            });
        });
        group.bench_function(BenchmarkId::new("bricks_in", n), |b| {
            let window = Area::new(200, 100, 400, 300);
            b.iter(|| black_box(calculator.bricks_in(window).len()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_layout, bench_hit_test);
criterion_main!(benches);
