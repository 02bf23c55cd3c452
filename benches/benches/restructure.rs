// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use chronograph_model::{Actual, Classifier, DataAccess, Storage};
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

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

fn bench_restructure(c: &mut Criterion) {
    let structure = structure();
    let mut group = c.benchmark_group("restructure");
    for &n in &[100u32, 1_000, 10_000] {
        let jobs = gen_jobs(n);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(BenchmarkId::new("fresh", n), |b| {
            b.iter_batched(
                Storage::<Job>::new,
                |mut storage| {
                    let report = storage.restructure(&jobs, &structure);
                    black_box(report.ok());
                    storage
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(BenchmarkId::new("reuse", n), |b| {
            let mut storage = Storage::<Job>::new();
            b.iter(|| black_box(storage.restructure(&jobs, &structure).ok()));
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let jobs = gen_jobs(10_000);
    let mut storage = Storage::<Job>::new();
    let _ = storage.restructure(&jobs, &structure());

    let mut group = c.benchmark_group("query");
    group.bench_function("count_actual", |b| {
        let actual = Actual { now: 500 };
        b.iter(|| black_box(storage.count(&actual)));
    });
    group.bench_function("lane_lookup", |b| {
        b.iter(|| black_box(storage.bricks("host-3", "team-5", "site-1").len()));
    });
    group.bench_function("max_end", |b| {
        b.iter(|| black_box(storage.max_end()));
    });
    group.finish();
}

criterion_group!(benches, bench_restructure, bench_queries);
criterion_main!(benches);
