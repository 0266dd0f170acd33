//! Benchmark for the pull path.
//!
//! Run with: cargo bench --package summoner_economy --bench pull_benchmark

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use summoner_content::{ContentTables, Currency};
use summoner_economy::{draw, GachaEngine, GameState, PityState, PullRequest, RarityWheel};

const CONTENT: &str = include_str!("../../../data/content.toml");

fn benchmark_rate_resolution(c: &mut Criterion) {
    let content = ContentTables::from_toml_str(CONTENT).unwrap();
    let pool = content.pool("hero_standard").unwrap();

    c.bench_function("resolve_wheel_soft_pity", |b| {
        let mut count = 0u32;
        b.iter(|| {
            count = count % 90 + 1;
            black_box(RarityWheel::resolve(pool, count, false))
        });
    });
}

fn benchmark_single_draw(c: &mut Criterion) {
    let content = ContentTables::from_toml_str(CONTENT).unwrap();
    let pool = content.pool("hero_limited_aria").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut pity = PityState::default();

    c.bench_function("draw_limited_banner", |b| {
        b.iter(|| black_box(draw(pool, &mut pity, &mut rng).map(|d| d.is_up)));
    });
}

fn benchmark_ten_pull(c: &mut Criterion) {
    let content = ContentTables::from_toml_str(CONTENT).unwrap();
    let engine = GachaEngine::new(&content);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let mut state = GameState::new("bench");
    state.ledger.add(Currency::Diamonds, u64::MAX / 2);
    // A mid-game roster makes the state clone realistic.
    for _ in 0..20 {
        if let Ok(outcome) = engine.pull(&state, PullRequest::multi("hero_standard", 10, now), &mut rng) {
            state = outcome.state;
        }
    }

    c.bench_function("ten_pull_hero_standard", |b| {
        b.iter(|| {
            black_box(engine.pull(&state, PullRequest::multi("hero_standard", 10, now), &mut rng))
        });
    });
}

criterion_group!(
    benches,
    benchmark_rate_resolution,
    benchmark_single_draw,
    benchmark_ten_pull
);
criterion_main!(benches);
