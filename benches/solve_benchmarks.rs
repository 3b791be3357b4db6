use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dungeon_solver::solver::{solve_dfs, SearchLimits};
use dungeon_solver::utils::{dungeon_from_text, generate_dungeon, GeneratorConfig};
use std::hint::black_box;

const PUZZLES: &[(&str, &str)] = &[
    ("spear_line", r#"
WWWWW
WWBWW
WWBWW
WWSWW
WWWWW
"#),
    ("corridor_red", r#"
WWWWWWW
WSR...W
WWWWWWW
"#),
    ("mixed_room", r#"
WWWWWWW
W..R..W
W.PWB.W
WS...BW
WWWWWWW
"#),
];

pub fn bench_fixed_puzzles(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_fixed");
    for &(name, text) in PUZZLES {
        let dungeon = dungeon_from_text(text).expect("benchmark puzzle must parse");
        group.bench_with_input(BenchmarkId::new("solve_dfs", name), &dungeon, |b, dungeon| {
            b.iter(|| solve_dfs(black_box(dungeon), &SearchLimits::default()))
        });
    }
    group.finish();
}

pub fn bench_random_dungeons(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_random");
    group.sample_size(20);
    let config = GeneratorConfig {
        rows: 6,
        cols: 6,
        monsters: 3,
        walls: 2,
    };
    let limits = SearchLimits {
        max_nodes: Some(500_000),
        ..SearchLimits::default()
    };
    for seed in [1u64, 2, 3] {
        let dungeon = generate_dungeon(&config, seed).expect("config fits the grid");
        group.bench_with_input(BenchmarkId::new("seed", seed), &dungeon, |b, dungeon| {
            b.iter(|| solve_dfs(black_box(dungeon), &limits))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fixed_puzzles, bench_random_dungeons);
criterion_main!(benches);
