use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use snapshot_chess::game_state::chess_rules::STARTING_PLACEMENT;
use snapshot_chess::game_state::chess_types::Position;
use snapshot_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use snapshot_chess::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    placement: &'static str,
    expected_nodes: &'static [u64],
}

// Positions are placement-only with an empty history, so White is to move
// and castling is available wherever king and rooks stand on their origins.
const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "start",
        placement: STARTING_PLACEMENT,
        expected_nodes: &[20, 400],
    },
    BenchCase {
        name: "rook_endgame",
        placement: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        expected_nodes: &[14, 191],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "start",
        placement: STARTING_PLACEMENT,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "rook_endgame",
        placement: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        expected_nodes: &[14, 191, 2812],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("SNAPSHOT_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite = suite_name();
    let cases = if suite == "standard" { CASES_STANDARD } else { CASES_QUICK };

    let mut group = c.benchmark_group(format!("perft_{suite}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in cases {
        let position = Position::from_placement(case.placement).expect("benchmark placement should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            let warmup = perft(&LegalMoveGenerator, &position, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(&LegalMoveGenerator, black_box(&position), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
