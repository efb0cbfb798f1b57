//! Benchmarks for move calculation and snapshots.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Board, Color, Position, Snapshot};

const KIWIPETE: &str = "rxxxkxxrpppbbpppxxnxxqxPxPxxpxxxxxxpnxxxBNxxPNPxPxPPQPBxRxxxKxxR";

fn load(cells: &str, side: Color) -> Board {
    let snapshot = Snapshot::new(cells, side).expect("valid cells");
    Board::from_snapshot(&snapshot).expect("valid position")
}

/// Counts leaf positions `depth` plies ahead.
fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0;
    for (from, _) in board.pieces(color) {
        for &to in board.legal_moves(color, from) {
            let mut next = board.clone();
            next.perform_move(from, to).expect("legal move");
            next.calculate_moves();
            nodes += perft(&next, color.opponent(), depth - 1);
        }
        for mv in board.legal_special_moves(color, from) {
            let mut next = board.clone();
            next.perform_special_move(from, mv).expect("legal special move");
            next.calculate_moves();
            nodes += perft(&next, color.opponent(), depth - 1);
        }
    }
    nodes
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let start = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&start, Color::White, black_box(depth)))
        });
    }

    let kiwipete = load(KIWIPETE, Color::White);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| perft(&kiwipete, Color::White, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_calculate_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_moves");

    let mut start = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| {
            start.calculate_moves();
            black_box(start.count_legal_moves(Color::White))
        })
    });

    let mut kiwipete = load(KIWIPETE, Color::White);
    group.bench_function("kiwipete", |b| {
        b.iter(|| {
            kiwipete.calculate_moves();
            black_box(kiwipete.count_legal_moves(Color::White))
        })
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    let board = load(KIWIPETE, Color::White);
    let snapshot = board.create_snapshot(Color::White);
    group.bench_function("encode", |b| {
        b.iter(|| black_box(board.create_snapshot(Color::White)))
    });
    group.bench_function("decode", |b| {
        b.iter(|| black_box(Board::from_snapshot(&snapshot)))
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let board = load(KIWIPETE, Color::White);
    c.bench_function("threatened_squares", |b| {
        b.iter(|| black_box(board.threatened_squares(Color::Black)))
    });
    c.bench_function("is_threatened_by", |b| {
        b.iter(|| {
            Position::all()
                .filter(|&pos| board.is_threatened_by(pos, Color::Black))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_perft,
    bench_calculate_moves,
    bench_snapshot,
    bench_queries
);
criterion_main!(benches);
