use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sparselife::{GameOfLife, Pattern, Pos2, Style};

fn make_alive(width: i32, height: i32) -> Vec<Pos2> {
    let mut alive = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 3 == 0 {
                alive.push(Pos2 { x, y });
            }
        }
    }
    alive
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    for size in [64, 128, 256] {
        let alive = make_alive(size, size);

        group.bench_with_input(BenchmarkId::new("diagonals", size), &alive, |b, alive| {
            b.iter_batched(
                || GameOfLife::from_alive(alive.clone()),
                |mut game| game.advance(),
                BatchSize::LargeInput,
            );
        });

        let soup = Pattern::Random {
            width: size,
            height: size,
            seed: Some(1),
        }
        .cells();
        group.bench_with_input(BenchmarkId::new("soup", size), &soup, |b, soup| {
            b.iter_batched(
                || GameOfLife::from_alive(soup.clone()),
                |mut game| game.advance(),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let game = GameOfLife::from_alive(make_alive(256, 256));
    let style = Style {
        show_background: true,
        use_color: false,
    };

    c.bench_function("render 256", |b| {
        b.iter(|| game.frame(style).lines().map(|line| line.len()).sum::<usize>())
    });
}

criterion_group!(benches, bench_advance, bench_render);
criterion_main!(benches);
