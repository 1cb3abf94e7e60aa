use criterion::{Criterion, black_box, criterion_group, criterion_main};

use mandelzoom::{DefaultTheme, ExplorerSession, StandardFilters};

fn render_default_view(c: &mut Criterion) {
    c.bench_function("render_320x240_default_view", |b| {
        let mut session = ExplorerSession::new(DefaultTheme, StandardFilters);
        session.resize(320, 240);

        b.iter(|| {
            // Force a full recompute each iteration.
            session.on_key(mandelzoom::PanDirection::Left);
            session.on_key(mandelzoom::PanDirection::Right);
            black_box(session.draw().data().len())
        });
    });
}

fn render_deep_zoom(c: &mut Criterion) {
    c.bench_function("render_320x240_deep_zoom", |b| {
        let mut session = ExplorerSession::new(DefaultTheme, StandardFilters);
        session.resize(320, 240);

        // 58 zoom steps: scale ≈ 0.004, budget well above the base 100.
        for _ in 0..58 {
            session.on_char('+');
        }

        b.iter(|| {
            session.on_key(mandelzoom::PanDirection::Left);
            session.on_key(mandelzoom::PanDirection::Right);
            black_box(session.draw().data().len())
        });
    });
}

fn refilter_without_recompute(c: &mut Criterion) {
    c.bench_function("refilter_320x240_dilate", |b| {
        let mut session = ExplorerSession::new(DefaultTheme, StandardFilters);
        session.resize(320, 240);
        session.on_char('3');
        session.draw();

        // Clean frame with an active filter: draw re-filters only.
        b.iter(|| black_box(session.draw().data().len()));
    });
}

criterion_group!(
    benches,
    render_default_view,
    render_deep_zoom,
    refilter_without_recompute
);
criterion_main!(benches);
