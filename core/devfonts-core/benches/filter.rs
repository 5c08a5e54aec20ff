use criterion::{black_box, criterion_group, criterion_main, Criterion};
use devfonts_core::catalog::Catalog;
use devfonts_core::compare::CompareSet;
use devfonts_core::filter::{filter, FilterState};

fn bench_filter(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let state = FilterState::new()
        .require_free(true)
        .require_ligatures(true)
        .with_name("mono");
    let compare: CompareSet = catalog
        .fonts
        .iter()
        .step_by(2)
        .map(|f| f.display_name.clone())
        .collect();

    c.bench_function("filter_builtin_catalog", |b| {
        b.iter(|| filter(black_box(&catalog.fonts), black_box(&state), false, &compare))
    });

    c.bench_function("filter_builtin_catalog_compare_mode", |b| {
        b.iter(|| filter(black_box(&catalog.fonts), black_box(&state), true, &compare))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
