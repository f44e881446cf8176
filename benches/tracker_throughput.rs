use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use typegraph::facts::{TypeCatalog, TypeDescription, TypeShape};
use typegraph::tracker::{DependencyTracker, ModuleScope, TypeTrackStrategy};
use typegraph::{InspectOptions, Inspector, TypeKey};

const WIDTH: usize = 400;

/// `WIDTH` structs, each pointing at the next three and back at the first,
/// plus a list of every one of them.
fn wide_cyclic_catalog() -> TypeCatalog {
    let key = |i: usize| format!("Bench.T{}", i % WIDTH);
    let mut types: Vec<TypeDescription> = (0..WIDTH)
        .map(|i| {
            TypeDescription::new(key(i), format!("T{i}"), "Bench", TypeShape::Struct)
                .with_property("Id", "int64")
                .with_property("Next", key(i + 1))
                .with_property("Skip", key(i + 2))
                .with_property("Far", key(i + 3))
                .with_property("Root", key(0))
                .with_property("Siblings", format!("List[{}]", key(i + 1)))
        })
        .collect();
    types.extend((0..WIDTH).map(|i| {
        TypeDescription::new(
            format!("List[{}]", key(i)),
            "List",
            "System",
            TypeShape::Collection {
                element: key(i).into(),
            },
        )
    }));
    TypeCatalog::from_descriptions(types)
}

fn bench_tracker(c: &mut Criterion) {
    let catalog = wide_cyclic_catalog();
    let scope = ModuleScope::new(["Bench"]);
    c.bench_function("track_wide_cyclic_graph", |b| {
        b.iter(|| {
            let mut tracker = DependencyTracker::new(TypeTrackStrategy::new(&catalog, &scope));
            tracker.add_entry_point(TypeKey::new("Bench.T0"));
            black_box(tracker.collect().len());
        })
    });
}

fn bench_inspect(c: &mut Criterion) {
    let catalog = wide_cyclic_catalog();
    let options = InspectOptions::new(["Bench"]).with_entry_point("Bench.T0");
    c.bench_function("inspect_wide_cyclic_graph", |b| {
        b.iter(|| {
            let doc = Inspector::new(&catalog, options.clone())
                .inspect()
                .map(|doc| doc.definitions.len());
            black_box(doc.ok());
        })
    });
}

criterion_group!(benches, bench_tracker, bench_inspect);
criterion_main!(benches);
