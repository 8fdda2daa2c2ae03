use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jptr_core::{get, get_value, set, Document, Pointer};
use serde_json::{json, Value};

/// `depth` nested objects, each level also carrying a wide array.
fn nested_document(depth: usize, width: usize) -> Value {
    let mut value = json!({"leaf": true});
    for level in (0..depth).rev() {
        let items: Vec<Value> = (0..width).map(|i| json!({"id": i, "level": level})).collect();
        value = json!({
            format!("level{}", level): value,
            "items": items,
            "a/b~c": level
        });
    }
    value
}

fn leaf_pointer(depth: usize) -> Pointer {
    let mut tokens: Vec<String> = (0..depth).map(|l| format!("level{}", l)).collect();
    tokens.push("leaf".to_string());
    Pointer::build(tokens)
}

fn bench_escape(c: &mut Criterion) {
    let tokens = ["plain", "a/b", "m~n", "~1/~0/mixed"];
    c.bench_function("build_and_split", |b| {
        b.iter(|| {
            let pointer = Pointer::build(black_box(tokens));
            black_box(pointer.split())
        })
    });
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for depth in [1, 8, 32] {
        let value = nested_document(depth, 16);
        let document = Document::from(value.clone());
        let pointer = leaf_pointer(depth);

        group.bench_with_input(BenchmarkId::new("document", depth), &depth, |b, _| {
            b.iter(|| black_box(get(&document, black_box(&pointer)).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("value", depth), &depth, |b, _| {
            b.iter(|| black_box(get_value(&value, black_box(&pointer)).unwrap()))
        });
    }

    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    for depth in [1, 8, 32] {
        let document = Document::from(nested_document(depth, 16));
        let pointer = leaf_pointer(depth);
        let append = Pointer::build((0..depth - 1).map(|l| format!("level{}", l)))
            .with_token("items")
            .with_token("-");

        group.bench_with_input(BenchmarkId::new("overwrite", depth), &depth, |b, _| {
            b.iter(|| black_box(set(&document, &pointer, Document::from(false)).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("append", depth), &depth, |b, _| {
            b.iter(|| black_box(set(&document, &append, Document::null()).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_escape, bench_get, bench_set);
criterion_main!(benches);
