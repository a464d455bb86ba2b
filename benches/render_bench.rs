use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cardposter::{render, render_all, validate, validate_str};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}.json", name)).expect("read fixture")
}

fn bench_validate(c: &mut Criterion) {
    let text = fixture("stats");
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    c.bench_function("validate_value", |b| {
        b.iter(|| {
            let _ = validate(black_box(&value)).unwrap();
        })
    });

    c.bench_function("validate_str", |b| {
        b.iter(|| {
            let _ = validate_str(black_box(&text)).unwrap();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let card = validate_str(&fixture("list")).unwrap();

    c.bench_function("render_single", |b| {
        b.iter(|| {
            let _ = render(black_box(&card), 1, black_box("simple-4")).unwrap();
        })
    });

    let template = validate_str(&fixture("template")).unwrap();
    c.bench_function("render_all_template", |b| {
        b.iter(|| {
            let _ = render_all(black_box(&template), "complex-2").unwrap();
        })
    });
}

criterion_group!(benches, bench_validate, bench_render);
criterion_main!(benches);
