extern crate criterion;

use criterion::{criterion_group, criterion_main, Criterion};

use cssdiff_lib::{compare, normalize};

fn bench_minified_stylesheet(c: &mut Criterion) {
    let mut minified = String::with_capacity(4_000_000);
    for index in 0..50_000 {
        minified.push_str(&format!(
            ".rule-{index}{{color:#333;margin:0;padding:1px 2px;font-size:12px}}"
        ));
    }

    c.bench_function("normalize_minified", |b| {
        b.iter(|| normalize(&minified))
    });
}

fn bench_compare_large_revision(c: &mut Criterion) {
    let mut original = String::new();
    let mut revised = String::new();
    for index in 0..10_000 {
        original.push_str(&format!(
            ".rule-{index} {{ color: red; font-size: 12px; }}\n"
        ));
        // Every other rule loses a declaration in the revision.
        if index % 2 == 0 {
            revised.push_str(&format!(".rule-{index} {{ color: red; }}\n"));
        } else {
            revised.push_str(&format!(
                ".rule-{index} {{ color: red; font-size: 12px; }}\n"
            ));
        }
    }

    c.bench_function("compare_large_revision", |b| {
        b.iter(|| compare(&original, &revised))
    });
}

criterion_group!(
    benches,
    bench_minified_stylesheet,
    bench_compare_large_revision
);
criterion_main!(benches);
