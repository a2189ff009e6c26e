use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mbus_rs::payload::match_primary_vif;

fn benchmark_primary_vif_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("primary_vif_lookup");

    // One code from each of the seven cmask/emask families, plus an unmatched one.
    let codes: &[(&str, u8)] = &[
        ("energy_wh", 0x03),
        ("energy_j", 0x0A),
        ("volume_m3", 0x13),
        ("mass_kg", 0x1A),
        ("on_time", 0x21),
        ("operating_time", 0x25),
        ("power_w", 0x29),
        ("unmatched", 0x7F),
    ];

    for (name, code) in codes {
        group.bench_with_input(BenchmarkId::new("match_primary_vif", name), code, |b, &code| {
            b.iter(|| match_primary_vif(black_box(code)));
        });
    }

    group.finish();
}

fn benchmark_full_byte_space(c: &mut Criterion) {
    c.bench_function("match_primary_vif_full_byte_space", |b| {
        b.iter(|| {
            for code in 0u8..0x80 {
                let _ = match_primary_vif(black_box(code));
            }
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(500);
    targets = benchmark_primary_vif_lookup, benchmark_full_byte_space
}
criterion_main!(benches);
