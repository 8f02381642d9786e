use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cotejo::{compare, compare_pairs, normalize, MatchConfig, NormalizeConfig};

const PAIRS: &[(&str, &str)] = &[
    ("GRUPO AGRICOLA DEL NORTE SA DE CV", "GRUPO AGRICOLA NORTE"),
    ("H. AYUNTAMIENTO DE QUERÉTARO", "MUNICIPIO DE QUERETARO"),
    ("JUAN PEREZ GARCIA", "MARIA LOPEZ HERNANDEZ"),
    (
        "PRODUCTORA AGRÍCOLA DEL SUR, S.A. DE C.V.",
        "PRODUCTORA AGRICOLA SUR",
    ),
    ("EJIDO LA NORIA", "COMUNIDAD LA NORIA"),
];

fn normalize_bench(c: &mut Criterion) {
    let cfg = NormalizeConfig::soft();
    c.bench_function("normalize_soft", |b| {
        b.iter(|| {
            for (raw, _) in PAIRS {
                let out = normalize(Some(black_box(raw)), &cfg);
                black_box(out);
            }
        });
    });
}

fn compare_bench(c: &mut Criterion) {
    let cfg = MatchConfig::default();
    c.bench_function("compare_pair", |b| {
        b.iter(|| {
            for (x, y) in PAIRS {
                let result = compare(Some(black_box(x)), Some(black_box(y)), &cfg)
                    .expect("bench config valid");
                black_box(result);
            }
        });
    });
}

fn bulk_bench(c: &mut Criterion) {
    let cfg = MatchConfig::default();
    let pairs: Vec<(Option<String>, Option<String>)> = PAIRS
        .iter()
        .cycle()
        .take(1_000)
        .map(|(x, y)| (Some((*x).to_string()), Some((*y).to_string())))
        .collect();

    c.bench_function("compare_pairs_1k", |b| {
        b.iter(|| {
            let results = compare_pairs(black_box(&pairs), &cfg).expect("bench config valid");
            black_box(results);
        });
    });
}

criterion_group!(benches, normalize_bench, compare_bench, bulk_bench);
criterion_main!(benches);
