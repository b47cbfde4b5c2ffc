//! Quote generation benchmarks
//!
//! Measures layout alone and layout plus rendering for growing item counts.
//!
//! Run benchmarks: `cargo bench --bench quote_generation`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quotegen::{ClientInfo, GeneratorBuilder, QuoteConfig, QuoteDocument};
use std::hint::black_box;

fn document(items: usize) -> QuoteDocument {
    let client = ClientInfo {
        contact_name: "Maria Souza".into(),
        company_name: "Construtora Horizonte".into(),
        reference_text: "Subestação 300 kVA".into(),
        phone: "(31) 99999-0000".into(),
        email: "maria@horizonte.com.br".into(),
        site_location: "Belo Horizonte - MG".into(),
    };
    let date = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date");
    let mut doc = QuoteDocument::new(client, "Manutenção preventiva de subestações.", date);
    for i in 0..items {
        doc.add_item(
            "Manutenção",
            format!(
                "Inspeção termográfica do painel {} com relatório fotográfico, reaperto de conexões e limpeza",
                i + 1
            ),
            (i % 5 + 1) as u32,
            1234.5,
        )
        .expect("valid item");
    }
    doc
}

fn bench_layout(c: &mut Criterion) {
    let generator = GeneratorBuilder::new()
        .without_background()
        .build()
        .expect("generator");
    let mut group = c.benchmark_group("layout");

    for items in [1usize, 10, 100, 500] {
        let doc = document(items);
        group.throughput(Throughput::Elements(items as u64));
        group.bench_with_input(BenchmarkId::from_parameter(items), &doc, |b, doc| {
            b.iter(|| black_box(generator.layout(doc).expect("layout")))
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for compress in [false, true] {
        let config = QuoteConfig {
            compress,
            ..QuoteConfig::default()
        };
        let generator = GeneratorBuilder::new()
            .with_config(config)
            .without_background()
            .build()
            .expect("generator");
        let doc = document(100);
        let label = if compress { "compressed" } else { "plain" };
        group.bench_function(BenchmarkId::new("100_items", label), |b| {
            b.iter(|| black_box(generator.generate(&doc).expect("generate")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_generate);
criterion_main!(benches);
