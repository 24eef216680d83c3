//! Criterion benchmarks for the woordlijst dictionary builder.
//!
//! Covers the two hot paths of a run:
//! - Reading and normalizing the frequency table
//! - Serializing the finished dictionary

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use woordlijst::dictionary::DictionaryBuilder;

/// Generate a synthetic frequency table with `rows` data rows.
fn generate_table(rows: usize) -> String {
    let parts_of_speech = ["noun", "verb", "adj", "adv", "art", "prep"];
    let mut table =
        String::from("lemma,pos,definition,core,general,spoken,fiction,newspapers,web\n");

    for i in 0..rows {
        let flag = |bit: usize| if (i >> bit) & 1 == 1 { "True" } else { "False" };
        let word_forms = if i % 10 == 0 {
            format!("\"woord{i}, wrd{i}\"")
        } else {
            format!("Woord{i}")
        };
        table.push_str(&format!(
            "{word_forms},{},\"gloss {i}, sense\",{},{},{},{},{},{}\n",
            parts_of_speech[i % parts_of_speech.len()],
            flag(0),
            flag(1),
            flag(2),
            flag(3),
            flag(4),
            flag(5)
        ));
    }
    table
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let builder = DictionaryBuilder::new();

    for rows in [1_000, 10_000] {
        let table = generate_table(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_function(format!("build_from_reader_{rows}"), |b| {
            b.iter(|| {
                let output = builder.build_from_reader(black_box(table.as_bytes())).unwrap();
                black_box(output.dictionary.len())
            })
        });
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let table = generate_table(10_000);
    let dictionary = DictionaryBuilder::new()
        .build_from_reader(table.as_bytes())
        .unwrap()
        .dictionary;

    group.throughput(Throughput::Elements(dictionary.len() as u64));
    group.bench_function("to_writer_pretty", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(2 * 1024 * 1024);
            dictionary.to_writer(&mut buffer).unwrap();
            black_box(buffer.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_serialize);
criterion_main!(benches);
