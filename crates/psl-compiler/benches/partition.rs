use criterion::{black_box, criterion_group, criterion_main, Criterion};

use psl_compiler::{emit_initializers, partition};

fn synthetic_list(rules: usize) -> String {
    let mut text = String::from("// ===BEGIN ICANN DOMAINS===\n\n");
    for i in 0..rules {
        match i % 10 {
            0 => text.push_str(&format!("*.zone{i}.jp\n")),
            1 => text.push_str(&format!("!city{i}.zone{}.jp\n", i - 1)),
            2 => text.push_str("// comment\n\n"),
            _ => text.push_str(&format!("suffix{i}.example\n")),
        }
    }
    text
}

fn bench_partition(c: &mut Criterion) {
    let text = synthetic_list(10_000);

    c.bench_function("partition_10k", |b| b.iter(|| partition(black_box(&text))));

    let rules = partition(&text);
    c.bench_function("emit_10k", |b| b.iter(|| emit_initializers(black_box(&rules))));
}

criterion_group!(benches, bench_partition);
criterion_main!(benches);
