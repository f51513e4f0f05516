use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_axon::tokenizer::tokenize;
use serde_axon::{for_each_row, parse};

fn users_document(rows: usize) -> String {
    let mut doc = String::from("@schema User\nid:I\nname:S\nemail:S\nactive:B\nscore:F\nseen:T?\n@end\n\n");
    doc.push_str(&format!("@data User[{}]\n", rows));
    for i in 0..rows {
        let seen = if i % 3 == 0 { "_" } else { "2024-01-15T10:30:00Z" };
        doc.push_str(&format!(
            "{}|User {}|user{}@example.com|{}|{}.5|{}\n",
            i,
            i,
            i,
            i % 2,
            i,
            seen
        ));
    }
    doc.push_str("@end\n");
    doc
}

fn benchmark_tokenize_row(c: &mut Criterion) {
    let plain = "1|Alice|alice@example.com|1|28";
    let quoted = r#"2|"Smith | Jones"|say \"hi\"\n|0|_"#;

    c.bench_function("tokenize_plain_row", |b| {
        b.iter(|| tokenize(black_box(plain), '|'))
    });

    c.bench_function("tokenize_quoted_row", |b| {
        b.iter(|| tokenize(black_box(quoted), '|'))
    });
}

fn benchmark_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [10, 100, 1000].iter() {
        let doc = users_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| parse(black_box(doc)))
        });
    }
    group.finish();
}

fn benchmark_walk_rows(c: &mut Criterion) {
    let doc = users_document(1000);

    c.bench_function("for_each_row_1000", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for_each_row(black_box(&doc), |_, _, _| {
                count += 1;
                Ok(())
            })
            .unwrap();
            count
        })
    });
}

criterion_group!(
    benches,
    benchmark_tokenize_row,
    benchmark_parse_document,
    benchmark_walk_rows
);
criterion_main!(benches);
