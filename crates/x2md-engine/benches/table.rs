use criterion::{Criterion, criterion_group, criterion_main};
use x2md_engine::table::{parse_tsv, render_table, tsv_to_markdown_table};

fn generate_tsv(rows: usize) -> String {
    let note = "uses a | pipe and a \\ slash";
    let mut tsv = String::from("id\tname\tnote\tscore\n");
    for i in 0..rows {
        tsv.push_str(&format!("{i}\tuser {i}\t{note}\t{}\n", i % 97));
    }
    tsv
}

fn bench_table_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");

    for rows in [100, 500, 2000] {
        let tsv = generate_tsv(rows);

        group.bench_function(format!("parse_{rows}"), |b| {
            b.iter(|| std::hint::black_box(parse_tsv(std::hint::black_box(&tsv))));
        });

        let table = parse_tsv(&tsv);
        group.bench_function(format!("render_{rows}"), |b| {
            b.iter(|| std::hint::black_box(render_table(std::hint::black_box(&table), None)));
        });

        group.bench_function(format!("tsv_to_markdown_{rows}"), |b| {
            b.iter(|| {
                std::hint::black_box(tsv_to_markdown_table(std::hint::black_box(&tsv), None))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_table_pipeline);
criterion_main!(benches);
