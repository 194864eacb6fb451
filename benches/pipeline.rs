// benches/pipeline.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use forecast_board::{
    csv_io,
    pipeline::normalize,
    present::{chart::build_chart, table::history_rows},
    PredictionRecord,
};

const ROWS: usize = 5_000;

/// Synthetic file: shuffled dates, every tenth actual missing.
fn sample_csv() -> String {
    let mut out = String::from("target_date,predicted_close,actual_close,pct_error,model_name\n");
    for i in 0..ROWS {
        // 7919 is prime, so the day order is scrambled but covers every row
        let day = (i * 7919) % ROWS;
        let date = chrono::NaiveDate::from_ymd_opt(2010, 1, 1).unwrap() + chrono::Days::new(day as u64);
        let predicted = 40_000.0 + (day as f64) * 3.25;
        if i % 10 == 0 {
            out.push_str(&format!("{date},{predicted},,,ARIMA\n"));
        } else {
            let actual = predicted * 0.99;
            out.push_str(&format!("{date},{predicted},{actual},-1.00,ARIMA\n"));
        }
    }
    out
}

fn records() -> Vec<PredictionRecord> {
    csv_io::parse_records(&sample_csv()).unwrap().records
}

fn bench_pipeline(c: &mut Criterion) {
    let text = sample_csv();
    let recs = records();

    c.bench_function("parse_records", |b| {
        b.iter(|| {
            let parsed = csv_io::parse_records(black_box(&text)).unwrap();
            black_box(parsed.records.len())
        })
    });

    c.bench_function("normalize", |b| {
        b.iter(|| {
            let data = normalize(black_box(recs.clone()));
            black_box(data.len())
        })
    });

    let data = normalize(recs.clone());

    c.bench_function("history_rows", |b| {
        b.iter(|| black_box(history_rows(black_box(&data)).len()))
    });

    c.bench_function("build_chart", |b| {
        b.iter(|| black_box(build_chart(black_box(&data)).labels.len()))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
