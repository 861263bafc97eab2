//! Criterion benchmarks for the binary codec over a representative
//! configuration document.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use binconf_core::{decode, encode, Document};

/// A config document shaped like real application settings: a handful of
/// sections, a peer list, and some scalar knobs.
fn sample_document() -> Document {
    let mut json = String::from(
        r#"{
        "app": {"name": "worker", "version": "2.4.1", "debug": false},
        "server": {"host": "0.0.0.0", "port": 8080, "tls": {"enabled": true, "cert": "/etc/ssl/cert.pem"}},
        "limits": {"max_connections": 4096, "timeout_ms": 30000, "retry_backoff": 1.5},
        "peers": ["#,
    );
    for i in 0..64 {
        if i > 0 {
            json.push(',');
        }
        json.push_str(&format!(
            r#"{{"id": {i}, "addr": "10.0.0.{i}:7000", "weight": {}}}"#,
            f64::from(i) / 10.0
        ));
    }
    json.push_str("]}");
    Document::from_json_str(&json).expect("sample document is valid JSON")
}

fn bench_codec(c: &mut Criterion) {
    let doc = sample_document();
    let bytes = encode(&doc);

    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Bytes(bytes.len() as u64));

    group.bench_function("encode", |b| b.iter(|| encode(black_box(&doc))));
    group.bench_function("decode", |b| {
        b.iter(|| decode(black_box(&bytes)).expect("valid stream"))
    });
    group.bench_function("roundtrip", |b| {
        b.iter(|| decode(&encode(black_box(&doc))).expect("valid stream"))
    });

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
