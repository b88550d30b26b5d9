//! Benchmarks for request building and failure classification
//!
//! This benchmark measures:
//! - Façade argument to RequestSpec mapping
//! - Classification of server failure bodies
//! - Typed decoding of scan payloads

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cyber_ia_client::api::{network_scan, password, phishing};
use cyber_ia_client::client::{classify, RawFailure};
use cyber_ia_client::transport::Payload;
use cyber_ia_client::types::{
    HistoryQuery, NetworkScanRequest, NetworkScanResult, PhishingDetectRequest,
};

const SCAN_JSON: &str = r#"{
  "scan_id": "scan_abc123",
  "status": "completed",
  "target": "192.168.1.1",
  "open_ports": [22, 80, 443, 3306, 8080],
  "vulnerabilities": [
    {"port": 22, "service": "ssh", "description": "OpenSSH 7.2 obsolète", "severity": "medium"},
    {"port": 3306, "service": "mysql", "description": "MySQL exposé", "severity": "high"}
  ],
  "threat_level": "high",
  "timestamp": "2025-11-27T10:00:00"
}"#;

fn bench_request_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_building");

    let scan = NetworkScanRequest::new("192.168.1.1")
        .with_scan_type("full")
        .with_ports("1-1024");
    let email = PhishingDetectRequest::from_fields(
        "security@paypa1.com",
        "Votre compte est suspendu",
        "Cliquez ici pour vérifier votre identité sous 24h.",
    );

    group.bench_function("network_scan_start", |b| {
        b.iter(|| network_scan::start_request(black_box(&scan)))
    });
    group.bench_function("network_scan_history", |b| {
        b.iter(|| network_scan::history_request(black_box(HistoryQuery::default())))
    });
    group.bench_function("phishing_analyze", |b| {
        b.iter(|| phishing::analyze_request(black_box(&email)))
    });

    let batch: Vec<String> = (0..100).map(|i| format!("motdepasse{}", i)).collect();
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function("password_batch_100", |b| {
        b.iter(|| password::batch_request(black_box(&batch)))
    });

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let bodies = [
        ("detail_string", 500u16, r#"{"detail":"nmap indisponible"}"#),
        (
            "detail_list",
            422,
            r#"{"detail":[{"loc":["body","target"],"msg":"field required"}]}"#,
        ),
        ("plain_text", 502, "<html>Bad Gateway</html>"),
    ];

    for (name, status, body) in bodies {
        group.bench_with_input(BenchmarkId::new("response", name), &body, |b, body| {
            b.iter(|| {
                classify(RawFailure::Response {
                    status,
                    body: black_box(body.to_string()),
                    fallback: "Erreur lors du scan réseau".to_string(),
                })
            })
        });
    }

    group.finish();
}

fn bench_decoding(c: &mut Criterion) {
    let value: serde_json::Value = serde_json::from_str(SCAN_JSON).unwrap();

    c.bench_function("decode_scan_result", |b| {
        b.iter(|| {
            Payload::Json(black_box(value.clone()))
                .into_typed::<NetworkScanResult>()
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_request_building, bench_classification, bench_decoding);
criterion_main!(benches);
