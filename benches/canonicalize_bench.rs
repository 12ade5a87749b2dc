use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crawl_seed::canonicalizer::Canonicalizer;
use crawl_seed::url_parser::{decompose_path, ParsedUrl};

fn synthetic_urls(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| match i % 4 {
            0 => format!(
                "https://site{}.example.com/app/v{}/items/view.php?id={}",
                i % 13,
                i % 5,
                i
            ),
            1 => format!("https://cdn.example.com/static/{}/bundle.js?v={}", i % 7, i),
            2 => format!("http://example.org/docs/{}/{}/index.html", i % 11, i % 3),
            _ => format!("http://example.org/search?q={}&page={}", i, i % 9),
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let url = "https://api.example.com:8443/v1/users/profile.php?id=12345&ref=mail";
    c.bench_function("parse_url", |b| b.iter(|| ParsedUrl::new(black_box(url))));
    c.bench_function("decompose_path", |b| {
        b.iter(|| decompose_path(black_box("/a/b/c/d/e/f/g/file.php")))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");
    for size in [100usize, 1_000, 10_000] {
        let urls = synthetic_urls(size);
        group.bench_with_input(BenchmarkId::new("sequential", size), &urls, |b, urls| {
            let canonicalizer = Canonicalizer::default();
            b.iter(|| canonicalizer.canonicalize(black_box(urls.as_slice())))
        });

        let runtime = tokio::runtime::Runtime::new().unwrap();
        group.bench_with_input(BenchmarkId::new("workers", size), &urls, |b, urls| {
            let canonicalizer = Canonicalizer::default();
            b.iter(|| runtime.block_on(canonicalizer.run(black_box(urls.clone()))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_pipeline);
criterion_main!(benches);
