use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dotsync::config::CollectConfig;
use dotsync::diff::diff_file;
use dotsync::tracking::{collect_candidates, filter_changed};
use std::fs;
use std::hint::black_box;
use tempfile::tempdir;

fn benchmark_diff_file(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let mut group = c.benchmark_group("diff_file");

    for (label, size) in [("1kb", 1024), ("100kb", 1024 * 100), ("10mb", 1024 * 1024 * 10)] {
        let a = dir.path().join(format!("{label}.a"));
        let b = dir.path().join(format!("{label}.b"));
        fs::write(&a, vec![b'a'; size]).unwrap();
        fs::write(&b, vec![b'a'; size]).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(label), &(a, b), |bench, (a, b)| {
            bench.iter(|| diff_file(black_box(a), black_box(b)));
        });
    }

    group.finish();
}

fn benchmark_find_changed(c: &mut Criterion) {
    let home = tempdir().unwrap();
    let snapshot = tempdir().unwrap();
    let rules = CollectConfig::default();

    for i in 0..200 {
        let dir = home.path().join(format!(".config/app{i}"));
        fs::create_dir_all(&dir).unwrap();
        let name = format!("app{i}rc");
        fs::write(dir.join(&name), format!("setting = {i}")).unwrap();
        if i % 2 == 0 {
            fs::write(snapshot.path().join(&name), format!("setting = {i}")).unwrap();
        }
    }

    c.bench_function("collect_and_filter_200", |b| {
        b.iter(|| {
            let candidates = collect_candidates(black_box(home.path()), &rules).unwrap();
            filter_changed(&candidates, snapshot.path()).unwrap()
        });
    });
}

criterion_group!(benches, benchmark_diff_file, benchmark_find_changed);
criterion_main!(benches);
