use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::time::Duration;
use zhoconv::{zho_check, OpenCC};

// Synthetic corpus: delimiter-rich mixed prose, large enough to exercise
// the parallel chunk driver.
static SIMP_TEXT: Lazy<String> = Lazy::new(|| {
    "你好，世界！龙马精神，富贵荣华。这里的头发很复杂，那里的台风很干燥。操作系统和数据库，出租车与打印机。"
        .repeat(600)
});

static TRAD_TEXT: Lazy<String> = Lazy::new(|| {
    "你好，世界！龍馬精神，富貴榮華。這裏的頭髮很複雜，那裏的颱風很乾燥。操作系統和數據庫，出租車與打印機。"
        .repeat(600)
});

static OPENCC: Lazy<OpenCC> = Lazy::new(OpenCC::new);

fn bench_s2t(c: &mut Criterion) {
    c.bench_function("s2t/large", |b| b.iter(|| OPENCC.s2t(&SIMP_TEXT, false)));
}

fn bench_t2s(c: &mut Criterion) {
    c.bench_function("t2s/large", |b| b.iter(|| OPENCC.t2s(&TRAD_TEXT, false)));
}

fn bench_tw2sp(c: &mut Criterion) {
    c.bench_function("tw2sp/large", |b| b.iter(|| OPENCC.tw2sp(&TRAD_TEXT, false)));
}

fn bench_s2t_short(c: &mut Criterion) {
    c.bench_function("s2t/short", |b| b.iter(|| OPENCC.s2t("简体中文测试", false)));
}

fn bench_zho_check(c: &mut Criterion) {
    c.bench_function("zho_check", |b| b.iter(|| zho_check(&TRAD_TEXT)));
}

fn configured() -> Criterion {
    Criterion::default()
        .measurement_time(Duration::from_secs(8))
        .sample_size(30)
}

criterion_group! {
    name = benches;
    config = configured();
    targets = bench_s2t, bench_t2s, bench_tw2sp, bench_s2t_short, bench_zho_check
}
criterion_main!(benches);
