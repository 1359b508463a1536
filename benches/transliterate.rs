use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use romakana::{to_hiragana, to_katakana, to_romaji};

fn bench_directions(c: &mut Criterion) {
    let romaji_text = "shuppatsu no jikan desu kyakusha ni notte kudasai ".repeat(20);
    let kana_text = "しゅっぱつのじかんです キャクシャにのってください ".repeat(20);

    let mut group = c.benchmark_group("transliterate");
    group.throughput(Throughput::Bytes(romaji_text.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("to_hiragana", romaji_text.len()),
        &romaji_text,
        |b, text| b.iter(|| to_hiragana(text)),
    );
    group.bench_with_input(
        BenchmarkId::new("to_katakana", romaji_text.len()),
        &romaji_text,
        |b, text| b.iter(|| to_katakana(text)),
    );
    group.throughput(Throughput::Bytes(kana_text.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("to_romaji", kana_text.len()),
        &kana_text,
        |b, text| b.iter(|| to_romaji(text)),
    );
    group.finish();
}

criterion_group!(benches, bench_directions);
criterion_main!(benches);
