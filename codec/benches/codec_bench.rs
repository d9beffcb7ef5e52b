use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cinder_codec::{BurnRecord, PackedRecord, RarityFlags, U256};

fn sample_record() -> BurnRecord {
    BurnRecord {
        term: 100,
        maturity_ts: 1_700_000_000,
        amount: 1_000 * 1_000_000_000_000_000_000,
        apy: 2_000,
        rarity_score: 100,
        rarity_flags: RarityFlags::new(true, false, true, false).encode(),
    }
}

fn bench_encode(c: &mut Criterion) {
    let fields = sample_record().fields();
    c.bench_function("record_encode", |b| {
        b.iter(|| black_box(PackedRecord::encode(black_box(&fields))))
    });
}

fn bench_decode(c: &mut Criterion) {
    let packed = sample_record().pack();
    c.bench_function("record_decode", |b| b.iter(|| black_box(black_box(packed).decode())));
}

fn bench_encode_overflowing(c: &mut Criterion) {
    let fields = sample_record()
        .fields()
        .with(cinder_codec::Field::Amount, U256::MAX);
    c.bench_function("record_encode_overflowing", |b| {
        b.iter(|| black_box(PackedRecord::encode(black_box(&fields))))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_encode_overflowing);
criterion_main!(benches);
