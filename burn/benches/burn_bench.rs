use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cinder_burn::{BurnController, BurnableToken, NoRewards};
use cinder_nullables::{NullChain, NullToken};
use cinder_types::AccountId;

fn funded_controller(burns: u64) -> BurnController<NullToken, NoRewards> {
    let caller = AccountId::from_low_u64(1);
    let spender = AccountId::from_low_u64(2);
    let mut token = NullToken::new();
    token.mint(&caller, u128::from(burns) * 10);
    token.approve(&caller, &spender, u128::from(burns) * 10);
    BurnController::new(spender, token, NoRewards)
}

fn bench_burn_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("burn_sequence");
    let caller = AccountId::from_low_u64(1);

    for burns in [10u64, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("burns", burns), &burns, |b, &burns| {
            b.iter(|| {
                let mut controller = funded_controller(burns);
                let chain = NullChain::default();
                for _ in 0..burns {
                    let block = chain.advance(1);
                    black_box(controller.burn(caller, 10, block).ok());
                }
                controller
            });
        });
    }

    group.finish();
}

fn bench_owned_tokens(c: &mut Criterion) {
    let caller = AccountId::from_low_u64(1);
    let mut controller = funded_controller(1_000);
    let chain = NullChain::default();
    for _ in 0..1_000 {
        let _ = controller.burn(caller, 10, chain.advance(1));
    }
    c.bench_function("owned_tokens_1000", |b| {
        b.iter(|| black_box(controller.owned_tokens(black_box(&caller))))
    });
}

criterion_group!(benches, bench_burn_sequence, bench_owned_tokens);
criterion_main!(benches);
