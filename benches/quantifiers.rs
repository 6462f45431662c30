use std::{hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use cursor_seq::{prelude::*, source::from_slice};
use rand::{RngExt, SeedableRng, rngs::StdRng};

fn quantifiers(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    macro_rules! bench_fn {
        ($group:ident.$fn_name:ident($nums:expr)) => {
            $group.bench_function(stringify!($fn_name), |bencher| {
                bencher.iter(|| $fn_name(black_box($nums)));
            });
        };
    }

    let mut nums: Box<_> = std::iter::repeat_with(|| rng.random_range(1..=i32::MAX))
        .take(500_000)
        .collect();
    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);
    nums[400_000] = 0;
    let mut group = criterion.benchmark_group("any_found_late");
    bench_fn!(group.iter_any_0(&nums));
    bench_fn!(group.seq_any_0(&nums));
    group.finish();

    let nums: Box<_> = std::iter::repeat_with(|| rng.random_range(1..=i32::MAX))
        .take(500_000)
        .collect();
    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);
    let mut group = criterion.benchmark_group("all_positive");
    bench_fn!(group.iter_all_positive(&nums));
    bench_fn!(group.seq_all_positive(&nums));
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(30))
        .sample_size(300);
    targets = quantifiers
}
criterion_main!(benches);

fn iter_any_0(nums: &[i32]) -> bool {
    nums.iter().any(|&num| num == 0)
}

fn seq_any_0(nums: &[i32]) -> bool {
    from_slice(nums).any(|&num| num == 0)
}

fn iter_all_positive(nums: &[i32]) -> bool {
    nums.iter().all(|&num| num > 0)
}

fn seq_all_positive(nums: &[i32]) -> bool {
    from_slice(nums).all(|&num| num > 0)
}
