use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

const RNG_SEED: u64 = 0x5EED_2026;

struct GroupTuning {
    sample_size: usize,
    warm_up_ms: u64,
    measure_ms: u64,
}

const SMALL: GroupTuning = GroupTuning {
    sample_size: 15,
    warm_up_ms: 100,
    measure_ms: 200,
};
const MEDIUM: GroupTuning = GroupTuning {
    sample_size: 15,
    warm_up_ms: 500,
    measure_ms: 1000,
};
const LARGE: GroupTuning = GroupTuning {
    sample_size: 10,
    warm_up_ms: 800,
    measure_ms: 1500,
};

fn apply_tuning<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, tuning: &GroupTuning) {
    group.sample_size(tuning.sample_size);
    group.warm_up_time(Duration::from_millis(tuning.warm_up_ms));
    group.measurement_time(Duration::from_millis(tuning.measure_ms));
}

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    apply_tuning(group, &SMALL);
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    apply_tuning(group, &MEDIUM);
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    apply_tuning(group, &LARGE);
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}
