// Copyright 2024-2025 Irreducible Inc.

use ark_bn254::Fr;
use ark_ff::UniformRand;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use gadgets_hash::MiMCe7;
use rand::thread_rng;

fn bench_mimc(c: &mut Criterion) {
	let mut group = c.benchmark_group("MiMCe7");
	let mut rng = thread_rng();

	let mimc = MiMCe7::<Fr>::default();
	let x = Fr::rand(&mut rng);
	let y = Fr::rand(&mut rng);

	group.throughput(Throughput::Elements(1));
	group.bench_function("permute", |bench| bench.iter(|| mimc.permute(x, y)));
	group.bench_function("compress", |bench| bench.iter(|| mimc.compress(x, y)));
	group.bench_function("round_constants", |bench| bench.iter(MiMCe7::<Fr>::default));

	group.finish()
}

criterion_group!(mimc, bench_mimc);
criterion_main!(mimc);
