// Benchmarks for HopfieldNet energy computations
// Energy gap is O(n) per node, total energy is O(n^2) per call

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hopfield_net::HopfieldNet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

fn random_net(n: usize, seed: u64) -> HopfieldNet<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut net = HopfieldNet::new(n);
    for i in 0..n {
        for j in i + 1..n {
            net.set_weight(i, j, rng.gen_range(-1.0..1.0)).unwrap();
        }
        net.set_node_bias(i, rng.gen_range(-1.0..1.0)).unwrap();
    }
    let states: Vec<bool> = (0..n).map(|_| rng.gen_bool(0.5)).collect();
    net.set_nodes(&states).unwrap();
    net
}

fn benchmark_energy_gap(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy_gap");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for &n in &[16usize, 128, 1024] {
        let net = random_net(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("all_nodes", n), &net, |b, net| {
            b.iter(|| {
                for i in 0..net.num_nodes() {
                    black_box(net.get_node_energy_gap(i).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn benchmark_total_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_energy");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for &n in &[16usize, 128, 1024] {
        let net = random_net(n, 7);
        group.throughput(Throughput::Elements((n * (n - 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &net, |b, net| {
            b.iter(|| black_box(net.get_total_energy()));
        });
    }

    group.finish();
}

fn benchmark_set_nodes(c: &mut Criterion) {
    let mut net = random_net(1024, 3);
    let mut rng = StdRng::seed_from_u64(11);
    let patterns: Vec<Vec<bool>> = (0..8)
        .map(|_| (0..1024).map(|_| rng.gen_bool(0.5)).collect())
        .collect();

    c.bench_function("set_nodes_1024", |b| {
        let mut k = 0;
        b.iter(|| {
            net.set_nodes(black_box(&patterns[k % patterns.len()])).unwrap();
            k += 1;
        });
    });
}

criterion_group!(
    benches,
    benchmark_energy_gap,
    benchmark_total_energy,
    benchmark_set_nodes
);
criterion_main!(benches);
