//! Shared test helpers for the hopfield-net integration test suite.
//!
//! Provides the five-node "lecture slides" network, seeded random network
//! generators and a brute-force energy reference.

#![allow(dead_code)]

use hopfield_net::{HopfieldNet, NetworkConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The five-node network from the lecture slides, as JSON.
///
/// ```text
/// 0-1: -4   0-2: 3   1-2: 1   1-3: 3
/// 1-4:  3   2-3: -1  3-4: -1
/// ```
///
/// No biases. Starting state `[1, 0, 1, 0, 0]` sits at E = -3; the deeper minimum
/// `[0, 1, 0, 1, 1]` is at E = -5.
pub const LECTURE_SLIDES_JSON: &str = r#"{
  "num_nodes": 5,
  "weights": [
    { "from": 0, "to": 1, "weight": -4 },
    { "from": 0, "to": 2, "weight": 3 },
    { "from": 1, "to": 2, "weight": 1 },
    { "from": 1, "to": 3, "weight": 3 },
    { "from": 1, "to": 4, "weight": 3 },
    { "from": 2, "to": 3, "weight": -1 },
    { "from": 3, "to": 4, "weight": -1 }
  ],
  "nodes": [true, false, true, false, false]
}"#;

/// Build the lecture slides network through the public setters.
pub fn make_net_from_lecture_slides() -> HopfieldNet<i32> {
    let mut net = HopfieldNet::new(5);
    net.set_weight(0, 1, -4).unwrap();
    net.set_weight(0, 2, 3).unwrap();
    net.set_weight(1, 2, 1).unwrap();
    net.set_weight(1, 3, 3).unwrap();
    net.set_weight(1, 4, 3).unwrap();
    net.set_weight(2, 3, -1).unwrap();
    net.set_weight(3, 4, -1).unwrap();
    net.set_nodes(&[true, false, true, false, false]).unwrap();
    net
}

/// Build the lecture slides network from its JSON description.
pub fn lecture_slides_from_json() -> HopfieldNet<i32> {
    let config = NetworkConfig::from_json(LECTURE_SLIDES_JSON).unwrap();
    HopfieldNet::from_config(&config).unwrap()
}

/// Random integer network with weights and biases in `-range..=range`.
pub fn random_int_net(n: usize, range: i64, seed: u64) -> HopfieldNet<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut net = HopfieldNet::new(n);
    for i in 0..n {
        for j in i + 1..n {
            net.set_weight(i, j, rng.gen_range(-range..=range)).unwrap();
        }
        net.set_node_bias(i, rng.gen_range(-range..=range)).unwrap();
    }
    let states: Vec<bool> = (0..n).map(|_| rng.gen_bool(0.5)).collect();
    net.set_nodes(&states).unwrap();
    net
}

/// Random real-valued network with weights and biases in `[-1, 1)`.
pub fn random_float_net(n: usize, seed: u64) -> HopfieldNet<f64> {
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

/// Total energy from the ordered double sum `-½ Σ_i Σ_{j≠i} w_ij s_i s_j - Σ_i b_i s_i`.
pub fn reference_energy(net: &HopfieldNet<f64>) -> f64 {
    let n = net.num_nodes();
    let s: Vec<f64> = net.nodes().iter().map(|b| if b { 1.0 } else { 0.0 }).collect();

    let mut pair_sum = 0.0;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                pair_sum += net.get_weight(i, j).unwrap() * s[i] * s[j];
            }
        }
    }
    let bias_sum: f64 = (0..n).map(|i| net.get_node_bias(i).unwrap() * s[i]).sum();

    -0.5 * pair_sum - bias_sum
}

/// Install a test subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
