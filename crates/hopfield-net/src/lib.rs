//! # Hopfield Net
//!
//! State container and energy arithmetic for binary Hopfield networks.
//!
//! A network has a fixed number of boolean nodes, a symmetric weight
//! matrix with a zero diagonal and one bias per node. From these it
//! computes:
//!
//! - the **energy gap** of a node: the bias of that node plus the weights
//!   of all its active neighbours. A positive gap means switching the node
//!   on lowers the total energy.
//! - the **total energy** `E = -Σ_{i<j} w_ij s_i s_j - Σ_i b_i s_i`.
//!
//! Weights and biases are generic over [`Weight`], so integer networks get
//! exact energies and real-valued networks work the same way.
//!
//! ## Example
//!
//! ```rust
//! use hopfield_net::HopfieldNet;
//!
//! let mut net = HopfieldNet::<i32>::new(3);
//! net.set_weight(0, 1, 3).unwrap();
//! net.set_weight(0, 2, -1).unwrap();
//! net.set_nodes(&[false, true, false]).unwrap();
//!
//! assert_eq!(net.get_node_energy_gap(0).unwrap(), 3);
//!
//! net.nodes_mut()[0] = true;
//! assert_eq!(net.get_total_energy(), -3);
//! ```
//!
//! ## Configuration
//!
//! Networks can be described declaratively with [`NetworkConfig`] and
//! loaded from JSON:
//!
//! ```rust
//! use hopfield_net::{HopfieldNet, NetworkConfig};
//!
//! let config = NetworkConfig::<f64>::from_json(
//!     r#"{ "num_nodes": 2, "weights": [{ "from": 0, "to": 1, "weight": 2.0 }] }"#,
//! )
//! .unwrap();
//! let net = HopfieldNet::from_config(&config).unwrap();
//! assert_eq!(net.get_weight(1, 0).unwrap(), 2.0);
//! ```

pub mod config;
pub mod error;
pub mod network;
pub mod nodes;
pub mod numeric;
pub mod weights;

pub use config::{BiasConfig, EdgeConfig, NetworkConfig};
pub use error::HopfieldError;
pub use network::{HopfieldNet, MAX_NODES};
pub use nodes::NodeStates;
pub use numeric::Weight;
pub use weights::SymmetricWeights;

pub type Result<T> = std::result::Result<T, HopfieldError>;
