//! Declarative network description.
//!
//! A [`NetworkConfig`] lists the node count, the non-zero edges, any
//! non-zero biases and optionally an initial state. It is the serde form of
//! [`HopfieldNet`](crate::HopfieldNet): serializing a network produces one,
//! and deserializing goes through [`HopfieldNet::from_config`] so a
//! malformed document is rejected instead of producing a broken network.
//!
//! ```json
//! {
//!   "num_nodes": 3,
//!   "weights": [{ "from": 0, "to": 1, "weight": 3.0 }],
//!   "biases": [{ "node": 2, "bias": -1.0 }],
//!   "nodes": [false, true, false]
//! }
//! ```
//!
//! [`HopfieldNet::from_config`]: crate::HopfieldNet::from_config

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::HopfieldError;

/// One undirected connection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig<T> {
    /// First endpoint.
    pub from: usize,
    /// Second endpoint.
    pub to: usize,
    /// Connection strength.
    pub weight: T,
}

/// Bias of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiasConfig<T> {
    /// Node index.
    pub node: usize,
    /// Bias value.
    pub bias: T,
}

/// Serializable description of a whole network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig<T> {
    /// Number of nodes.
    pub num_nodes: usize,

    /// Edges with a non-zero weight. Unlisted pairs are zero.
    #[serde(default = "Vec::new")]
    pub weights: Vec<EdgeConfig<T>>,

    /// Nodes with a non-zero bias. Unlisted nodes are zero.
    #[serde(default = "Vec::new")]
    pub biases: Vec<BiasConfig<T>>,

    /// Initial node states; all `false` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<bool>>,
}

impl<T> NetworkConfig<T> {
    /// Empty description for `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            weights: Vec::new(),
            biases: Vec::new(),
            nodes: None,
        }
    }

    /// Add an edge.
    pub fn with_weight(mut self, from: usize, to: usize, weight: T) -> Self {
        self.weights.push(EdgeConfig { from, to, weight });
        self
    }

    /// Add a node bias.
    pub fn with_bias(mut self, node: usize, bias: T) -> Self {
        self.biases.push(BiasConfig { node, bias });
        self
    }

    /// Set the initial node states.
    pub fn with_nodes(mut self, nodes: Vec<bool>) -> Self {
        self.nodes = Some(nodes);
        self
    }
}

impl<T: DeserializeOwned> NetworkConfig<T> {
    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`HopfieldError::Config`] if the document is not valid JSON
    /// or does not match the expected shape. Structural checks (index
    /// ranges, state length) happen later in
    /// [`HopfieldNet::from_config`](crate::HopfieldNet::from_config).
    pub fn from_json(json: &str) -> Result<Self, HopfieldError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<T: Serialize> NetworkConfig<T> {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, HopfieldError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
