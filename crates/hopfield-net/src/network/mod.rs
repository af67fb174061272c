//! Binary Hopfield network
//!
//! [`HopfieldNet`] holds a fixed number of binary nodes, a symmetric
//! zero-diagonal weight matrix and one bias per node, and computes the two
//! quantities the Hopfield update rule is built on:
//!
//! - the energy gap of a node, `b_i + Σ_{j≠i} w_ij s_j`
//! - the total energy, `E = -Σ_{i<j} w_ij s_i s_j - Σ_i b_i s_i`
//!
//! Choosing which node to flip and iterating to a fixed point is left to
//! the caller.

mod energy;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{BiasConfig, EdgeConfig, NetworkConfig};
use crate::error::{check_index, HopfieldError};
use crate::nodes::NodeStates;
use crate::numeric::Weight;
use crate::weights::SymmetricWeights;
use crate::Result;

/// Largest node count a network accepts.
///
/// At this size the packed weight matrix holds about 134 million cells.
pub const MAX_NODES: usize = 1 << 14;

/// Binary Hopfield network with symmetric weights and per-node bias.
///
/// # Examples
///
/// ```rust
/// use hopfield_net::HopfieldNet;
///
/// let mut net = HopfieldNet::<i32>::new(3);
/// net.set_weight(0, 1, 3).unwrap();
/// net.set_weight(0, 2, -1).unwrap();
/// net.nodes_mut()[1] = true;
///
/// assert_eq!(net.get_weight(1, 0).unwrap(), 3);
/// assert_eq!(net.get_node_energy_gap(0).unwrap(), 3);
/// assert_eq!(net.get_total_energy(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "NetworkConfig<T>",
    into = "NetworkConfig<T>",
    bound(
        serialize = "T: Weight + Serialize",
        deserialize = "T: Weight + Deserialize<'de>"
    )
)]
pub struct HopfieldNet<T: Weight = f64> {
    nodes: NodeStates,
    weights: SymmetricWeights<T>,
    biases: Vec<T>,
}

impl<T: Weight> HopfieldNet<T> {
    /// Create a network of `num_nodes` inactive, unconnected, unbiased nodes.
    ///
    /// # Panics
    ///
    /// Panics if `num_nodes` is zero or exceeds [`MAX_NODES`]. Use
    /// [`try_new`](Self::try_new) for a fallible variant.
    pub fn new(num_nodes: usize) -> Self {
        assert!(num_nodes > 0, "Network must have at least one node");
        match Self::zeroed(num_nodes) {
            Ok(net) => net,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible counterpart of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`HopfieldError::EmptyNetwork`] if `num_nodes` is zero and
    /// [`HopfieldError::TooLarge`] if it exceeds [`MAX_NODES`] or the
    /// storage cannot be allocated.
    pub fn try_new(num_nodes: usize) -> Result<Self> {
        if num_nodes == 0 {
            return Err(HopfieldError::EmptyNetwork);
        }
        Self::zeroed(num_nodes)
    }

    fn zeroed(num_nodes: usize) -> Result<Self> {
        if num_nodes > MAX_NODES {
            return Err(HopfieldError::TooLarge { num_nodes });
        }
        let mut biases = Vec::new();
        biases
            .try_reserve_exact(num_nodes)
            .map_err(|_| HopfieldError::TooLarge { num_nodes })?;
        biases.resize(num_nodes, T::zero());

        Ok(Self {
            nodes: NodeStates::try_new(num_nodes)?,
            weights: SymmetricWeights::try_new(num_nodes)?,
            biases,
        })
    }

    /// Build a network from a declarative description.
    ///
    /// The whole description is validated before anything is built: every
    /// edge and bias index must be in range, no edge may be a self-loop and
    /// the initial state, when given, must have exactly `num_nodes` entries.
    /// A pair listed twice keeps the last weight.
    pub fn from_config(config: &NetworkConfig<T>) -> Result<Self> {
        let n = config.num_nodes;
        if n == 0 {
            return Err(HopfieldError::EmptyNetwork);
        }
        if n > MAX_NODES {
            return Err(HopfieldError::TooLarge { num_nodes: n });
        }
        for edge in &config.weights {
            check_index(edge.from, n)?;
            check_index(edge.to, n)?;
            if edge.from == edge.to {
                return Err(HopfieldError::SelfConnection(edge.from));
            }
        }
        for bias in &config.biases {
            check_index(bias.node, n)?;
        }
        if let Some(nodes) = &config.nodes {
            if nodes.len() != n {
                return Err(HopfieldError::LengthMismatch {
                    expected: n,
                    actual: nodes.len(),
                });
            }
        }

        let mut net = Self::zeroed(n)?;
        for edge in &config.weights {
            net.weights.set(edge.from, edge.to, edge.weight)?;
        }
        for bias in &config.biases {
            net.biases[bias.node] = bias.bias;
        }
        if let Some(nodes) = &config.nodes {
            net.nodes.replace(nodes)?;
        }

        debug!(
            num_nodes = n,
            edges = config.weights.len(),
            biases = config.biases.len(),
            "built network from config"
        );
        Ok(net)
    }

    /// Describe this network, listing only non-zero weights and biases.
    pub fn to_config(&self) -> NetworkConfig<T> {
        NetworkConfig {
            num_nodes: self.num_nodes(),
            weights: self
                .weights
                .edges()
                .map(|(from, to, weight)| EdgeConfig { from, to, weight })
                .collect(),
            biases: self
                .biases
                .iter()
                .enumerate()
                .filter(|(_, b)| !b.is_zero())
                .map(|(node, &bias)| BiasConfig { node, bias })
                .collect(),
            nodes: Some(self.nodes.as_slice().to_vec()),
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Set the weight of the undirected connection between `i` and `j`.
    ///
    /// `get_weight(i, j)` and `get_weight(j, i)` both return `weight`
    /// afterwards.
    ///
    /// # Arguments
    ///
    /// * `i`, `j` - Distinct node indices, in either order
    /// * `weight` - Connection strength
    ///
    /// # Errors
    ///
    /// [`HopfieldError::IndexOutOfRange`] if either index is out of range,
    /// [`HopfieldError::SelfConnection`] if `i == j`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopfield_net::{HopfieldError, HopfieldNet};
    ///
    /// let mut net = HopfieldNet::<i32>::new(2);
    /// net.set_weight(1, 0, 4).unwrap();
    /// assert_eq!(net.get_weight(0, 1).unwrap(), 4);
    ///
    /// assert_eq!(net.set_weight(1, 1, 4), Err(HopfieldError::SelfConnection(1)));
    /// ```
    pub fn set_weight(&mut self, i: usize, j: usize, weight: T) -> Result<()> {
        self.weights.set(i, j, weight)?;
        trace!(i, j, ?weight, "set_weight");
        Ok(())
    }

    /// Weight between `i` and `j`; zero if never set or if `i == j`.
    pub fn get_weight(&self, i: usize, j: usize) -> Result<T> {
        self.weights.get(i, j)
    }

    /// Set the bias of node `i`.
    pub fn set_node_bias(&mut self, i: usize, bias: T) -> Result<()> {
        check_index(i, self.num_nodes())?;
        self.biases[i] = bias;
        trace!(node = i, ?bias, "set_node_bias");
        Ok(())
    }

    /// Bias of node `i`.
    pub fn get_node_bias(&self, i: usize) -> Result<T> {
        check_index(i, self.num_nodes())?;
        Ok(self.biases[i])
    }

    /// All biases in node order.
    pub fn biases(&self) -> &[T] {
        &self.biases
    }

    /// The weight matrix.
    pub fn weights(&self) -> &SymmetricWeights<T> {
        &self.weights
    }

    /// Iterate `(i, j, w)` with `i < j` over every non-zero connection.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.weights.edges()
    }

    /// Current node states.
    pub fn nodes(&self) -> &NodeStates {
        &self.nodes
    }

    /// Mutable access to individual node states.
    pub fn nodes_mut(&mut self) -> &mut NodeStates {
        &mut self.nodes
    }

    /// Replace every node state at once.
    ///
    /// # Arguments
    ///
    /// * `values` - New state for every node, in index order
    ///
    /// # Errors
    ///
    /// Returns [`HopfieldError::LengthMismatch`] if `values` does not have
    /// exactly [`num_nodes`](Self::num_nodes) entries. The current state is
    /// left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopfield_net::HopfieldNet;
    ///
    /// let mut net = HopfieldNet::<f64>::new(3);
    /// net.set_nodes(&[true, false, true]).unwrap();
    /// assert_eq!(net.nodes().count_active(), 2);
    ///
    /// assert!(net.set_nodes(&[false]).is_err());
    /// assert_eq!(net.nodes().as_slice(), &[true, false, true]);
    /// ```
    pub fn set_nodes(&mut self, values: &[bool]) -> Result<()> {
        self.nodes.replace(values)?;
        debug!(active = self.nodes.count_active(), "set_nodes");
        Ok(())
    }

    /// Indices of the nodes that are currently on.
    pub fn active_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.then_some(i))
    }
}

impl<T: Weight> TryFrom<NetworkConfig<T>> for HopfieldNet<T> {
    type Error = HopfieldError;

    fn try_from(config: NetworkConfig<T>) -> Result<Self> {
        Self::from_config(&config)
    }
}

impl<T: Weight> From<HopfieldNet<T>> for NetworkConfig<T> {
    fn from(net: HopfieldNet<T>) -> Self {
        net.to_config()
    }
}
