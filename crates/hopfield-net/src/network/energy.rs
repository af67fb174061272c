//! Energy gap and total energy

use super::HopfieldNet;
use crate::error::check_index;
use crate::numeric::Weight;
use crate::Result;

impl<T: Weight> HopfieldNet<T> {
    /// Energy gap of node `i`: `b_i + Σ_{j≠i} w_ij s_j`.
    ///
    /// This is the drop in total energy from switching node `i` on, given
    /// every other node's current state. Node `i`'s own state does not
    /// enter the sum.
    ///
    /// # Arguments
    ///
    /// * `i` - Node whose gap to compute
    ///
    /// # Errors
    ///
    /// Returns [`HopfieldError::IndexOutOfRange`](crate::HopfieldError::IndexOutOfRange)
    /// if `i` is not a node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopfield_net::HopfieldNet;
    ///
    /// let mut net = HopfieldNet::<i32>::new(3);
    /// net.set_weight(0, 1, 3).unwrap();
    /// net.set_weight(0, 2, -1).unwrap();
    /// net.set_nodes(&[false, true, false]).unwrap();
    /// assert_eq!(net.get_node_energy_gap(0).unwrap(), 3);
    ///
    /// // no self term
    /// net.nodes_mut()[0] = true;
    /// assert_eq!(net.get_node_energy_gap(0).unwrap(), 3);
    /// ```
    pub fn get_node_energy_gap(&self, i: usize) -> Result<T> {
        check_index(i, self.num_nodes())?;
        let mut gap = self.biases[i];
        for (j, w) in self.weights.row(i) {
            if self.nodes[j] {
                gap += w;
            }
        }
        Ok(gap)
    }

    /// Total energy `E = -Σ_{i<j} w_ij s_i s_j - Σ_i b_i s_i`.
    ///
    /// Each unordered pair is visited once, which is the same as halving
    /// the ordered double sum. No division is involved, so integer weights
    /// give an exact result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopfield_net::HopfieldNet;
    ///
    /// let mut net = HopfieldNet::<i32>::new(2);
    /// net.set_weight(0, 1, 2).unwrap();
    /// net.set_node_bias(1, -1).unwrap();
    /// net.set_nodes(&[true, true]).unwrap();
    /// assert_eq!(net.get_total_energy(), -1);
    /// ```
    pub fn get_total_energy(&self) -> T {
        let mut goodness = T::zero();
        for (i, j, w) in self.weights.edges() {
            if self.nodes[i] && self.nodes[j] {
                goodness += w;
            }
        }
        for (b, s) in self.biases.iter().zip(self.nodes.iter()) {
            if s {
                goodness += *b;
            }
        }
        -goodness
    }
}
