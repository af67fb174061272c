//! Fixed-length binary node state vector.

use std::ops::{Index, IndexMut};

use crate::error::{check_index, HopfieldError};

/// Activation state of every node in a network.
///
/// The length is fixed at construction. Single nodes can be read and
/// written through indexing or the checked [`get`](Self::get) /
/// [`set`](Self::set) accessors; the whole vector is only ever replaced by
/// [`replace`](Self::replace), which rejects a slice of the wrong length
/// before writing anything.
///
/// # Examples
///
/// ```rust
/// use hopfield_net::NodeStates;
///
/// let mut nodes = NodeStates::new(3);
/// nodes[1] = true;
/// assert!(nodes[1]);
/// assert_eq!(nodes.count_active(), 1);
/// assert!(nodes.replace(&[true, false]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStates {
    states: Vec<bool>,
}

impl NodeStates {
    /// All-`false` state vector of length `len`.
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![false; len],
        }
    }

    /// Fallible counterpart of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`HopfieldError::TooLarge`] if `len` states cannot be
    /// allocated.
    pub fn try_new(len: usize) -> Result<Self, HopfieldError> {
        let mut states = Vec::new();
        states
            .try_reserve_exact(len)
            .map_err(|_| HopfieldError::TooLarge { num_nodes: len })?;
        states.resize(len, false);
        Ok(Self { states })
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether there are no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State of node `index`.
    pub fn get(&self, index: usize) -> Result<bool, HopfieldError> {
        check_index(index, self.len())?;
        Ok(self.states[index])
    }

    /// Set the state of node `index`.
    pub fn set(&mut self, index: usize, value: bool) -> Result<(), HopfieldError> {
        check_index(index, self.len())?;
        self.states[index] = value;
        Ok(())
    }

    /// Overwrite every state with `values`.
    ///
    /// # Errors
    ///
    /// Returns [`HopfieldError::LengthMismatch`] if `values.len()` differs
    /// from [`len`](Self::len); nothing is written in that case.
    pub fn replace(&mut self, values: &[bool]) -> Result<(), HopfieldError> {
        if values.len() != self.len() {
            return Err(HopfieldError::LengthMismatch {
                expected: self.len(),
                actual: values.len(),
            });
        }
        self.states.copy_from_slice(values);
        Ok(())
    }

    /// Iterate over node states in index order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, bool>> {
        self.states.iter().copied()
    }

    /// Borrow the states as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.states
    }

    /// Number of nodes currently `true`.
    pub fn count_active(&self) -> usize {
        self.states.iter().filter(|&&s| s).count()
    }
}

impl Index<usize> for NodeStates {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.states[index]
    }
}

impl IndexMut<usize> for NodeStates {
    fn index_mut(&mut self, index: usize) -> &mut bool {
        &mut self.states[index]
    }
}

impl<'a> IntoIterator for &'a NodeStates {
    type Item = bool;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
