//! Error types for Hopfield network operations.
//!
//! Every fallible operation validates its arguments before touching any
//! state, so an `Err` always leaves the network exactly as it was.

/// Errors that can occur in Hopfield network operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HopfieldError {
    /// A node index fell outside `0..len`.
    #[error("node index {index} out of range for network of {len} nodes")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of nodes in the network.
        len: usize,
    },

    /// A bulk node-state replacement supplied the wrong number of values.
    #[error("expected {expected} node states, got {actual}")]
    LengthMismatch {
        /// Number of nodes in the network.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A weight was addressed on the diagonal.
    #[error("self-connection on node {0} is not allowed")]
    SelfConnection(usize),

    /// A network was requested with zero nodes.
    #[error("network must have at least one node")]
    EmptyNetwork,

    /// A network was requested with more nodes than can be stored.
    #[error("network of {num_nodes} nodes is too large to allocate")]
    TooLarge {
        /// Requested node count.
        num_nodes: usize,
    },

    /// A declarative network description could not be parsed.
    #[error("invalid network config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for HopfieldError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Ensure `index` addresses one of `len` nodes.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), HopfieldError> {
    if index < len {
        Ok(())
    } else {
        Err(HopfieldError::IndexOutOfRange { index, len })
    }
}
