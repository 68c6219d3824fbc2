//! Python `nart.tools.pytorch.network_utils` parity.
//!
//! Rewrites over an exported model's node list, run before the graph is
//! handed to the backend converter. Each pass takes the model by mutable
//! reference and rebuilds `graph.node` in place.

pub mod batchnorm;

pub use batchnorm::merge_batchnorm_nodes;
