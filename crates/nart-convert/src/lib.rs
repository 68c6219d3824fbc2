//! Graph rewrites for the NART model converter.
//!
//! Exporters of certain framework versions serialize some layers in a shape
//! the backend converter cannot consume directly; the passes in
//! [`network_utils`] normalize those shapes on the in-memory model before
//! conversion proceeds.

pub mod error;
pub mod network_utils;

pub use error::{ConvertError, Result};
pub use network_utils::merge_batchnorm_nodes;
