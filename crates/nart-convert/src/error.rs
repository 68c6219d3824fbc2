//! Error types for the converter's graph rewrites.

use nart_proto::util::TensorDataError;
use thiserror::Error;

/// The error type for graph-rewrite passes.
///
/// A rewrite error is fatal to the whole conversion: it means a matched
/// pattern does not encode the semantics the rewrite assumes, and rewriting
/// anyway would silently corrupt the model. There is no recovery path.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A matched Constant node carries no `value` attribute.
    #[error("Constant node producing {value} has no value attribute")]
    MissingValueAttribute {
        /// Output value name of the offending node.
        value: String,
    },

    /// A matched Constant node's tensor payload could not be decoded.
    #[error("Constant node producing {value}: {source}")]
    TensorData {
        /// Output value name of the offending node.
        value: String,
        source: TensorDataError,
    },

    /// A batchnorm scale constant contains an element other than 1.0.
    #[error("batchnorm scale {value} must be all ones, found {found} at index {index}")]
    NonUnitWeight {
        /// Output value name of the scale constant.
        value: String,
        /// Index of the first offending element.
        index: usize,
        /// The offending element.
        found: f32,
    },

    /// A batchnorm shift constant contains an element other than 0.0.
    #[error("batchnorm bias {value} must be all zeros, found {found} at index {index}")]
    NonZeroBias {
        /// Output value name of the shift constant.
        value: String,
        /// Index of the first offending element.
        index: usize,
        /// The offending element.
        found: f32,
    },
}

/// A specialized Result type for graph-rewrite operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
