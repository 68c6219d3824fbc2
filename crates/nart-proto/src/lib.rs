//! Protobuf message types for the NART model converter.
//!
//! This crate declares the ONNX-subset messages the converter operates on as
//! hand-maintained prost types (see [`onnx`] for the wire-compatibility
//! notes), so they are intended to match the Python-generated protobuf
//! classes 1:1 without requiring `protoc` at build time.

pub mod onnx;
pub mod util;

// Convenience re-exports for commonly used message types.
pub use onnx::{
    AttributeProto, AttributeType, DataType, GraphProto, ModelProto, NodeProto, TensorProto,
    ValueInfoProto,
};
