//! Small helpers for working with the model protos.
//!
//! Node attributes arrive as an ordered list; most callers want keyed access.
//! Tensor payloads arrive as raw little-endian bytes; most callers want a
//! typed slice. These helpers cover those two common cases.

use std::collections::HashMap;

use thiserror::Error;

use crate::onnx::{AttributeProto, NodeProto, TensorProto};

#[derive(Debug, Error)]
pub enum TensorDataError {
    /// `raw_data` length is not a whole number of f32 elements.
    #[error("raw tensor data of {len} bytes does not divide into 32-bit floats")]
    TruncatedF32 { len: usize },
}

/// Builds a name-keyed view of a node's attribute list.
///
/// Attribute names are unique per node in well-formed models; on a duplicate
/// name the last entry wins.
pub fn attribute_map(node: &NodeProto) -> HashMap<&str, &AttributeProto> {
    node.attribute
        .iter()
        .map(|attr| (attr.name.as_str(), attr))
        .collect()
}

/// Decodes a tensor's `raw_data` buffer as little-endian f32 values.
///
/// The element count is the byte length divided by 4; an empty buffer decodes
/// to an empty vector. Does not consult `data_type` or the typed data fields.
pub fn raw_f32(tensor: &TensorProto) -> Result<Vec<f32>, TensorDataError> {
    let raw = &tensor.raw_data;
    if raw.len() % 4 != 0 {
        return Err(TensorDataError::TruncatedF32 { len: raw.len() });
    }
    Ok(raw
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onnx::{AttributeType, DataType};

    fn tensor_attr(name: &str, raw_data: Vec<u8>) -> AttributeProto {
        AttributeProto {
            name: name.to_string(),
            r#type: AttributeType::Tensor as i32,
            t: Some(TensorProto {
                data_type: DataType::Float as i32,
                raw_data,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_attribute_map_keys_by_name() {
        let node = NodeProto {
            op_type: "Constant".to_string(),
            attribute: vec![tensor_attr("value", vec![])],
            ..Default::default()
        };
        let attrs = attribute_map(&node);
        assert!(attrs.contains_key("value"));
        assert!(!attrs.contains_key("other"));
    }

    #[test]
    fn test_raw_f32_little_endian() {
        let mut raw = Vec::new();
        raw.extend_from_slice(&1.0f32.to_le_bytes());
        raw.extend_from_slice(&(-2.5f32).to_le_bytes());
        let tensor = TensorProto {
            raw_data: raw,
            ..Default::default()
        };
        assert_eq!(raw_f32(&tensor).unwrap(), vec![1.0, -2.5]);
    }

    #[test]
    fn test_raw_f32_empty_buffer() {
        let tensor = TensorProto::default();
        assert_eq!(raw_f32(&tensor).unwrap(), Vec::<f32>::new());
    }

    #[test]
    fn test_raw_f32_rejects_partial_element() {
        let tensor = TensorProto {
            raw_data: vec![0, 0, 0, 0x80, 0x3f],
            ..Default::default()
        };
        let err = raw_f32(&tensor).unwrap_err();
        assert_eq!(
            err.to_string(),
            "raw tensor data of 5 bytes does not divide into 32-bit floats"
        );
    }
}
