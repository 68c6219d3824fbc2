//! Python `nart.tools.pytorch.network_utils.batchnorm` parity.
//!
//! Version specific for torch exporters 0.3.0, 0.3.1 and 1.0.x: those
//! exporters serialize one batchnorm layer as three consecutive nodes, a
//! Constant holding the scale, a Constant holding the shift, and the
//! BatchNormalization node consuming both. Downstream conversion expects the
//! holistic layer, so the triple is collapsed into the BatchNormalization
//! node alone.

use nart_proto::util::{attribute_map, raw_f32};
use nart_proto::{ModelProto, NodeProto};
use tracing::debug;

use crate::error::{ConvertError, Result};

const CONSTANT: &str = "Constant";
const BATCH_NORMALIZATION: &str = "BatchNormalization";

/// Merges standalone batchnorm scale/shift constants into the batchnorm node.
///
/// Scans `model.graph.node` once, front to back. Every contiguous
/// `[Constant, Constant, BatchNormalization]` window where the first
/// constant feeds input 1 and the second feeds input 2 of the batchnorm node
/// is replaced by the batchnorm node alone, with those two input references
/// blanked; all other nodes pass through unchanged and in original order.
///
/// The merged constants must decode to an all-ones scale and an all-zeros
/// shift. Any other payload means the graph does not encode the batchnorm
/// semantics this rewrite assumes, and the conversion fails rather than
/// producing a silently incorrect model. The node list is rebuilt in place;
/// after an error the model must not be used.
pub fn merge_batchnorm_nodes(model: &mut ModelProto) -> Result<()> {
    let Some(graph) = model.graph.as_mut() else {
        return Ok(());
    };
    let mut nodes = std::mem::take(&mut graph.node);
    let mut merged: Vec<NodeProto> = Vec::with_capacity(nodes.len());
    let mut fused = 0usize;

    let mut idx = 0;
    while idx < nodes.len() {
        // Not a candidate scale constant, or no room left for a full triple.
        if nodes[idx].op_type != CONSTANT || idx + 2 >= nodes.len() {
            merged.push(std::mem::take(&mut nodes[idx]));
            idx += 1;
            continue;
        }

        // The lookahead node is re-examined on the next iteration.
        if nodes[idx + 1].op_type != CONSTANT {
            merged.push(std::mem::take(&mut nodes[idx]));
            idx += 1;
            continue;
        }

        let (scale, shift, batchnorm) = (&nodes[idx], &nodes[idx + 1], &nodes[idx + 2]);
        if batchnorm.op_type != BATCH_NORMALIZATION
            || !feeds(scale, batchnorm, 1)
            || !feeds(shift, batchnorm, 2)
        {
            // Emit only the tentative scale constant; the scan resumes from
            // the second constant, which may start its own triple.
            merged.push(std::mem::take(&mut nodes[idx]));
            idx += 1;
            continue;
        }

        let scale_values = constant_f32(scale)?;
        if let Some((index, found)) = first_mismatch(&scale_values, 1.0) {
            return Err(ConvertError::NonUnitWeight {
                value: output_name(scale),
                index,
                found,
            });
        }
        let shift_values = constant_f32(shift)?;
        if let Some((index, found)) = first_mismatch(&shift_values, 0.0) {
            return Err(ConvertError::NonZeroBias {
                value: output_name(shift),
                index,
                found,
            });
        }

        debug!(
            batchnorm = %output_name(batchnorm),
            scale = %output_name(scale),
            shift = %output_name(shift),
            "merging constant scale/shift into batchnorm node"
        );
        let mut batchnorm = std::mem::take(&mut nodes[idx + 2]);
        batchnorm.input[1] = String::new();
        batchnorm.input[2] = String::new();
        merged.push(batchnorm);
        fused += 1;
        idx += 3;
    }

    if fused > 0 {
        debug!(fused, nodes = merged.len(), "batchnorm constant merge done");
    }
    graph.node = merged;
    Ok(())
}

/// True when `producer.output[0]` is wired into `consumer.input[slot]`.
fn feeds(producer: &NodeProto, consumer: &NodeProto, slot: usize) -> bool {
    match (producer.output.first(), consumer.input.get(slot)) {
        (Some(output), Some(input)) => output == input,
        _ => false,
    }
}

/// Decodes the f32 payload of a Constant node's `value` attribute.
///
/// An attribute without a tensor decodes as empty, matching proto3 default
/// semantics on the Python side.
fn constant_f32(node: &NodeProto) -> Result<Vec<f32>> {
    let attrs = attribute_map(node);
    let value = attrs
        .get("value")
        .ok_or_else(|| ConvertError::MissingValueAttribute {
            value: output_name(node),
        })?;
    match value.t.as_ref() {
        Some(tensor) => raw_f32(tensor).map_err(|source| ConvertError::TensorData {
            value: output_name(node),
            source,
        }),
        None => Ok(Vec::new()),
    }
}

fn first_mismatch(values: &[f32], expected: f32) -> Option<(usize, f32)> {
    values
        .iter()
        .copied()
        .enumerate()
        .find(|&(_, v)| v != expected)
}

/// The node's first output name, falling back to its node name for display.
fn output_name(node: &NodeProto) -> String {
    node.output
        .first()
        .cloned()
        .unwrap_or_else(|| node.name.clone())
}
