//! Optimize Command Implementation
//!
//! Applies the converter's graph rewrites to a serialized model file.

use anyhow::{Context, Result};
use clap::Args;
use prost::Message;
use std::path::PathBuf;
use tracing::info;

use nart_convert::network_utils;
use nart_proto::ModelProto;

/// Apply graph rewrites to an exported model
///
/// Loads a serialized model, normalizes exporter-specific node shapes
/// (currently the batchnorm constant-input triple), and writes the result
/// back out.
///
/// # Example
///
/// ```bash
/// nart optimize --input model.onnx --output model.opt.onnx
/// ```
#[derive(Args, Debug, Clone)]
pub struct OptimizeCommand {
    /// Path to the serialized input model
    #[arg(long, short = 'i', env = "NART_INPUT_MODEL")]
    pub input: PathBuf,

    /// Output path for the rewritten model; defaults to rewriting in place
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl OptimizeCommand {
    pub fn run(&self) -> Result<()> {
        let bytes = std::fs::read(&self.input)
            .with_context(|| format!("reading model from {}", self.input.display()))?;
        let mut model = ModelProto::decode(bytes.as_slice())
            .with_context(|| format!("decoding model protobuf {}", self.input.display()))?;

        let before = node_count(&model);
        network_utils::merge_batchnorm_nodes(&mut model)
            .context("merging batchnorm constant inputs")?;
        let after = node_count(&model);
        info!(before, after, "applied batchnorm constant merge");

        let output = self.output.as_ref().unwrap_or(&self.input);
        std::fs::write(output, model.encode_to_vec())
            .with_context(|| format!("writing model to {}", output.display()))?;
        info!(path = %output.display(), "wrote rewritten model");
        Ok(())
    }
}

fn node_count(model: &ModelProto) -> usize {
    model.graph.as_ref().map(|g| g.node.len()).unwrap_or(0)
}
