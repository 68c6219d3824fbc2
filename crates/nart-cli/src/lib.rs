//! NART CLI Library
//!
//! This crate provides the command-line interface for the NART converter
//! passes:
//!
//! - **Optimize**: apply graph rewrites to an exported model file
//!
//! # Example
//!
//! ```bash
//! # Rewrite a model in place
//! nart optimize --input model.onnx
//!
//! # Rewrite into a separate file
//! nart optimize --input model.onnx --output model.opt.onnx
//! ```

pub mod commands;

use clap::{Parser, Subcommand};

pub use commands::OptimizeCommand;

/// NART - model converter utilities
///
/// Normalizes exporter-specific serialization quirks in model graphs so the
/// downstream converter sees canonical node shapes.
#[derive(Parser, Debug)]
#[command(name = "nart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply graph rewrites to an exported model
    Optimize(OptimizeCommand),
}

/// Result type alias for CLI operations
pub type CliResult<T> = anyhow::Result<T>;
