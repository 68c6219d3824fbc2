//! CLI subcommand implementations.

pub mod optimize;

pub use optimize::OptimizeCommand;
