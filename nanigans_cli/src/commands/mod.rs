//! CLI subcommand implementations.

pub mod lookup;
pub mod stats;
pub mod view;
