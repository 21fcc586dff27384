//! Command-line entry point and the interactive shell

pub mod commands;
pub mod shell;

pub use commands::{Cli, Commands, run};
pub use shell::{Flow, Shell};
