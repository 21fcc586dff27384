//! Parsers for interactive shell input

pub mod command;

pub use command::{CommandParseError, ShellCommand, parse_command};
