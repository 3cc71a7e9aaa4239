//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod emit;
pub mod init;

pub use args::{Cli, Commands, EmitArgs};
