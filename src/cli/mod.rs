// file: src/cli/mod.rs
// version: 1.0.0
// guid: 9b05d2e8-6f3a-41c7-a8d4-e1c73b095f26

//! Command line interface

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, DispatchArgs};
