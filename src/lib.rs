// file: src/lib.rs
// version: 1.1.0
// guid: 1e7a9c36-4b02-4d8f-95e3-c60f2b8d7a14

//! # Bugtracker Launcher
//!
//! Runs the bugtracker radar scripts through the host shell. A status line is
//! printed, a `cd <dir>; <interpreter> <script> <args>` line is assembled and
//! handed to the shell, and the launcher blocks until it exits.
//!
//! By default the launcher reports success whatever the script did. Strict
//! mode reports the script's own exit status instead.

pub mod apps;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod shell;
pub mod utils;

pub use error::{LauncherError, Result};
