// file: src/logging/mod.rs
// version: 1.0.0
// guid: 4d90e6a3-b1c8-4f72-9e05-a83c7d2f1b60

//! Logging system for the bugtracker launcher

pub mod logger;

pub use logger::{init_logger, LogFormat};
