// file: src/apps/mod.rs
// version: 1.0.0
// guid: b81d4e07-2c6a-4f95-83b0-d9e5a2f16c3b

//! Bugtracker application entry points

pub mod calib;
pub mod preflight;

pub use calib::CalibRequest;
pub use preflight::{CheckResult, Preflight};
