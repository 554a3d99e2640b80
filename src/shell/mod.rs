// file: src/shell/mod.rs
// version: 1.0.0
// guid: 2d8e61f0-a4b7-4c93-9f05-7e1a3c58b2d4

//! Shell delegation: command assembly, execution and dispatch

pub mod command;
pub mod dispatcher;
pub mod executor;

pub use command::{shell_quote, ScriptInvocation, ShellCommand};
pub use dispatcher::{DispatchReport, Dispatcher, ExitPolicy, DEFAULT_STATUS_MESSAGE};
pub use executor::{ShellRunner, SystemShell};
