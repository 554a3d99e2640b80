// file: src/shell/dispatcher.rs
// version: 1.0.0
// guid: 93a7c0d2-5f1e-4b68-8e2d-61b4f0a9c37e

//! Command dispatcher: status line, shell hand-off, exit policy

use super::command::ShellCommand;
use super::executor::ShellRunner;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Instant;
use tracing::{info, info_span, warn};
use uuid::Uuid;

/// Status line printed before every dispatch unless configured otherwise
pub const DEFAULT_STATUS_MESSAGE: &str = "Demonstrating bugtracker wrapper";

/// How the child's exit status maps to the launcher's own
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitPolicy {
    /// Always report success, whatever the child did
    #[default]
    AlwaysSucceed,
    /// Report the child's exit code and fail when the shell cannot start
    Propagate,
}

impl ExitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitPolicy::AlwaysSucceed => "always-succeed",
            ExitPolicy::Propagate => "propagate",
        }
    }

    /// Exit code reported for a child that exited with `child`
    pub fn resolve(&self, child: Option<i32>) -> i32 {
        match self {
            ExitPolicy::AlwaysSucceed => 0,
            ExitPolicy::Propagate => child.unwrap_or(1),
        }
    }
}

impl std::str::FromStr for ExitPolicy {
    type Err = crate::error::LauncherError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "always-succeed" => Ok(ExitPolicy::AlwaysSucceed),
            "propagate" | "strict" => Ok(ExitPolicy::Propagate),
            _ => Err(crate::error::LauncherError::validation(format!(
                "Unknown exit policy: {}",
                s
            ))),
        }
    }
}

/// Outcome of one dispatch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchReport {
    pub run_id: Uuid,
    pub command: String,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub spawned: bool,
    pub child_exit_code: Option<i32>,
    pub exit_code: i32,
    pub dry_run: bool,
}

/// Hands assembled command lines to a [`ShellRunner`]
pub struct Dispatcher<R: ShellRunner> {
    runner: R,
    policy: ExitPolicy,
    status_message: String,
    dry_run: bool,
}

impl<R: ShellRunner> Dispatcher<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            policy: ExitPolicy::default(),
            status_message: DEFAULT_STATUS_MESSAGE.to_string(),
            dry_run: false,
        }
    }

    pub fn with_policy(mut self, policy: ExitPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_status_message(mut self, message: impl Into<String>) -> Self {
        self.status_message = message.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Print the status line to `out`, then run `command` and block until it exits.
    ///
    /// The status line is flushed before the runner is invoked.
    pub fn dispatch<W: Write>(
        &mut self,
        command: &ShellCommand,
        out: &mut W,
    ) -> Result<DispatchReport> {
        let run_id = Uuid::new_v4();
        let span = info_span!("dispatch", %run_id);
        let _enter = span.enter();

        let line = command.assemble();
        let started_at = Utc::now();
        let clock = Instant::now();

        writeln!(out, "{}", self.status_message)?;
        out.flush()?;

        if self.dry_run {
            writeln!(out, "DRY RUN: would execute: {}", line)?;
            out.flush()?;
            info!("Dry run, nothing executed");
            return Ok(DispatchReport {
                run_id,
                command: line,
                started_at,
                duration_ms: elapsed_ms(clock),
                spawned: false,
                child_exit_code: None,
                exit_code: 0,
                dry_run: true,
            });
        }

        info!("Dispatching: {}", line);

        let (spawned, child_exit_code) = match self.runner.run(&line) {
            Ok(code) => (true, code),
            Err(e) if self.policy == ExitPolicy::AlwaysSucceed => {
                warn!("Ignoring shell failure: {}", e);
                (false, None)
            }
            Err(e) => return Err(e),
        };

        let exit_code = self.policy.resolve(child_exit_code);
        if spawned && child_exit_code != Some(0) && exit_code == 0 {
            warn!(
                "Command exited with {:?}; reporting success under {} policy",
                child_exit_code,
                self.policy.as_str()
            );
        } else {
            info!("Command finished with {:?}", child_exit_code);
        }

        Ok(DispatchReport {
            run_id,
            command: line,
            started_at,
            duration_ms: elapsed_ms(clock),
            spawned,
            child_exit_code,
            exit_code,
            dry_run: false,
        })
    }
}

fn elapsed_ms(clock: Instant) -> u64 {
    u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX)
}
