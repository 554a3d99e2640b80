// file: src/shell/command.rs
// version: 1.0.0
// guid: 7b2f4d61-0e8c-4a35-9c17-d58e3a6f02b9

//! Shell command line assembly

use std::fmt;

/// A `cd <dir>; <command>` line handed to the host shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub directory: String,
    pub command: String,
}

impl ShellCommand {
    /// Create a new shell command
    pub fn new(directory: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            command: command.into(),
        }
    }

    /// Assemble the full line.
    ///
    /// Fragments are concatenated verbatim; nothing is escaped or trimmed.
    pub fn assemble(&self) -> String {
        format!("cd {}; {}", self.directory, self.command)
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.assemble())
    }
}

/// An interpreter running a script with arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptInvocation {
    pub interpreter: String,
    pub script: String,
    pub args: Vec<String>,
}

impl ScriptInvocation {
    pub fn new(interpreter: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Render as `interpreter script args...`.
    ///
    /// Interpreter and script are emitted as-is so the shell still expands
    /// `~` in them. Arguments are quoted when they need it.
    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 2);
        parts.push(self.interpreter.clone());
        parts.push(self.script.clone());
        parts.extend(self.args.iter().map(|a| shell_quote(a)));
        parts.join(" ")
    }

    /// Bind this invocation to the directory it runs from
    pub fn into_shell_command(self, directory: impl Into<String>) -> ShellCommand {
        ShellCommand::new(directory, self.render())
    }
}

/// Single-quote `arg` for a POSIX shell unless it is made only of safe characters
pub fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.:/=+,@%".contains(c));

    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
