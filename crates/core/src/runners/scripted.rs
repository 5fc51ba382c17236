//! In-memory [`ProcessExecutor`] that replays canned responses.

use super::traits::{ProcessExecutor, ProcessOutcome};
use crate::{
    command::HarnessCommand,
    error::{Error, Result},
};
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// What a scripted process does when invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Exit(i32),
    Print { exit_code: i32, stdout: String },
    /// The program cannot be started
    NotFound,
}

impl Reply {
    pub fn print(exit_code: i32, stdout: impl Into<String>) -> Self {
        Reply::Print {
            exit_code,
            stdout: stdout.into(),
        }
    }
}

struct Rule {
    pattern: String,
    replies: VecDeque<Reply>,
}

/// Rules match on a substring of the rendered command line; the first
/// matching rule answers. A rule replays its replies in order and repeats
/// the last one. Unmatched commands exit 0 with empty output.
#[derive(Default)]
pub struct ScriptedExecutor {
    rules: RefCell<Vec<Rule>>,
    on_path: HashSet<String>,
    calls: RefCell<Vec<HarnessCommand>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_path<I, S>(mut self, programs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.on_path.extend(programs.into_iter().map(Into::into));
        self
    }

    pub fn reply(self, pattern: &str, replies: impl IntoIterator<Item = Reply>) -> Self {
        self.rules.borrow_mut().push(Rule {
            pattern: pattern.to_string(),
            replies: replies.into_iter().collect(),
        });
        self
    }

    pub fn calls(&self) -> Vec<HarnessCommand> {
        self.calls.borrow().clone()
    }

    /// Rendered command lines containing `pattern`.
    pub fn invocations_of(&self, pattern: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(HarnessCommand::to_shell_command)
            .filter(|line| line.contains(pattern))
            .collect()
    }

    fn answer(&self, command: &HarnessCommand) -> Reply {
        self.calls.borrow_mut().push(command.clone());
        let line = command.to_shell_command();
        let mut rules = self.rules.borrow_mut();
        match rules.iter_mut().find(|rule| line.contains(&rule.pattern)) {
            Some(rule) if rule.replies.len() > 1 => {
                rule.replies.pop_front().unwrap_or(Reply::Exit(0))
            }
            Some(rule) => rule.replies.front().cloned().unwrap_or(Reply::Exit(0)),
            None => Reply::Exit(0),
        }
    }

    fn outcome(&self, reply: Reply, captured: bool) -> Result<ProcessOutcome> {
        let (exit_code, stdout) = match reply {
            Reply::Exit(code) => (code, String::new()),
            Reply::Print { exit_code, stdout } => (exit_code, stdout),
            Reply::NotFound => {
                return Err(Error::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    "program not found",
                )));
            }
        };
        Ok(ProcessOutcome {
            exit_code,
            duration: Duration::ZERO,
            stdout: captured.then_some(stdout),
        })
    }
}

impl ProcessExecutor for ScriptedExecutor {
    fn run(&self, command: &HarnessCommand) -> Result<ProcessOutcome> {
        let reply = self.answer(command);
        self.outcome(reply, false)
    }

    fn capture(&self, command: &HarnessCommand) -> Result<ProcessOutcome> {
        let reply = self.answer(command);
        self.outcome(reply, true)
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.on_path
            .contains(program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replies_advance_then_stick() {
        let exec = ScriptedExecutor::new().reply("jupyter", [Reply::Exit(1), Reply::Exit(0)]);
        let cmd = HarnessCommand::new("jupyter").arg("--version");
        assert_eq!(exec.run(&cmd).unwrap().exit_code, 1);
        assert_eq!(exec.run(&cmd).unwrap().exit_code, 0);
        assert_eq!(exec.run(&cmd).unwrap().exit_code, 0);
        assert_eq!(exec.invocations_of("jupyter").len(), 3);
    }

    #[test]
    fn test_unmatched_commands_succeed_silently() {
        let exec = ScriptedExecutor::new();
        let outcome = exec.capture(&HarnessCommand::new("anything")).unwrap();
        assert!(outcome.success());
        assert_eq!(outcome.stdout.as_deref(), Some(""));
    }

    #[test]
    fn test_not_found_is_io_error() {
        let exec = ScriptedExecutor::new().reply("ctest", [Reply::NotFound]);
        let err = exec.run(&HarnessCommand::new("ctest")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
