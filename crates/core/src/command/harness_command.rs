use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};

/// One external program invocation: the test tool, the interpreter, an
/// installer. Rendered for logs with [`HarnessCommand::to_shell_command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Text written to the child's stdin before waiting on it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdin: Option<String>,
}

impl HarnessCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: None,
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

    pub fn with_stdin(mut self, input: String) -> Self {
        self.stdin = Some(input);
        self
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = quote(&self.program);
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&quote(arg));
        }
        cmd
    }

    fn build(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Run with inherited stdout/stderr so the tool's own output streams inline.
    pub fn execute(&self) -> io::Result<ExitStatus> {
        let mut cmd = self.build();
        match self.stdin {
            Some(ref input) => {
                let child = cmd.stdin(Stdio::piped()).spawn()?;
                feed_and_wait(child, input)
            }
            None => cmd.status(),
        }
    }

    /// Run with stdout captured; stderr still goes to the terminal.
    pub fn execute_captured(&self) -> io::Result<(ExitStatus, String)> {
        let mut cmd = self.build();
        cmd.stdout(Stdio::piped());
        if self.stdin.is_some() {
            cmd.stdin(Stdio::piped());
        } else {
            cmd.stdin(Stdio::null());
        }

        let mut child = cmd.spawn()?;
        let written = match (self.stdin.as_ref(), child.stdin.take()) {
            (Some(input), Some(pipe)) => write_input(pipe, input),
            _ => Ok(()),
        };
        // Reap the child even when its input could not be delivered.
        let output = child.wait_with_output()?;
        written?;
        Ok((
            output.status,
            String::from_utf8_lossy(&output.stdout).into_owned(),
        ))
    }
}

fn feed_and_wait(mut child: Child, input: &str) -> io::Result<ExitStatus> {
    let written = match child.stdin.take() {
        Some(pipe) => write_input(pipe, input),
        None => Ok(()),
    };
    let status = child.wait()?;
    written.map(|()| status)
}

/// Writes and closes the child's stdin. A child that exits without reading
/// its input is not a write failure.
fn write_input(mut pipe: ChildStdin, input: &str) -> io::Result<()> {
    match pipe.write_all(input.as_bytes()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.contains(|c: char| c.is_whitespace() || c == '|' || c == ';') {
        format!("'{arg}'")
    } else {
        arg.to_string()
    }
}
