use std::env;
use std::process::Command;

use log::{debug, warn};

use crate::error::{RandrError, Result};

/// Name the compiled commands start with
pub const XRANDR: &str = "xrandr";

/// Runs a command line and hands back its output, one entry per line.
///
/// Standard output comes first, followed by standard error. Lines are not
/// interleaved in the order the tool wrote them.
pub trait CommandExecutor {
    fn execute(&self, args: &[String]) -> Result<Vec<String>>;
}

impl<F> CommandExecutor for F
where
    F: Fn(&[String]) -> Result<Vec<String>>,
{
    fn execute(&self, args: &[String]) -> Result<Vec<String>> {
        self(args)
    }
}

/// Executes commands as a child process and waits for it to finish.
#[derive(Debug, Clone)]
pub struct XrandrExecutor {
    program: String,
}

impl Default for XrandrExecutor {
    fn default() -> Self {
        XrandrExecutor::new()
    }
}

impl XrandrExecutor {
    pub fn new() -> XrandrExecutor {
        XrandrExecutor {
            program: XRANDR.to_string(),
        }
    }

    /// Run `program` in place of a leading `xrandr` argument
    pub fn with_program(program: impl Into<String>) -> XrandrExecutor {
        XrandrExecutor {
            program: program.into(),
        }
    }

    /// Honours `XRANDR` if set, otherwise falls back to `xrandr` from `PATH`
    pub fn from_env() -> XrandrExecutor {
        match env::var("XRANDR") {
            Ok(program) if !program.is_empty() => XrandrExecutor::with_program(program),
            _ => XrandrExecutor::new(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl CommandExecutor for XrandrExecutor {
    fn execute(&self, args: &[String]) -> Result<Vec<String>> {
        let (first, rest) = args
            .split_first()
            .ok_or_else(|| RandrError::InvalidArgument("empty command line".into()))?;
        let program = if first == XRANDR { &self.program } else { first };
        debug!("running {} {}", program, rest.join(" "));

        let output = Command::new(program)
            .args(rest)
            .output()
            .map_err(|source| RandrError::Spawn {
                program: program.clone(),
                source,
            })?;

        let mut lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(String::from)
            .collect();
        lines.extend(String::from_utf8_lossy(&output.stderr).lines().map(String::from));

        if !output.status.success() {
            warn!("{program} exited with {}", output.status);
            return Err(RandrError::ExternalTool {
                command: args.to_vec(),
                status: output.status.to_string(),
                output: lines,
            });
        }
        Ok(lines)
    }
}
