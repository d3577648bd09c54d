//! [`ProcessRunner`] backed by real child processes.
//!
//! Used to invoke `hyprctl`, but nothing here is specific to it: any
//! program that prints its answer on stdout works.

use crate::traits::ProcessRunner;
use log::debug;
use std::process::Command;

/// Runs programs with [`std::process::Command`].
///
/// Stdin is closed, stdout is captured, stderr is captured and only used
/// to describe a failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

/// Errors that can occur while running an external program.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}{}", stderr_suffix(.stderr))]
    Status {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("{program} printed invalid utf-8: {source}")]
    Utf8 {
        program: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    type Error = RunError;

    fn run(&self, program: &str, args: &[String]) -> Result<String, RunError> {
        debug!("running {} {:?}", program, args);
        let output = Command::new(program)
            .args(args)
            .stdin(std::process::Stdio::null())
            .output()
            .map_err(|source| RunError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(RunError::Status {
                program: program.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|source| RunError::Utf8 {
            program: program.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".into(), script.into()]
    }

    #[test]
    fn captures_stdout_verbatim() {
        let out = SystemRunner::new()
            .run("sh", &sh("printf '  a\\n\\tb  \\n'"))
            .unwrap();
        assert_eq!(out, "  a\n\tb  \n");
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = SystemRunner::new()
            .run("hyprmon-definitely-not-installed", &[])
            .unwrap_err();
        assert!(matches!(err, RunError::Spawn { .. }));
    }

    #[test]
    fn nonzero_exit_discards_stdout() {
        let err = SystemRunner::new()
            .run("sh", &sh("printf '[{\"name\":'; echo oops >&2; exit 3"))
            .unwrap_err();
        match err {
            RunError::Status { stderr, .. } => assert_eq!(stderr.trim(), "oops"),
            other => panic!("unexpected error: {other}"),
        }
        let msg = SystemRunner::new()
            .run("sh", &sh("exit 3"))
            .unwrap_err()
            .to_string();
        assert!(msg.starts_with("sh exited with"));
        assert!(!msg.contains("[{"));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = SystemRunner::new()
            .run("sh", &sh("printf '\\377\\376'"))
            .unwrap_err();
        assert!(matches!(err, RunError::Utf8 { .. }));
    }
}
