//! Live monitor listing.

use crate::error::Error;
use crate::traits::ProcessRunner;
use serde::{Deserialize, Serialize};

/// Program and arguments used to list monitors.
///
/// Defaults to `hyprctl monitors -j`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for MonitorCommand {
    fn default() -> Self {
        Self {
            program: "hyprctl".into(),
            args: vec!["monitors".into(), "-j".into()],
        }
    }
}

/// Queries the compositor for its connected monitors.
///
/// The output is passed through untouched: it is neither parsed nor
/// trimmed.
pub struct MonitorQuery<R: ProcessRunner> {
    runner: R,
    command: MonitorCommand,
}

impl<R: ProcessRunner> MonitorQuery<R> {
    pub fn new(runner: R, command: MonitorCommand) -> Self {
        Self { runner, command }
    }

    /// Run the listing tool once and return its stdout.
    pub fn monitors_json(&self) -> Result<String, Error> {
        self.runner
            .run(&self.command.program, &self.command.args)
            .map_err(|e| Error::ExternalProcess(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::hyprland::hyprctl::SystemRunner;
    use std::cell::RefCell;

    /// Records invocations and replies with a canned result.
    struct FakeRunner {
        reply: Result<String, String>,
        calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct FakeError(String);

    impl ProcessRunner for FakeRunner {
        type Error = FakeError;

        fn run(&self, program: &str, args: &[String]) -> Result<String, FakeError> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec()));
            self.reply.clone().map_err(FakeError)
        }
    }

    #[test]
    fn default_command_is_hyprctl_monitors_json() {
        let runner = FakeRunner {
            reply: Ok("[]".into()),
            calls: RefCell::new(Vec::new()),
        };
        let query = MonitorQuery::new(runner, MonitorCommand::default());
        assert_eq!(query.monitors_json().unwrap(), "[]");
        let calls = query.runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "hyprctl");
        assert_eq!(calls[0].1, vec!["monitors".to_string(), "-j".to_string()]);
    }

    #[test]
    fn runner_failure_becomes_external_process_error() {
        let runner = FakeRunner {
            reply: Err("exit status 1".into()),
            calls: RefCell::new(Vec::new()),
        };
        let err = MonitorQuery::new(runner, MonitorCommand::default())
            .monitors_json()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExternalProcess);
        assert_eq!(err.to_string(), "Error: exit status 1");
    }

    #[test]
    fn stub_tool_output_is_returned_exactly() {
        let command = MonitorCommand {
            program: "sh".into(),
            args: vec!["-c".into(), r#"printf '%s' '[{"name":"eDP-1"}]'"#.into()],
        };
        let json = MonitorQuery::new(SystemRunner::new(), command)
            .monitors_json()
            .unwrap();
        assert_eq!(json, r#"[{"name":"eDP-1"}]"#);
    }

    #[test]
    fn absent_tool_reports_error_prefix() {
        let command = MonitorCommand {
            program: "hyprmon-missing-hyprctl".into(),
            args: vec!["monitors".into(), "-j".into()],
        };
        let err = MonitorQuery::new(SystemRunner::new(), command)
            .monitors_json()
            .unwrap_err();
        assert!(err.to_string().starts_with("Error: "));
    }
}
