//! Seams that decouple hyprmon from the operating system.
//!
//! The operations never spawn processes, look up the home directory, or
//! listen for requests directly; they go through these traits so tests can
//! substitute a fake filesystem root, a fake process, or an in-memory
//! request stream.

use crate::command::Request;
use std::path::PathBuf;
use std::sync::mpsc;

/// Runs an external program to completion and returns its standard output.
pub trait ProcessRunner {
    /// The error type produced by this runner.
    type Error: std::error::Error + Send + 'static;

    /// Run `program` with `args` and return stdout as text.
    ///
    /// Implementations must return an error, never partial output, when the
    /// program cannot be started, exits unsuccessfully, or prints something
    /// that is not UTF-8.
    fn run(&self, program: &str, args: &[String]) -> Result<String, Self::Error>;
}

/// Error returned when the home directory cannot be determined.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct HomeError(pub String);

/// Resolves the current user's home directory.
pub trait HomeResolver {
    fn home_dir(&self) -> Result<PathBuf, HomeError>;
}

/// A source of [`Request`]s.
///
/// Implementations listen on some transport (a Unix socket, a test
/// harness, …) and forward each decoded request into `sink`.  The receiver
/// answers through [`Request::reply`].
///
/// # Contract
///
/// * [`run`](CommandSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
pub trait CommandSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every incoming [`Request`] into `sink`.
    fn run(&mut self, sink: mpsc::Sender<Request>) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, Response};

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    /// A test double that emits a fixed sequence of commands.
    struct MockSource {
        commands: Vec<Command>,
    }

    impl CommandSource for MockSource {
        type Error = MockError;

        fn run(&mut self, sink: mpsc::Sender<Request>) -> Result<(), MockError> {
            for cmd in self.commands.drain(..) {
                let (req, rx) = Request::new(cmd);
                sink.send(req).map_err(|_| MockError)?;
                rx.recv().map_err(|_| MockError)?;
            }
            Ok(())
        }
    }

    #[test]
    fn mock_source_waits_for_each_reply() {
        let mut src = MockSource {
            commands: vec![Command::ReadMonitors, Command::GetMonitorsJson],
        };
        let (tx, rx) = mpsc::channel::<Request>();
        let answerer = std::thread::spawn(move || {
            let mut seen = Vec::new();
            for req in rx {
                seen.push(req.command.clone());
                let _ = req.reply.send(Response::Ok(String::new()));
            }
            seen
        });
        src.run(tx).unwrap();
        let seen = answerer.join().unwrap();
        assert_eq!(seen, vec![Command::ReadMonitors, Command::GetMonitorsJson]);
    }
}
