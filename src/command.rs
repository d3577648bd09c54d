//! Requests and responses exchanged with a frontend.
//!
//! [`Command`] describes every operation the backend can perform and
//! [`Response`] carries its outcome.  Both use serde's externally tagged
//! representation so they read naturally as JSON:
//!
//! ```json
//! "GetMonitorsJson"
//! "ReadMonitors"
//! {"WriteMonitorConfig":"monitor=eDP-1,1920x1080@60,0x0,1"}
//! {"Greet":"Ada"}
//! ```

use crate::error::{Error, ErrorKind};
use serde::{Deserialize, Serialize};
use std::sync::mpsc;

/// Every operation exposed to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Greeting stub.
    Greet(String),

    /// List connected monitors as raw JSON from the compositor tool.
    GetMonitorsJson,

    /// Return the monitor-layout configuration file verbatim.
    ReadMonitors,

    /// Replace the monitor-layout configuration file with the given text.
    WriteMonitorConfig(String),
}

/// Outcome of a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// The operation succeeded.  The payload is the operation's text
    /// result (`"Success"` for writes).
    Ok(String),

    /// The operation failed.  `message` is the legacy error string, which
    /// always starts with the category's prefix.
    Err { kind: ErrorKind, message: String },

    /// The request could not be decoded.
    BadRequest(String),
}

impl Response {
    /// Flatten into the single-string contract where success and failure
    /// are told apart only by the text itself.
    pub fn into_legacy(self) -> String {
        match self {
            Response::Ok(text) => text,
            Response::Err { message, .. } => message,
            Response::BadRequest(reason) => format!("Error: {}", reason),
        }
    }
}

impl From<Result<String, Error>> for Response {
    fn from(result: Result<String, Error>) -> Self {
        match result {
            Ok(text) => Response::Ok(text),
            Err(e) => Response::Err {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

/// A command paired with the channel its [`Response`] must be sent on.
///
/// [`CommandSource`](crate::traits::CommandSource)s hand these to the main
/// loop, which executes them one at a time.
#[derive(Debug)]
pub struct Request {
    pub command: Command,
    pub reply: mpsc::Sender<Response>,
}

impl Request {
    /// Build a request together with the receiver for its reply.
    pub fn new(command: Command) -> (Self, mpsc::Receiver<Response>) {
        let (reply, rx) = mpsc::channel();
        (Self { command, reply }, rx)
    }
}
