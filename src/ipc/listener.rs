//! Unix-socket [`CommandSource`] implementation.
//!
//! Binds a Unix stream socket and serves one connection at a time.  Each
//! line received is parsed as a JSON-encoded [`Command`], forwarded to the
//! main loop, and answered with one line of JSON-encoded [`Response`].
//!
//! # Wire format
//!
//! ```text
//! → "ReadMonitors"
//! ← {"Ok":"monitor=eDP-1,1920x1080@60,0x0,1\n"}
//! → {"WriteMonitorConfig":"monitor=eDP-1,1920x1080@60,0x0,1\n"}
//! ← {"Ok":"Success"}
//! → "GetMonitorsJson"
//! ← {"Err":{"kind":"ExternalProcess","message":"Error: failed to start hyprctl: …"}}
//! → not json
//! ← {"BadRequest":"expected value at line 1 column 1"}
//! ```

use crate::command::{Command, Request, Response};
use crate::traits::CommandSource;
use log::{debug, error, info};
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// A [`CommandSource`] that listens on a Unix stream socket for
/// JSON-encoded commands and writes back JSON-encoded responses.
///
/// Each accepted connection can send multiple newline-delimited commands.
/// When the connection closes, the listener waits for the next one.
pub struct UnixSocketListener {
    path: PathBuf,
}

/// Errors produced by the Unix socket listener.
#[derive(Debug, thiserror::Error)]
pub enum UnixSocketError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a connection stopped being served.
enum Closed {
    /// The client went away; wait for the next one.
    Client,
    /// The main loop is gone; stop listening.
    Sink,
}

impl UnixSocketListener {
    /// Create a new listener bound to `path`.
    ///
    /// The socket file is created when [`run`](CommandSource::run) is called
    /// and removed when the source shuts down.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn serve(stream: UnixStream, sink: &mpsc::Sender<Request>) -> Result<Closed, UnixSocketError> {
        let mut writer = stream.try_clone()?;
        let reader = BufReader::new(stream);

        for line in reader.lines() {
            let text = line?;
            if text.trim().is_empty() {
                continue;
            }
            let response = match serde_json::from_str::<Command>(&text) {
                Ok(cmd) => {
                    let (req, reply) = Request::new(cmd);
                    if sink.send(req).is_err() {
                        return Ok(Closed::Sink);
                    }
                    match reply.recv() {
                        Ok(resp) => resp,
                        Err(_) => return Ok(Closed::Sink),
                    }
                }
                Err(e) => {
                    error!("bad command: {}", e);
                    Response::BadRequest(e.to_string())
                }
            };
            let mut encoded = serde_json::to_vec(&response)?;
            encoded.push(b'\n');
            writer.write_all(&encoded)?;
        }
        Ok(Closed::Client)
    }
}

impl CommandSource for UnixSocketListener {
    type Error = UnixSocketError;

    /// Bind the socket and start accepting connections.
    ///
    /// This method **blocks** until the receiving end of `sink` is dropped.
    /// Run it on a dedicated thread.
    fn run(&mut self, sink: mpsc::Sender<Request>) -> Result<(), Self::Error> {
        // Remove stale socket if present.
        let _ = std::fs::remove_file(&self.path);

        let listener = UnixListener::bind(&self.path)?;
        info!("listening on {}", self.path.display());

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    debug!("client connected");
                    match Self::serve(stream, &sink) {
                        Ok(Closed::Client) => debug!("client disconnected"),
                        Ok(Closed::Sink) => {
                            info!("sink closed, shutting down");
                            break;
                        }
                        Err(e) => error!("connection error: {}", e),
                    }
                }
                Err(e) => {
                    error!("accept error: {}", e);
                }
            }
        }

        let _ = std::fs::remove_file(&self.path);
        Ok(())
    }
}

//  Tests
