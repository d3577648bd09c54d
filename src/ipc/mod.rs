//! IPC listener that serves the backend over a Unix socket.
//!
//! A frontend connects to the socket, sends newline-delimited JSON
//! commands and reads one JSON response line per command.

pub mod listener;
