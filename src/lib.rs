//! **hyprmon** — backend for viewing and editing the Hyprland monitor
//! layout.
//!
//! Three operations are exposed to a frontend: list the connected monitors
//! (raw JSON from `hyprctl monitors -j`), read
//! `~/.config/hypr/monitors.conf`, and replace that file.  Neither the JSON
//! nor the file is ever parsed; both are passed through as text.
//!
//! # Architecture
//!
//! The operations depend on three seams in [`traits`]:
//!
//! * [`traits::ProcessRunner`] — runs the monitor-listing tool.
//! * [`traits::HomeResolver`] — locates the user's home directory.
//! * [`traits::CommandSource`] — delivers frontend requests to the main
//!   loop.
//!
//! [`app::App`] combines [`hyprland::monitors::MonitorQuery`] and
//! [`monitors_conf::MonitorsConf`] and answers [`command::Command`]s.
//! Failures are reported as [`error::Error`], whose `Display` output is the
//! legacy prefixed string (`"Error: …"`, `"Failed to write file: …"`).

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod home;
pub mod hyprland;
pub mod ipc;
pub mod monitors_conf;
pub mod traits;
