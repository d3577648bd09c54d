//! The backend that ties monitor listing and the layout file together.
//!
//! [`App`] owns a [`MonitorQuery`] and a [`MonitorsConf`] and answers
//! [`Command`]s with [`Response`]s.  It is generic over the process runner
//! and the home resolver, so it can run against a fake home and a stub tool
//! as easily as against the real system.

use crate::command::{Command, Response};
use crate::error::Error;
use crate::hyprland::monitors::MonitorQuery;
use crate::monitors_conf::MonitorsConf;
use crate::traits::{HomeResolver, ProcessRunner};
use log::{debug, warn};

/// Frontend-facing operations.
///
/// # Typical usage
///
/// ```ignore
/// let app = App::new(
///     MonitorQuery::new(SystemRunner::new(), MonitorCommand::default()),
///     MonitorsConf::new(EnvHome),
/// );
/// let layout = app.read_monitors()?;
/// ```
pub struct App<R: ProcessRunner, H: HomeResolver> {
    monitors: MonitorQuery<R>,
    conf: MonitorsConf<H>,
}

impl<R: ProcessRunner, H: HomeResolver> App<R, H> {
    pub fn new(monitors: MonitorQuery<R>, conf: MonitorsConf<H>) -> Self {
        Self { monitors, conf }
    }

    /// Greeting stub kept for frontend compatibility.
    pub fn greet(&self, name: &str) -> String {
        format!("{}, I TOLD YOU... NOT TO DO IT", name)
    }

    /// Raw JSON describing the connected monitors.
    pub fn monitors_json(&self) -> Result<String, Error> {
        self.monitors.monitors_json()
    }

    /// Current content of the monitor-layout file.
    pub fn read_monitors(&self) -> Result<String, Error> {
        self.conf.read()
    }

    /// Replace the monitor-layout file.  Returns `"Success"`.
    pub fn write_monitor_config(&self, content: &str) -> Result<String, Error> {
        self.conf.write(content)?;
        Ok("Success".to_string())
    }

    /// Execute one command.
    pub fn handle(&self, cmd: Command) -> Response {
        debug!("handling {:?}", CommandSummary(&cmd));
        let result = match cmd {
            Command::Greet(name) => Ok(self.greet(&name)),
            Command::GetMonitorsJson => self.monitors_json(),
            Command::ReadMonitors => self.read_monitors(),
            Command::WriteMonitorConfig(content) => self.write_monitor_config(&content),
        };
        if let Err(ref e) = result {
            warn!("{:?} failed: {}", e.kind(), e);
        }
        Response::from(result)
    }
}

/// Debug view of a command that omits file content.
struct CommandSummary<'a>(&'a Command);

impl std::fmt::Debug for CommandSummary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Command::WriteMonitorConfig(content) => {
                write!(f, "WriteMonitorConfig({} bytes)", content.len())
            }
            other => write!(f, "{:?}", other),
        }
    }
}
