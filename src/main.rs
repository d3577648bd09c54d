//! Entry point for the **hyprmon** backend.
//!
//! ```text
//! hyprmon [--legacy] [serve | monitors | read | write | greet <name>]
//! ```
//!
//! `serve` (the default) listens on a Unix socket and processes requests on
//! the main thread, one at a time.  The other subcommands run a single
//! operation; `write` takes the new layout from stdin.
//!
//! With `--legacy` every outcome is printed to stdout as one string whose
//! prefix tells success from failure, and the exit status is always 0.

use hyprmon::app::App;
use hyprmon::command::{Command, Request, Response};
use hyprmon::config::Config;
use hyprmon::home::EnvHome;
use hyprmon::hyprland::hyprctl::SystemRunner;
use hyprmon::hyprland::monitors::MonitorQuery;
use hyprmon::ipc::listener::UnixSocketListener;
use hyprmon::monitors_conf::MonitorsConf;
use hyprmon::traits::CommandSource;
use log::{error, info};
use std::io::Read;
use std::path::PathBuf;
use std::sync::mpsc;

type SystemApp = App<SystemRunner, EnvHome>;

/// Default socket path for the command listener.
fn default_socket_path() -> PathBuf {
    let runtime = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(runtime).join("hyprmon.sock")
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/hyprmon`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("hyprmon")
}

/// Try to load the config from `$XDG_CONFIG_HOME/hyprmon/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

fn build_app(config: &Config) -> SystemApp {
    App::new(
        MonitorQuery::new(SystemRunner::new(), config.monitors_command.clone()),
        MonitorsConf::with_path(EnvHome, config.config_file.clone(), config.file_mode),
    )
}

fn usage() -> ! {
    eprintln!("usage: hyprmon [--legacy] [serve | monitors | read | write | greet <name>]");
    std::process::exit(2);
}

//  Main

fn main() {
    env_logger::init();

    let mut legacy = false;
    let mut rest = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--legacy" {
            legacy = true;
        } else {
            rest.push(arg);
        }
    }

    let config = load_config();
    let app = build_app(&config);

    let command = match rest.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["serve"] => {
            let path = config.socket_path.clone().unwrap_or_else(default_socket_path);
            run_service(app, path);
            return;
        }
        ["monitors"] => Command::GetMonitorsJson,
        ["read"] => Command::ReadMonitors,
        ["write"] => {
            let mut content = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut content) {
                error!("failed to read stdin: {}", e);
                std::process::exit(1);
            }
            Command::WriteMonitorConfig(content)
        }
        ["greet", name] => Command::Greet(name.to_string()),
        _ => usage(),
    };

    run_once(&app, command, legacy);
}

/// Execute a single command and report it on stdout/stderr.
fn run_once(app: &SystemApp, command: Command, legacy: bool) {
    let response = app.handle(command);
    if legacy {
        print!("{}", response.into_legacy());
        return;
    }
    match response {
        Response::Ok(text) => print!("{}", text),
        other => {
            eprintln!("{}", other.into_legacy());
            std::process::exit(1);
        }
    }
}

/// Serve requests from the Unix socket until the listener stops.
fn run_service(app: SystemApp, socket: PathBuf) {
    let (req_tx, req_rx) = mpsc::channel::<Request>();
    spawn_command_sources(req_tx, socket);

    info!("hyprmon running");
    for req in req_rx {
        let response = app.handle(req.command);
        if req.reply.send(response).is_err() {
            error!("client went away before the reply was sent");
        }
    }
    info!("all command sources closed, exiting");
}

//  Helpers

fn spawn_command_sources(tx: mpsc::Sender<Request>, socket: PathBuf) {
    std::thread::spawn(move || {
        let mut source = UnixSocketListener::new(&socket);
        if let Err(e) = source.run(tx) {
            error!("socket listener error: {}", e);
        }
    });
}
