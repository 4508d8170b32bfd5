use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use campus_core::config::Config;
use campus_core::navigation::Role;
use campus_core::seed::role_seed;
use campus_core::state::AppState;
use campus_core::state::SessionSettings;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod ui;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Tui,
    Seed(Role),
    Help,
    Version,
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    command: Command,
    config_path: Option<PathBuf>,
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let invocation = parse_args(env::args().skip(1).collect())?;

    match invocation.command {
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            println!("campus {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Seed(role) => {
            let config = load_config(invocation.config_path)?;
            let seed = role_seed(role, &config.session.reporter_name);
            println!("{}", serde_json::to_string_pretty(&seed)?);
            Ok(())
        }
        Command::Tui => {
            let config = load_config(invocation.config_path)?;
            init_file_logging(&config)?;
            info!(version = env!("CARGO_PKG_VERSION"), "campus desk starting");
            let today = chrono::Local::now().date_naive();
            let state = AppState::new(SessionSettings::from_config(&config), today);
            ui::run(state, &config)
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<Invocation, Box<dyn std::error::Error>> {
    let mut config_path = None;
    let mut positional = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                let Some(value) = args.get(i + 1) else {
                    return Err("--config requires a path".into());
                };
                config_path = Some(PathBuf::from(value));
                i += 2;
            }
            "--help" | "-h" => {
                return Ok(Invocation {
                    command: Command::Help,
                    config_path,
                })
            }
            "--version" | "-V" => {
                return Ok(Invocation {
                    command: Command::Version,
                    config_path,
                })
            }
            other if other.starts_with('-') => {
                return Err(format!("unsupported argument: {other}").into());
            }
            other => {
                positional.push(other.to_string());
                i += 1;
            }
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        None | Some("tui") => Command::Tui,
        Some("help") => Command::Help,
        Some("version") => Command::Version,
        Some("seed") => {
            let Some(raw) = positional.next() else {
                return Err("seed requires a role (student, admin, official, management)".into());
            };
            let role = Role::parse(&raw).ok_or_else(|| format!("unknown role: {raw}"))?;
            Command::Seed(role)
        }
        Some(other) => {
            print_help();
            return Err(format!("unknown command: {other}").into());
        }
    };
    if let Some(extra) = positional.next() {
        return Err(format!("unsupported argument: {extra}").into());
    }

    Ok(Invocation {
        command,
        config_path,
    })
}

fn load_config(explicit: Option<PathBuf>) -> Result<Config, config::ConfigError> {
    let path = config::resolve_config_path(explicit)?;
    config::load_from_path(&path)
}

/// The TUI owns stdout, so tracing goes to a file.
fn init_file_logging(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let log_path = config::log_file_path(config);
    ensure_parent_dir(&log_path)?;
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_level = config.log.level.clone();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::sync::Mutex::new(log_file))
        .try_init()
        .map_err(|err| format!("failed to install log subscriber: {err}"))?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn print_help() {
    println!("campus {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  campus [tui] [--config PATH]");
    println!("  campus seed <student|admin|official|management> [--config PATH]");
    println!("  campus --help");
    println!("  campus --version");
}
