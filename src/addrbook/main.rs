use addrbook::api::AddressBookApi;
use addrbook::config::AppConfig;
use addrbook::error::{AddrBookError, Result};
use addrbook::storage::fs::JsonFileStorage;
use clap::Parser;
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::Cli;
use cli::Shell;

const HOME_ENV: &str = "ADDRBOOK_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let home = resolve_home(
        std::env::var_os(HOME_ENV),
        ProjectDirs::from("com", "addrbook", "addrbook"),
    )?;
    let config = AppConfig::load(&home)?;
    debug!(home = %home.display(), ?config, "configuration loaded");

    let data_path = match &cli.file {
        Some(path) => path.clone(),
        None => config.data_path(&home),
    };
    if cli.show_config {
        cli::print_config(&config, &home, &data_path);
    }

    let storage = JsonFileStorage::new(data_path)?;
    let api = AddressBookApi::open(storage)?;
    info!(location = %api.location(), "address book opened");

    let mut shell = Shell::new(api, config.mask_private);
    if cli.commands.is_empty() {
        shell.run_interactive(std::io::stdin().lock())
    } else {
        shell.run_commands(&cli.commands)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// `$ADDRBOOK_HOME` when set and non-empty, else the platform data directory.
fn resolve_home(env_home: Option<OsString>, dirs: Option<ProjectDirs>) -> Result<PathBuf> {
    if let Some(home) = env_home.filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    dirs.map(|dirs| dirs.data_dir().to_path_buf()).ok_or_else(|| {
        AddrBookError::Config(format!(
            "could not determine a home directory; set {}",
            HOME_ENV
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_home_wins() {
        let home = resolve_home(Some(OsString::from("/tmp/book")), None).unwrap();
        assert_eq!(home, PathBuf::from("/tmp/book"));
    }

    #[test]
    fn missing_home_is_a_config_error() {
        let err = resolve_home(Some(OsString::new()), None).unwrap_err();
        assert!(matches!(err, AddrBookError::Config(_)));
        assert!(err.to_string().contains(HOME_ENV));
    }
}
