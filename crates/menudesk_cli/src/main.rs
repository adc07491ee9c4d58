//! `menudesk` process entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Initialize logging and the database before accepting requests.
//! - Serve the REST API until Ctrl-C.

use clap::{Parser, Subcommand};
use log::{error, info};
use menudesk_core::db::open_db;
use menudesk_core::{core_version, default_log_level, init_logging};
use menudesk_server::{run_server, ServerConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "menudesk", version, about = "Hierarchical menu management service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// SQLite database file
    #[arg(long, env = "MENUDESK_DB_PATH", default_value = "menudesk.sqlite3", global = true)]
    db_path: PathBuf,

    /// Listen address
    #[arg(long, env = "MENUDESK_HOST", default_value = "0.0.0.0", global = true)]
    host: String,

    /// Listen port
    #[arg(long, env = "PORT", default_value_t = 8080, global = true)]
    port: u16,

    /// trace|debug|info|warn|error
    #[arg(long, env = "MENUDESK_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Log directory; relative paths resolve against the working directory
    #[arg(long, env = "MENUDESK_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the REST API (default)
    Serve,
    /// Print the core version
    Version,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        ServerConfig::new(self.host.clone(), self.port, self.db_path.clone())
    }

    fn resolved_log_dir(&self) -> Result<PathBuf, String> {
        let cwd = std::env::current_dir()
            .map_err(|err| format!("cannot resolve working directory: {err}"))?;
        Ok(match self.log_dir.as_deref() {
            Some(dir) => absolutize(&cwd, dir),
            None => cwd.join("logs"),
        })
    }
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Version) => {
            println!("menudesk {}", core_version());
            ExitCode::SUCCESS
        }
        Some(Command::Serve) | None => match serve(&cli).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(message) => {
                eprintln!("menudesk: {message}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn serve(cli: &Cli) -> Result<(), String> {
    let log_dir = cli.resolved_log_dir()?;
    let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
    let log_dir_text = log_dir
        .to_str()
        .ok_or_else(|| format!("log directory `{}` is not valid UTF-8", log_dir.display()))?;
    init_logging(level, log_dir_text)?;

    let config = cli.server_config();
    // Schema must be current before the listener binds.
    open_db(&config.db_path).map_err(|err| {
        error!(
            "event=db_init module=cli status=error db_path={} error={}",
            config.db_path.display(),
            err
        );
        format!("failed to open `{}`: {err}", config.db_path.display())
    })?;
    info!(
        "event=db_init module=cli status=ok db_path={}",
        config.db_path.display()
    );

    run_server(config).await.map_err(|err| {
        error!("event=server_run module=cli status=error error={}", err);
        format!("server failed: {err}")
    })
}

#[cfg(test)]
mod tests {
    use super::{absolutize, Cli, Command};
    use clap::{CommandFactory, Parser};
    use std::path::{Path, PathBuf};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_parse_into_server_config() {
        let cli = Cli::try_parse_from([
            "menudesk",
            "--db-path",
            "/tmp/menus.sqlite3",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "serve",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Command::Serve)));
        let config = cli.server_config();
        assert_eq!(config.db_path, PathBuf::from("/tmp/menus.sqlite3"));
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn version_subcommand_parses() {
        let cli = Cli::try_parse_from(["menudesk", "version"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Version)));
    }

    #[test]
    fn absolutize_keeps_absolute_and_joins_relative() {
        let base = Path::new("/srv/menudesk");
        assert_eq!(
            absolutize(base, Path::new("/var/log/menudesk")),
            PathBuf::from("/var/log/menudesk")
        );
        assert_eq!(
            absolutize(base, Path::new("logs")),
            PathBuf::from("/srv/menudesk/logs")
        );
    }
}
