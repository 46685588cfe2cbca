use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, ClientConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Parser)]
#[command(name = "edumate")]
#[command(about = "Desktop client for the EduMate quiz and tutor backend")]
struct Cli {
    /// Origin the client pretends to be served from (drives API base resolution)
    #[arg(long, global = true)]
    origin: Option<String>,

    /// Explicit API base, bypassing origin-based resolution
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// SQLite URL or path for the persisted session identity
    #[arg(long, global = true)]
    db: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    /// Launch the desktop window (default)
    Ui,
    /// Forget the stored username
    Logout,
    /// Print the stored username
    Whoami,
}

#[derive(Debug, thiserror::Error)]
enum ArgsError {
    #[error("invalid --db value: {raw}")]
    InvalidDbUrl { raw: String },
}

impl Cli {
    fn config(&self) -> ClientConfig {
        let config = ClientConfig::from_env()
            .with_origin(self.origin.clone())
            .with_api_base(self.api_base.clone());
        let db_url = self
            .db
            .clone()
            .map(normalize_sqlite_url)
            .unwrap_or_else(|| normalize_sqlite_url(config.db_url.clone()));
        config.with_db_url(Some(db_url))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.config();
    prepare_sqlite_file(&config.db_url)?;
    let services = AppServices::connect(&config).await?;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(services);
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("EduMate")
                    .with_always_on_top(false),
            );

            info!("launching desktop window");
            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Logout => {
            services.auth().logout().await?;
            println!("Logged out.");
            Ok(())
        }
        Command::Whoami => {
            match services.session().get().await? {
                Some(name) => println!("{name}"),
                None => println!("Not logged in."),
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment_defaults() {
        let cli = Cli::parse_from([
            "edumate",
            "--api-base",
            "http://10.0.0.2:9000",
            "--db",
            "sqlite::memory:",
            "whoami",
        ]);
        let config = cli.config();
        assert_eq!(cli.command, Some(Command::Whoami));
        assert_eq!(config.api_base_override.as_deref(), Some("http://10.0.0.2:9000"));
        assert_eq!(config.db_url, "sqlite::memory:");
    }

    #[test]
    fn relative_db_path_becomes_absolute_url() {
        let url = normalize_sqlite_url("data/edumate.sqlite3".to_string());
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("data/edumate.sqlite3"));
    }
}
