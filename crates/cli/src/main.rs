use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docubuilder_router::{Resolution, RouteParams, Router};
use docubuilder_tui::ShellOptions;
use docubuilder_util::{AppConfig, default_config_path, default_log_path, expand_tilde};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

/// DocuBuilder navigation shell. Without a subcommand the terminal UI starts.
#[derive(Parser, Debug)]
#[command(name = "docubuilder", version, about)]
struct Cli {
    /// Path to open on start, e.g. `/documents` or `/editor/42`
    #[arg(long, global = true)]
    path: Option<String>,

    /// Theme id (docubuilder, docubuilder_dark, ansi256)
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Configuration file to read instead of the default location
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print the route table
    Routes,
    /// Print the page a path resolves to
    Resolve {
        path: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        init_file_tracing();
        let options = shell_options(cli.path, cli.theme, cli.config.as_deref());
        return docubuilder_tui::run(options).await;
    };

    init_stderr_tracing();
    let router = Router::new().context("invalid route table")?;
    match command {
        Command::Routes => {
            for line in route_lines(&router) {
                println!("{line}");
            }
        }
        Command::Resolve { path, json } => {
            let resolution = router.resolve(&path);
            if json {
                println!("{}", serde_json::to_string_pretty(&resolution_json(&resolution))?);
            } else {
                println!("{}", resolution_text(&resolution));
            }
        }
    }
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Subcommands write plain output to stdout, so logs go to stderr.
fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// The terminal UI owns the screen; logs go to a file instead.
fn init_file_tracing() {
    let path = default_log_path();
    match open_log_file(&path) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        Err(error) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::sink)
                .try_init();
            eprintln!("logging disabled: {error:#}");
        }
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))
}

/// Merges the config file with flags; flags win.
fn shell_options(path: Option<String>, theme: Option<String>, config: Option<&str>) -> ShellOptions {
    let config_path = config.map(expand_tilde).unwrap_or_else(default_config_path);
    let config = AppConfig::load_or_default(&config_path).merged_with(path, theme);
    tracing::debug!(config = %config_path.display(), ?config, "configuration loaded");

    let defaults = ShellOptions::default();
    ShellOptions {
        start_path: config.start_path.unwrap_or(defaults.start_path),
        theme: config.theme.or(defaults.theme),
    }
}

fn route_lines(router: &Router) -> Vec<String> {
    let params = RouteParams::default();
    router
        .table()
        .routes()
        .iter()
        .map(|route| {
            let page = route.page(&params);
            format!("{:<24} {:<12} {}", route.pattern().as_str(), page.kind(), page.heading())
        })
        .collect()
}

fn resolution_text(resolution: &Resolution) -> String {
    let pattern = resolution.pattern.as_deref().unwrap_or("-");
    format!(
        "{} -> {} ({}) via {pattern}",
        resolution.path,
        resolution.page.kind(),
        resolution.page.heading()
    )
}

fn resolution_json(resolution: &Resolution) -> Value {
    json!({
        "path": resolution.path.as_str(),
        "pattern": resolution.pattern,
        "page": resolution.page,
        "heading": resolution.page.heading(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parses_tui_flags_without_subcommand() {
        let cli = Cli::try_parse_from(["docubuilder", "--path", "/documents", "--theme", "dark"]).expect("parse");
        assert_eq!(cli.command, None);
        assert_eq!(cli.path.as_deref(), Some("/documents"));
        assert_eq!(cli.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn parses_resolve_subcommand() {
        let cli = Cli::try_parse_from(["docubuilder", "resolve", "/editor/42", "--json"]).expect("parse");
        assert_eq!(
            cli.command,
            Some(Command::Resolve {
                path: "/editor/42".into(),
                json: true
            })
        );
    }

    #[test]
    fn route_listing_covers_every_route() {
        let router = Router::new().expect("route table");
        let lines = route_lines(&router);
        assert_eq!(lines.len(), router.table().len());
        assert!(lines.iter().any(|line| line.starts_with("/documents ")));
        assert!(lines.iter().any(|line| line.contains("Einstellungen")));
    }

    #[test]
    fn resolution_json_tags_the_page() {
        let router = Router::new().expect("route table");
        let value = resolution_json(&router.resolve("/editor/42?x=1"));
        assert_eq!(value["path"], "/editor/42");
        assert_eq!(value["page"]["page"], "editor");
        assert_eq!(value["page"]["id"], "42");
        assert_eq!(value["heading"], "Dokument 42");

        let missing = resolution_json(&router.resolve("/nope"));
        assert_eq!(missing["pattern"], Value::Null);
        assert_eq!(missing["page"]["page"], "not_found");
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{ "start_path": "/documents", "theme": "docubuilder_dark" }}"#).expect("write");

        let options = shell_options(Some("/contacts".into()), None, file.path().to_str());
        assert_eq!(options.start_path, "/contacts");
        assert_eq!(options.theme.as_deref(), Some("docubuilder_dark"));
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("config.json");
        let options = shell_options(None, None, missing.to_str());
        assert_eq!(options.start_path, "/");
        assert_eq!(options.theme, None);
    }
}
