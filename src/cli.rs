//! Command-line entry points.
//!
//! Without a subcommand the terminal UI starts. The subcommands run one
//! screen operation and print the result, which is handy for scripting and
//! for checking navigation links by hand.

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::logging::{init_tracing, LogTarget};
use crate::shell::{CommandQueue, NavigationRequest, Route};
use crate::ui::catalog::CatalogScreen;
use crate::ui::detail::DetailScreen;
use crate::ui::{self, App};

#[derive(Debug, Parser)]
#[command(name = "herbal-catalog", version, about = "Browse a small catalog of herbs")]
pub struct Cli {
    /// Config file [default: <config dir>/herbal-catalog/config.toml]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// TOML catalog replacing the builtin herbs
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print every catalog entry
    List,
    /// Print the navigation URL that selecting an entry produces
    Link {
        /// Entry id
        id: u32,
    },
    /// Open a navigation URL on the detail screen and print what it shows
    Open {
        /// e.g. /pages/detail?data=%7B...%7D
        url: String,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) if !path.exists() => bail!("Config file '{}' not found", path.display()),
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let target = match cli.command {
        None => LogTarget::File(config.log_path()),
        Some(_) => LogTarget::Stderr,
    };
    init_tracing(&config.logging.filter, target)?;

    let catalog = match cli.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    match cli.command {
        None => {
            let mut app = App::new(catalog, config.ui.show_footer);
            ui::run(&mut app, Duration::from_millis(config.ui.tick_rate_ms))
                .context("Terminal UI failed")
        }
        Some(command) => execute(&command, catalog, &mut io::stdout().lock()),
    }
}

/// Runs a subcommand against `catalog`, writing its report to `out`.
pub fn execute(command: &Command, catalog: Catalog, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::List => {
            for entry in &catalog {
                writeln!(out, "{}. {}  {}", entry.id, entry.name, entry.desc)?;
            }
        }
        Command::Link { id } => {
            let screen = CatalogScreen::new(catalog);
            let entry = screen
                .catalog()
                .get(*id)
                .ok_or_else(|| anyhow!("No catalog entry with id {id}"))?;

            let mut shell = CommandQueue::new();
            screen.select_entry(entry, &mut shell)?;
            let request = shell
                .last_navigation()
                .context("Selection produced no navigation")?;
            writeln!(out, "{}", request.to_url())?;
        }
        Command::Open { url } => {
            let request = NavigationRequest::parse(url)?;
            if request.route != Route::Detail {
                bail!("'{url}' does not open the detail page");
            }

            let mut screen = DetailScreen::new();
            let mut shell = CommandQueue::new();
            screen.on_activate(&request.params, &mut shell)?;

            match screen.state().entry() {
                Some(entry) => {
                    let title = shell.last_title().unwrap_or(entry.name.as_str());
                    writeln!(out, "{title}")?;
                    writeln!(out, "{}", entry.desc)?;
                    writeln!(out, "Image: {}", entry.image)?;
                    writeln!(out)?;
                    writeln!(out, "{}", entry.detail)?;
                }
                None => writeln!(out, "(no entry)")?,
            }
        }
    }
    Ok(())
}
