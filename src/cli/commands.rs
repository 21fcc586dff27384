use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use super::shell::Shell;
use crate::config::Settings;
use crate::converter::UnitRegistry;
use crate::models::{Category, HistoryEntry};
use crate::utils::init_logging;

#[derive(Parser)]
#[command(name = "unit-converter")]
#[command(version)]
#[command(about = "Convert values between units of length, weight, temperature and more", long_about = None)]
pub struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Decimals to show in results (overrides the settings file)
    #[arg(long, global = true, value_name = "N")]
    pub precision: Option<usize>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a single value and exit
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
        /// Category to convert in (inferred from the units if omitted)
        #[arg(short, long)]
        category: Option<Category>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the unit categories
    Categories,
    /// List the units of a category
    Units { category: Category },
    /// Start the interactive shell (the default)
    Shell,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.precision.is_some() {
        settings.precision = cli.precision;
    }
    debug!(?settings, "Resolved settings");

    match cli.command {
        Some(Commands::Convert { value, from, to, category, json }) => {
            convert_once(&settings, value, &from, &to, category, json)?;
        }
        Some(Commands::Categories) => {
            for category in UnitRegistry::new().categories() {
                println!("{}", category);
            }
        }
        Some(Commands::Units { category }) => {
            let registry = UnitRegistry::new();
            let units = registry.units(category);
            if units.is_empty() {
                println!(
                    "No built-in units in {}; custom units exist only inside a shell session",
                    category
                );
            }
            for unit in units {
                println!("{}", unit);
            }
        }
        Some(Commands::Shell) | None => run_shell(&settings)?,
    }

    Ok(())
}

fn convert_once(
    settings: &Settings,
    value: f64,
    from: &str,
    to: &str,
    category: Option<Category>,
    json: bool,
) -> Result<()> {
    let registry = UnitRegistry::new();
    let Some(category) = category.or_else(|| registry.find_category(from, to)) else {
        bail!("No category contains both '{}' and '{}'", from, to);
    };

    let from = registry.resolve_unit(category, from).unwrap_or(from);
    let to = registry.resolve_unit(category, to).unwrap_or(to);
    let converted = registry.convert(category, value, from, to)?;
    let entry = HistoryEntry::new(category, value, from, converted, to, settings.precision);

    if json {
        let output =
            serde_json::to_string(&entry).context("Failed to serialize conversion result")?;
        println!("{}", output);
    } else {
        println!("{}", entry.display);
    }

    Ok(())
}

fn run_shell(settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();

    Shell::new(settings).with_prompt(interactive).run(stdin.lock(), &mut stdout)
}
