//! Line-oriented interactive shell.
//!
//! Reads one command per line from any `BufRead` and writes results to any
//! `Write`, so the same loop drives stdin/stdout and in-memory buffers in
//! tests. Conversion and parse errors are reported as `error: <message>`
//! and never end the loop; only I/O failures do.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::debug;

use crate::config::Settings;
use crate::models::Category;
use crate::parsers::{ShellCommand, parse_command};
use crate::session::Session;
use crate::utils::format_recorded_at;

const HELP_TEXT: &str = "\
Commands:
  categories                       list categories
  use <category>                   select the current category
  units                            list units of the current category
  <value> <from> [to|in|->] <to>   convert in the current category
  add <from> <to> <factor>         define custom units (to = from * factor)
  history [n]                      show the last n conversions
  clear                            clear history
  help                             show this help
  quit | exit                      leave

Quote names that contain spaces: add \"Nautical Mile\" Meter 1852";

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    session: Session,
    category: Category,
    history_display: usize,
    show_prompt: bool,
}

impl Shell {
    pub fn new(settings: &Settings) -> Self {
        Self {
            session: Session::new(settings),
            category: settings.default_category,
            history_display: settings.history_display,
            show_prompt: false,
        }
    }

    /// Print a banner and a `[Category]> ` prompt before each line
    pub fn with_prompt(mut self, show_prompt: bool) -> Self {
        self.show_prompt = show_prompt;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        if self.show_prompt {
            writeln!(output, "Unit converter. Type 'help' for commands.")?;
        }

        let mut lines = input.lines();
        loop {
            if self.show_prompt {
                write!(output, "[{}]> ", self.category)?;
                output.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read shell input")?;

            if self.execute(&line, output)? == Flow::Quit {
                break;
            }
        }

        output.flush().context("Failed to flush shell output")?;
        Ok(())
    }

    /// Execute a single line of input
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                debug!(line, error = %e, "Rejected shell input");
                writeln!(out, "error: {}", e)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            ShellCommand::Empty => {}
            ShellCommand::Quit => return Ok(Flow::Quit),
            ShellCommand::Help => writeln!(out, "{}", HELP_TEXT)?,
            ShellCommand::Categories => self.list_categories(out)?,
            ShellCommand::Use(name) => match Category::from_str(&name) {
                Ok(category) => {
                    self.category = category;
                    writeln!(out, "Category: {}", category)?;
                }
                Err(e) => writeln!(out, "error: {}", e)?,
            },
            ShellCommand::Units => self.list_units(out)?,
            ShellCommand::Convert { value, from, to } => self.convert(value, from, to, out)?,
            ShellCommand::Add { from, to, factor } => {
                match self.session.add_custom_unit(&from, &to, factor) {
                    Ok(()) => writeln!(
                        out,
                        "Added custom unit: {} to {} with factor {}",
                        from.trim(),
                        to.trim(),
                        factor
                    )?,
                    Err(e) => writeln!(out, "error: {}", e)?,
                }
            }
            ShellCommand::History(count) => {
                self.show_history(count.unwrap_or(self.history_display), out)?
            }
            ShellCommand::Clear => {
                self.session.clear_history();
                writeln!(out, "History cleared.")?;
            }
        }

        Ok(Flow::Continue)
    }

    fn list_categories<W: Write>(&self, out: &mut W) -> Result<()> {
        for category in self.session.registry().categories() {
            let marker = if *category == self.category { '*' } else { ' ' };
            writeln!(out, "{} {}", marker, category)?;
        }
        Ok(())
    }

    fn list_units<W: Write>(&self, out: &mut W) -> Result<()> {
        let units = self.session.registry().units(self.category);
        if units.is_empty() {
            writeln!(out, "No units defined. Use 'add <from> <to> <factor>' to create some.")?;
            return Ok(());
        }
        for unit in units {
            writeln!(out, "  {}", unit)?;
        }
        Ok(())
    }

    fn convert<W: Write>(
        &mut self,
        value: f64,
        from: String,
        to: String,
        out: &mut W,
    ) -> Result<()> {
        let from = self.canonical_unit(from);
        let to = self.canonical_unit(to);

        match self.session.convert_and_record(self.category, value, &from, &to) {
            Ok(entry) => writeln!(out, "{}", entry.display)?,
            Err(e) => writeln!(out, "error: {}", e)?,
        }
        Ok(())
    }

    /// Spell a typed unit name the way the current category does, if it matches one
    fn canonical_unit(&self, name: String) -> String {
        self.session
            .registry()
            .resolve_unit(self.category, &name)
            .map(str::to_string)
            .unwrap_or(name)
    }

    fn show_history<W: Write>(&self, count: usize, out: &mut W) -> Result<()> {
        if self.session.history().is_empty() {
            writeln!(out, "No conversions yet.")?;
            return Ok(());
        }

        let entries = self.session.recent(count);
        let now = Utc::now();
        for (i, entry) in entries.iter().enumerate() {
            writeln!(
                out,
                "{:>3}. {} ({})",
                i + 1,
                entry.display,
                format_recorded_at(&entry.recorded_at, &now)
            )?;
        }
        Ok(())
    }
}
