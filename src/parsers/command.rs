//! Line parser for the interactive shell.
//!
//! # Syntax
//!
//! ```text
//! line      := command | conversion | <empty>
//! command   := categories | use <category> | units | add <from> <to> <factor>
//!            | history [n] | clear | help | quit | exit
//! conversion:= [convert] <value> <from> [to|in|->] <to>
//! ```
//!
//! Command keywords are case-insensitive. Any argument may be double-quoted
//! to include spaces, e.g. `add "Nautical Mile" Meter 1852`.
//!
//! # Examples
//!
//! ```rust
//! # use unit_converter::parsers::command::{parse_command, ShellCommand};
//! let cmd = parse_command("1 Kilometers to Meters").unwrap();
//! assert_eq!(
//!     cmd,
//!     ShellCommand::Convert { value: 1.0, from: "Kilometers".into(), to: "Meters".into() }
//! );
//!
//! let cmd = parse_command("history 3").unwrap();
//! assert_eq!(cmd, ShellCommand::History(Some(3)));
//! ```

use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

/// A parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Categories,
    Use(String),
    Units,
    Convert { value: f64, from: String, to: String },
    Add { from: String, to: String, factor: f64 },
    History(Option<usize>),
    Clear,
    Help,
    Quit,
    /// Blank line
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Unknown command: '{0}' (type 'help' for a list of commands)")]
    UnknownCommand(String),

    #[error("Missing argument: usage is '{0}'")]
    MissingArgument(&'static str),

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Unterminated quoted string")]
    UnterminatedQuote,

    #[error("Unexpected text after closing quote: '{0}'")]
    UnexpectedAfterQuote(String),

    #[error("Too many arguments: usage is '{0}'")]
    TooManyArguments(&'static str),
}

const USE_USAGE: &str = "use <category>";
const ADD_USAGE: &str = "add <from> <to> <factor>";
const HISTORY_USAGE: &str = "history [n]";
const CONVERT_USAGE: &str = "<value> <from> [to] <to>";

/// Words accepted between the source and target unit of a conversion
const CONVERSION_SEPARATORS: [&str; 3] = ["to", "in", "->"];

/// Split a line into whitespace-separated words, honoring double quotes
fn tokenize(input: &str) -> Result<Vec<String>, CommandParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let word = read_word(&mut chars);
        if word.starts_with('"') {
            tokens.push(read_quoted_value(&mut chars, &word)?);
        } else {
            tokens.push(word);
        }
    }

    Ok(tokens)
}

fn read_word(chars: &mut Peekable<Chars>) -> String {
    let mut word = String::new();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            break;
        }
        word.push(ch);
        chars.next();
    }

    word
}

/// `initial` holds the opening quote and whatever followed it up to the first space.
/// The closing quote must end the word.
fn read_quoted_value(
    chars: &mut Peekable<Chars>,
    initial: &str,
) -> Result<String, CommandParseError> {
    let mut value = initial[1..].to_string();

    if let Some(quote_pos) = value.find('"') {
        let trailing = &value[quote_pos + 1..];
        if !trailing.is_empty() {
            return Err(CommandParseError::UnexpectedAfterQuote(trailing.to_string()));
        }
        value.truncate(quote_pos);
        return Ok(value);
    }

    let mut closed = false;
    for ch in chars.by_ref() {
        if ch == '"' {
            closed = true;
            break;
        }
        value.push(ch);
    }
    if !closed {
        return Err(CommandParseError::UnterminatedQuote);
    }

    let trailing = read_word(chars);
    if !trailing.is_empty() {
        return Err(CommandParseError::UnexpectedAfterQuote(trailing));
    }
    Ok(value)
}

/// Parse a finite floating point number
fn parse_number(word: &str) -> Result<f64, CommandParseError> {
    match word.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(CommandParseError::InvalidNumber(word.to_string())),
    }
}

fn looks_numeric(word: &str) -> bool {
    word.parse::<f64>().is_ok_and(f64::is_finite)
}

fn expect_no_args(args: &[String], usage: &'static str) -> Result<(), CommandParseError> {
    if args.is_empty() { Ok(()) } else { Err(CommandParseError::TooManyArguments(usage)) }
}

fn parse_conversion(args: &[String]) -> Result<ShellCommand, CommandParseError> {
    let (value, from, to) = match args {
        [value, from, to] => (value, from, to),
        [value, from, sep, to]
            if CONVERSION_SEPARATORS.iter().any(|s| s.eq_ignore_ascii_case(sep)) =>
        {
            (value, from, to)
        }
        [_, _, _, _, ..] => return Err(CommandParseError::TooManyArguments(CONVERT_USAGE)),
        _ => return Err(CommandParseError::MissingArgument(CONVERT_USAGE)),
    };

    Ok(ShellCommand::Convert {
        value: parse_number(value)?,
        from: from.clone(),
        to: to.clone(),
    })
}

/// Parse one line of shell input
pub fn parse_command(input: &str) -> Result<ShellCommand, CommandParseError> {
    let tokens = tokenize(input)?;
    let Some((head, args)) = tokens.split_first() else {
        return Ok(ShellCommand::Empty);
    };

    match head.to_lowercase().as_str() {
        "categories" => expect_no_args(args, "categories").map(|_| ShellCommand::Categories),
        "units" => expect_no_args(args, "units").map(|_| ShellCommand::Units),
        "clear" => expect_no_args(args, "clear").map(|_| ShellCommand::Clear),
        "help" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        "use" => match args {
            [category] => Ok(ShellCommand::Use(category.clone())),
            [] => Err(CommandParseError::MissingArgument(USE_USAGE)),
            _ => Err(CommandParseError::TooManyArguments(USE_USAGE)),
        },
        "add" => match args {
            [from, to, factor] => Ok(ShellCommand::Add {
                from: from.clone(),
                to: to.clone(),
                factor: parse_number(factor)?,
            }),
            [_, _, _, _, ..] => Err(CommandParseError::TooManyArguments(ADD_USAGE)),
            _ => Err(CommandParseError::MissingArgument(ADD_USAGE)),
        },
        "history" => match args {
            [] => Ok(ShellCommand::History(None)),
            [count] => count
                .parse::<usize>()
                .map(|n| ShellCommand::History(Some(n)))
                .map_err(|_| CommandParseError::InvalidNumber(count.clone())),
            _ => Err(CommandParseError::TooManyArguments(HISTORY_USAGE)),
        },
        "convert" => parse_conversion(args),
        _ if looks_numeric(head) => parse_conversion(&tokens),
        _ => Err(CommandParseError::UnknownCommand(head.clone())),
    }
}
