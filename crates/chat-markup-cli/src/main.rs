//! Command-line inspector for chat markup.
//!
//! Usage:
//!   chat-markup `<message>` [--tokens] [--raw] [--json]   - Show how a message parses
//!   echo `<message>` | chat-markup                        - Read the message from stdin

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chat_markup_config::Config;
use chat_markup_syntax::{
    AstNode, MessageOptions, TextRuns, describe_tokens, parse_with, render_message, tokenize,
};
use clap::{Arg, ArgAction, ArgMatches, Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Labels,
    Tokens,
    Raw,
    Json,
}

fn cli() -> Command {
    Command::new("chat-markup")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Show the tokens and tree produced for a chat message")
        .arg(
            Arg::new("message")
                .help("Message to parse (read from stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the token stream")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Print the tree before adjacent text is merged")
                .action(ArgAction::SetTrue)
                .conflicts_with("tokens"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the tree as JSON")
                .action(ArgAction::SetTrue)
                .conflicts_with("tokens"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a config file (default: ~/.config/chat-markup/config.toml)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("collapse")
                .long("collapse")
                .help("Emit one text node per run instead of one per character")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-markup")
                .long("no-markup")
                .help("Show the message verbatim")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (repeatable)")
                .action(ArgAction::Count),
        )
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn load_options(matches: &ArgMatches) -> Result<MessageOptions> {
    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };
    log::debug!("Using config {config:?}");

    let mut options = config.message_options();
    if matches.get_flag("collapse") {
        options.text_runs = TextRuns::Collapsed;
    }
    if matches.get_flag("no-markup") {
        options.markup_enabled = false;
    }
    Ok(options)
}

fn output_mode(matches: &ArgMatches) -> Output {
    if matches.get_flag("tokens") {
        Output::Tokens
    } else if matches.get_flag("json") {
        Output::Json
    } else if matches.get_flag("raw") {
        Output::Raw
    } else {
        Output::Labels
    }
}

fn read_message(matches: &ArgMatches) -> Result<String> {
    if let Some(message) = matches.get_one::<String>("message") {
        return Ok(message.clone());
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read message from stdin")?;
    // A trailing newline from `echo` is not part of the message
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

/// Nodes to print for a message, before (`raw`) or after normalization.
fn tree(message: &str, options: &MessageOptions, raw: bool) -> Vec<AstNode> {
    if !raw || !options.markup_enabled {
        return render_message(message, options);
    }
    match parse_with(&tokenize(message), options.text_runs) {
        Ok(nodes) => nodes,
        Err(e) => {
            eprintln!("note: {e}, showing plain text");
            render_message(message, options)
        }
    }
}

fn format_output(message: &str, options: &MessageOptions, mode: Output) -> Result<String> {
    let formatted = match mode {
        Output::Tokens => describe_tokens(&tokenize(message)),
        Output::Json => serde_json::to_string_pretty(&tree(message, options, false))?,
        Output::Raw | Output::Labels => tree(message, options, mode == Output::Raw)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(formatted)
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let options = load_options(&matches)?;
    let message = read_message(&matches)?;
    log::info!("Parsing {} bytes with {options:?}", message.len());

    println!("{}", format_output(&message, &options, output_mode(&matches))?);
    Ok(())
}
