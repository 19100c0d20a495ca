// SPDX-License-Identifier: MIT
//
// tint — color palette generator with WCAG auditing.
//
// This is the binary that wires the library crates to the outside world:
//
//   tint-color   → hex / RGB / HSL conversion and adjustment
//   tint-palette → scales, palettes, contrast, project colors, inference
//   tint-export  → CSS / Tailwind / SCSS / Figma / React Native / HTML
//
// By default it runs the stdio tool server. A few subcommands expose the
// same engine directly for shell use:
//
//   tint [serve]                 JSON-RPC tool server on stdin/stdout
//   tint palette <BRAND>         print a palette export
//   tint check <FG> <BG>         print a contrast check as JSON
//   tint setup                   print client configuration help

mod server;
mod setup;
mod tools;

use std::error::Error;
use std::io;
use std::process;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use tint_color::Rgb;
use tint_export::{OutputFormat, export};
use tint_palette::{BasePalette, ProjectColors, Style, WcagLevel, validate_accessibility};

use crate::server::Server;

#[derive(Debug, Parser)]
#[command(name = "tint", version, about = "Color palette generator with WCAG auditing")]
struct Cli {
    /// Log filter, e.g. `info` or `tint=debug`. Logs go to stderr.
    #[arg(long, global = true, env = "TINT_LOG", default_value = "info")]
    log: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the JSON-RPC tool server on stdin/stdout (default).
    Serve,

    /// Generate a palette from a brand color and print it.
    Palette {
        /// Brand color as #rgb or #rrggbb.
        brand: String,

        /// modern, vibrant, muted or minimal.
        #[arg(long, default_value = "modern", value_parser = parse_style)]
        style: Style,

        /// css, tailwind, scss, figma or react-native.
        #[arg(long, default_value = "css", value_parser = parse_format)]
        format: OutputFormat,
    },

    /// Check the WCAG contrast of a text color on a background.
    Check {
        foreground: String,
        background: String,

        /// AA or AAA.
        #[arg(long, default_value = "AA", value_parser = parse_level)]
        level: WcagLevel,

        /// Judge against the large-text threshold.
        #[arg(long)]
        large: bool,
    },

    /// Print instructions for registering the server with a client.
    Setup,
}

fn parse_style(s: &str) -> Result<Style, String> {
    Style::from_name(s).ok_or_else(|| format!("unknown style: {s}"))
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_name(s).ok_or_else(|| format!("unknown format: {s}"))
}

fn parse_level(s: &str) -> Result<WcagLevel, String> {
    match s.to_uppercase().as_str() {
        "AA" => Ok(WcagLevel::Aa),
        "AAA" => Ok(WcagLevel::Aaa),
        _ => Err(format!("unknown WCAG level: {s}")),
    }
}

/// Install the stderr subscriber. stdout belongs to the protocol.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Serve => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            Server::new().run(stdin, stdout)?;
        }
        Command::Palette { brand, style, format } => {
            let palette = BasePalette::from_seed(Rgb::from_hex(&brand)?, style);
            println!("{}", export(format, &palette, &ProjectColors::new())?);
        }
        Command::Check {
            foreground,
            background,
            level,
            large,
        } => {
            let check = validate_accessibility(
                Rgb::from_hex(&foreground)?,
                Rgb::from_hex(&background)?,
                level,
                large,
            );
            println!("{}", serde_json::to_string_pretty(&check)?);
        }
        Command::Setup => setup::print_help()?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    if let Err(e) = run(cli.command.unwrap_or(Command::Serve)) {
        error!("{e}");
        eprintln!("tint: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
