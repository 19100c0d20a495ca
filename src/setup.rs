// SPDX-License-Identifier: MIT
//
// `tint setup` — tell the user how to register the server with a client.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use serde_json::json;

/// Where the desktop client keeps its server configuration.
const fn client_config_path() -> &'static str {
    if cfg!(target_os = "macos") {
        "~/Library/Application Support/Claude/claude_desktop_config.json"
    } else if cfg!(target_os = "windows") {
        "%APPDATA%\\Claude\\claude_desktop_config.json"
    } else {
        "~/.config/Claude/claude_desktop_config.json"
    }
}

/// Write setup instructions for the binary at `exe`.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_help(out: &mut impl Write, exe: &str) -> io::Result<()> {
    let config = json!({ "mcpServers": { "tint": { "command": exe, "args": ["serve"] } } });
    let pretty = serde_json::to_string_pretty(&config)?;

    writeln!(out, "tint — color palette tool server")?;
    writeln!(out)?;
    writeln!(out, "Binary:")?;
    writeln!(out, "  {exe}")?;
    writeln!(out)?;
    writeln!(out, "Client configuration file:")?;
    writeln!(out, "  {}", client_config_path())?;
    writeln!(out)?;
    writeln!(out, "Add this entry, then restart the client:")?;
    for line in pretty.lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    writeln!(out, "Logs go to stderr; set TINT_LOG=debug for per-request detail.")?;
    Ok(())
}

/// Print setup instructions for the running binary to stdout.
///
/// # Errors
///
/// Returns any error from writing to stdout.
pub fn print_help() -> io::Result<()> {
    let exe = env::current_exe().unwrap_or_else(|_| PathBuf::from("tint"));
    write_help(&mut io::stdout().lock(), &exe.display().to_string())
}
