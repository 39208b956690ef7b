// crates/ord-bridge-cli/src/main.rs
// ============================================================================
// Module: ORD Bridge CLI Entry Point
// Description: Command dispatcher for the ORD Bridge MCP server.
// Purpose: Start the tool server and inspect the tool contract surface.
// Dependencies: clap, ord-bridge-config, ord-bridge-mcp, tokio
// ============================================================================

//! ## Overview
//! The ORD Bridge CLI starts the MCP server over the configured transport and
//! can print the canonical tool contracts for client integration. Stdout is
//! reserved for command output; diagnostics go to stderr.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use ord_bridge_config::OrdConfig;
use ord_bridge_contract::tool_contracts;
use ord_bridge_mcp::McpServer;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "ord-bridge", version)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the ORD Bridge MCP server.
    Serve(ServeCommand),
    /// Print the canonical tool contracts as JSON.
    Tools,
}

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// User-facing error message.
    message: String,
}

impl CliError {
    /// Creates a new CLI error.
    fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(command) => command_serve(command).await,
        Commands::Tools => command_tools(),
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes the `serve` command.
async fn command_serve(command: ServeCommand) -> Result<ExitCode, CliError> {
    let config = OrdConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(format!("config load failed: {err}")))?;
    let server = McpServer::from_config(config)
        .map_err(|err| CliError::new(format!("server init failed: {err}")))?;
    server.serve().await.map_err(|err| CliError::new(format!("server failed: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `tools` command.
fn command_tools() -> Result<ExitCode, CliError> {
    let payload = serde_json::to_string_pretty(&tool_contracts())
        .map_err(|_| CliError::new("contract serialization failed".to_string()))?;
    write_stdout_line(&payload)
        .map_err(|err| CliError::new(format!("stdout write failed: {err}")))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes one line to stdout.
fn write_stdout_line(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")
}

/// Writes an error to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "ord-bridge: {message}");
    ExitCode::FAILURE
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::missing_docs_in_private_items,
        reason = "Test-only parsing assertions."
    )]

    use clap::Parser;

    use super::Cli;
    use super::Commands;

    #[test]
    fn serve_accepts_config_path() {
        let cli = Cli::try_parse_from(["ord-bridge", "serve", "--config", "ord-bridge.toml"])
            .expect("parse");
        match cli.command {
            Commands::Serve(command) => {
                assert_eq!(command.config.as_deref().and_then(|p| p.to_str()), Some("ord-bridge.toml"));
            }
            Commands::Tools => panic!("expected serve command"),
        }
    }

    #[test]
    fn tools_command_parses_without_arguments() {
        let cli = Cli::try_parse_from(["ord-bridge", "tools"]).expect("parse");
        assert!(matches!(cli.command, Commands::Tools));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["ord-bridge"]).is_err());
    }
}
