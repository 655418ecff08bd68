//! Custody case MCP server
//!
//! A Model Context Protocol server exposing custody case support tools to an
//! MCP host.
//!
//! # Usage
//!
//! ```bash
//! custody-mcp [--case-number <id>] [--child-name <name>]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `custody_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use clap::Parser;
use custody_mcp::{CaseProfile, CustodyMcpServer};

/// MCP server for custody case support tools
#[derive(Parser)]
#[command(name = "custody-mcp")]
#[command(about = "MCP server for custody case support tools")]
#[command(version)]
struct Args {
    /// Court docket number used when calls omit case_id
    #[arg(long, default_value = custody_mcp::case::DEFAULT_CASE_NUMBER)]
    case_number: String,

    /// Child's name as rendered in welfare assessment reports
    #[arg(long, default_value = custody_mcp::case::DEFAULT_CHILD_NAME)]
    child_name: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("custody_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!(case = %args.case_number, "Starting custody-mcp server");

    let profile = CaseProfile {
        case_number: args.case_number,
        child_name: args.child_name,
    };

    let server = CustodyMcpServer::new(profile);
    server.run().await?;

    Ok(())
}
