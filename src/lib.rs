//! MCP server for custody case support tools
//!
//! This crate exposes a fixed set of custody case support tools via the Model
//! Context Protocol (MCP), speaking JSON-RPC 2.0 over stdio.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client (host) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ CustodyMcpServer (transport + routing) ]
//!        | (Rust API)
//!        v
//! [ handlers (stateless report formatting) ]
//!        |
//!        +--> [ tables (static findings / recommendations) ]
//!        +--> [ clock (time source + record ids) ]
//! ```
//!
//! # Tools
//!
//! - `analyze_case` - case analysis report for a category
//! - `track_evidence` - evidence record with handling notes
//! - `monitor_deadline` - days-remaining and urgency for a deadline
//! - `document_bias` - bias incident report
//! - `assess_child_welfare` - welfare assessment with follow-up steps
//!
//! Every call is stateless and idempotent in effect; the only non-determinism
//! is the time-derived record id, which goes through the injectable
//! [`clock::Clock`] trait.

pub mod case;
pub mod clock;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tables;
pub mod tools;

pub use case::CaseProfile;
pub use clock::{Clock, SystemClock};
pub use error::{Error, Result};
pub use server::CustodyMcpServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, tool_definitions};
