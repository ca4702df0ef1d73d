//! SRE Agent MCP Relay Library
//!
//! This library provides a thin Model Context Protocol (MCP) gateway that
//! forwards tool invocations to the SRE agent service over HTTP.

// Domain modules
pub mod agent;
pub mod mcp;
pub mod status;
pub mod stream;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
