//! MCP server exposing the Sevalla cloud hosting API as tools over stdio.

pub mod api;
pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod managers;
pub mod mcp;
pub mod services;
pub mod utils;
