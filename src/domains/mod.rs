//! Domains module containing the business logic exposed over MCP.

pub mod tools;
