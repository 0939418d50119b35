//! Shelf Server Library
//!
//! A small HTTP data source for the library view. It serves a JSON catalog at
//! `/books.json` and exports its router for testing and reuse.

pub mod handlers;
pub mod routes;
pub mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Address used when `SHELF_BIND_ADDR` is unset
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Resolve the listen address from an optional `SHELF_BIND_ADDR` value
pub fn bind_addr(value: Option<&str>) -> Result<SocketAddr> {
    let value = value.unwrap_or(DEFAULT_BIND_ADDR);
    value
        .parse()
        .with_context(|| format!("Invalid SHELF_BIND_ADDR: {value}"))
}
