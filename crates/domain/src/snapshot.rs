//! Loading of already-fetched balance and event snapshots.
//!
//! Snapshots are the JSON objects returned by the balance and event
//! collaborators: account keys mapping to lists of records. Key order in the
//! document is preserved.

use crate::entities::{XswapBalances, XswapEvents};
use crate::error::{Result, XswapError};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Parses a balances snapshot.
///
/// # Errors
/// Returns an error if the document does not match the balance shape.
pub fn parse_balances(json: &str) -> Result<XswapBalances> {
    Ok(serde_json::from_str(json)?)
}

/// Parses an events snapshot.
///
/// # Errors
/// Returns an error if the document does not match the event shape.
pub fn parse_events(json: &str) -> Result<XswapEvents> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a balances snapshot from disk.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_balances(path: impl AsRef<Path>) -> Result<XswapBalances> {
    read_json(path.as_ref())
}

/// Reads an events snapshot from disk.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_events(path: impl AsRef<Path>) -> Result<XswapEvents> {
    read_json(path.as_ref())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| XswapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}
