//! Error types for pool tracking.

use std::path::PathBuf;

/// Result alias used across the xswap crates.
pub type Result<T> = std::result::Result<T, XswapError>;

/// Errors raised while loading or aggregating pool data.
#[derive(Debug, thiserror::Error)]
pub enum XswapError {
    /// A record is missing a required identifier.
    #[error("Malformed input in {context}: {reason}")]
    MalformedInput {
        /// Where the bad record was found (account and/or pool).
        context: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Summing balances or profit/loss exceeded the decimal range.
    #[error("Sum overflows in {context}")]
    Overflow {
        /// Account and pool whose figures were being summed.
        context: String,
    },

    /// Snapshot could not be parsed.
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl XswapError {
    /// Creates a malformed input error.
    pub fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Creates an overflow error.
    pub fn overflow(context: impl Into<String>) -> Self {
        Self::Overflow {
            context: context.into(),
        }
    }
}
