//! Error types for catador
//!
//! All fallible operations return [`crate::Result`], which wraps
//! [`CatadorError`]. Variants carry enough context (paths, counts,
//! HTTP status codes) that `Display` output can be surfaced directly
//! to API clients and dashboard panels.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for catador operations
pub type Result<T> = std::result::Result<T, CatadorError>;

/// Errors that can occur across artifact handling, inference,
/// serving, and client operations
#[derive(Debug, Error)]
pub enum CatadorError {
    /// Model artifact could not be read from disk
    #[error("cannot read model artifact {path}: {source}")]
    ArtifactRead {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Model artifact could not be written to disk
    #[error("cannot write model artifact {path}: {source}")]
    ArtifactWrite {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Artifact bytes do not form a valid .ctd container
    #[error("invalid artifact format: {reason}")]
    Format {
        /// What was wrong with the bytes
        reason: String,
    },

    /// Artifact decoded but the model inside is not usable
    #[error("invalid model: {reason}")]
    InvalidModel {
        /// Which structural check failed
        reason: String,
    },

    /// Feature row length does not match the model input width
    #[error("feature row has {actual} values, model expects {expected}")]
    ShapeMismatch {
        /// Input width the model was trained with
        expected: usize,
        /// Width of the row that was submitted
        actual: usize,
    },

    /// Could not reach the inference server at all
    #[error("connection failed: {0}")]
    Connection(String),

    /// Server answered with a non-success HTTP status
    #[error("server returned HTTP {status}: {detail}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Error detail from the response body, or the raw body
        detail: String,
    },

    /// Server answered 200 but the body was not the expected shape
    #[error("invalid server response: {reason}")]
    InvalidResponse {
        /// What failed to parse
        reason: String,
    },

    /// Test input file missing, unreadable, or not the expected schema
    #[error("cannot load test input {path}: {reason}")]
    InputFile {
        /// Path that was attempted
        path: PathBuf,
        /// I/O or schema problem
        reason: String,
    },

    /// Bad bind address, port, or other launch configuration
    #[error("configuration error: {reason}")]
    Config {
        /// What was misconfigured
        reason: String,
    },
}
