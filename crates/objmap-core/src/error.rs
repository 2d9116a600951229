//! Error types for the objmap core library
//!
//! This module defines the error handling system for recursive mapping,
//! using thiserror for ergonomic error definitions and anyhow to carry
//! whatever error a caller-supplied transform produced.

use crate::types::ValueKind;
use thiserror::Error;

/// Main error type for mapping operations
#[derive(Error, Debug)]
pub enum Error {
    /// The transform callback failed for an entry
    #[error("Transform failed for key '{key}' at {path}")]
    Callback {
        key: String,
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// An object entry was transformed into something that is not an object
    #[error("Shape mismatch at {path}: expected the transform to return an object, found {found}")]
    ShapeMismatch {
        path: String,
        found: ValueKind,
    },

    /// Nesting went deeper than the configured guard allows
    #[error("Maximum nesting depth {max_depth} exceeded at {path}")]
    DepthExceeded {
        path: String,
        max_depth: usize,
    },

    /// The internal runtime used by the blocking API could not be created
    #[cfg(feature = "blocking")]
    #[error("Runtime error: {message}")]
    Runtime {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Location of the failure, rooted at `$`
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Callback { path, .. }
            | Error::ShapeMismatch { path, .. }
            | Error::DepthExceeded { path, .. } => Some(path),
            #[cfg(feature = "blocking")]
            Error::Runtime { .. } => None,
        }
    }

    /// The error returned by the transform, if that is what failed
    pub fn callback_error(&self) -> Option<&anyhow::Error> {
        match self {
            Error::Callback { source, .. } => Some(source),
            _ => None,
        }
    }
}
