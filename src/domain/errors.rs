// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core error definitions for the DDL generator.
//!
//! This module provides a centralized `DdlError` enum and a `Result` type
//! used throughout the application to handle Oracle, I/O, and logic errors.

use thiserror::Error;

/// Error types encountered while generating DDL scripts.
#[derive(Error, Debug)]
pub enum DdlError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Metadata retrieval failed: {0}")]
    MetadataError(String),

    #[error("Invalid identifier {name:?}: {reason}")]
    InvalidIdentifier { name: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Oracle error: {0}")]
    OracleError(String),

    #[error("Connection pool error: {0}")]
    PoolError(String),
}

impl From<oracle::Error> for DdlError {
    fn from(e: oracle::Error) -> Self {
        DdlError::OracleError(e.to_string())
    }
}

impl From<r2d2::Error> for DdlError {
    fn from(e: r2d2::Error) -> Self {
        DdlError::PoolError(e.to_string())
    }
}

/// A specialized Result type for the DDL generator.
pub type Result<T> = std::result::Result<T, DdlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DdlError = io.into();
        assert!(matches!(err, DdlError::IoError(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_invalid_identifier_message() {
        let err = DdlError::InvalidIdentifier {
            name: "A;B".to_string(),
            reason: "illegal character ';'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid identifier \"A;B\": illegal character ';'"
        );
    }
}
