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

//! Identifier allow-listing for names taken from the command line.
//!
//! Catalog queries bind schema and object names as values, but the names also
//! end up in file names and log lines. Only plain (unquoted) Oracle
//! identifiers are accepted; they are normalized to upper case the way Oracle
//! stores them.

use crate::domain::errors::{DdlError, Result};

/// Oracle 12.2+ identifier limit.
pub const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Keyword that selects every object in the schema.
pub const ALL_OBJECTS: &str = "ALL";

/// Validates an unquoted Oracle identifier and returns it upper-cased.
///
/// Accepts a leading letter followed by letters, digits, `_`, `$` or `#`.
pub fn normalize_identifier(name: &str) -> Result<String> {
    let invalid = |reason: String| DdlError::InvalidIdentifier {
        name: name.to_string(),
        reason,
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid("identifier is empty".to_string())),
        Some(c) if !c.is_ascii_alphabetic() => {
            return Err(invalid(format!("must start with a letter, found {:?}", c)))
        }
        Some(_) => {}
    }

    if let Some(c) = chars.find(|&c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '#'))) {
        return Err(invalid(format!("illegal character {:?}", c)));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(invalid(format!(
            "longer than {} characters",
            MAX_IDENTIFIER_LENGTH
        )));
    }

    Ok(name.to_uppercase())
}

/// What the user asked us to script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectSelector {
    /// Every recognized object in the schema.
    All,
    /// The objects carrying this (normalized) name.
    Named(String),
}

impl ObjectSelector {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().eq_ignore_ascii_case(ALL_OBJECTS) {
            Ok(ObjectSelector::All)
        } else {
            normalize_identifier(raw.trim()).map(ObjectSelector::Named)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case() {
        assert_eq!(normalize_identifier("hr").unwrap(), "HR");
        assert_eq!(normalize_identifier("Emp_Hist$1#").unwrap(), "EMP_HIST$1#");
    }

    #[test]
    fn test_rejects_injection_attempts() {
        assert!(normalize_identifier("EMP') OR 1=1 --").is_err());
        assert!(normalize_identifier("EMP;DROP").is_err());
        assert!(normalize_identifier("\"EMP\"").is_err());
        assert!(normalize_identifier("").is_err());
        assert!(normalize_identifier("1EMP").is_err());
    }

    #[test]
    fn test_length_limit() {
        assert!(normalize_identifier(&"A".repeat(128)).is_ok());
        assert!(normalize_identifier(&"A".repeat(129)).is_err());
    }

    #[test]
    fn test_selector() {
        assert_eq!(ObjectSelector::parse("all").unwrap(), ObjectSelector::All);
        assert_eq!(ObjectSelector::parse("ALL").unwrap(), ObjectSelector::All);
        assert_eq!(
            ObjectSelector::parse("emp").unwrap(),
            ObjectSelector::Named("EMP".to_string())
        );
        assert!(ObjectSelector::parse("emp dept").is_err());
    }
}
