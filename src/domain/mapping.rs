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

//! # Type Mapping Logic
//!
//! This module is the "Translator". Oracle and Snowflake spell their column
//! types differently; this module turns one column's catalog type descriptor
//! into the Snowflake type that goes into `CREATE TABLE`.
//!
//! Each mapping has two halves, kept separate because the table script pads
//! them as one field but the rules for each half differ:
//! 1. **Type name**: e.g. `VARCHAR2` becomes `VARCHAR`.
//! 2. **Precision clause**: e.g. `(50)` or `(28,10)`.

use std::fmt;

/// Precision used for a `NUMBER` declared without precision or scale.
pub const DEFAULT_NUMBER_PRECISION: i32 = 28;
/// Scale used for a `NUMBER` declared without precision or scale.
pub const DEFAULT_NUMBER_SCALE: i32 = 10;
/// Maximum `NUMBER` precision; a scale-only `NUMBER(*,s)` gets `38 - s` digits.
pub const MAX_NUMBER_PRECISION: i32 = 38;

/// The Snowflake rendering of one Oracle column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    pub type_name: String,
    pub precision_clause: String,
}

impl fmt::Display for MappedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.type_name, self.precision_clause)
    }
}

/// Maps an Oracle column type descriptor to its Snowflake type name and precision clause.
pub fn map_type(
    source_type: &str,
    data_length: u32,
    char_length: u32,
    data_precision: Option<i32>,
    data_scale: Option<i32>,
) -> MappedType {
    MappedType {
        type_name: map_type_name(source_type),
        precision_clause: map_precision_clause(
            source_type,
            data_length,
            char_length,
            data_precision,
            data_scale,
        ),
    }
}

fn map_type_name(source_type: &str) -> String {
    match source_type {
        "VARCHAR2" | "CHAR" | "RAW" | "CLOB" | "LONG" => "VARCHAR".to_string(),
        // The whole rendering comes from the precision clause.
        "DATE" | "TIMESTAMP(6)" => String::new(),
        other => other.to_string(),
    }
}

fn map_precision_clause(
    source_type: &str,
    data_length: u32,
    char_length: u32,
    data_precision: Option<i32>,
    data_scale: Option<i32>,
) -> String {
    match source_type {
        "VARCHAR2" | "CHAR" => format!("({})", char_length),
        // RAW is hex encoded on the Snowflake side, two characters per byte.
        "RAW" => format!("({})", 2 * u64::from(data_length)),
        "NUMBER" => {
            let (precision, scale) = effective_number_precision(data_precision, data_scale);
            format!("({},{})", display_opt(precision), display_opt(scale))
        }
        "DATE" | "TIMESTAMP(6)" => "TIMESTAMP_LTZ".to_string(),
        _ => String::new(),
    }
}

/// Applies the `NUMBER` defaulting rules.
///
/// Only a missing precision can change the scale; a scale without precision
/// (`NUMBER(*,s)`) keeps its scale.
pub fn effective_number_precision(
    data_precision: Option<i32>,
    data_scale: Option<i32>,
) -> (Option<i32>, Option<i32>) {
    match (data_precision, data_scale) {
        (None, Some(s)) => (Some(MAX_NUMBER_PRECISION - s), Some(s)),
        (None, None) => (Some(DEFAULT_NUMBER_PRECISION), Some(DEFAULT_NUMBER_SCALE)),
        (p, s) => (p, s),
    }
}

// A missing value concatenates as nothing, as it does in Oracle string concatenation.
fn display_opt(value: Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(t: &str, len: u32, chars: u32, p: Option<i32>, s: Option<i32>) -> String {
        map_type(t, len, chars, p, s).to_string()
    }

    #[test]
    fn test_map_numbers() {
        assert_eq!(render("NUMBER", 22, 0, None, None), "NUMBER(28,10)");
        assert_eq!(render("NUMBER", 22, 0, None, Some(2)), "NUMBER(36,2)");
        assert_eq!(render("NUMBER", 22, 0, None, Some(0)), "NUMBER(38,0)");
        assert_eq!(render("NUMBER", 22, 0, Some(10), Some(0)), "NUMBER(10,0)");
        assert_eq!(render("NUMBER", 22, 0, Some(12), Some(4)), "NUMBER(12,4)");
    }

    #[test]
    fn test_scale_only_number_keeps_scale() {
        for s in -84..=127 {
            assert_eq!(
                effective_number_precision(None, Some(s)),
                (Some(38 - s), Some(s))
            );
        }
    }

    #[test]
    fn test_precision_without_scale_renders_empty_scale() {
        assert_eq!(render("NUMBER", 22, 0, Some(5), None), "NUMBER(5,)");
    }

    #[test]
    fn test_map_strings() {
        // The clause follows the character length, never the byte length.
        assert_eq!(render("VARCHAR2", 200, 50, None, None), "VARCHAR(50)");
        assert_eq!(render("CHAR", 4, 1, None, None), "VARCHAR(1)");
        assert_eq!(render("CLOB", 4000, 0, None, None), "VARCHAR");
        assert_eq!(render("LONG", 0, 0, None, None), "VARCHAR");
    }

    #[test]
    fn test_map_raw_doubles_length() {
        assert_eq!(render("RAW", 16, 0, None, None), "VARCHAR(32)");
        assert_eq!(render("RAW", 2000, 0, None, None), "VARCHAR(4000)");
    }

    #[test]
    fn test_map_dates() {
        let date = map_type("DATE", 7, 0, None, None);
        assert_eq!(date.type_name, "");
        assert_eq!(date.to_string(), "TIMESTAMP_LTZ");
        assert_eq!(render("TIMESTAMP(6)", 11, 0, None, Some(6)), "TIMESTAMP_LTZ");
    }

    #[test]
    fn test_passthrough_types() {
        assert_eq!(render("FLOAT", 22, 0, Some(126), None), "FLOAT");
        assert_eq!(render("BLOB", 4000, 0, None, None), "BLOB");
        assert_eq!(
            render("TIMESTAMP(6) WITH TIME ZONE", 13, 0, None, Some(6)),
            "TIMESTAMP(6) WITH TIME ZONE"
        );
        assert_eq!(render("TIMESTAMP(3)", 11, 0, None, Some(3)), "TIMESTAMP(3)");
    }
}
