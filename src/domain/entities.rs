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

//! # Domain Entities
//!
//! Entities are the "Nouns" of the generator: catalog objects, columns, key
//! constraints and the summaries we hand back after writing scripts.
//!
//! We use the `serde` crate so the run summary can be written as a JSON report.

use crate::domain::errors::{DdlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// `ObjectType` lists the catalog object types we know how to script.
///
/// The declaration order is the order in which a schema-wide run processes them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectType {
    Table,
    View,
    Procedure,
    Package,
    Function,
    Sequence,
}

impl ObjectType {
    /// Every recognized type, in processing order.
    pub const ALL: [ObjectType; 6] = [
        ObjectType::Table,
        ObjectType::View,
        ObjectType::Procedure,
        ObjectType::Package,
        ObjectType::Function,
        ObjectType::Sequence,
    ];

    /// The name Oracle uses in `ALL_OBJECTS.OBJECT_TYPE` and `DBMS_METADATA`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Table => "TABLE",
            ObjectType::View => "VIEW",
            ObjectType::Procedure => "PROCEDURE",
            ObjectType::Package => "PACKAGE",
            ObjectType::Function => "FUNCTION",
            ObjectType::Sequence => "SEQUENCE",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        ObjectType::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| DdlError::ConfigError(format!("Unsupported object type: {}", s)))
    }
}

/// One row of the object listing: who owns it, what it is, what it is called.
///
/// `object_type` stays a raw string because the catalog also reports types we
/// do not script (`PACKAGE BODY`, `INDEX`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbObject {
    pub owner: String,
    pub object_type: String,
    pub object_name: String,
}

impl DbObject {
    /// Returns the recognized type, or `None` if we do not generate DDL for it.
    pub fn recognized_type(&self) -> Option<ObjectType> {
        self.object_type.parse().ok()
    }
}

/// `ColumnDescriptor` is everything the catalog tells us about one table column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnDescriptor {
    pub owner: String,
    pub table_name: String,
    pub column_name: String,
    /// Oracle type name as reported by the catalog (e.g. "VARCHAR2", "TIMESTAMP(6)").
    pub data_type: String,
    /// Length in bytes.
    pub data_length: u32,
    /// Length in characters.
    pub char_length: u32,
    pub data_precision: Option<i32>,
    pub data_scale: Option<i32>,
    /// 1-based ordinal position.
    pub column_id: u32,
    /// Ordinal of the last column of the table.
    pub max_column_id: u32,
    pub data_default: Option<String>,
    pub nullable: bool,
    pub is_virtual: bool,
    pub table_comment: Option<String>,
    pub column_comment: Option<String>,
}

impl ColumnDescriptor {
    /// Interprets the catalog's `NULLABLE` flag ('Y'/'N').
    pub fn nullable_flag(flag: &str) -> bool {
        !flag.trim().eq_ignore_ascii_case("N")
    }

    /// Interprets the catalog's `VIRTUAL_COLUMN` flag ('YES'/'NO').
    pub fn virtual_flag(flag: &str) -> bool {
        flag.trim().eq_ignore_ascii_case("YES")
    }
}

/// Kind of a key constraint reconstructed from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Primary,
    Unique,
}

impl KeyKind {
    /// Maps the catalog's `CONSTRAINT_TYPE` code. Only 'P' and 'U' are keys.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "P" => Some(KeyKind::Primary),
            "U" => Some(KeyKind::Unique),
            _ => None,
        }
    }
}

/// One column of a primary or unique key, as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyColumn {
    pub owner: String,
    pub table_name: String,
    pub constraint_name: String,
    pub constraint_type: String,
    pub column_name: String,
    pub position: u32,
}

/// A complete primary/unique key, column list in key-position order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintFragment {
    pub owner: String,
    pub table_name: String,
    pub constraint_name: String,
    pub kind: KeyKind,
    pub columns: Vec<String>,
}

/// An opaque DDL blob returned by `DBMS_METADATA`; only ever passed through text rules.
pub type RawDdlText = String;

/// Records one script file that was written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptReport {
    pub object_type: ObjectType,
    pub path: PathBuf,
    /// Number of objects whose DDL ended up in this file.
    pub objects: usize,
}

/// The "Report Card" of a whole run: what was written and what was skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    pub schema: String,
    pub scripts: Vec<ScriptReport>,
    /// Objects that matched the name filter but have an unsupported type.
    pub unsupported: Vec<String>,
    /// Names requested that do not exist in the schema.
    pub not_found: Vec<String>,
}

impl RunSummary {
    pub fn new(schema: &str) -> Self {
        Self {
            schema: schema.to_string(),
            ..Self::default()
        }
    }

    /// Total number of objects scripted across all files.
    pub fn object_count(&self) -> usize {
        self.scripts.iter().map(|s| s.objects).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_parse() {
        assert_eq!("table".parse::<ObjectType>().unwrap(), ObjectType::Table);
        assert_eq!(" PACKAGE ".parse::<ObjectType>().unwrap(), ObjectType::Package);
        assert!("PACKAGE BODY".parse::<ObjectType>().is_err());
        assert!("INDEX".parse::<ObjectType>().is_err());
    }

    #[test]
    fn test_processing_order() {
        let names: Vec<&str> = ObjectType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(
            names,
            vec!["TABLE", "VIEW", "PROCEDURE", "PACKAGE", "FUNCTION", "SEQUENCE"]
        );
    }

    #[test]
    fn test_catalog_flags() {
        assert!(!ColumnDescriptor::nullable_flag("N"));
        assert!(ColumnDescriptor::nullable_flag("Y"));
        assert!(ColumnDescriptor::virtual_flag("YES"));
        assert!(!ColumnDescriptor::virtual_flag("NO"));
    }

    #[test]
    fn test_key_kind_codes() {
        assert_eq!(KeyKind::from_code("P"), Some(KeyKind::Primary));
        assert_eq!(KeyKind::from_code("U"), Some(KeyKind::Unique));
        assert_eq!(KeyKind::from_code("R"), None);
        assert_eq!(KeyKind::from_code("C"), None);
    }

    #[test]
    fn test_recognized_type() {
        let obj = DbObject {
            owner: "HR".to_string(),
            object_type: "PACKAGE BODY".to_string(),
            object_name: "PKG".to_string(),
        };
        assert_eq!(obj.recognized_type(), None);
    }
}
