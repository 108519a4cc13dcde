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

//! Renders a single column of a Snowflake `CREATE TABLE` statement.
//!
//! The statement has no header or footer line of its own: the opening
//! `CREATE OR REPLACE TABLE` rides on the first column and the closing
//! parenthesis (plus table comment) on the last one.

use crate::domain::entities::ColumnDescriptor;
use crate::domain::mapping;

/// Field width of the quoted column name.
pub const NAME_WIDTH: usize = 40;
/// Field width of the mapped type.
pub const TYPE_WIDTH: usize = 20;

/// Where a column sits in its table's column list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Framing {
    pub first: bool,
    pub last: bool,
}

impl Framing {
    /// Framing of the element at `index` in a list of `len` columns.
    pub fn at(index: usize, len: usize) -> Self {
        Self {
            first: index == 0,
            last: index + 1 == len,
        }
    }
}

/// Formats one column definition line.
pub fn format_column(col: &ColumnDescriptor, framing: Framing) -> String {
    let mut line = String::new();

    if framing.first {
        line.push_str(&format!("CREATE OR REPLACE TABLE {}(", col.table_name));
    }

    let quoted = format!("\"{}\"", col.column_name);
    line.push_str(&format!("{:<width$}", quoted, width = NAME_WIDTH));

    let mapped = mapping::map_type(
        &col.data_type,
        col.data_length,
        col.char_length,
        col.data_precision,
        col.data_scale,
    );
    line.push_str(&format!("{:<width$}", mapped.to_string(), width = TYPE_WIDTH));

    // Virtual column expressions are not defaults.
    if !col.is_virtual {
        if let Some(default) = &col.data_default {
            line.push_str(" DEFAULT ");
            line.push_str(default);
        }
    }

    if !col.nullable {
        line.push_str(" NOT NULL ");
    }

    if let Some(comment) = &col.column_comment {
        line.push_str(&format!(" COMMENT '{}'", comment));
    }

    if !framing.last {
        line.push(',');
    } else {
        match &col.table_comment {
            Some(comment) => line.push_str(&format!(") COMMENT='{}';", comment)),
            None => line.push_str(");"),
        }
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, data_type: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            owner: "HR".to_string(),
            table_name: "EMP".to_string(),
            column_name: name.to_string(),
            data_type: data_type.to_string(),
            data_length: 22,
            char_length: 0,
            column_id: 2,
            max_column_id: 3,
            nullable: true,
            ..ColumnDescriptor::default()
        }
    }

    const MIDDLE: Framing = Framing {
        first: false,
        last: false,
    };

    #[test]
    fn test_padding() {
        let line = format_column(&column("ID", "NUMBER"), MIDDLE);
        assert_eq!(&line[..NAME_WIDTH], format!("{:<40}", "\"ID\""));
        assert_eq!(
            &line[NAME_WIDTH..NAME_WIDTH + TYPE_WIDTH],
            format!("{:<20}", "NUMBER(28,10)")
        );
        assert!(line.ends_with(','));
    }

    #[test]
    fn test_long_fields_are_not_truncated() {
        let name = "A".repeat(60);
        let line = format_column(&column(&name, "TIMESTAMP(6) WITH LOCAL TIME ZONE"), MIDDLE);
        assert!(line.contains(&format!("\"{}\"", name)));
        assert!(line.contains("TIMESTAMP(6) WITH LOCAL TIME ZONE"));
    }

    #[test]
    fn test_default_not_null_and_comment() {
        let mut col = column("CREATED", "DATE");
        col.data_default = Some("SYSDATE".to_string());
        col.nullable = false;
        col.column_comment = Some("row creation time".to_string());
        let line = format_column(&col, MIDDLE);
        let tail = line[NAME_WIDTH + TYPE_WIDTH..].to_string();
        assert_eq!(tail, " DEFAULT SYSDATE NOT NULL  COMMENT 'row creation time',");
    }

    #[test]
    fn test_virtual_column_drops_default() {
        let mut col = column("TOTAL", "NUMBER");
        col.is_virtual = true;
        col.data_default = Some("\"PRICE\"*\"QTY\"".to_string());
        let line = format_column(&col, MIDDLE);
        assert!(!line.contains("DEFAULT"));
    }

    #[test]
    fn test_first_and_last_framing() {
        let col = column("ID", "NUMBER");
        let line = format_column(&col, Framing { first: true, last: true });
        assert!(line.starts_with("CREATE OR REPLACE TABLE EMP(\"ID\""));
        assert!(line.ends_with(");"));
    }

    #[test]
    fn test_table_comment_on_last_column() {
        let mut col = column("ID", "NUMBER");
        col.table_comment = Some("employees".to_string());
        let line = format_column(&col, Framing { first: false, last: true });
        assert!(line.ends_with(") COMMENT='employees';"));
    }

    #[test]
    fn test_framing_is_positional() {
        assert_eq!(Framing::at(0, 3), Framing { first: true, last: false });
        assert_eq!(Framing::at(1, 3), Framing { first: false, last: false });
        assert_eq!(Framing::at(2, 3), Framing { first: false, last: true });
        assert_eq!(Framing::at(0, 1), Framing { first: true, last: true });
    }
}
