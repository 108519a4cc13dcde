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

//! # Table DDL Assembler
//!
//! Turns the ordered column list of one table into the lines of its
//! `CREATE OR REPLACE TABLE` statement. The statement is framed by list
//! position: the first element opens it, the last one closes it.

use crate::domain::column_formatter::{format_column, Framing};
use crate::domain::entities::ColumnDescriptor;
use crate::domain::rewrite_rules;
use log::warn;

/// Produces one line per column, in input order.
///
/// Columns must already be sorted by `column_id`; nothing is reordered here.
pub fn assemble_table(columns: &[ColumnDescriptor]) -> Vec<String> {
    check_column_ids(columns);

    let len = columns.len();
    columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let line = format_column(col, Framing::at(i, len));
            rewrite_rules::rewrite_table_line(&line)
        })
        .collect()
}

/// Warns when the catalog ids are not `1..=n` or disagree with the reported
/// maximum. Framing does not depend on them.
fn check_column_ids(columns: &[ColumnDescriptor]) {
    let len = columns.len();
    let contiguous = columns
        .iter()
        .enumerate()
        .all(|(i, c)| c.column_id as usize == i + 1 && c.max_column_id as usize == len);
    if !contiguous {
        if let Some(first) = columns.first() {
            warn!(
                "Column ids of {}.{} are not contiguous; using catalog order",
                first.owner, first.table_name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(id: u32, max: u32, name: &str, data_type: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            owner: "APP".to_string(),
            table_name: "T1".to_string(),
            column_name: name.to_string(),
            data_type: data_type.to_string(),
            data_length: 22,
            column_id: id,
            max_column_id: max,
            nullable: true,
            ..ColumnDescriptor::default()
        }
    }

    fn tokens(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    fn example_columns() -> Vec<ColumnDescriptor> {
        let mut id = col(1, 2, "ID", "NUMBER");
        id.nullable = false;
        let mut name = col(2, 2, "NAME", "VARCHAR2");
        name.data_length = 50;
        name.char_length = 50;
        vec![id, name]
    }

    #[test]
    fn test_two_column_example() {
        let lines = assemble_table(&example_columns());
        assert_eq!(lines.len(), 2);
        assert_eq!(
            tokens(&lines[0]),
            vec!["CREATE", "OR", "REPLACE", "TABLE", "T1(\"ID\"", "NUMBER(28,10)", "NOT", "NULL", ","]
        );
        assert_eq!(tokens(&lines[1]), vec!["\"NAME\"", "VARCHAR(50)", ");"]);
    }

    #[test]
    fn test_two_column_example_exact() {
        let lines = assemble_table(&example_columns());
        assert_eq!(
            lines[0],
            format!(
                "CREATE OR REPLACE TABLE T1({:<40}{:<20} NOT NULL ,",
                "\"ID\"", "NUMBER(28,10)"
            )
        );
        assert_eq!(lines[1], format!("{:<40}{:<20});", "\"NAME\"", "VARCHAR(50)"));
    }

    #[test]
    fn test_internal_lines_end_with_comma() {
        let cols: Vec<ColumnDescriptor> = (1..=5)
            .map(|i| col(i, 5, &format!("C{}", i), "DATE"))
            .collect();
        let lines = assemble_table(&cols);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("CREATE OR REPLACE TABLE T1("));
        for line in &lines[..4] {
            assert!(line.ends_with(','));
        }
        assert!(lines[4].ends_with(");"));
    }

    #[test]
    fn test_table_comment_closes_statement() {
        let mut cols = example_columns();
        for c in cols.iter_mut() {
            c.table_comment = Some("demo table".to_string());
        }
        let lines = assemble_table(&cols);
        assert!(lines[1].ends_with(") COMMENT='demo table';"));
        assert!(lines[0].ends_with(','));
    }

    #[test]
    fn test_defaults_are_rewritten() {
        let mut created = col(1, 2, "CREATED", "DATE");
        created.data_default = Some("SYSDATE".to_string());
        let mut by = col(2, 2, "CREATED_BY", "VARCHAR2");
        by.char_length = 30;
        by.data_default = Some("UPPER(SYS_CONTEXT('USERENV', 'OS_USER'))".to_string());
        let lines = assemble_table(&[created, by]);
        assert!(lines[0].contains("DEFAULT current_timestamp"));
        assert!(!lines[0].contains("SYSDATE"));
        assert!(lines[1].contains("DEFAULT current_user"));
        assert!(!lines[1].contains("SYS_CONTEXT"));
    }

    #[test]
    fn test_gaps_in_column_ids_still_close_statement() {
        // A dropped column leaves a hole; a stale max id would never match.
        let cols = vec![col(1, 9, "A", "DATE"), col(3, 9, "B", "DATE"), col(3, 9, "C", "DATE")];
        let lines = assemble_table(&cols);
        assert!(lines[0].starts_with("CREATE OR REPLACE TABLE T1("));
        assert!(lines[1].ends_with(','));
        assert!(lines[2].ends_with(");"));
    }

    #[test]
    fn test_deterministic() {
        let cols = example_columns();
        assert_eq!(assemble_table(&cols), assemble_table(&cols));
    }

    #[test]
    fn test_empty_table() {
        assert!(assemble_table(&[]).is_empty());
    }
}
