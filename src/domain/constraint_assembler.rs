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

//! # Constraint Assembler
//!
//! Keys are not part of the reconstructed `CREATE TABLE`; they follow it as
//! separate statements:
//! 1. Primary and unique keys are rebuilt from their catalog columns.
//! 2. Foreign keys come pre-rendered from `DBMS_METADATA` and are passed through.

use crate::domain::entities::{ConstraintFragment, KeyColumn, KeyKind, RawDdlText};
use crate::domain::rewrite_rules;

impl ConstraintFragment {
    /// Renders the `ALTER TABLE ... ADD CONSTRAINT` statement.
    pub fn render(&self) -> String {
        let opening = match self.kind {
            KeyKind::Primary => " PRIMARY KEY ( ",
            KeyKind::Unique => " UNIQUE (",
        };
        format!(
            "ALTER TABLE {} ADD CONSTRAINT {}{}{});",
            self.table_name,
            self.constraint_name,
            opening,
            self.columns.join(",")
        )
    }
}

/// Groups key columns by constraint, ordering each column list by key position.
///
/// Rows that are not primary or unique keys are ignored. Constraints keep the
/// order in which they first appear.
pub fn group_key_columns(rows: &[KeyColumn]) -> Vec<ConstraintFragment> {
    let mut groups: Vec<(ConstraintFragment, Vec<(u32, String)>)> = Vec::new();

    for row in rows {
        let Some(kind) = KeyKind::from_code(&row.constraint_type) else {
            continue;
        };
        let existing = groups.iter_mut().find(|(f, _)| {
            f.owner == row.owner
                && f.table_name == row.table_name
                && f.constraint_name == row.constraint_name
                && f.kind == kind
        });
        match existing {
            Some((_, cols)) => cols.push((row.position, row.column_name.clone())),
            None => groups.push((
                ConstraintFragment {
                    owner: row.owner.clone(),
                    table_name: row.table_name.clone(),
                    constraint_name: row.constraint_name.clone(),
                    kind,
                    columns: Vec::new(),
                },
                vec![(row.position, row.column_name.clone())],
            )),
        }
    }

    groups
        .into_iter()
        .map(|(mut fragment, mut cols)| {
            cols.sort_by_key(|(pos, _)| *pos);
            fragment.columns = cols.into_iter().map(|(_, name)| name).collect();
            fragment
        })
        .collect()
}

/// One statement line per primary/unique key.
pub fn assemble_key_constraints(rows: &[KeyColumn]) -> Vec<String> {
    group_key_columns(rows)
        .iter()
        .map(ConstraintFragment::render)
        .collect()
}

/// Foreign key DDL with the owning schema unqualified.
pub fn assemble_foreign_keys(owner: &str, ddl: &[RawDdlText]) -> Vec<String> {
    ddl.iter()
        .map(|text| rewrite_rules::rewrite_foreign_key(text, owner))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str, kind: &str, column: &str, position: u32) -> KeyColumn {
        KeyColumn {
            owner: "HR".to_string(),
            table_name: "EMP".to_string(),
            constraint_name: name.to_string(),
            constraint_type: kind.to_string(),
            column_name: column.to_string(),
            position,
        }
    }

    #[test]
    fn test_primary_key_columns_follow_position() {
        let rows = vec![
            key("EMP_PK", "P", "DEPT_ID", 2),
            key("EMP_PK", "P", "EMP_ID", 1),
        ];
        assert_eq!(
            assemble_key_constraints(&rows),
            vec!["ALTER TABLE EMP ADD CONSTRAINT EMP_PK PRIMARY KEY ( EMP_ID,DEPT_ID);"]
        );
    }

    #[test]
    fn test_unique_key_rendering() {
        let rows = vec![key("EMP_EMAIL_UK", "U", "EMAIL", 1)];
        assert_eq!(
            assemble_key_constraints(&rows),
            vec!["ALTER TABLE EMP ADD CONSTRAINT EMP_EMAIL_UK UNIQUE (EMAIL);"]
        );
    }

    #[test]
    fn test_grouping_keeps_first_appearance_order_and_skips_other_types() {
        let rows = vec![
            key("EMP_UK", "U", "CODE", 1),
            key("EMP_PK", "P", "ID", 1),
            key("EMP_FK", "R", "DEPT_ID", 1),
            key("EMP_CK", "C", "SALARY", 1),
            key("EMP_UK", "U", "REGION", 2),
        ];
        let fragments = group_key_columns(&rows);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].constraint_name, "EMP_UK");
        assert_eq!(fragments[0].columns, vec!["CODE", "REGION"]);
        assert_eq!(fragments[1].kind, KeyKind::Primary);
    }

    #[test]
    fn test_foreign_keys_unqualified() {
        let ddl = vec![
            "\n  ALTER TABLE \"HR\".\"EMP\" ADD CONSTRAINT \"EMP_DEPT_FK\" FOREIGN KEY (\"DEPT_ID\")\n\t  REFERENCES \"HR\".\"DEPT\" (\"ID\") ENABLE;".to_string(),
        ];
        let out = assemble_foreign_keys("HR", &ddl);
        assert_eq!(out.len(), 1);
        assert!(!out[0].contains("\"HR\"."));
        assert!(out[0].contains("REFERENCES \"DEPT\" (\"ID\")"));
    }

    #[test]
    fn test_no_keys() {
        assert!(assemble_key_constraints(&[]).is_empty());
        assert!(assemble_foreign_keys("HR", &[]).is_empty());
    }
}
