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

//! # Text Rewrite Rules
//!
//! We never parse the SQL we emit. Where Oracle and Snowflake disagree on a
//! spelling that survives into rendered DDL, a literal substitution is applied
//! after rendering. Every rule lives in one of the lists below together with
//! the incompatibility it covers.

use log::debug;

/// A literal `pattern` -> `replacement` substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
    /// The dialect gap this rule papers over.
    pub reason: &'static str,
}

impl RewriteRule {
    pub fn apply(&self, text: &str) -> String {
        text.replace(self.pattern, self.replacement)
    }
}

/// Applied to every line of a reconstructed `CREATE TABLE`.
///
/// Column defaults are copied verbatim from the catalog and may call Oracle
/// session functions.
pub const COLUMN_DEFAULT_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: "SYSDATE",
        replacement: "current_timestamp",
        reason: "Oracle's SYSDATE pseudo-column does not exist in Snowflake",
    },
    RewriteRule {
        pattern: "UPPER(SYS_CONTEXT('USERENV', 'OS_USER'))",
        replacement: "current_user",
        reason: "SYS_CONTEXT session lookups have no Snowflake spelling",
    },
];

/// Applied to `DBMS_METADATA` output for views, procedures, packages,
/// functions and sequences (after the owner qualifier is stripped).
pub const OBJECT_DDL_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: "EDITIONABLE",
        replacement: "",
        reason: "edition-based redefinition keyword is Oracle only",
    },
    RewriteRule {
        pattern: "FORCE",
        replacement: "",
        reason: "CREATE FORCE VIEW is not valid Snowflake syntax",
    },
];

/// Applies `rules` in order.
pub fn apply_rules(text: &str, rules: &[RewriteRule]) -> String {
    rules.iter().fold(text.to_string(), |acc, rule| {
        if acc.contains(rule.pattern) {
            debug!("Rewriting {:?} ({})", rule.pattern, rule.reason);
            rule.apply(&acc)
        } else {
            acc
        }
    })
}

/// Removes every `"<owner>".` qualifier so objects land in whatever schema
/// the script is run against.
pub fn strip_owner_qualifier(text: &str, owner: &str) -> String {
    text.replace(&format!("\"{}\".", owner), "")
}

/// Rewrites one line of table DDL.
pub fn rewrite_table_line(line: &str) -> String {
    apply_rules(line, COLUMN_DEFAULT_RULES)
}

/// Rewrites foreign key DDL: only the owner qualifier is removed.
pub fn rewrite_foreign_key(ddl: &str, owner: &str) -> String {
    strip_owner_qualifier(ddl, owner)
}

/// Rewrites `DBMS_METADATA` output of a non-table object.
pub fn rewrite_object_ddl(ddl: &str, owner: &str) -> String {
    apply_rules(&strip_owner_qualifier(ddl, owner), OBJECT_DDL_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sysdate_default() {
        let line = "\"CREATED\"   TIMESTAMP_LTZ DEFAULT SYSDATE ,";
        let out = rewrite_table_line(line);
        assert!(out.contains("DEFAULT current_timestamp"));
        assert!(!out.contains("SYSDATE"));
    }

    #[test]
    fn test_os_user_default() {
        let line = "\"CREATED_BY\" VARCHAR(30) DEFAULT UPPER(SYS_CONTEXT('USERENV', 'OS_USER')),";
        let out = rewrite_table_line(line);
        assert!(out.contains("DEFAULT current_user,"));
        assert!(!out.contains("SYS_CONTEXT"));
    }

    #[test]
    fn test_strip_owner_only_matches_quoted_owner() {
        let ddl = "ALTER TABLE \"HR\".\"EMP\" ADD CONSTRAINT \"FK\" FOREIGN KEY (\"DEPT\") REFERENCES \"HR\".\"DEPT\" (\"ID\") ENABLE;";
        let out = rewrite_foreign_key(ddl, "HR");
        assert_eq!(
            out,
            "ALTER TABLE \"EMP\" ADD CONSTRAINT \"FK\" FOREIGN KEY (\"DEPT\") REFERENCES \"DEPT\" (\"ID\") ENABLE;"
        );
        // Other schemas stay qualified.
        assert!(rewrite_foreign_key("\"SCOTT\".\"DEPT\"", "HR").contains("\"SCOTT\"."));
    }

    #[test]
    fn test_object_ddl_rules() {
        let ddl = "CREATE OR REPLACE FORCE EDITIONABLE VIEW \"HR\".\"V_EMP\" AS SELECT * FROM \"HR\".\"EMP\"";
        let out = rewrite_object_ddl(ddl, "HR");
        assert_eq!(
            out,
            "CREATE OR REPLACE   VIEW \"V_EMP\" AS SELECT * FROM \"EMP\""
        );
    }

    #[test]
    fn test_foreign_key_keeps_force_token() {
        let out = rewrite_foreign_key("REFERENCES \"HR\".\"ENFORCEMENT\"", "HR");
        assert_eq!(out, "REFERENCES \"ENFORCEMENT\"");
    }
}
