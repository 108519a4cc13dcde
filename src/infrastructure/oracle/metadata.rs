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

//! # Oracle Metadata Adapter
//!
//! This is the "Brain" for Oracle discovery. It knows which catalog views hold
//! the objects, columns and keys of a schema, and how to ask `DBMS_METADATA`
//! for DDL it can render itself.
//!
//! Every user supplied name travels as a bind variable, never as SQL text.

use crate::domain::entities::{ColumnDescriptor, DbObject, KeyColumn, ObjectType, RawDdlText};
use crate::domain::errors::{DdlError, Result};
use crate::infrastructure::oracle::connection_manager::OracleConnectionManager;
use crate::ports::metadata_port::MetadataPort;
use log::debug;
use oracle::sql_type::ToSql;
use r2d2::Pool;
use std::sync::Arc;

/// `OracleMetadataAdapter` implements the `MetadataPort`.
pub struct OracleMetadataAdapter {
    pool: Arc<Pool<OracleConnectionManager>>,
}

impl OracleMetadataAdapter {
    pub fn new(pool: Arc<Pool<OracleConnectionManager>>) -> Self {
        Self { pool }
    }

    fn get_conn(&self) -> Result<r2d2::PooledConnection<OracleConnectionManager>> {
        self.pool.get().map_err(|e| {
            DdlError::PoolError(format!("Failed to get connection from pool: {}", e))
        })
    }

    /// Runs a query whose first column is a text blob and collects every row.
    fn fetch_texts(&self, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<RawDdlText>> {
        let conn = self.get_conn()?;
        let rows = conn.query(sql, params)?;
        let mut texts = Vec::new();
        for row_result in rows {
            let row = row_result?;
            let text: Option<String> = row.get(0)?;
            texts.push(text.unwrap_or_default());
        }
        Ok(texts)
    }
}

// --- ORACLE DICTIONARY QUERIES ---

/// User objects of one owner. Oracle maintained accounts and generated names
/// (anything with a `$`) are skipped. A NULL type or name matches everything.
const SQL_LIST_OBJECTS: &str = "
    SELECT o.owner, o.object_type, o.object_name
    FROM all_objects o
    JOIN all_users u ON o.owner = u.username
    WHERE u.oracle_maintained = 'N'
      AND o.object_name NOT LIKE '%$%'
      AND o.owner = :1
      AND o.object_type = NVL(:2, o.object_type)
      AND o.object_name = NVL(:3, o.object_name)
    ORDER BY o.owner, o.object_type, o.object_name
";

/// Visible columns of a table with their table and column comments.
const SQL_TABLE_COLUMNS: &str = "
    SELECT c.owner, c.table_name, c.column_name, c.data_type,
           c.data_length, c.char_length, c.data_precision, c.data_scale,
           c.column_id, c.data_default, c.nullable, c.virtual_column,
           tc.comments, cc.comments
    FROM all_tab_cols c
    LEFT JOIN all_tab_comments tc
      ON tc.owner = c.owner
      AND tc.table_name = c.table_name
      AND tc.table_type = 'TABLE'
    LEFT JOIN all_col_comments cc
      ON cc.owner = c.owner
      AND cc.table_name = c.table_name
      AND cc.column_name = c.column_name
    WHERE c.hidden_column = 'NO'
      AND c.owner = :1
      AND c.table_name = :2
    ORDER BY c.column_id
";

/// Columns of primary and unique keys.
const SQL_KEY_COLUMNS: &str = "
    SELECT c.owner, c.table_name, c.constraint_name, k.constraint_type,
           c.column_name, c.position
    FROM all_cons_columns c
    JOIN all_constraints k
      ON c.owner = k.owner
      AND c.table_name = k.table_name
      AND c.constraint_name = k.constraint_name
    WHERE k.constraint_type IN ('P', 'U')
      AND c.owner = :1
      AND c.table_name = :2
    ORDER BY c.constraint_name, c.position
";

/// Foreign keys, rendered by Oracle itself.
const SQL_FOREIGN_KEYS: &str = "
    SELECT DBMS_METADATA.GET_DDL('REF_CONSTRAINT', constraint_name, owner)
    FROM all_constraints
    WHERE owner = :1
      AND table_name = :2
      AND constraint_type = 'R'
    ORDER BY constraint_name
";

/// DDL of any other object type.
const SQL_OBJECT_DDL: &str = "SELECT DBMS_METADATA.GET_DDL(:1, :2, :3) FROM dual";

impl MetadataPort for OracleMetadataAdapter {
    fn list_objects(
        &self,
        schema: &str,
        object_type: Option<ObjectType>,
        object_name: Option<&str>,
    ) -> Result<Vec<DbObject>> {
        let conn = self.get_conn()?;
        let type_filter: Option<String> = object_type.map(|t| t.as_str().to_string());
        let name_filter: Option<String> = object_name.map(|n| n.to_string());
        debug!(
            "Listing objects of {} (type: {:?}, name: {:?})",
            schema, type_filter, name_filter
        );

        let rows = conn.query(SQL_LIST_OBJECTS, &[&schema, &type_filter, &name_filter])?;
        let mut objects = Vec::new();
        for row_result in rows {
            let row = row_result?;
            objects.push(DbObject {
                owner: row.get(0)?,
                object_type: row.get(1)?,
                object_name: row.get(2)?,
            });
        }
        Ok(objects)
    }

    fn get_table_columns(&self, owner: &str, table: &str) -> Result<Vec<ColumnDescriptor>> {
        debug!("Fetching columns for {}.{}", owner, table);
        let conn = self.get_conn()?;
        let rows = conn.query(SQL_TABLE_COLUMNS, &[&owner, &table])?;

        let mut columns = Vec::new();
        for row_result in rows {
            let row = row_result?;
            columns.push(ColumnDescriptor {
                owner: row.get(0)?,
                table_name: row.get(1)?,
                column_name: row.get(2)?,
                data_type: row.get(3)?,
                data_length: row.get(4)?,
                char_length: row.get::<usize, Option<u32>>(5)?.unwrap_or(0),
                data_precision: row.get(6)?,
                data_scale: row.get(7)?,
                column_id: row.get(8)?,
                max_column_id: 0,
                data_default: row.get(9)?,
                nullable: ColumnDescriptor::nullable_flag(&row.get::<usize, String>(10)?),
                is_virtual: ColumnDescriptor::virtual_flag(&row.get::<usize, String>(11)?),
                table_comment: row.get(12)?,
                column_comment: row.get(13)?,
            });
        }
        fill_max_column_id(&mut columns);
        Ok(columns)
    }

    fn get_primary_unique_keys(&self, owner: &str, table: &str) -> Result<Vec<KeyColumn>> {
        let conn = self.get_conn()?;
        let rows = conn.query(SQL_KEY_COLUMNS, &[&owner, &table])?;
        let mut keys = Vec::new();
        for row_result in rows {
            let row = row_result?;
            keys.push(KeyColumn {
                owner: row.get(0)?,
                table_name: row.get(1)?,
                constraint_name: row.get(2)?,
                constraint_type: row.get(3)?,
                column_name: row.get(4)?,
                position: row.get::<usize, Option<u32>>(5)?.unwrap_or(0),
            });
        }
        Ok(keys)
    }

    fn get_foreign_keys(&self, owner: &str, table: &str) -> Result<Vec<RawDdlText>> {
        self.fetch_texts(SQL_FOREIGN_KEYS, &[&owner, &table])
    }

    fn get_object_ddl(
        &self,
        owner: &str,
        object_type: ObjectType,
        object_name: &str,
    ) -> Result<Vec<RawDdlText>> {
        self.fetch_texts(SQL_OBJECT_DDL, &[&object_type.as_str(), &object_name, &owner])
    }
}

/// Stamps every column with the highest `column_id` of its table.
fn fill_max_column_id(columns: &mut [ColumnDescriptor]) {
    let max = columns.iter().map(|c| c.column_id).max().unwrap_or(0);
    for c in columns.iter_mut() {
        c.max_column_id = max;
    }
}
