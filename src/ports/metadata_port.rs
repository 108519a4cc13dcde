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

//! # Metadata Port
//!
//! In Hexagonal Architecture, a **Port** is like a "Slot" or a "Contract".
//!
//! This Port defines what it means to "read metadata" from the source
//! database. The dispatcher only ever talks to this trait, so the Oracle
//! adapter can be swapped for an in-memory mock in tests.

use crate::domain::entities::{ColumnDescriptor, DbObject, KeyColumn, ObjectType, RawDdlText};
use crate::domain::errors::Result;

/// `MetadataPort` is a **Trait**. Think of it as an Interface.
pub trait MetadataPort: Send + Sync {
    /// Lists objects of `schema`, ordered by owner, object type and object name.
    ///
    /// `None` for a filter means "any".
    fn list_objects(
        &self,
        schema: &str,
        object_type: Option<ObjectType>,
        object_name: Option<&str>,
    ) -> Result<Vec<DbObject>>;

    /// Returns every visible column of a table, ordered by `column_id`.
    fn get_table_columns(&self, owner: &str, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// Returns the columns of the table's primary and unique keys.
    fn get_primary_unique_keys(&self, owner: &str, table: &str) -> Result<Vec<KeyColumn>>;

    /// Returns one pre-rendered DDL blob per foreign key of the table.
    fn get_foreign_keys(&self, owner: &str, table: &str) -> Result<Vec<RawDdlText>>;

    /// Returns the pre-rendered DDL of a non-table object.
    fn get_object_ddl(
        &self,
        owner: &str,
        object_type: ObjectType,
        object_name: &str,
    ) -> Result<Vec<RawDdlText>>;
}
