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

//! # Object Dispatcher
//!
//! The application logic of a run. It asks the metadata port which objects
//! exist, renders each one and hands finished scripts to the script port.
//!
//! Two modes:
//! 1. **Single object**: one file per matching object, `<owner>_<type>_<name>.sql`.
//! 2. **Whole schema**: one file per object type, `<schema>_<type>.sql`.
//!
//! Tables are rebuilt from column metadata; every other type is passed
//! through from `DBMS_METADATA` with a few text rules applied. A script is
//! assembled completely in memory before it is written.

use crate::domain::constraint_assembler;
use crate::domain::entities::{DbObject, ObjectType, RunSummary, ScriptReport};
use crate::domain::errors::{DdlError, Result};
use crate::domain::identifier::ObjectSelector;
use crate::domain::rewrite_rules;
use crate::domain::table_assembler;
use crate::ports::metadata_port::MetadataPort;
use crate::ports::script_port::ScriptPort;
use log::{debug, info, warn};
use serde_json::json;
use std::sync::Arc;

const BANNER_RULE: &str =
    "/* ************************************************************************************ */";

/// Drives DDL generation for one schema.
pub struct Dispatcher {
    metadata_port: Arc<dyn MetadataPort>,
    script_port: Arc<dyn ScriptPort>,
    schema: String,
    object_types: Vec<ObjectType>,
    write_report: bool,
}

impl Dispatcher {
    /// `schema` must already be normalized; `object_types` is the processing order.
    pub fn new(
        metadata_port: Arc<dyn MetadataPort>,
        script_port: Arc<dyn ScriptPort>,
        schema: String,
        object_types: Vec<ObjectType>,
    ) -> Self {
        Self {
            metadata_port,
            script_port,
            schema,
            object_types,
            write_report: false,
        }
    }

    /// Also write a JSON run report through the script port.
    pub fn with_report(mut self, write_report: bool) -> Self {
        self.write_report = write_report;
        self
    }

    /// Entry point for a run.
    pub fn run(&self, selector: &ObjectSelector) -> Result<RunSummary> {
        let summary = match selector {
            ObjectSelector::All => self.generate_schema()?,
            ObjectSelector::Named(name) => self.generate_object(name)?,
        };

        if self.write_report {
            self.generate_report(&summary)?;
        }
        Ok(summary)
    }

    /// Writes one script per object named `name`.
    ///
    /// Unknown names and unsupported types are reported, never fatal.
    pub fn generate_object(&self, name: &str) -> Result<RunSummary> {
        let mut summary = RunSummary::new(&self.schema);
        let objects = self
            .metadata_port
            .list_objects(&self.schema, None, Some(name))?;

        if objects.is_empty() {
            warn!(
                "No object found by the name {} in schema {}. Either provide a valid object name or ALL to generate DDL for all objects in the schema.",
                name, self.schema
            );
            summary.not_found.push(name.to_string());
            return Ok(summary);
        }

        for object in objects {
            let object_type = match object.recognized_type() {
                Some(t) if self.object_types.contains(&t) => t,
                _ => {
                    warn!(
                        "{} is a {}, which is not a valid object type for DDL generation",
                        object.object_name, object.object_type
                    );
                    summary.unsupported.push(format!(
                        "{}.{} ({})",
                        object.owner, object.object_name, object.object_type
                    ));
                    continue;
                }
            };

            info!(
                "Creating DDL for {} : {}.{}",
                object_type, object.owner, object.object_name
            );
            let mut content = String::new();
            for piece in self.render_object(&object, object_type)? {
                content.push_str(&piece);
                content.push('\n');
            }

            let file_name = format!(
                "{}_{}_{}.sql",
                object.owner, object_type, object.object_name
            );
            let path = self.script_port.write_script(&file_name, &content)?;
            summary.scripts.push(ScriptReport {
                object_type,
                path,
                objects: 1,
            });
        }

        Ok(summary)
    }

    /// Writes one script per object type holding every object of that type.
    pub fn generate_schema(&self) -> Result<RunSummary> {
        info!("Generating DDL for all objects in schema : {}", self.schema);
        let mut summary = RunSummary::new(&self.schema);

        for &object_type in &self.object_types {
            info!("Creating DDL for : {} ...", object_type);
            let objects = self
                .metadata_port
                .list_objects(&self.schema, Some(object_type), None)?;

            let mut content = String::new();
            let mut current_owner: Option<&str> = None;
            let mut object_count = 0;

            for object in &objects {
                if current_owner != Some(object.owner.as_str()) {
                    content.push_str(&owner_banner(&object.owner));
                    current_owner = Some(object.owner.as_str());
                }
                content.push('\n');
                for piece in self.render_object(object, object_type)? {
                    content.push_str(&piece);
                    content.push('\n');
                }
                object_count += 1;
            }

            if object_count > 0 {
                content.push_str(&format!(
                    "\n /* This file has {} {} in this file.*/\n",
                    object_count, object_type
                ));
            } else {
                info!("No {} objects found in schema {}", object_type, self.schema);
            }

            let file_name = format!("{}_{}.sql", self.schema, object_type);
            let path = self.script_port.write_script(&file_name, &content)?;
            summary.scripts.push(ScriptReport {
                object_type,
                path,
                objects: object_count,
            });
        }

        Ok(summary)
    }

    /// Renders one object into the pieces of its script, in output order.
    fn render_object(&self, object: &DbObject, object_type: ObjectType) -> Result<Vec<String>> {
        match object_type {
            ObjectType::Table => self.render_table(&object.owner, &object.object_name),
            other => {
                let ddl = self
                    .metadata_port
                    .get_object_ddl(&object.owner, other, &object.object_name)?;
                Ok(ddl
                    .iter()
                    .map(|text| rewrite_rules::rewrite_object_ddl(text, &object.owner))
                    .collect())
            }
        }
    }

    /// `CREATE TABLE`, then primary/unique keys, then foreign keys.
    fn render_table(&self, owner: &str, table: &str) -> Result<Vec<String>> {
        let columns = self.metadata_port.get_table_columns(owner, table)?;
        if columns.is_empty() {
            warn!("Table {}.{} has no visible columns", owner, table);
        }
        let keys = self.metadata_port.get_primary_unique_keys(owner, table)?;
        let foreign_keys = self.metadata_port.get_foreign_keys(owner, table)?;
        debug!(
            "{}.{}: {} columns, {} key columns, {} foreign keys",
            owner,
            table,
            columns.len(),
            keys.len(),
            foreign_keys.len()
        );

        let mut pieces = table_assembler::assemble_table(&columns);
        pieces.extend(constraint_assembler::assemble_key_constraints(&keys));
        pieces.extend(constraint_assembler::assemble_foreign_keys(owner, &foreign_keys));
        Ok(pieces)
    }

    fn generate_report(&self, summary: &RunSummary) -> Result<()> {
        let report = json!({
            "summary": {
                "schema": summary.schema,
                "scripts": summary.scripts.len(),
                "objects": summary.object_count(),
                "unsupported": summary.unsupported.len(),
                "not_found": summary.not_found.len(),
            },
            "details": summary,
        });
        let body = serde_json::to_string_pretty(&report)
            .map_err(|e| DdlError::MetadataError(format!("Failed to encode run report: {}", e)))?;

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let path = self
            .script_port
            .write_script(&format!("report_{}.json", timestamp), &body)?;
        info!("Run report written to {}", path.display());
        Ok(())
    }
}

fn owner_banner(owner: &str) -> String {
    format!(
        "\n{}\n/*Object owner = {}.*/\n{}\n",
        BANNER_RULE, owner, BANNER_RULE
    )
}
