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

//! # Oracle to Snowflake DDL Generator
//!
//! Reads an Oracle schema's catalog and writes Snowflake-ready DDL scripts,
//! either for a single named object or for every table, view, procedure,
//! package, function and sequence in the schema.
//!
//! This application follows the **Hexagonal Architecture** (Ports and Adapters)
//! to keep the DDL rendering logic apart from Oracle and the filesystem.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ports;

use crate::application::dispatcher::Dispatcher;
use crate::application::runtime::RuntimeContext;
use crate::config::{AppConfig, CliArgs};
use crate::domain::entities::RunSummary;
use crate::domain::errors::Result;
use crate::infrastructure::local_storage::script_adapter::LocalScriptAdapter;
use crate::infrastructure::oracle::metadata::OracleMetadataAdapter;
use clap::Parser;
use log::{error, info};
use std::process;
use std::sync::Arc;

fn main() {
    // 1. Initialize Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Parse Arguments
    let args = CliArgs::parse();

    // 3. Load Config
    let mut config = if let Some(config_path) = &args.config {
        match AppConfig::from_file(config_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to load config: {}", e);
                process::exit(1);
            }
        }
    } else {
        AppConfig::from_cli(&args)
    };

    // Merge CLI overrides
    config.merge_cli(&args);

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        process::exit(1);
    }

    // 4. Run
    match run(&config) {
        Ok(summary) => {
            info!(
                "DDL generation finished. {} objects written to {} scripts.",
                summary.object_count(),
                summary.scripts.len()
            );
        }
        Err(e) => {
            error!("There is a problem with Oracle: {}", e);
            process::exit(1);
        }
    }
}

/// Wires the adapters together and runs the dispatcher.
///
/// The connection pool lives inside this function, so it is closed before
/// `main` reports a failure and exits.
fn run(config: &AppConfig) -> Result<RunSummary> {
    let schema = config.schema()?;
    let selector = config.selector()?;
    let object_types = config.object_types()?;

    let object_list: Vec<&str> = object_types.iter().map(|t| t.as_str()).collect();
    info!("Generating Snowflake DDL for object types: [{}]", object_list.join(", "));

    let scripts = Arc::new(LocalScriptAdapter::new(config.output_dir())?);
    info!(
        "Scripts will be generated in: {}",
        scripts.output_dir().display()
    );

    let runtime = RuntimeContext::init(config)?;
    let metadata = Arc::new(OracleMetadataAdapter::new(runtime.pool.clone()));

    Dispatcher::new(metadata, scripts, schema, object_types)
        .with_report(config.write_report())
        .run(&selector)
}
