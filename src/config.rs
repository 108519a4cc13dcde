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

//! # Configuration
//!
//! Settings come from two places: an optional YAML/JSON file and the command
//! line. Command line values win. The command line mirrors the classic usage:
//!
//! ```text
//! oracle-snowflake-ddl USER PASSWORD HOST PORT SERVICE [OBJECT_NAME|ALL] -d OUT_DIR
//! ```

use crate::domain::entities::ObjectType;
use crate::domain::errors::{DdlError, Result};
use crate::domain::identifier::{self, ObjectSelector};
use clap::Parser;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Environment variable consulted when no password is configured.
pub const PASSWORD_ENV: &str = "ORACLE_PASSWORD";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Connecting user; also the schema whose objects are scripted.
    #[serde(default)]
    pub username: String,
    pub password: Option<String>,
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub service: String,
    /// Full connect string, used instead of host/port/service when set.
    pub connection_string: Option<String>,
}

fn default_port() -> u16 {
    1521
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GenerateConfig {
    /// An object name, or `ALL` for the whole schema.
    pub object_name: Option<String>,
    /// Where scripts are written. Defaults to the current directory.
    pub output_dir: Option<String>,
    /// Restricts a run to some of the recognized object types.
    pub object_types: Option<Vec<String>>,
    /// Writes `report_<timestamp>.json` next to the scripts.
    pub write_report: Option<bool>,
}

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Generates Snowflake DDL from an Oracle schema, for a single object or ALL objects."
)]
pub struct CliArgs {
    /// Database user / schema name.
    pub user_name: Option<String>,
    /// Database password (falls back to ORACLE_PASSWORD).
    pub password: Option<String>,
    /// Database host name, e.g. dbhost.example.com
    pub host_name: Option<String>,
    /// Database port, e.g. 1521
    pub port: Option<u16>,
    /// Database service name.
    pub service_name: Option<String>,
    /// Object name to script, or ALL for every object in the schema.
    pub object_name: Option<String>,

    /// Directory to write DDL scripts to. Default is the current directory.
    #[arg(short = 'd', long = "directory")]
    pub directory: Option<String>,

    /// Path to configuration file (YAML or JSON).
    #[arg(short, long)]
    pub config: Option<String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: AppConfig = if path.ends_with(".json") {
            serde_json::from_str(&contents)
                .map_err(|e| DdlError::ConfigError(format!("{}: {}", path, e)))?
        } else {
            serde_yaml::from_str(&contents)
                .map_err(|e| DdlError::ConfigError(format!("{}: {}", path, e)))?
        };

        Ok(config)
    }

    /// Builds a configuration purely from command line arguments.
    pub fn from_cli(args: &CliArgs) -> Self {
        let mut config = Self {
            database: DatabaseConfig {
                username: String::new(),
                password: None,
                host: String::new(),
                port: default_port(),
                service: String::new(),
                connection_string: None,
            },
            generate: GenerateConfig::default(),
        };
        config.merge_cli(args);
        config
    }

    pub fn merge_cli(&mut self, args: &CliArgs) {
        if let Some(u) = &args.user_name { self.database.username = u.clone(); }
        if let Some(p) = &args.password { self.database.password = Some(p.clone()); }
        if let Some(h) = &args.host_name { self.database.host = h.clone(); }
        if let Some(p) = args.port { self.database.port = p; }
        if let Some(s) = &args.service_name { self.database.service = s.clone(); }
        if let Some(o) = &args.object_name { self.generate.object_name = Some(o.clone()); }
        if let Some(d) = &args.directory { self.generate.output_dir = Some(d.clone()); }
    }

    /// Checks that everything needed for a run is present and well formed.
    pub fn validate(&self) -> Result<()> {
        if self.database.username.trim().is_empty() {
            return Err(DdlError::ConfigError("database user name is required".to_string()));
        }
        if self.database.connection_string.is_none()
            && (self.database.host.trim().is_empty() || self.database.service.trim().is_empty())
        {
            return Err(DdlError::ConfigError(
                "either host and service or a connection_string is required".to_string(),
            ));
        }
        self.schema()?;
        self.selector()?;
        self.object_types()?;
        Ok(())
    }

    /// The schema to script, normalized the way Oracle stores it.
    pub fn schema(&self) -> Result<String> {
        identifier::normalize_identifier(self.database.username.trim())
    }

    pub fn selector(&self) -> Result<ObjectSelector> {
        match &self.generate.object_name {
            Some(name) => ObjectSelector::parse(name),
            None => Err(DdlError::ConfigError(
                "an object name (or ALL) is required".to_string(),
            )),
        }
    }

    /// The object types to process, in processing order.
    pub fn object_types(&self) -> Result<Vec<ObjectType>> {
        let Some(names) = &self.generate.object_types else {
            return Ok(ObjectType::ALL.to_vec());
        };
        let requested = names
            .iter()
            .map(|n| n.parse::<ObjectType>())
            .collect::<Result<Vec<_>>>()?;
        Ok(ObjectType::ALL
            .into_iter()
            .filter(|t| requested.contains(t))
            .collect())
    }

    pub fn output_dir(&self) -> PathBuf {
        match &self.generate.output_dir {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    pub fn write_report(&self) -> bool {
        self.generate.write_report.unwrap_or(false)
    }
}

impl DatabaseConfig {
    /// Easy Connect string, `//host:port/service`, unless one was given explicitly.
    pub fn get_connection_string(&self) -> String {
        match &self.connection_string {
            Some(s) => s.clone(),
            None => format!("//{}:{}/{}", self.host, self.port, self.service),
        }
    }

    /// The configured password, else `ORACLE_PASSWORD`, else empty.
    pub fn resolve_password(&self) -> String {
        self.password
            .clone()
            .or_else(|| std::env::var(PASSWORD_ENV).ok())
            .unwrap_or_default()
    }
}
