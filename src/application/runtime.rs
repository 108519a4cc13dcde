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

//! # Runtime Context
//!
//! Sets up the resources a run needs: a single pooled Oracle connection,
//! prepared for `DBMS_METADATA` extraction.
//!
//! Generation is sequential, so the pool holds exactly one connection. The
//! pool hands it out as a guard that goes back on drop, including on errors.

use crate::config::AppConfig;
use crate::domain::errors::{DdlError, Result};
use crate::infrastructure::oracle::connection_manager::OracleConnectionManager;
use log::info;
use r2d2::Pool;
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for the connection before giving up.
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// `RuntimeContext` holds shared resources that exist for the entire run.
pub struct RuntimeContext {
    pub pool: Arc<Pool<OracleConnectionManager>>,
}

impl RuntimeContext {
    /// Connects to Oracle. Fails fast if the database cannot be reached.
    pub fn init(config: &AppConfig) -> Result<Self> {
        let conn_str = config.database.get_connection_string();
        let password = config.database.resolve_password();

        info!(
            "Connecting to {} as {}...",
            conn_str, config.database.username
        );

        let manager = OracleConnectionManager::new(&config.database.username, &password, &conn_str);

        let pool = Pool::builder()
            .max_size(1)
            .connection_timeout(CONNECTION_TIMEOUT)
            .build(manager)
            .map_err(|e| {
                DdlError::OracleError(format!("Failed to connect to {}: {}", conn_str, e))
            })?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }
}
