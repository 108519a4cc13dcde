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

//! # Script Port
//!
//! Defines where finished DDL scripts go. A script is handed over complete,
//! so an adapter can write it in one step.

use crate::domain::errors::Result;
use std::path::PathBuf;

pub trait ScriptPort: Send + Sync {
    /// Stores `content` under `file_name` and returns where it ended up.
    fn write_script(&self, file_name: &str, content: &str) -> Result<PathBuf>;
}
