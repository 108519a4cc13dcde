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

//! Infrastructure adapter for writing DDL scripts to local storage.

use crate::domain::errors::Result;
use crate::ports::script_port::ScriptPort;
use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Concrete implementation of `ScriptPort` for the local filesystem.
///
/// Each script is written to a hidden temporary file in the output directory
/// and then renamed into place, so a failed run never leaves a truncated script.
pub struct LocalScriptAdapter {
    output_dir: PathBuf,
}

impl LocalScriptAdapter {
    /// Creates the adapter, creating `output_dir` if it does not exist.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ScriptPort for LocalScriptAdapter {
    fn write_script(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        let tmp_path = self.output_dir.join(format!(".{}.tmp", file_name));

        let write = || -> std::io::Result<()> {
            let mut f = File::create(&tmp_path)?;
            f.write_all(content.as_bytes())?;
            f.sync_all()?;
            fs::rename(&tmp_path, &path)
        };
        if let Err(e) = write() {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!("Wrote {} ({} bytes)", path.display(), content.len());
        Ok(path)
    }
}
