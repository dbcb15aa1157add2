// Dweve Cardfile - Indentation-Structured Reflection Format
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error type for the cardfile CLI.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the error and
//! exits with a failure code.

use cardfile_core::ReflectError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from CLI commands.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("I/O error for '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// The input is larger than `CARDFILE_MAX_FILE_SIZE` allows.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The reader gave up on a document.
    #[error("{0}")]
    Read(#[from] ReflectError),

    /// Diagnostics were found where none are allowed.
    #[error("{count} diagnostic(s) reported")]
    Diagnostics { count: usize },

    /// `format --check` found a file that is not in canonical form.
    #[error("File '{0}' is not in canonical form")]
    NotCanonical(PathBuf),

    #[error("JSON format error: {0}")]
    Json(String),

    #[error("Unknown document kind '{0}'. Supported kinds: card, field, set")]
    UnknownKind(String),

    #[error("Unsupported shell: '{0}'. Supported shells: bash, zsh, fish, powershell, elvish")]
    UnknownShell(String),
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json(source.to_string())
    }
}
