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

//! CLI command implementations

mod check;
mod completion;
mod format;

pub use check::{check, OutputFormat};
pub use completion::generate_completion_for_command;
pub use format::{format, FormatOptions};

use crate::error::CliError;
use cardfile_core::{
    Diagnostic, ReadNew, ReadOptions, Reflect, ReflectError, WriteOptions,
};
use cardfile_model::{Card, CardSet, Field};
use std::fs;
use std::io::{self, Cursor, Write};
use std::str::FromStr;

/// Default maximum file size (1 GB).
/// Can be overridden via the `CARDFILE_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn max_file_size() -> u64 {
    std::env::var("CARDFILE_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file, refusing files above the size limit before reading them.
///
/// Invalid UTF-8 is passed through to the reader, which replaces and
/// reports it.
pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    let max = max_file_size();
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }
    fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file, or to stdout if no path is given.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// The top-level type a document is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Card,
    Field,
    Set,
}

impl FromStr for DocumentKind {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "field" => Ok(Self::Field),
            "set" => Ok(Self::Set),
            _ => Err(CliError::UnknownKind(s.to_string())),
        }
    }
}

/// A document read and written back.
#[derive(Debug, Clone)]
pub struct Processed {
    pub canonical: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl DocumentKind {
    /// Read `content` as this kind and write it back canonically.
    pub fn process(
        self,
        content: &[u8],
        read: ReadOptions,
        write: &WriteOptions,
    ) -> Result<Processed, ReflectError> {
        match self {
            Self::Card => process_as::<Card>(content, read, write),
            Self::Field => process_as::<Field>(content, read, write),
            Self::Set => process_as::<CardSet>(content, read, write),
        }
    }
}

fn process_as<T: Reflect + ReadNew + Clone>(
    content: &[u8],
    read: ReadOptions,
    write: &WriteOptions,
) -> Result<Processed, ReflectError> {
    let loaded = cardfile_core::from_reader::<T, _>(Cursor::new(content), read)?;
    Ok(Processed {
        canonical: cardfile_core::to_string_with(&loaded.value, write),
        diagnostics: loaded.diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("card".parse::<DocumentKind>().unwrap(), DocumentKind::Card);
        assert_eq!("Set".parse::<DocumentKind>().unwrap(), DocumentKind::Set);
        assert!(matches!(
            "deck".parse::<DocumentKind>(),
            Err(CliError::UnknownKind(kind)) if kind == "deck"
        ));
    }

    #[test]
    fn test_process_card() {
        let processed = DocumentKind::Card
            .process(
                b"cost: 2\nname: Shock\n",
                ReadOptions::default(),
                &WriteOptions::default(),
            )
            .unwrap();
        assert!(processed.canonical.starts_with("name: Shock\ncost: 2\n"));
        assert!(processed.diagnostics.is_empty());
    }

    #[test]
    fn test_process_reports_unknown_key() {
        let processed = DocumentKind::Set
            .process(b"gmae: magic\n", ReadOptions::default(), &WriteOptions::default())
            .unwrap();
        assert_eq!(processed.diagnostics.len(), 1);
        assert!(!processed.canonical.contains("gmae"));
    }
}
