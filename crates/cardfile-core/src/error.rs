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

//! Fatal error types for reading and writing cardfile streams.
//!
//! Only problems that make the stream itself unusable are errors. Format
//! problems (unknown keys, bad enum names, unparsable scalars) are reported
//! as [`Diagnostic`](crate::Diagnostic)s and never abort a read.

use std::fmt;
use thiserror::Error;

/// The kind of fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflectErrorKind {
    /// The underlying stream could not be opened, read or written.
    Io,
    /// A configured resource limit was exceeded.
    Limit,
}

impl fmt::Display for ReflectErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IOError"),
            Self::Limit => write!(f, "LimitError"),
        }
    }
}

/// A fatal error that aborted the current load or store.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct ReflectError {
    /// The kind of error.
    pub kind: ReflectErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when unknown).
    pub line: usize,
    /// Name of the stream, usually a file name.
    pub source_name: Option<String>,
}

impl ReflectError {
    /// Create a new error.
    pub fn new(kind: ReflectErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            source_name: None,
        }
    }

    /// Attach the stream name.
    pub fn with_source(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    pub fn io(message: impl Into<String>, line: usize) -> Self {
        Self::new(ReflectErrorKind::Io, message, line)
    }

    pub fn limit(message: impl Into<String>, line: usize) -> Self {
        Self::new(ReflectErrorKind::Limit, message, line)
    }
}

impl From<std::io::Error> for ReflectError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), 0)
    }
}

/// Result type for cardfile operations.
pub type ReflectResult<T> = Result<T, ReflectError>;
