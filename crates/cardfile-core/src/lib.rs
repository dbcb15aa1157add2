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

//! Cardfile core: reflection-driven reading and writing of the
//! indentation-structured cardfile format.
//!
//! ```text
//! name: Lightning Bolt
//! cost: 1
//! choices:
//! 	choice: red
//! 	choice: blue
//! ```
//!
//! Each participating type implements [`Reflect`] once, usually through
//! [`reflect_struct!`]. The same description drives the [`Reader`] and the
//! [`Writer`].
//!
//! ```
//! use cardfile_core::reflect_struct;
//!
//! #[derive(Debug, Default, Clone, PartialEq)]
//! struct Card {
//!     name: String,
//!     cost: u32,
//!     choices: Vec<String>,
//! }
//!
//! reflect_struct!(Card { name, cost, choices });
//!
//! let input = "name: Lightning Bolt\ncost: 1\nchoices:\n\tchoice: red\n\tchoice: blue\n";
//! let loaded = cardfile_core::from_str::<Card>(input).unwrap();
//! assert_eq!(loaded.value.cost, 1);
//! assert_eq!(loaded.value.choices, vec!["red", "blue"]);
//! assert!(loaded.diagnostics.is_empty());
//! assert_eq!(cardfile_core::to_string(&loaded.value), input);
//! ```
//!
//! # Errors and diagnostics
//!
//! Only I/O failures and exceeded [`Limits`] are errors. Everything else,
//! such as unknown keys, unknown enum names or unparsable numbers, becomes
//! a [`Diagnostic`] and the read continues.

pub mod adapters;
mod cache;
pub mod diagnostic;
pub mod error;
pub mod lex;
mod limits;
mod macros;
mod options;
mod reader;
mod reflect;
mod writer;

pub use adapters::{Defaultable, Script, Scriptable};
pub use cache::ResourceCache;
pub use diagnostic::{CountingSink, Diagnostic, DiagnosticKind, DiagnosticSink, Severity};
pub use error::{ReflectError, ReflectErrorKind, ReflectResult};
pub use limits::Limits;
pub use options::{IndentStyle, ReadOptions, ReadOptionsBuilder, WriteOptions, DEFAULT_INDENT_WIDTH};
pub use reader::Reader;
pub use reflect::{EnumVisitor, ReadNew, Reflect, ReflectEnum, Scalar, Tag};
pub use writer::{Writer, ELEMENT_NAME};

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Write};
use std::path::Path;

/// A value read from a stream together with the diagnostics reported while
/// reading it.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Loaded<T> {
    /// True if any diagnostic has at least warning severity.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity() >= Severity::Warning)
    }
}

/// Read a value from a string with default options.
pub fn from_str<T: Reflect + ReadNew>(input: &str) -> ReflectResult<Loaded<T>> {
    from_str_with(input, ReadOptions::default())
}

/// Read a value from a string.
pub fn from_str_with<T: Reflect + ReadNew>(
    input: &str,
    options: ReadOptions,
) -> ReflectResult<Loaded<T>> {
    from_reader(Cursor::new(input), options)
}

/// Read a value from a buffered stream.
pub fn from_reader<T: Reflect + ReadNew, R: BufRead>(
    input: R,
    options: ReadOptions,
) -> ReflectResult<Loaded<T>> {
    let mut reader = Reader::new(input, options);
    let value = reader.read_new_root();
    let diagnostics = reader.finish()?;
    Ok(Loaded { value, diagnostics })
}

/// Read a value from a file. The file name becomes the diagnostic source
/// unless the options already name one.
pub fn from_path<T: Reflect + ReadNew>(
    path: impl AsRef<Path>,
    mut options: ReadOptions,
) -> ReflectResult<Loaded<T>> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let file = File::open(path)
        .map_err(|e| ReflectError::io(format!("cannot open: {}", e), 0).with_source(name.clone()))?;
    if options.source_name.is_none() {
        options.source_name = Some(name);
    }
    from_reader(BufReader::new(file), options)
}

/// Populate an existing value, reporting diagnostics to `sink`.
///
/// Fields absent from the input keep their current values.
pub fn read_into<T: Reflect, R: BufRead, S: DiagnosticSink>(
    value: &mut T,
    input: R,
    options: ReadOptions,
    sink: S,
) -> ReflectResult<S> {
    let mut reader = Reader::with_sink(input, options, sink);
    reader.read_root(value);
    reader.finish()
}

/// Write a value with default options.
pub fn to_string<T: Reflect + Clone>(value: &T) -> String {
    to_string_with(value, &WriteOptions::default())
}

/// Write a value.
pub fn to_string_with<T: Reflect + Clone>(value: &T, options: &WriteOptions) -> String {
    let mut copy = value.clone();
    let mut writer = Writer::new(options.clone());
    writer.write_root(&mut copy);
    writer.finish()
}

/// Write a value to a stream.
pub fn to_writer<T: Reflect + Clone, W: Write>(
    value: &T,
    mut output: W,
    options: &WriteOptions,
) -> ReflectResult<()> {
    output.write_all(to_string_with(value, options).as_bytes())?;
    output.flush()?;
    Ok(())
}
