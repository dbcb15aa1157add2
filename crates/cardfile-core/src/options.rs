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

//! Reader and writer configuration.
//!
//! [`ReadOptions`] supports both direct field access and a fluent builder:
//!
//! ```
//! use cardfile_core::ReadOptions;
//!
//! let opts = ReadOptions::builder()
//!     .indent_width(4)
//!     .max_depth(16)
//!     .source_name("cards.txt")
//!     .build();
//! assert_eq!(opts.indent_width, 4);
//! assert_eq!(opts.limits.max_indent_depth, 16);
//! ```

use crate::limits::Limits;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of spaces that make up one indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Options for reading a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReadOptions {
    /// Security limits.
    pub limits: Limits,
    /// Spaces per indentation level. A tab always counts as one level.
    pub indent_width: usize,
    /// Stream name used in diagnostics and errors.
    pub source_name: Option<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            indent_width: DEFAULT_INDENT_WIDTH,
            source_name: None,
        }
    }
}

impl ReadOptions {
    /// Create a new builder for ReadOptions.
    pub fn builder() -> ReadOptionsBuilder {
        ReadOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of [`ReadOptions`].
#[derive(Debug, Clone, Default)]
pub struct ReadOptionsBuilder {
    options: ReadOptions,
}

impl ReadOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth of open blocks.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.limits.max_indent_depth = depth;
        self
    }

    /// Set the maximum physical line length in bytes.
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.options.limits.max_line_length = length;
        self
    }

    /// Set the maximum block string size in bytes.
    pub fn max_block_string_size(mut self, size: usize) -> Self {
        self.options.limits.max_block_string_size = size;
        self
    }

    /// Set the maximum number of elements per sequence.
    pub fn max_sequence_len(mut self, len: usize) -> Self {
        self.options.limits.max_sequence_len = len;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.options.limits = limits;
        self
    }

    /// Set how many spaces make up one indentation level.
    ///
    /// A width of zero is treated as one.
    pub fn indent_width(mut self, width: usize) -> Self {
        self.options.indent_width = width.max(1);
        self
    }

    /// Name the stream for diagnostics.
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.options.source_name = Some(name.into());
        self
    }

    /// Build the options.
    pub fn build(self) -> ReadOptions {
        self.options
    }
}

/// Indentation written for each nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndentStyle {
    /// One tab per level.
    #[default]
    Tab,
    /// The given number of spaces per level.
    Spaces(usize),
}

impl IndentStyle {
    /// The whitespace for one level.
    pub fn unit(&self) -> String {
        match self {
            Self::Tab => "\t".to_string(),
            Self::Spaces(n) => " ".repeat((*n).max(1)),
        }
    }
}

/// Options for writing a stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WriteOptions {
    /// Indentation style.
    pub indent: IndentStyle,
    /// Leave out [`Defaultable`](crate::Defaultable) fields that still hold
    /// their default.
    pub skip_defaults: bool,
}

impl WriteOptions {
    /// Use `n` spaces per level.
    pub fn with_spaces(mut self, n: usize) -> Self {
        self.indent = IndentStyle::Spaces(n);
        self
    }

    /// Use tabs.
    pub fn with_tabs(mut self) -> Self {
        self.indent = IndentStyle::Tab;
        self
    }

    /// Leave out fields that still hold their default.
    pub fn skip_defaults(mut self, skip: bool) -> Self {
        self.skip_defaults = skip;
        self
    }
}
