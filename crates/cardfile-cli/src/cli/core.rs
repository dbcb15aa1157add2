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

//! Commands that read documents.

use crate::commands::{self, FormatOptions, OutputFormat};
use crate::error::CliError;
use cardfile_core::DEFAULT_INDENT_WIDTH;
use clap::Subcommand;

/// Document commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Read files and report diagnostics
    ///
    /// Each file is read as the given kind of document. Unknown keys,
    /// unknown enum names and unparsable values are reported; the exit
    /// status is a failure only if a file could not be read at all, or
    /// with -W if anything was reported.
    Check {
        /// Input file paths
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,

        /// Document kind (card, field, set)
        #[arg(short, long, default_value = "set")]
        kind: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Spaces per indentation level in the input
        #[arg(long, default_value_t = DEFAULT_INDENT_WIDTH)]
        indent_width: usize,

        /// Treat warnings as errors
        #[arg(short = 'W', long)]
        warn_error: bool,
    },

    /// Rewrite a file in canonical form
    ///
    /// Reads the file and writes it back with canonical key names, field
    /// order and indentation. Lines the reader could not place are dropped
    /// and reported on stderr.
    Format {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Document kind (card, field, set)
        #[arg(short, long, default_value = "set")]
        kind: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Indent with N spaces instead of tabs
        #[arg(long, value_name = "N")]
        spaces: Option<usize>,

        /// Spaces per indentation level in the input [default: --spaces N, or 2]
        #[arg(long, value_name = "N")]
        indent_width: Option<usize>,

        /// Leave out values that still hold their default
        #[arg(long)]
        skip_defaults: bool,

        /// Check only (exit 1 if not canonical)
        #[arg(short, long)]
        check: bool,
    },
}

impl CoreCommands {
    /// Execute the core command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Check {
                files,
                kind,
                format,
                indent_width,
                warn_error,
            } => {
                let format: OutputFormat = format.parse()?;
                commands::check(&files, &kind, format, indent_width, warn_error)
            }
            CoreCommands::Format {
                file,
                kind,
                output,
                spaces,
                indent_width,
                skip_defaults,
                check,
            } => {
                let options = FormatOptions {
                    output,
                    check,
                    spaces,
                    indent_width,
                    skip_defaults,
                };
                commands::format(&file, &kind, &options)
            }
        }
    }
}
