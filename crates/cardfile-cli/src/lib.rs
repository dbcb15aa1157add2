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

//! Cardfile CLI library: argument parsing and command implementations.
//!
//! # Commands
//!
//! - **check**: read files as cards, fields or sets and report diagnostics
//! - **format**: rewrite a file in canonical form
//! - **completion**: generate shell completion scripts
//!
//! ```no_run
//! use cardfile_cli::commands::{check, OutputFormat};
//!
//! # fn main() -> Result<(), cardfile_cli::error::CliError> {
//! let files = vec!["magic.txt".to_string()];
//! check(&files, "set", OutputFormat::Text, 2, true)?;
//! # Ok(())
//! # }
//! ```
//!
//! Input files larger than `CARDFILE_MAX_FILE_SIZE` bytes (default 1 GB)
//! are refused before reading.

pub mod cli;
pub mod commands;
pub mod error;
