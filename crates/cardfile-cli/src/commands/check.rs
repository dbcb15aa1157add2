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

//! Check command - read documents and report diagnostics

use super::{read_file, DocumentKind, Processed};
use crate::error::CliError;
use cardfile_core::{Diagnostic, ReadOptions, Severity, WriteOptions};
use colored::Colorize;
use rayon::prelude::*;
use std::str::FromStr;
use tracing::debug;

/// How `check` prints its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            _ => Ok(Self::Text),
        }
    }
}

/// Read every file as `kind` and report what the reader found.
///
/// Files are read in parallel; the report keeps the order of `files`.
///
/// # Errors
///
/// Fails if any file cannot be read, or with `warn_error` if any file has a
/// diagnostic of warning severity or above.
pub fn check(
    files: &[String],
    kind: &str,
    format: OutputFormat,
    indent_width: usize,
    warn_error: bool,
) -> Result<(), CliError> {
    let kind = DocumentKind::from_str(kind)?;
    debug!(files = files.len(), ?kind, "checking");

    let results: Vec<(&String, Result<Processed, CliError>)> = files
        .par_iter()
        .map(|file| (file, check_one(file, kind, indent_width)))
        .collect();

    match format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Text => print_text(&results),
    }

    if let Some(err) = results.iter().find_map(|(_, result)| result.as_ref().err()) {
        return Err(err.clone());
    }
    let count = results
        .iter()
        .filter_map(|(_, result)| result.as_ref().ok())
        .flat_map(|processed| &processed.diagnostics)
        .filter(|d| d.severity() >= Severity::Warning)
        .count();
    if warn_error && count > 0 {
        return Err(CliError::Diagnostics { count });
    }
    Ok(())
}

fn check_one(file: &str, kind: DocumentKind, indent_width: usize) -> Result<Processed, CliError> {
    let content = read_file(file)?;
    let options = ReadOptions::builder()
        .indent_width(indent_width)
        .source_name(file)
        .build();
    Ok(kind.process(&content, options, &WriteOptions::default())?)
}

fn print_text(results: &[(&String, Result<Processed, CliError>)]) {
    for (file, result) in results {
        match result {
            Ok(processed) if processed.diagnostics.is_empty() => {
                println!("{} {}", "✓".green().bold(), file);
            }
            Ok(processed) => {
                println!(
                    "{} {} - {} issue(s) found:",
                    "!".yellow().bold(),
                    file,
                    processed.diagnostics.len()
                );
                for diag in &processed.diagnostics {
                    println!("  {}", format_diagnostic(file, diag));
                }
            }
            Err(err) => println!("{} {}: {}", "✗".red().bold(), file, err),
        }
    }
}

fn format_diagnostic(file: &str, diag: &Diagnostic) -> String {
    let severity = match diag.severity() {
        Severity::Error => "error".red(),
        Severity::Warning => "warning".yellow(),
        Severity::Hint => "hint".blue(),
    };
    let location = match diag.line() {
        Some(line) => format!("{}:{}", file, line),
        None => file.to_string(),
    };
    format!("{}: {} [{}]: {}", location, severity, diag.kind(), diag.message())
}

fn print_json(results: &[(&String, Result<Processed, CliError>)]) -> Result<(), CliError> {
    let report: Vec<serde_json::Value> = results
        .iter()
        .map(|(file, result)| match result {
            Ok(processed) => serde_json::json!({
                "file": file,
                "diagnostics": processed.diagnostics,
            }),
            Err(err) => serde_json::json!({
                "file": file,
                "error": err.to_string(),
            }),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardfile_core::DiagnosticKind;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_format_diagnostic() {
        colored::control::set_override(false);
        let diag = Diagnostic::warning(DiagnosticKind::UnexpectedKey, "unexpected key 'x'")
            .with_line(3);
        assert_eq!(
            format_diagnostic("set.txt", &diag),
            "set.txt:3: warning [unexpected-key]: unexpected key 'x'"
        );
    }
}
