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

//! Format command - rewrite a document in canonical form

use super::{read_file, write_output, DocumentKind};
use crate::error::CliError;
use cardfile_core::{ReadOptions, WriteOptions, DEFAULT_INDENT_WIDTH};
use std::str::FromStr;
use tracing::warn;

/// Options of the `format` command.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Output file; stdout if `None`.
    pub output: Option<String>,
    /// Only report whether the file is already canonical.
    pub check: bool,
    /// Indent with this many spaces instead of tabs.
    pub spaces: Option<usize>,
    /// Spaces per indentation level in the input; `spaces` if `None`.
    pub indent_width: Option<usize>,
    /// Leave out values that still hold their default.
    pub skip_defaults: bool,
}

impl FormatOptions {
    /// Indent width used to read the input.
    ///
    /// Without an explicit width, a file formatted with `--spaces N` reads
    /// back with the same N.
    pub fn read_indent_width(&self) -> usize {
        self.indent_width
            .or(self.spaces)
            .unwrap_or(DEFAULT_INDENT_WIDTH)
    }
}

/// Read `file` as `kind` and write it back canonically.
///
/// Diagnostics are printed to stderr; input they mention is not part of the
/// output.
///
/// # Errors
///
/// Fails if the file cannot be read or written, or in check mode if the
/// canonical text differs from the file.
pub fn format(file: &str, kind: &str, options: &FormatOptions) -> Result<(), CliError> {
    let kind = DocumentKind::from_str(kind)?;
    let content = read_file(file)?;

    let read = ReadOptions::builder()
        .indent_width(options.read_indent_width())
        .source_name(file)
        .build();
    let mut write = WriteOptions::default().skip_defaults(options.skip_defaults);
    if let Some(n) = options.spaces {
        write = write.with_spaces(n);
    }

    let processed = kind.process(&content, read, &write)?;
    for diag in &processed.diagnostics {
        eprintln!("{}", diag);
    }

    if options.check {
        let original = String::from_utf8_lossy(&content).replace("\r\n", "\n");
        let original = original.strip_prefix('\u{feff}').unwrap_or(original.as_str());
        if processed.canonical != original {
            warn!(file, "not in canonical form");
            return Err(CliError::NotCanonical(file.into()));
        }
        println!("File is in canonical form");
        Ok(())
    } else {
        write_output(&processed.canonical, options.output.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn options() -> FormatOptions {
        FormatOptions::default()
    }

    #[test]
    fn test_read_indent_width() {
        assert_eq!(options().read_indent_width(), DEFAULT_INDENT_WIDTH);
        let spaces = FormatOptions {
            spaces: Some(4),
            ..options()
        };
        assert_eq!(spaces.read_indent_width(), 4);
        let explicit = FormatOptions {
            indent_width: Some(3),
            ..spaces
        };
        assert_eq!(explicit.read_indent_width(), 3);
    }

    #[test]
    fn test_format_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "cost: 3\nname: Giant Growth\n").unwrap();

        let opts = FormatOptions {
            output: Some(output.display().to_string()),
            ..options()
        };
        format(&input.display().to_string(), "card", &opts).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("name: Giant Growth\ncost: 3\n"));
    }

    #[test]
    fn test_check_mode() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "cost: 3\n").unwrap();
        let path = input.display().to_string();

        let check = FormatOptions {
            check: true,
            ..options()
        };
        assert!(matches!(
            format(&path, "card", &check),
            Err(CliError::NotCanonical(_))
        ));

        let canonical = FormatOptions {
            output: Some(path.clone()),
            ..options()
        };
        format(&path, "card", &canonical).unwrap();
        format(&path, "card", &check).unwrap();
    }

    #[test]
    fn test_spaces_output_is_canonical_under_same_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("card.txt");
        fs::write(&input, "name: Bolt\nnotes: \"\"\"\n\tline one\n\tline two\n\t\"\"\"\n").unwrap();
        let path = input.display().to_string();

        let rewrite = FormatOptions {
            output: Some(path.clone()),
            spaces: Some(4),
            ..options()
        };
        format(&path, "card", &rewrite).unwrap();
        let written = fs::read_to_string(&input).unwrap();
        assert!(written.contains("notes: \"\"\"\n    line one\n    line two\n"));

        let check = FormatOptions {
            check: true,
            spaces: Some(4),
            ..options()
        };
        format(&path, "card", &check).unwrap();
    }
}
