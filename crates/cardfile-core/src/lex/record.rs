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

//! Logical line records.
//!
//! The tokenizer turns physical lines into [`LineRecord`]s: blank and
//! comment lines are dropped, `key: value` is split on the first colon and
//! `key: """` block strings are folded into a single multi-line value.
//!
//! A key that cannot be spelled bare (empty, padded, holding `:`, or
//! starting with `#` or `"`) is written quoted: `"a:b": value`. Inside the
//! quotes `\\`, `\"`, `\n` and `\r` are escapes.

use super::indent::{calculate_indent, strip_indent};
use super::line::{LineReader, RawLine};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::error::{ReflectError, ReflectResult};
use crate::options::ReadOptions;
use std::borrow::Cow;
use std::io::BufRead;

/// Opening and closing sentinel of a block string.
pub const BLOCK_STRING_DELIMITER: &str = "\"\"\"";

/// One logical line of input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineRecord {
    /// Indentation level.
    pub indent: usize,
    /// Key as spelled in the input; empty for nameless value lines.
    pub key: String,
    /// Trimmed value, or the joined content of a block string.
    pub value: String,
    /// Line number of the key (1-based).
    pub line: usize,
    /// The key was written in quoted form.
    pub quoted: bool,
}

impl LineRecord {
    /// True for a bare value line without a key.
    #[inline]
    pub fn is_nameless(&self) -> bool {
        self.key.is_empty() && !self.quoted
    }
}

/// Split trimmed line content into key and value.
///
/// Returns the key, the value and whether a colon was present.
pub fn split_key_value(content: &str) -> (&str, &str, bool) {
    match content.find(':') {
        Some(pos) => (content[..pos].trim(), content[pos + 1..].trim(), true),
        None => ("", content.trim(), false),
    }
}

/// True if `key` must be quoted to read back unchanged.
pub fn needs_quoted_key(key: &str) -> bool {
    key.is_empty()
        || key != key.trim()
        || key.starts_with('#')
        || key.starts_with('"')
        || key.contains([':', '\n', '\r'])
}

/// Spell `key` for output, quoting it when a bare key would not read back.
pub fn quote_key(key: &str) -> Cow<'_, str> {
    if !needs_quoted_key(key) {
        return Cow::Borrowed(key);
    }
    let mut quoted = String::with_capacity(key.len() + 2);
    quoted.push('"');
    for c in key.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Split trimmed line content that starts with a quoted key.
///
/// Returns the unescaped key and the value, or `None` if the content is not
/// a well-formed quoted key followed by a colon.
pub fn split_quoted_key(content: &str) -> Option<(String, &str)> {
    let body = content.strip_prefix('"')?;
    let mut key = String::new();
    let mut chars = body.char_indices();
    while let Some((pos, c)) = chars.next() {
        match c {
            '"' => {
                let rest = body[pos + 1..].trim_start().strip_prefix(':')?;
                return Some((key, rest.trim()));
            }
            '\\' => match chars.next()?.1 {
                'n' => key.push('\n'),
                'r' => key.push('\r'),
                c @ ('"' | '\\') => key.push(c),
                _ => return None,
            },
            c => key.push(c),
        }
    }
    None
}

/// Produces [`LineRecord`]s from a byte stream.
pub struct Tokenizer<R: BufRead> {
    lines: LineReader<R>,
    indent_width: usize,
    max_block_string_size: usize,
    pending: Vec<Diagnostic>,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R, options: &ReadOptions) -> Self {
        Self {
            lines: LineReader::new(reader, options.limits.max_line_length),
            indent_width: options.indent_width.max(1),
            max_block_string_size: options.limits.max_block_string_size,
            pending: Vec::new(),
        }
    }

    /// Number of the last physical line read.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.lines.line_number()
    }

    /// Take the diagnostics produced since the last call.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.pending)
    }

    /// Read the next logical line, or `None` at end of input.
    pub fn next_record(&mut self) -> ReflectResult<Option<LineRecord>> {
        loop {
            let Some(raw) = self.next_physical()? else {
                return Ok(None);
            };
            let Some(info) = calculate_indent(&raw.text, self.indent_width) else {
                continue;
            };
            let content = raw.text.trim();
            if content.starts_with('#') {
                continue;
            }

            let (key, value, keyed, quoted) = match split_quoted_key(content) {
                Some((key, value)) => (key, value, true, true),
                None => {
                    let (key, value, keyed) = split_key_value(content);
                    (key.to_string(), value, keyed, false)
                }
            };
            let mut record = LineRecord {
                indent: info.level,
                key,
                value: value.to_string(),
                line: raw.number,
                quoted,
            };
            if keyed && value == BLOCK_STRING_DELIMITER {
                record.value = self.read_block_string(info.level, raw.number)?;
            }
            return Ok(Some(record));
        }
    }

    fn next_physical(&mut self) -> ReflectResult<Option<RawLine>> {
        let raw = self.lines.next_line()?;
        if let Some(raw) = &raw {
            if raw.lossy {
                self.pending.push(
                    Diagnostic::warning(
                        DiagnosticKind::InvalidEncoding,
                        "invalid UTF-8 replaced with U+FFFD",
                    )
                    .with_line(raw.number),
                );
            }
        }
        Ok(raw)
    }

    fn read_block_string(&mut self, key_indent: usize, start_line: usize) -> ReflectResult<String> {
        let mut content: Vec<String> = Vec::new();
        let mut size = 0usize;

        loop {
            let Some(mut raw) = self.next_physical()? else {
                break;
            };
            if raw.text.trim() == BLOCK_STRING_DELIMITER {
                return Ok(content.join("\n"));
            }
            if let Some(info) = calculate_indent(&raw.text, self.indent_width) {
                if info.level <= key_indent {
                    // Already reported once
                    raw.lossy = false;
                    self.lines.push_back(raw);
                    break;
                }
            }

            let stripped = strip_indent(&raw.text, key_indent + 1, self.indent_width);
            size += stripped.len() + 1;
            if size > self.max_block_string_size {
                return Err(ReflectError::limit(
                    format!(
                        "block string exceeds limit of {} bytes",
                        self.max_block_string_size
                    ),
                    start_line,
                ));
            }
            content.push(stripped.to_string());
        }

        while content.last().is_some_and(|line| line.trim().is_empty()) {
            content.pop();
        }
        self.pending.push(
            Diagnostic::warning(
                DiagnosticKind::UnterminatedBlockString,
                "block string not closed with \"\"\"",
            )
            .with_line(start_line),
        );
        Ok(content.join("\n"))
    }
}
