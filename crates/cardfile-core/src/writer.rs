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

//! The write-side mirror of the reader.
//!
//! Block headers are emitted lazily: a nested object's `name:` line is held
//! back until its first child is written, so a scalar can still claim it
//! as `name: value`.
//!
//! Two kinds of text do not survive a read: a line inside a multi-line
//! value whose trimmed text is `"""`, and a `\r` at the end of a value line,
//! which the line reader takes as part of a CRLF terminator.

use crate::adapters::enum_name;
use crate::lex::{canonical_name, names_match, quote_key, singular_form, BLOCK_STRING_DELIMITER};
use crate::options::WriteOptions;
use crate::reflect::{ReadNew, Reflect, ReflectEnum, Scalar, Tag};
use std::collections::BTreeMap;

/// Element name used for sequences that have no field name.
pub const ELEMENT_NAME: &str = "item";

#[derive(Debug)]
struct Header {
    name: String,
    depth: usize,
}

/// Emits values as indentation-structured text.
///
/// # Examples
///
/// ```
/// use cardfile_core::{Tag, WriteOptions, Writer};
///
/// let mut writer = Writer::new(WriteOptions::default());
/// let mut choices = vec!["red".to_string(), "blue".to_string()];
/// writer.handle("choices", &mut choices);
/// assert_eq!(writer.finish(), "choices:\n\tchoice: red\n\tchoice: blue\n");
/// ```
#[derive(Debug)]
pub struct Writer {
    options: WriteOptions,
    indent_unit: String,
    output: String,
    depth: usize,
    pending: Option<Header>,
}

impl Writer {
    pub fn new(options: WriteOptions) -> Self {
        let indent_unit = options.indent.unit();
        Self {
            options,
            indent_unit,
            output: String::new(),
            depth: 0,
            pending: None,
        }
    }

    /// Write `value` at the top level.
    pub fn write_root<V: Reflect>(&mut self, value: &mut V) {
        value.reflect(self);
        self.flush_header();
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn finish(mut self) -> String {
        self.flush_header();
        self.output
    }

    fn open(&mut self, name: String) {
        self.flush_header();
        self.pending = Some(Header {
            name,
            depth: self.depth,
        });
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth -= 1;
        self.flush_header();
    }

    fn flush_header(&mut self) {
        if let Some(header) = self.pending.take() {
            self.push_line(header.depth, &format!("{}:", header.name));
        }
    }

    fn push_line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.output.push_str(&self.indent_unit);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Write `text` as the nameless value of the current block.
    fn write_text(&mut self, text: &str) {
        let (depth, key) = match self.pending.take() {
            Some(header) => (header.depth, Some(header.name)),
            None => (self.depth, None),
        };

        if needs_block_string(text) {
            let opener = match &key {
                Some(name) => format!("{}: {}", name, BLOCK_STRING_DELIMITER),
                None => format!(": {}", BLOCK_STRING_DELIMITER),
            };
            self.push_line(depth, &opener);
            for line in text.split('\n') {
                if line.is_empty() {
                    self.output.push('\n');
                } else {
                    self.push_line(depth + 1, line);
                }
            }
            self.push_line(depth + 1, BLOCK_STRING_DELIMITER);
            return;
        }

        let line = match key {
            Some(name) if text.is_empty() => format!("{}:", name),
            Some(name) => format!("{}: {}", name, text),
            None if needs_explicit_key(text) => format!(": {}", text).trim_end().to_string(),
            None => text.to_string(),
        };
        self.push_line(depth, &line);
    }
}

/// True if `text` must be written as a `"""` block string.
fn needs_block_string(text: &str) -> bool {
    text.contains('\n')
        || text.contains('\r')
        || text != text.trim()
        || text == BLOCK_STRING_DELIMITER
}

/// True if a bare line holding `text` would not read back as a nameless value.
fn needs_explicit_key(text: &str) -> bool {
    text.is_empty() || text.contains(':') || text.starts_with('#')
}

impl Tag for Writer {
    fn reading(&self) -> bool {
        false
    }

    fn is_complex(&self) -> bool {
        false
    }

    fn skip_defaults(&self) -> bool {
        self.options.skip_defaults
    }

    fn handle_object<V: Reflect>(&mut self, name: &str, value: &mut V) {
        self.open(canonical_name(name));
        value.reflect(self);
        self.close();
    }

    fn handle_optional<V: Reflect + ReadNew>(&mut self, name: &str, value: &mut Option<V>) {
        if let Some(inner) = value {
            self.handle_object(name, inner);
        }
    }

    fn handle_sequence<V: Reflect + ReadNew>(&mut self, name: &str, items: &mut Vec<V>) {
        if items.is_empty() {
            return;
        }
        let singular = singular_form(name);
        if names_match(&singular, name) {
            for item in items.iter_mut() {
                self.handle_object(name, item);
            }
        } else {
            self.open(canonical_name(name));
            for item in items.iter_mut() {
                self.handle_object(&singular, item);
            }
            self.close();
        }
    }

    fn handle_elements<V: Reflect + ReadNew>(&mut self, items: &mut Vec<V>) {
        for item in items.iter_mut() {
            self.handle_object(ELEMENT_NAME, item);
        }
    }

    fn handle_entries<V: Reflect + ReadNew>(&mut self, entries: &mut BTreeMap<String, V>) {
        for (key, value) in entries.iter_mut() {
            self.open(quote_key(key).into_owned());
            value.reflect(self);
            self.close();
        }
    }

    fn handle_scalar<V: Scalar>(&mut self, value: &mut V) {
        let text = value.write_text().into_owned();
        self.write_text(&text);
    }

    fn handle_enum<E: ReflectEnum>(&mut self, value: &mut E) {
        if let Some(name) = enum_name(*value) {
            self.write_text(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write<V: Reflect>(value: &mut V) -> String {
        let mut writer = Writer::new(WriteOptions::default());
        writer.write_root(value);
        writer.finish()
    }

    #[test]
    fn test_keyed_scalar() {
        let mut writer = Writer::new(WriteOptions::default());
        writer.handle("name", &mut "Lightning Bolt".to_string());
        writer.handle("cost", &mut 1u32);
        assert_eq!(writer.finish(), "name: Lightning Bolt\ncost: 1\n");
    }

    #[test]
    fn test_canonical_key() {
        let mut writer = Writer::new(WriteOptions::default());
        writer.handle("default_name", &mut "x".to_string());
        assert_eq!(writer.finish(), "default name: x\n");
    }

    #[test]
    fn test_empty_scalar() {
        let mut writer = Writer::new(WriteOptions::default());
        writer.handle("notes", &mut String::new());
        assert_eq!(writer.finish(), "notes:\n");
    }

    #[test]
    fn test_block_string() {
        let mut writer = Writer::new(WriteOptions::default());
        writer.handle("text", &mut "line one\n\nline three".to_string());
        assert_eq!(
            writer.finish(),
            "text: \"\"\"\n\tline one\n\n\tline three\n\t\"\"\"\n"
        );
    }

    #[test]
    fn test_nameless_escaping() {
        assert_eq!(write(&mut "plain".to_string()), "plain\n");
        assert_eq!(write(&mut "a: b".to_string()), ": a: b\n");
        assert_eq!(write(&mut "# hash".to_string()), ": # hash\n");
        assert_eq!(write(&mut String::new()), ":\n");
    }

    #[test]
    fn test_flat_sequence_when_name_has_no_plural() {
        let mut writer = Writer::new(WriteOptions::default());
        writer.handle("info", &mut vec!["a".to_string(), "b".to_string()]);
        assert_eq!(writer.finish(), "info: a\ninfo: b\n");
    }

    #[test]
    fn test_empty_sequence_writes_nothing() {
        let mut writer = Writer::new(WriteOptions::default());
        writer.handle("choices", &mut Vec::<String>::new());
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_none_not_written() {
        let mut writer = Writer::new(WriteOptions::default());
        writer.handle("info", &mut Option::<String>::None);
        writer.handle("extra", &mut Some("x".to_string()));
        assert_eq!(writer.finish(), "extra: x\n");
    }

    #[test]
    fn test_map_keys_verbatim() {
        let mut map = BTreeMap::new();
        map.insert("Red_Mana".to_string(), "r".to_string());
        map.insert("blue".to_string(), "u".to_string());
        let mut writer = Writer::new(WriteOptions::default());
        writer.handle("colors", &mut map);
        assert_eq!(writer.finish(), "colors:\n\tRed_Mana: r\n\tblue: u\n");
    }

    #[test]
    fn test_map_keys_quoted_when_bare_form_is_ambiguous() {
        let mut map = BTreeMap::new();
        map.insert("a:b".to_string(), "x".to_string());
        map.insert("#tag".to_string(), "y".to_string());
        map.insert(String::new(), "z".to_string());
        let mut writer = Writer::new(WriteOptions::default());
        writer.handle("colors", &mut map);
        assert_eq!(
            writer.finish(),
            "colors:\n\t\"\": z\n\t\"#tag\": y\n\t\"a:b\": x\n"
        );
    }

    #[test]
    fn test_space_indent() {
        let mut writer = Writer::new(WriteOptions::default().with_spaces(2));
        writer.handle("choices", &mut vec!["red".to_string()]);
        assert_eq!(writer.finish(), "choices:\n  choice: red\n");
    }

    #[test]
    fn test_empty_nested_object_writes_header() {
        let mut map: BTreeMap<String, String> = BTreeMap::new();
        let mut writer = Writer::new(WriteOptions::default());
        writer.handle("colors", &mut map);
        assert_eq!(writer.finish(), "colors:\n");
    }
}
