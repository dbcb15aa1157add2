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

//! The read-side state machine.
//!
//! The reader keeps one [`LineRecord`] as its cursor and the indentation
//! expected for children of the block being populated. Values pull what
//! they need through the [`Tag`] methods; lines nobody asks for are
//! reported and skipped, so malformed input never aborts a read.

use crate::adapters::{enum_name, EnumReader};
use crate::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, Severity};
use crate::error::{ReflectError, ReflectResult};
use crate::lex::{names_match, singular_form, LineRecord, Tokenizer};
use crate::options::ReadOptions;
use crate::reflect::{ReadNew, Reflect, ReflectEnum, Scalar, Tag};
use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::{debug, warn};

/// An entered block.
#[derive(Debug)]
struct Frame {
    key: String,
    /// Inline value of the header line.
    value: String,
    line: usize,
    header_indent: usize,
    /// Expected indent of the enclosing block.
    saved_indent: usize,
}

/// Populates values from an indentation-structured stream.
///
/// # Examples
///
/// ```
/// use cardfile_core::{Reader, ReadOptions};
/// use std::io::Cursor;
///
/// let mut reader = Reader::new(Cursor::new("card:\n\tname: Bolt\n"), ReadOptions::default());
/// assert!(reader.enter_block("card"));
/// let mut name = String::new();
/// assert!(reader.enter_block("name"));
/// reader.read_object(&mut name);
/// reader.exit_block();
/// reader.exit_block();
/// assert_eq!(name, "Bolt");
/// assert!(reader.is_at_end());
/// ```
pub struct Reader<R: BufRead, S: DiagnosticSink = Vec<Diagnostic>> {
    tokenizer: Tokenizer<R>,
    options: ReadOptions,
    sink: S,
    record: LineRecord,
    at_end: bool,
    expected_indent: usize,
    /// No child line of the innermost block has been looked at yet.
    just_opened: bool,
    frames: Vec<Frame>,
    records_read: usize,
    failure: Option<ReflectError>,
}

impl<R: BufRead> Reader<R> {
    /// Create a reader collecting diagnostics into a `Vec`.
    pub fn new(input: R, options: ReadOptions) -> Self {
        Self::with_sink(input, options, Vec::new())
    }
}

impl<R: BufRead, S: DiagnosticSink> Reader<R, S> {
    /// Create a reader reporting to `sink`.
    pub fn with_sink(input: R, options: ReadOptions, sink: S) -> Self {
        let tokenizer = Tokenizer::new(input, &options);
        let mut reader = Self {
            tokenizer,
            options,
            sink,
            record: LineRecord::default(),
            at_end: false,
            expected_indent: 0,
            just_opened: false,
            frames: Vec::new(),
            records_read: 0,
            failure: None,
        };
        reader.move_next();
        reader
    }

    /// The current record, or `None` at end of input.
    pub fn current(&self) -> Option<&LineRecord> {
        (!self.at_end).then_some(&self.record)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// Number of open blocks.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Number of the last physical line read.
    pub fn line_number(&self) -> usize {
        self.tokenizer.line_number()
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Populate `value` from the top level of the stream.
    pub fn read_root<V: Reflect>(&mut self, value: &mut V) {
        self.read_object(value);
    }

    /// Construct a value through [`ReadNew`] and populate it from the top
    /// level of the stream.
    pub fn read_new_root<V: Reflect + ReadNew>(&mut self) -> V {
        let mut value = V::read_new(self);
        self.read_object(&mut value);
        value
    }

    /// Finish reading, returning the sink or the fatal error that stopped
    /// the read.
    pub fn finish(self) -> ReflectResult<S> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(self.sink),
        }
    }

    // ==================== Cursor ====================

    fn move_next(&mut self) {
        self.just_opened = false;
        if self.at_end {
            return;
        }
        match self.tokenizer.next_record() {
            Ok(Some(record)) => {
                self.record = record;
                self.records_read += 1;
            }
            Ok(None) => self.at_end = true,
            Err(err) => self.fail(err),
        }
        for diagnostic in self.tokenizer.take_diagnostics() {
            self.emit(diagnostic);
        }
    }

    /// The current record belongs to the innermost block.
    #[inline]
    fn in_block(&self) -> bool {
        !self.at_end && self.record.indent >= self.expected_indent
    }

    /// Move from a just-entered header to its first child.
    fn descend(&mut self) {
        if self.just_opened {
            self.move_next();
        }
    }

    fn current_line(&self) -> usize {
        match self.frames.last() {
            Some(frame) if self.just_opened => frame.line,
            _ if self.at_end => self.tokenizer.line_number(),
            _ => self.record.line,
        }
    }

    // ==================== Blocks ====================

    /// Enter the block of the current record if its key is `name`.
    ///
    /// Returns false and leaves the cursor where it is if the record has a
    /// different key or belongs to an enclosing block.
    pub fn enter_block(&mut self, name: &str) -> bool {
        self.enter_matching(|record| names_match(&record.key, name))
    }

    fn enter_matching(&mut self, accept: impl FnOnce(&LineRecord) -> bool) -> bool {
        self.descend();
        if !self.in_block() || !accept(&self.record) {
            return false;
        }
        let max_depth = self.options.limits.max_indent_depth;
        if self.frames.len() >= max_depth {
            let err = ReflectError::limit(
                format!("nesting depth exceeds limit of {}", max_depth),
                self.record.line,
            );
            self.fail(err);
            return false;
        }

        debug!(
            key = %self.record.key,
            line = self.record.line,
            depth = self.frames.len() + 1,
            "enter block"
        );
        self.frames.push(Frame {
            key: self.record.key.clone(),
            value: self.record.value.clone(),
            line: self.record.line,
            header_indent: self.record.indent,
            saved_indent: self.expected_indent,
        });
        self.expected_indent = self.record.indent + 1;
        self.just_opened = true;
        true
    }

    /// Leave the innermost block.
    ///
    /// Lines of the block that nothing consumed are reported and skipped.
    pub fn exit_block(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        if self.just_opened {
            self.move_next();
        }
        self.expected_indent = frame.saved_indent;
        while !self.at_end && self.record.indent > frame.header_indent {
            self.skip_unexpected(false);
        }
        debug!(key = %frame.key, line = frame.line, "exit block");
    }

    /// Populate `value` from the block just entered, or from the top level.
    ///
    /// Field passes repeat until the block is exhausted. A pass that
    /// consumes nothing reports the current line and skips it together with
    /// its children.
    pub fn read_object<V: Reflect>(&mut self, value: &mut V) {
        value.reflect(self);
        if self.just_opened {
            if !self.is_complex() {
                return;
            }
            self.move_next();
        }
        while self.in_block() {
            let before = self.records_read;
            value.reflect(self);
            if self.in_block() && self.records_read == before {
                self.skip_unexpected(true);
            }
        }
    }

    fn skip_unexpected(&mut self, stalled: bool) {
        let (kind, message) = if self.record.is_nameless() {
            (
                DiagnosticKind::UnexpectedValue,
                format!("unexpected value '{}'", self.record.value),
            )
        } else {
            (
                DiagnosticKind::UnexpectedKey,
                format!("unexpected key '{}'", self.record.key),
            )
        };
        let kind = if stalled { DiagnosticKind::NoProgress } else { kind };
        self.diagnose(Severity::Warning, kind, message, self.record.line);

        let base = self.record.indent;
        self.move_next();
        while !self.at_end && self.record.indent > base {
            self.move_next();
        }
    }

    /// Take the nameless value of the current block.
    ///
    /// Right after entering, this is the header's inline value; a header
    /// without one takes a keyless child line instead, or the empty string.
    /// Later, only a keyless line at the cursor is taken.
    fn take_nameless(&mut self) -> Option<(String, usize)> {
        if self.just_opened {
            let (inline, line) = {
                let frame = self.frames.last()?;
                (frame.value.clone(), frame.line)
            };
            if !inline.is_empty() {
                return Some((inline, line));
            }
            self.move_next();
            return Some(self.take_keyless().unwrap_or((inline, line)));
        }
        self.take_keyless()
    }

    fn take_keyless(&mut self) -> Option<(String, usize)> {
        if !self.in_block() || !self.record.is_nameless() {
            return None;
        }
        let line = self.record.line;
        let value = std::mem::take(&mut self.record.value);
        self.move_next();
        Some((value, line))
    }

    // ==================== Sequences ====================

    fn read_element<V: Reflect + ReadNew>(&mut self, items: &mut Vec<V>) {
        if self.enter_matching(|_| true) {
            self.read_entered_element(items);
        }
    }

    fn read_entered_element<V: Reflect + ReadNew>(&mut self, items: &mut Vec<V>) {
        let max_len = self.options.limits.max_sequence_len;
        if items.len() >= max_len {
            let err = ReflectError::limit(
                format!("sequence exceeds limit of {} elements", max_len),
                self.current_line(),
            );
            self.fail(err);
            self.exit_block();
            return;
        }
        let mut item = V::read_new(self);
        self.read_object(&mut item);
        self.exit_block();
        debug!(index = items.len(), "read sequence element");
        items.push(item);
    }

    // ==================== Diagnostics ====================

    fn diagnose(&mut self, severity: Severity, kind: DiagnosticKind, message: String, line: usize) {
        self.emit(Diagnostic::new(severity, kind, message).with_line(line));
    }

    fn emit(&mut self, mut diagnostic: Diagnostic) {
        if diagnostic.source().is_none() {
            if let Some(source) = &self.options.source_name {
                diagnostic = diagnostic.with_source(source.clone());
            }
        }
        if diagnostic.severity() >= Severity::Warning {
            warn!(
                source = diagnostic.source().unwrap_or("<input>"),
                line = diagnostic.line().unwrap_or(0),
                kind = %diagnostic.kind(),
                "{}",
                diagnostic.message()
            );
        }
        self.sink.report(diagnostic);
    }

    fn fail(&mut self, err: ReflectError) {
        if self.failure.is_none() {
            let err = match &self.options.source_name {
                Some(source) if err.source_name.is_none() => err.with_source(source.clone()),
                _ => err,
            };
            self.failure = Some(err);
        }
        self.at_end = true;
    }
}

impl<R: BufRead, S: DiagnosticSink> Tag for Reader<R, S> {
    fn reading(&self) -> bool {
        true
    }

    fn is_complex(&self) -> bool {
        self.frames.last().map_or(true, |frame| frame.value.is_empty())
    }

    fn handle_object<V: Reflect>(&mut self, name: &str, value: &mut V) {
        if self.enter_block(name) {
            self.read_object(value);
            self.exit_block();
        }
    }

    fn handle_optional<V: Reflect + ReadNew>(&mut self, name: &str, value: &mut Option<V>) {
        if !self.enter_block(name) {
            return;
        }
        if value.is_none() {
            *value = Some(V::read_new(self));
        }
        if let Some(inner) = value.as_mut() {
            self.read_object(inner);
        }
        self.exit_block();
    }

    fn handle_sequence<V: Reflect + ReadNew>(&mut self, name: &str, items: &mut Vec<V>) {
        let singular = singular_form(name);
        if !names_match(&singular, name) && self.enter_block(name) {
            self.descend();
            while self.in_block() {
                if self.record.is_nameless() || names_match(&self.record.key, &singular) {
                    self.read_element(items);
                } else {
                    self.skip_unexpected(false);
                }
            }
            self.exit_block();
        }
        while self.enter_block(&singular) {
            self.read_entered_element(items);
        }
    }

    fn handle_elements<V: Reflect + ReadNew>(&mut self, items: &mut Vec<V>) {
        self.descend();
        while self.in_block() {
            self.read_element(items);
        }
    }

    fn handle_entries<V: Reflect + ReadNew>(&mut self, entries: &mut BTreeMap<String, V>) {
        self.descend();
        while self.in_block() {
            if self.record.is_nameless() {
                self.skip_unexpected(false);
                continue;
            }
            let key = self.record.key.clone();
            let max_len = self.options.limits.max_sequence_len;
            if entries.len() >= max_len && !entries.contains_key(&key) {
                let err = ReflectError::limit(
                    format!("map exceeds limit of {} entries", max_len),
                    self.record.line,
                );
                self.fail(err);
                return;
            }
            if !self.enter_matching(|_| true) {
                return;
            }
            let mut value = match entries.remove(&key) {
                Some(value) => value,
                None => V::read_new(self),
            };
            self.read_object(&mut value);
            self.exit_block();
            entries.insert(key, value);
        }
    }

    fn handle_scalar<V: Scalar>(&mut self, value: &mut V) {
        if let Some((text, line)) = self.take_nameless() {
            if let Err(message) = value.read_text(&text) {
                self.diagnose(Severity::Warning, DiagnosticKind::InvalidValue, message, line);
            }
        }
    }

    fn handle_enum<E: ReflectEnum>(&mut self, value: &mut E) {
        let Some((text, line)) = self.take_nameless() else {
            return;
        };
        let matcher = EnumReader::<E>::new(&text).run();
        if let Some(found) = matcher.value() {
            *value = found;
        }
        if matcher.matched().is_none() {
            let fallback = matcher.value().and_then(enum_name).unwrap_or_default();
            self.diagnose(
                Severity::Hint,
                DiagnosticKind::EnumMismatch,
                format!("unknown value '{}', using '{}'", text.trim(), fallback),
                line,
            );
        }
    }

    fn report(&mut self, kind: DiagnosticKind, message: &str) {
        let line = self.current_line();
        self.diagnose(Severity::Warning, kind, message.to_string(), line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> Reader<Cursor<String>> {
        Reader::new(Cursor::new(input.to_string()), ReadOptions::default())
    }

    // ==================== Block tracking ====================

    #[test]
    fn test_enter_requires_matching_key() {
        let mut r = reader("name: x\n");
        assert!(!r.enter_block("cost"));
        assert_eq!(r.current().map(|rec| rec.key.as_str()), Some("name"));
        assert!(r.enter_block("NAME"));
        assert_eq!(r.depth(), 1);
    }

    #[test]
    fn test_enter_canonical_key() {
        let mut r = reader("default name: x\n");
        assert!(r.enter_block("default_name"));
    }

    #[test]
    fn test_sibling_at_same_indent_is_not_a_child() {
        let mut r = reader("a:\nb: 1\n");
        assert!(r.enter_block("a"));
        assert!(!r.enter_block("b"));
        r.exit_block();
        assert!(r.enter_block("b"));
    }

    #[test]
    fn test_child_block() {
        let mut r = reader("a:\n\tb: 1\nc: 2\n");
        assert!(r.enter_block("a"));
        assert!(r.enter_block("b"));
        r.exit_block();
        assert!(!r.enter_block("c"));
        r.exit_block();
        assert!(r.enter_block("c"));
        assert!(r.finish().unwrap().is_empty());
    }

    #[test]
    fn test_exit_skips_unread_children() {
        let mut r = reader("a: 1\n\tjunk: x\n\t\tdeeper: y\nb: 2\n");
        assert!(r.enter_block("a"));
        r.exit_block();
        assert_eq!(r.current().map(|rec| rec.key.as_str()), Some("b"));
        let diags = r.finish().unwrap();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind(), &DiagnosticKind::UnexpectedKey);
        assert_eq!(diags[0].line(), Some(2));
    }

    #[test]
    fn test_is_complex_follows_header_value() {
        let mut r = reader("a: inline\nb:\n\tc: 1\n");
        assert!(r.is_complex());
        assert!(r.enter_block("a"));
        assert!(!r.is_complex());
        r.exit_block();
        assert!(r.enter_block("b"));
        assert!(r.is_complex());
    }

    // ==================== Nameless values ====================

    #[test]
    fn test_nameless_inline() {
        let mut r = reader("a: value\n");
        r.enter_block("a");
        assert_eq!(r.take_nameless(), Some(("value".to_string(), 1)));
    }

    #[test]
    fn test_nameless_child_line() {
        let mut r = reader("a:\n\tvalue: with colon\n\tbare\n");
        r.enter_block("a");
        // Keyed child is not a nameless value
        assert_eq!(r.take_nameless(), Some((String::new(), 1)));
    }

    #[test]
    fn test_nameless_from_keyless_child() {
        let mut r = reader("a:\n\tbare text\n");
        r.enter_block("a");
        assert_eq!(r.take_nameless(), Some(("bare text".to_string(), 2)));
        assert!(r.is_at_end());
    }

    // ==================== Limits ====================

    #[test]
    fn test_depth_limit_is_fatal() {
        let opts = ReadOptions::builder().max_depth(1).build();
        let mut r = Reader::new(Cursor::new("a:\n\tb:\n"), opts);
        assert!(r.enter_block("a"));
        assert!(!r.enter_block("b"));
        assert!(r.is_at_end());
        let err = r.finish().unwrap_err();
        assert_eq!(err.kind, crate::ReflectErrorKind::Limit);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_error_carries_source_name() {
        let opts = ReadOptions::builder()
            .max_line_length(4)
            .source_name("set")
            .build();
        let r = Reader::new(Cursor::new("name: too long"), opts);
        let err = r.finish().unwrap_err();
        assert_eq!(err.source_name.as_deref(), Some("set"));
    }
}
