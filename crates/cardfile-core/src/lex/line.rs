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

//! Physical line reader.
//!
//! Provides buffered line-by-line reading with line number tracking and the
//! ability to push back one line for re-reading. Handles LF and CRLF endings,
//! strips a leading UTF-8 byte order mark and replaces invalid UTF-8 instead
//! of failing.

use crate::error::{ReflectError, ReflectResult};
use std::io::{BufRead, Read};

const UTF8_BOM: &str = "\u{feff}";

/// One physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// Line number (1-based).
    pub number: usize,
    /// Line text without its terminator.
    pub text: String,
    /// Invalid UTF-8 was replaced with U+FFFD.
    pub lossy: bool,
}

/// Buffered line reader with line number tracking.
///
/// # Examples
///
/// ```rust
/// use cardfile_core::lex::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("line1\r\nline2"), usize::MAX);
///
/// let first = reader.next_line().unwrap().unwrap();
/// assert_eq!((first.number, first.text.as_str()), (1, "line1"));
///
/// // Push it back and read it again
/// reader.push_back(first);
/// assert_eq!(reader.next_line().unwrap().unwrap().number, 1);
/// assert_eq!(reader.next_line().unwrap().unwrap().text, "line2");
/// assert!(reader.next_line().unwrap().is_none());
/// ```
pub struct LineReader<R: BufRead> {
    reader: R,
    line_number: usize,
    buffer: Vec<u8>,
    peeked: Option<RawLine>,
    max_line_length: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Create a new line reader rejecting lines longer than `max_line_length` bytes.
    pub fn new(reader: R, max_line_length: usize) -> Self {
        Self {
            reader,
            line_number: 0,
            buffer: Vec::new(),
            peeked: None,
            max_line_length,
        }
    }

    /// Get the number of the last line read from the stream.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line.
    pub fn next_line(&mut self) -> ReflectResult<Option<RawLine>> {
        if let Some(peeked) = self.peeked.take() {
            return Ok(Some(peeked));
        }

        self.buffer.clear();
        // Room for the terminator; anything longer is over the limit
        let bound = self.max_line_length.saturating_add(2) as u64;
        let read = self
            .reader
            .by_ref()
            .take(bound)
            .read_until(b'\n', &mut self.buffer)
            .map_err(|e| ReflectError::io(e.to_string(), self.line_number + 1))?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        // Remove trailing newline
        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }

        if self.buffer.len() > self.max_line_length {
            return Err(ReflectError::limit(
                format!("line exceeds limit of {} bytes", self.max_line_length),
                self.line_number,
            ));
        }

        let (mut text, lossy) = match String::from_utf8(std::mem::take(&mut self.buffer)) {
            Ok(text) => (text, false),
            Err(err) => (String::from_utf8_lossy(err.as_bytes()).into_owned(), true),
        };
        if self.line_number == 1 && text.starts_with(UTF8_BOM) {
            text.drain(..UTF8_BOM.len());
        }

        Ok(Some(RawLine {
            number: self.line_number,
            text,
            lossy,
        }))
    }

    /// Peek at the next line without consuming it.
    pub fn peek_line(&mut self) -> ReflectResult<Option<&RawLine>> {
        if self.peeked.is_none() {
            self.peeked = self.next_line()?;
        }
        Ok(self.peeked.as_ref())
    }

    /// Push a line back to be read again.
    #[inline]
    pub fn push_back(&mut self, line: RawLine) {
        self.peeked = Some(line);
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = ReflectResult<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
