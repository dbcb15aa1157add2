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

//! Indentation handling.
//!
//! A tab is always one level. Spaces count one level per `width` spaces;
//! a trailing partial group is ignored.

/// Information about a line's indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentInfo {
    /// Number of leading tabs.
    pub tabs: usize,
    /// Number of leading spaces.
    pub spaces: usize,
    /// Calculated indent level.
    pub level: usize,
}

/// Calculate indentation info from a line.
///
/// Returns `None` if the line is blank (only whitespace).
pub fn calculate_indent(line: &str, width: usize) -> Option<IndentInfo> {
    let width = width.max(1);
    let mut tabs = 0;
    let mut spaces = 0;

    for c in line.chars() {
        match c {
            '\t' => tabs += 1,
            ' ' => spaces += 1,
            c if c.is_whitespace() => {}
            _ => {
                return Some(IndentInfo {
                    tabs,
                    spaces,
                    level: tabs + spaces / width,
                })
            }
        }
    }
    None
}

/// Remove up to `levels` indentation levels from the start of `line`.
///
/// Stops at the first non-indentation character, so content whitespace
/// beyond the requested depth is preserved.
pub fn strip_indent(line: &str, levels: usize, width: usize) -> &str {
    let width = width.max(1);
    let mut remaining = levels;
    let mut pending_spaces = 0;
    let mut cut = 0;

    for (i, c) in line.char_indices() {
        if remaining == 0 {
            break;
        }
        match c {
            '\t' => {
                remaining -= 1;
                pending_spaces = 0;
            }
            ' ' => {
                pending_spaces += 1;
                if pending_spaces == width {
                    remaining -= 1;
                    pending_spaces = 0;
                }
            }
            _ => break,
        }
        cut = i + c.len_utf8();
    }
    &line[cut..]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== calculate_indent ====================

    #[test]
    fn test_indent_zero() {
        let info = calculate_indent("hello", 2).unwrap();
        assert_eq!(info.level, 0);
    }

    #[test]
    fn test_indent_tabs() {
        let info = calculate_indent("\t\tname: x", 2).unwrap();
        assert_eq!(info.tabs, 2);
        assert_eq!(info.level, 2);
    }

    #[test]
    fn test_indent_spaces() {
        assert_eq!(calculate_indent("  choice: red", 2).unwrap().level, 1);
        assert_eq!(calculate_indent("    x", 2).unwrap().level, 2);
        assert_eq!(calculate_indent("    x", 4).unwrap().level, 1);
    }

    #[test]
    fn test_indent_partial_group_ignored() {
        assert_eq!(calculate_indent("   x", 2).unwrap().level, 1);
        assert_eq!(calculate_indent(" x", 2).unwrap().level, 0);
    }

    #[test]
    fn test_indent_mixed() {
        let info = calculate_indent("\t  x", 2).unwrap();
        assert_eq!(info.tabs, 1);
        assert_eq!(info.spaces, 2);
        assert_eq!(info.level, 2);
    }

    #[test]
    fn test_indent_unicode_content() {
        assert_eq!(calculate_indent("\t日本語", 2).unwrap().level, 1);
    }

    #[test]
    fn test_blank_lines() {
        assert!(calculate_indent("", 2).is_none());
        assert!(calculate_indent("   ", 2).is_none());
        assert!(calculate_indent("\t \t", 2).is_none());
    }

    // ==================== strip_indent ====================

    #[test]
    fn test_strip_tabs() {
        assert_eq!(strip_indent("\t\tline", 2, 2), "line");
        assert_eq!(strip_indent("\t\t\tline", 2, 2), "\tline");
    }

    #[test]
    fn test_strip_spaces() {
        assert_eq!(strip_indent("    line", 1, 2), "  line");
        assert_eq!(strip_indent("    line", 2, 2), "line");
    }

    #[test]
    fn test_strip_stops_at_content() {
        assert_eq!(strip_indent("\tline", 3, 2), "line");
        assert_eq!(strip_indent("line", 1, 2), "line");
    }

    #[test]
    fn test_strip_preserves_content_spaces_after_tabs() {
        assert_eq!(strip_indent("\t  indented", 1, 2), "  indented");
    }

    #[test]
    fn test_strip_blank() {
        assert_eq!(strip_indent("\t\t", 2, 2), "");
        assert_eq!(strip_indent("", 2, 2), "");
    }
}
