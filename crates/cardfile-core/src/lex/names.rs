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

//! Key name rules.
//!
//! Keys compare case-insensitively with `_` and space treated alike, so
//! `Default_Name`, `default name` and `default_name` are one key. The writer
//! always emits the canonical spelling.

/// Canonical on-disk spelling of a field name.
pub fn canonical_name(name: &str) -> String {
    name.trim().replace('_', " ")
}

/// Compare two key names canonically.
pub fn names_match(a: &str, b: &str) -> bool {
    let fold = |c: char| if c == '_' { ' ' } else { c };
    let mut left = a.trim().chars().map(fold).flat_map(char::to_lowercase);
    let mut right = b.trim().chars().map(fold).flat_map(char::to_lowercase);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(l), Some(r)) if l == r => {}
            _ => return false,
        }
    }
}

/// Singular form of a plural sequence name.
///
/// Only the final word changes: `sequence items` becomes `sequence item`.
/// A trailing `ies` becomes `y`, otherwise one trailing `s` is dropped
/// (`caches` becomes `cache`, `boxes` becomes `boxe`). Names ending in `ss`
/// or without a trailing `s` are returned unchanged, and such a sequence is
/// written in its flat form.
pub fn singular_form(name: &str) -> String {
    let name = name.trim();
    if let Some(stem) = strip_suffix_ci(name, "ies") {
        if !stem.is_empty() {
            return format!("{}y", stem);
        }
    }
    if strip_suffix_ci(name, "ss").is_none() && name.len() > 1 {
        if let Some(stem) = strip_suffix_ci(name, "s") {
            return stem.to_string();
        }
    }
    name.to_string()
}

fn strip_suffix_ci<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let cut = name.len().checked_sub(suffix.len())?;
    if name.as_bytes()[cut..].eq_ignore_ascii_case(suffix.as_bytes()) {
        // Suffix bytes are ASCII, so `cut` is a char boundary
        Some(&name[..cut])
    } else {
        None
    }
}
