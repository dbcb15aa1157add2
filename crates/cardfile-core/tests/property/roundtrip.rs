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

//! Property-based tests for write → read round trips.

use cardfile_core::{from_str, from_str_with, reflect_struct, to_string, to_string_with, ReadOptions, WriteOptions};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq)]
struct Entry {
    title: String,
    count: i64,
    ratio: f64,
    enabled: bool,
    tags: Vec<String>,
}

reflect_struct!(Entry {
    title,
    count,
    ratio,
    enabled,
    tags,
});

#[derive(Debug, Default, Clone, PartialEq)]
struct Document {
    name: String,
    entries: Vec<Entry>,
    extra: Option<Box<Entry>>,
    lookup: BTreeMap<String, String>,
}

reflect_struct!(Document {
    name,
    entries,
    extra,
    lookup,
});

/// Text without a line that reads as the block string delimiter.
fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 :#{}'_-]{0,12}(\n[a-zA-Z0-9 :#]{0,12}){0,2}"
}

fn entry() -> impl Strategy<Value = Entry> {
    (
        text(),
        any::<i64>(),
        -1.0e6f64..1.0e6,
        any::<bool>(),
        prop::collection::vec(text(), 0..4),
    )
        .prop_map(|(title, count, ratio, enabled, tags)| Entry {
            title,
            count,
            ratio,
            enabled,
            tags,
        })
}

/// Map keys, including ones that only survive in quoted form.
fn map_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9 ]{0,8}[a-z0-9]",
        "[ #\"]?[a-z:#\"\\\\]{0,6}[ ]?",
    ]
}

fn document() -> impl Strategy<Value = Document> {
    (
        text(),
        prop::collection::vec(entry(), 0..4),
        prop::option::of(entry().prop_map(Box::new)),
        prop::collection::btree_map(map_key(), text(), 0..4),
    )
        .prop_map(|(name, entries, extra, lookup)| Document {
            name,
            entries,
            extra,
            lookup,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: reading written output reproduces the value without diagnostics.
    #[test]
    fn prop_round_trip_tabs(doc in document()) {
        let written = to_string(&doc);
        let loaded = from_str::<Document>(&written);
        prop_assert!(loaded.is_ok(), "read failed: {:?}", loaded.err());
        let loaded = loaded.unwrap();
        prop_assert!(loaded.diagnostics.is_empty(), "{:?}\n{}", loaded.diagnostics, written);
        prop_assert_eq!(loaded.value, doc);
    }

    /// Property: space indentation round trips with a matching indent width.
    #[test]
    fn prop_round_trip_spaces(doc in document(), width in 1usize..5) {
        let written = to_string_with(&doc, &WriteOptions::default().with_spaces(width));
        let opts = ReadOptions::builder().indent_width(width).build();
        let loaded = from_str_with::<Document>(&written, opts).unwrap();
        prop_assert_eq!(loaded.value, doc);
    }

    /// Property: writing is a fixed point after one read.
    #[test]
    fn prop_write_is_stable(doc in document()) {
        let first = to_string(&doc);
        let second = to_string(&from_str::<Document>(&first).unwrap().value);
        prop_assert_eq!(first, second);
    }
}
