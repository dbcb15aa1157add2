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

//! Property-based tests for recovery from malformed input.

use cardfile_core::{from_str, reflect_struct, Severity};
use proptest::prelude::*;

#[derive(Debug, Default, Clone, PartialEq)]
struct Card {
    name: String,
    cost: u32,
    choices: Vec<String>,
    info: Option<Box<Card>>,
}

reflect_struct!(Card {
    name,
    cost,
    choices,
    info,
});

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: arbitrary line soup is always read to the end.
    #[test]
    fn prop_never_fails(input in "([ \t]{0,3}[a-z#:\"]{0,8}( ?[a-z:\"]{0,6})?\n){0,30}") {
        let loaded = from_str::<Card>(&input);
        prop_assert!(loaded.is_ok(), "read failed: {:?}", loaded.err());
    }

    /// Property: lines with unknown keys are reported, known keys still read.
    #[test]
    fn prop_unknown_keys_reported(
        unknown in prop::collection::vec("x[a-z]{1,6}", 1..5),
        name in "[a-z]{1,10}",
    ) {
        let mut input = String::new();
        for key in &unknown {
            input.push_str(&format!("{}: 1\n", key));
        }
        input.push_str(&format!("name: {}\n", name));

        let loaded = from_str::<Card>(&input).unwrap();
        prop_assert_eq!(loaded.value.name, name);
        let warnings = loaded
            .diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
            .count();
        prop_assert_eq!(warnings, unknown.len());
    }

    /// Property: an unparsable number leaves the other fields intact.
    #[test]
    fn prop_bad_cost_keeps_name(cost in "[a-z]{1,5}", name in "[a-z]{1,10}") {
        let input = format!("name: {}\ncost: {}\n", name, cost);
        let loaded = from_str::<Card>(&input).unwrap();
        prop_assert_eq!(loaded.value.cost, 0);
        prop_assert_eq!(loaded.value.name, name);
        prop_assert_eq!(loaded.diagnostics.len(), 1);
    }
}
