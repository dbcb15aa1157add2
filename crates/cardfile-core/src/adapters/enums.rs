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

//! Enum name lookup.

use crate::reflect::{EnumVisitor, ReflectEnum};

/// Enum match state for one read.
///
/// Tracks whether the input matched a declared name; the first declared
/// value is kept as the fallback.
#[derive(Debug)]
pub struct EnumReader<'a, E> {
    text: &'a str,
    first: Option<E>,
    matched: Option<E>,
}

impl<'a, E: ReflectEnum> EnumReader<'a, E> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text: text.trim(),
            first: None,
            matched: None,
        }
    }

    /// Run the enum's declarations against the input text.
    pub fn run(mut self) -> Self {
        E::reflect_values(&mut self);
        self
    }

    /// The matched value, if any.
    pub fn matched(&self) -> Option<E> {
        self.matched
    }

    /// The matched value, or the first declared one.
    pub fn value(&self) -> Option<E> {
        self.matched.or(self.first)
    }
}

impl<E: ReflectEnum> EnumVisitor<E> for EnumReader<'_, E> {
    fn value(&mut self, name: &'static str, value: E) {
        if self.first.is_none() {
            self.first = Some(value);
        }
        if self.matched.is_none() && name == self.text {
            self.matched = Some(value);
        }
    }
}

struct NameFinder<E> {
    value: E,
    name: Option<&'static str>,
}

impl<E: ReflectEnum> EnumVisitor<E> for NameFinder<E> {
    fn value(&mut self, name: &'static str, value: E) {
        if self.name.is_none() && value == self.value {
            self.name = Some(name);
        }
    }
}

/// Declared name of `value`.
pub fn enum_name<E: ReflectEnum>(value: E) -> Option<&'static str> {
    let mut finder = NameFinder { value, name: None };
    E::reflect_values(&mut finder);
    finder.name
}

/// Value declared under exactly `name`.
pub fn enum_from_name<E: ReflectEnum>(name: &str) -> Option<E> {
    EnumReader::<E>::new(name).run().matched()
}

struct NameList(Vec<&'static str>);

impl<E> EnumVisitor<E> for NameList {
    fn value(&mut self, name: &'static str, _value: E) {
        self.0.push(name);
    }
}

/// All declared names in order.
pub fn enum_names<E: ReflectEnum>() -> Vec<&'static str> {
    let mut list = NameList(Vec::new());
    E::reflect_values::<NameList>(&mut list);
    list.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Render {
        Text,
        Image,
        Both,
    }

    crate::reflect_enum!(Render {
        "text" => Text,
        "image" => Image,
        "both" => Both,
    });

    #[test]
    fn test_match_declared_name() {
        let reader = EnumReader::<Render>::new("image").run();
        assert_eq!(reader.matched(), Some(Render::Image));
        assert_eq!(reader.value(), Some(Render::Image));
    }

    #[test]
    fn test_fallback_to_first() {
        let reader = EnumReader::<Render>::new("bogus").run();
        assert_eq!(reader.matched(), None);
        assert_eq!(reader.value(), Some(Render::Text));
    }

    #[test]
    fn test_match_is_exact_after_trim() {
        assert_eq!(enum_from_name::<Render>("  both "), Some(Render::Both));
        assert_eq!(enum_from_name::<Render>("Both"), None);
    }

    #[test]
    fn test_enum_name() {
        assert_eq!(enum_name(Render::Both), Some("both"));
    }

    #[test]
    fn test_enum_names_in_order() {
        assert_eq!(enum_names::<Render>(), vec!["text", "image", "both"]);
    }

    #[test]
    fn test_default_is_first() {
        assert_eq!(Render::default(), Render::Text);
    }
}
