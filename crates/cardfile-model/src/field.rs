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

//! Field definitions of a card game.
//!
//! A field is stored with its `type` key first:
//!
//! ```text
//! field:
//! 	type: choice
//! 	name: rarity
//! 	choices:
//! 		choice: common
//! 		choice: rare
//! ```
//!
//! The type decides which variant of [`Field`] is built before the rest of
//! the block is read.

use crate::choice::ChoiceField;
use cardfile_core::lex::names_match;
use cardfile_core::{reflect_struct, DiagnosticKind, ReadNew, Reflect, Script, Tag};

/// Diagnostic kind for a `type` that names no field variant.
pub const UNKNOWN_FIELD_TYPE: &str = "unknown-field-type";

/// Properties shared by all field types.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBase {
    pub name: String,
    pub description: String,
    pub icon_filename: String,
    pub editable: bool,
    pub save_value: bool,
    pub show_statistics: bool,
    pub identifying: bool,
    pub card_list_visible: bool,
    pub card_list_column: u32,
    pub card_list_width: u32,
    pub card_list_name: String,
}

impl Default for FieldBase {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            icon_filename: String::new(),
            editable: true,
            save_value: true,
            show_statistics: true,
            identifying: false,
            card_list_visible: false,
            card_list_column: 0,
            card_list_width: 100,
            card_list_name: String::new(),
        }
    }
}

reflect_struct!(FieldBase {
    name,
    description,
    icon_filename => "icon",
    editable,
    save_value,
    show_statistics,
    identifying,
    card_list_visible,
    card_list_column,
    card_list_width,
    card_list_name,
});

/// A free text field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    pub base: FieldBase,
    pub script: Script,
    pub default_script: Script,
    pub multi_line: bool,
}

reflect_struct!(TextField {
    @base base;
    script,
    default_script => "default",
    multi_line,
});

/// A field definition of any type.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(TextField),
    Choice(ChoiceField),
}

impl Default for Field {
    fn default() -> Self {
        Field::Text(TextField::default())
    }
}

impl Field {
    /// Names accepted for the `type` key, in the order they are tried.
    pub const TYPE_NAMES: &'static [&'static str] = &["text", "choice"];

    /// An empty field of the named type.
    pub fn of_type(type_name: &str) -> Option<Field> {
        if names_match(type_name, "text") {
            Some(Field::Text(TextField::default()))
        } else if names_match(type_name, "choice") {
            Some(Field::Choice(ChoiceField::default()))
        } else {
            None
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Field::Text(_) => "text",
            Field::Choice(_) => "choice",
        }
    }

    pub fn base(&self) -> &FieldBase {
        match self {
            Field::Text(field) => &field.base,
            Field::Choice(field) => &field.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut FieldBase {
        match self {
            Field::Text(field) => &mut field.base,
            Field::Choice(field) => &mut field.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    /// Switch to another type, keeping the shared properties.
    fn retype(&mut self, mut other: Field) {
        std::mem::swap(other.base_mut(), self.base_mut());
        *self = other;
    }
}

fn report_unknown_type<T: Tag>(tag: &mut T, type_name: &str, using: &str) {
    let message = format!("unknown field type '{}', using '{}'", type_name, using);
    tag.report(DiagnosticKind::Custom(UNKNOWN_FIELD_TYPE.to_string()), &message);
}

impl Reflect for Field {
    fn reflect<T: Tag>(&mut self, tag: &mut T) {
        let mut type_name = self.type_name().to_string();
        tag.handle("type", &mut type_name);
        if tag.reading() && !names_match(&type_name, self.type_name()) {
            match Field::of_type(&type_name) {
                Some(other) => self.retype(other),
                None => report_unknown_type(tag, &type_name, self.type_name()),
            }
        }
        match self {
            Field::Text(field) => field.reflect(tag),
            Field::Choice(field) => field.reflect(tag),
        }
    }
}

impl ReadNew for Field {
    fn read_new<T: Tag>(tag: &mut T) -> Self {
        let mut type_name = String::new();
        tag.handle("type", &mut type_name);
        if type_name.is_empty() {
            tag.report(
                DiagnosticKind::Custom(UNKNOWN_FIELD_TYPE.to_string()),
                "field without a type, using 'text'",
            );
            return Field::default();
        }
        Field::of_type(&type_name).unwrap_or_else(|| {
            report_unknown_type(tag, &type_name, "text");
            Field::default()
        })
    }
}
