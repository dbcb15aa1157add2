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

//! Choice fields and their choice hierarchy.
//!
//! Choices form a tree. A leaf is written as a bare name, a group as a block
//! with its own `choices`. Every selectable choice gets a numeric id: a
//! group that can be picked itself (it has a default) takes the first id of
//! its range, and full names join the group names with a space, so
//! `color red` is the choice `red` in the group `color`.

use crate::field::FieldBase;
use cardfile_core::{read_new_default, Defaultable, Reflect, Script, Tag};

/// One node of a choice hierarchy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Choice {
    pub name: String,
    /// Name of the group itself when it is selected; empty for groups that
    /// cannot be selected directly.
    pub default_name: String,
    pub choices: Vec<Choice>,
    first_id: usize,
}

impl Choice {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn group(name: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            name: name.into(),
            choices,
            ..Self::default()
        }
    }

    pub fn with_default_name(mut self, default_name: impl Into<String>) -> Self {
        self.default_name = default_name.into();
        self
    }

    pub fn is_group(&self) -> bool {
        !self.choices.is_empty()
    }

    /// True if this node is itself selectable.
    pub fn has_default(&self) -> bool {
        !self.is_group() || !self.default_name.is_empty()
    }

    pub fn first_id(&self) -> usize {
        self.first_id
    }

    /// Number the subtree starting at this node's first id.
    ///
    /// Returns the first id after the subtree.
    pub fn init_ids(&mut self) -> usize {
        let mut id = self.first_id + usize::from(self.has_default());
        for choice in &mut self.choices {
            choice.first_id = id;
            id = choice.init_ids();
        }
        id
    }

    /// One past the last id of the subtree.
    pub fn last_id(&self) -> usize {
        match self.choices.last() {
            Some(last) => last.last_id(),
            None => self.first_id + 1,
        }
    }

    /// Number of ids in the subtree.
    pub fn choice_count(&self) -> usize {
        self.last_id() - self.first_id
    }

    /// Id of the choice with the given full name.
    pub fn choice_id(&self, search_name: &str) -> Option<usize> {
        if self.has_default() && search_name == self.name {
            return Some(self.first_id);
        }
        if self.name.is_empty() {
            return self.choices.iter().find_map(|c| c.choice_id(search_name));
        }
        if self.is_group() {
            let sub_name = search_name
                .strip_prefix(self.name.as_str())
                .and_then(|rest| rest.strip_prefix(' '))?;
            return self.choices.iter().find_map(|c| c.choice_id(sub_name));
        }
        None
    }

    /// Full name of the choice with the given id.
    pub fn choice_name(&self, id: usize) -> Option<String> {
        if self.has_default() && id == self.first_id {
            return Some(self.name.clone());
        }
        let child = self.choices.iter().rev().find(|c| id >= c.first_id)?;
        let sub_name = child.choice_name(id)?;
        if self.name.is_empty() {
            Some(sub_name)
        } else {
            Some(format!("{} {}", self.name, sub_name))
        }
    }

    /// Display name of the choice with the given id.
    ///
    /// A selectable group shows its default name rather than its own, and a
    /// child is named without its group prefix.
    pub fn choice_name_nice(&self, id: usize) -> Option<String> {
        if !self.is_group() && id == self.first_id {
            return Some(self.name.clone());
        }
        if self.has_default() && id == self.first_id {
            return Some(self.default_name.clone());
        }
        for child in self.choices.iter().rev() {
            if id == child.first_id {
                return Some(child.name.clone());
            }
            if id > child.first_id {
                return child.choice_name_nice(id);
            }
        }
        None
    }
}

impl Reflect for Choice {
    fn reflect<T: Tag>(&mut self, tag: &mut T) {
        if self.is_group() || (tag.reading() && tag.is_complex()) {
            tag.handle("name", &mut self.name);
            tag.handle("group choice", &mut self.default_name);
            tag.handle("choices", &mut self.choices);
        } else {
            tag.handle_scalar(&mut self.name);
        }
    }
}

read_new_default!(Choice);

/// A field whose value is picked from a choice hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceField {
    pub base: FieldBase,
    /// Root of the hierarchy. Its name is unused.
    pub choices: Choice,
    pub script: Script,
    pub default_script: Script,
    pub initial: String,
    pub default_name: String,
}

impl Default for ChoiceField {
    fn default() -> Self {
        Self {
            base: FieldBase::default(),
            choices: Choice::default(),
            script: Script::default(),
            default_script: Script::default(),
            initial: String::new(),
            default_name: "Default".to_string(),
        }
    }
}

impl ChoiceField {
    /// Number the choices; call after reading or editing the hierarchy.
    pub fn init_ids(&mut self) {
        self.choices.first_id = 0;
        self.choices.init_ids();
    }

    pub fn choice_id(&self, name: &str) -> Option<usize> {
        self.choices.choice_id(name)
    }

    pub fn choice_name(&self, id: usize) -> Option<String> {
        self.choices.choice_name(id)
    }

    pub fn choice_count(&self) -> usize {
        self.choices.choice_count()
    }
}

impl Reflect for ChoiceField {
    fn reflect<T: Tag>(&mut self, tag: &mut T) {
        tag.handle_base(&mut self.base);
        tag.handle("choices", &mut self.choices.choices);
        tag.handle("script", &mut self.script);
        tag.handle("default", &mut self.default_script);
        tag.handle("initial", &mut self.initial);
        tag.handle("default_name", &mut self.default_name);
        if tag.reading() {
            self.init_ids();
        }
    }
}

read_new_default!(ChoiceField);

/// The selected choice of a card, stored as its bare full name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceValue {
    pub value: Defaultable<String>,
}

impl ChoiceValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Defaultable::new(value.into()),
        }
    }
}

impl Reflect for ChoiceValue {
    fn reflect<T: Tag>(&mut self, tag: &mut T) {
        tag.handle_scalar(&mut self.value);
    }

    fn reflect_field<T: Tag>(&mut self, name: &str, tag: &mut T) {
        if !tag.reading() && tag.skip_defaults() && self.value.is_default() {
            return;
        }
        tag.handle_object(name, self);
    }
}

read_new_default!(ChoiceValue);
