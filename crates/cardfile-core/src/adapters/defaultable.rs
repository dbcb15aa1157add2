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

//! Values that remember whether they still hold their default.

use crate::reflect::{ReadNew, Reflect, Scalar, Tag};
use std::borrow::Cow;
use std::ops::Deref;

/// A value paired with an "is still the default" flag.
///
/// Reading the value from input clears the flag. With
/// [`WriteOptions::skip_defaults`](crate::WriteOptions) a value whose flag
/// is still set is left out of the output. Meant for leaf values; the value
/// is always read and written as a nested block.
#[derive(Debug, Clone)]
pub struct Defaultable<T> {
    value: T,
    is_default: bool,
}

impl<T> Defaultable<T> {
    /// A value that counts as the default.
    pub fn with_default(value: T) -> Self {
        Self {
            value,
            is_default: true,
        }
    }

    /// A value that was set explicitly.
    pub fn new(value: T) -> Self {
        Self {
            value,
            is_default: false,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Set the value explicitly.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.is_default = false;
    }

    /// Replace the value only while it is still the default.
    pub fn assign_default(&mut self, value: T) {
        if self.is_default {
            self.value = value;
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Default> Default for Defaultable<T> {
    fn default() -> Self {
        Self::with_default(T::default())
    }
}

impl<T> Deref for Defaultable<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> From<T> for Defaultable<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Equality compares values only.
impl<T: PartialEq> PartialEq for Defaultable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Defaultable<T> {}

impl<T: Reflect> Reflect for Defaultable<T> {
    fn reflect<Tg: Tag>(&mut self, tag: &mut Tg) {
        if tag.reading() {
            self.is_default = false;
        }
        self.value.reflect(tag);
    }

    fn reflect_field<Tg: Tag>(&mut self, name: &str, tag: &mut Tg) {
        if !tag.reading() && tag.skip_defaults() && self.is_default {
            return;
        }
        tag.handle_object(name, self);
    }
}

impl<T: Default> ReadNew for Defaultable<T> {
    fn read_new<Tg: Tag>(_tag: &mut Tg) -> Self {
        Self::default()
    }
}

impl<T: Scalar> Scalar for Defaultable<T> {
    fn read_text(&mut self, text: &str) -> Result<(), String> {
        self.value.read_text(text)?;
        self.is_default = false;
        Ok(())
    }

    fn write_text(&self) -> Cow<'_, str> {
        self.value.write_text()
    }
}
