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

//! Values that may be replaced by a script.

use super::scalar::Script;
use crate::reflect::{ReadNew, Reflect, Scalar, Tag};
use std::borrow::Cow;

/// A value that is either a literal `T` or a script computing it.
///
/// Text starting with `script:` or wrapped in `{ }` is kept as the script
/// source; any other text is parsed as `T`. The literal value is left
/// untouched while a script is set, so it can serve as the last computed
/// result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scriptable<T> {
    value: T,
    script: Script,
}

/// True if `text` is script source rather than a literal.
pub fn is_script_text(text: &str) -> bool {
    let text = text.trim();
    text.starts_with("script:") || (text.starts_with('{') && text.ends_with('}'))
}

impl<T> Scriptable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            script: Script::default(),
        }
    }

    pub fn from_script(script: impl Into<String>, value: T) -> Self {
        Self {
            value,
            script: Script::new(script),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Set a literal value, dropping any script.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
        self.script = Script::default();
    }

    pub fn is_scripted(&self) -> bool {
        !self.script.is_empty()
    }

    pub fn script(&self) -> Option<&Script> {
        self.is_scripted().then_some(&self.script)
    }
}

impl<T: Scalar> Scalar for Scriptable<T> {
    fn read_text(&mut self, text: &str) -> Result<(), String> {
        if is_script_text(text) {
            self.script.read_text(text)
        } else {
            self.value.read_text(text)?;
            self.script = Script::default();
            Ok(())
        }
    }

    fn write_text(&self) -> Cow<'_, str> {
        if self.is_scripted() {
            self.script.write_text()
        } else {
            self.value.write_text()
        }
    }
}

impl<T: Scalar> Reflect for Scriptable<T> {
    fn reflect<Tg: Tag>(&mut self, tag: &mut Tg) {
        tag.handle_scalar(self);
    }
}

impl<T: Default> ReadNew for Scriptable<T> {
    fn read_new<Tg: Tag>(_tag: &mut Tg) -> Self {
        Self::new(T::default())
    }
}
