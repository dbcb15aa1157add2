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

//! Scalar leaf types.

use crate::reflect::Scalar;
use std::borrow::Cow;

/// Implement [`Reflect`] and [`ReadNew`] for a [`Scalar`] type.
///
/// Scalars reflect as the nameless value of their block.
#[macro_export]
macro_rules! reflect_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                fn reflect<T: $crate::Tag>(&mut self, tag: &mut T) {
                    tag.handle_scalar(self);
                }
            }

            $crate::read_new_default!($ty);
        )+
    };
}

impl Scalar for String {
    fn read_text(&mut self, text: &str) -> Result<(), String> {
        text.clone_into(self);
        Ok(())
    }

    fn write_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Scalar for bool {
    fn read_text(&mut self, text: &str) -> Result<(), String> {
        *self = match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => true,
            "false" | "no" | "0" => false,
            other => return Err(format!("expected a boolean, found '{}'", other)),
        };
        Ok(())
    }

    fn write_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

macro_rules! parsed_scalar {
    ($($ty:ty => $what:literal),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                fn read_text(&mut self, text: &str) -> Result<(), String> {
                    let text = text.trim();
                    *self = text
                        .parse()
                        .map_err(|_| format!("expected {}, found '{}'", $what, text))?;
                    Ok(())
                }

                fn write_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )+
    };
}

parsed_scalar!(
    i8 => "an integer",
    i16 => "an integer",
    i32 => "an integer",
    i64 => "an integer",
    isize => "an integer",
    u8 => "an unsigned integer",
    u16 => "an unsigned integer",
    u32 => "an unsigned integer",
    u64 => "an unsigned integer",
    usize => "an unsigned integer",
    f32 => "a number",
    f64 => "a number",
    char => "a single character",
);

crate::reflect_scalar!(
    String, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, char
);

/// Script source stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script(pub String);

impl Script {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn source(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Scalar for Script {
    fn read_text(&mut self, text: &str) -> Result<(), String> {
        text.clone_into(&mut self.0);
        Ok(())
    }

    fn write_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

crate::reflect_scalar!(Script);
