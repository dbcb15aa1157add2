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

//! Declarative registration macros.

/// Implement [`Reflect`](crate::Reflect) and [`ReadNew`](crate::ReadNew)
/// for a struct from its field list.
///
/// Fields are visited in the order given. `field => "disk name"` stores a
/// field under a different key, and a leading `@base field;` splices the
/// fields of a base part first. The type must implement `Default`.
///
/// ```
/// use cardfile_core::reflect_struct;
///
/// #[derive(Debug, Default, Clone, PartialEq)]
/// struct Card {
///     name: String,
///     cost: u32,
///     default_script: String,
/// }
///
/// reflect_struct!(Card {
///     name,
///     cost,
///     default_script => "default",
/// });
///
/// let card = Card { name: "Bolt".into(), cost: 1, default_script: String::new() };
/// let text = cardfile_core::to_string(&card);
/// assert_eq!(text, "name: Bolt\ncost: 1\ndefault:\n");
/// ```
#[macro_export]
macro_rules! reflect_struct {
    ($ty:ty { $(@base $base:ident;)? $($field:ident $(=> $disk:literal)?),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn reflect<T: $crate::Tag>(&mut self, tag: &mut T) {
                $( tag.handle_base(&mut self.$base); )?
                $( tag.handle($crate::__field_name!($field $(=> $disk)?), &mut self.$field); )*
            }
        }

        $crate::read_new_default!($ty);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident => $disk:literal) => {
        $disk
    };
}

/// Implement [`ReadNew`](crate::ReadNew) through `Default`.
#[macro_export]
macro_rules! read_new_default {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ReadNew for $ty {
                fn read_new<T: $crate::Tag>(_tag: &mut T) -> Self {
                    <$ty as ::core::default::Default>::default()
                }
            }
        )+
    };
}

/// Implement [`ReflectEnum`](crate::ReflectEnum),
/// [`Reflect`](crate::Reflect), [`ReadNew`](crate::ReadNew) and `Default`
/// for a fieldless enum.
///
/// The first entry is the default and the fallback for unknown names. The
/// enum must derive `Clone`, `Copy` and `PartialEq`.
///
/// ```
/// use cardfile_core::{reflect_enum, ReflectEnum};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum PopupStyle {
///     Dropdown,
///     Menu,
///     InPlace,
/// }
///
/// reflect_enum!(PopupStyle {
///     "dropdown" => Dropdown,
///     "menu" => Menu,
///     "in place" => InPlace,
/// });
///
/// assert_eq!(PopupStyle::default(), PopupStyle::Dropdown);
/// assert_eq!(cardfile_core::adapters::enum_name(PopupStyle::InPlace), Some("in place"));
/// ```
#[macro_export]
macro_rules! reflect_enum {
    ($ty:ident { $first_name:literal => $first:ident $(, $name:literal => $variant:ident)* $(,)? }) => {
        impl $crate::ReflectEnum for $ty {
            fn reflect_values<V: $crate::EnumVisitor<Self>>(visitor: &mut V) {
                visitor.value($first_name, $ty::$first);
                $( visitor.value($name, $ty::$variant); )*
            }
        }

        impl $crate::Reflect for $ty {
            fn reflect<T: $crate::Tag>(&mut self, tag: &mut T) {
                tag.handle_enum(self);
            }
        }

        impl ::core::default::Default for $ty {
            fn default() -> Self {
                $ty::$first
            }
        }

        $crate::read_new_default!($ty);
    };
}
