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

//! The reflection contract.
//!
//! A participating type implements [`Reflect`] once. The same `reflect`
//! method is driven by a [`Reader`](crate::Reader) to populate the value and
//! by a [`Writer`](crate::Writer) to emit it; both implement [`Tag`].
//!
//! ```
//! use cardfile_core::{Reflect, Tag};
//!
//! #[derive(Default)]
//! struct Card {
//!     name: String,
//!     cost: u32,
//! }
//!
//! impl Reflect for Card {
//!     fn reflect<T: Tag>(&mut self, tag: &mut T) {
//!         tag.handle("name", &mut self.name);
//!         tag.handle("cost", &mut self.cost);
//!     }
//! }
//! ```
//!
//! Most types use [`reflect_struct!`](crate::reflect_struct) instead of
//! writing this by hand.

use crate::diagnostic::DiagnosticKind;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A type that describes its fields to a [`Tag`].
pub trait Reflect {
    /// Visit every field in declaration order.
    fn reflect<T: Tag>(&mut self, tag: &mut T);

    /// Visit this value as the field `name` of an enclosing object.
    ///
    /// Nested block by default. Containers override this to pick their
    /// on-disk shape.
    fn reflect_field<T: Tag>(&mut self, name: &str, tag: &mut T)
    where
        Self: Sized,
    {
        tag.handle_object(name, self);
    }
}

/// Construction hook used when the reader needs a fresh value.
///
/// Called with the element's block already entered, so polymorphic types
/// can read a discriminating key before choosing what to build.
pub trait ReadNew: Sized {
    fn read_new<T: Tag>(tag: &mut T) -> Self;
}

/// A leaf value stored as text.
pub trait Scalar {
    /// Replace the value with the parsed `text`.
    ///
    /// On error the value must be left unchanged; the message becomes an
    /// invalid-value diagnostic.
    fn read_text(&mut self, text: &str) -> Result<(), String>;

    /// Text representation.
    fn write_text(&self) -> Cow<'_, str>;
}

/// Receives the declared `(name, value)` pairs of an enum.
pub trait EnumVisitor<E> {
    fn value(&mut self, name: &'static str, value: E);
}

/// An enum stored as one of its declared names.
///
/// The first declared value is the fallback for unknown names.
pub trait ReflectEnum: Copy + PartialEq + 'static {
    fn reflect_values<V: EnumVisitor<Self>>(visitor: &mut V);
}

/// Direction object passed to [`Reflect::reflect`].
///
/// Implemented by the reader and the writer. Types only call the
/// `handle*` methods and query [`reading`](Tag::reading) or
/// [`is_complex`](Tag::is_complex) when their layout depends on direction.
pub trait Tag: Sized {
    /// True when populating values from input.
    fn reading(&self) -> bool;

    /// True if a value that has both a scalar and a structured form must
    /// use the structured one.
    ///
    /// When reading, this holds if the enclosing block header carries no
    /// inline value. A writer always answers false and leaves the decision
    /// to the value itself.
    fn is_complex(&self) -> bool;

    /// True when values still holding their default may be left out.
    fn skip_defaults(&self) -> bool {
        false
    }

    /// Handle the named field `value`.
    fn handle<V: Reflect>(&mut self, name: &str, value: &mut V) {
        value.reflect_field(name, self);
    }

    /// Splice the fields of a base part before the caller's own.
    fn handle_base<V: Reflect>(&mut self, base: &mut V) {
        base.reflect(self);
    }

    /// A nested object in the block `name`.
    fn handle_object<V: Reflect>(&mut self, name: &str, value: &mut V);

    /// An optional nested object, constructed on demand.
    fn handle_optional<V: Reflect + ReadNew>(&mut self, name: &str, value: &mut Option<V>);

    /// A sequence stored as a plural container with singular elements.
    fn handle_sequence<V: Reflect + ReadNew>(&mut self, name: &str, items: &mut Vec<V>);

    /// The children of the current block as unnamed sequence elements.
    fn handle_elements<V: Reflect + ReadNew>(&mut self, items: &mut Vec<V>);

    /// The children of the current block as `key: value` entries.
    fn handle_entries<V: Reflect + ReadNew>(&mut self, entries: &mut BTreeMap<String, V>);

    /// The nameless value of the current block.
    fn handle_scalar<V: Scalar>(&mut self, value: &mut V);

    /// The nameless value of the current block, as one of the enum's names.
    fn handle_enum<E: ReflectEnum>(&mut self, value: &mut E);

    /// Report a problem found by a participating type.
    fn report(&mut self, _kind: DiagnosticKind, _message: &str) {}
}
