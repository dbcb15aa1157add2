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

//! Optional values, sequences and maps.

use crate::reflect::{ReadNew, Reflect, Tag};
use std::collections::BTreeMap;

impl<V: Reflect + ReadNew> Reflect for Option<V> {
    fn reflect<T: Tag>(&mut self, tag: &mut T) {
        if self.is_none() && tag.reading() {
            *self = Some(V::read_new(tag));
        }
        if let Some(value) = self {
            value.reflect(tag);
        }
    }

    fn reflect_field<T: Tag>(&mut self, name: &str, tag: &mut T) {
        tag.handle_optional(name, self);
    }
}

impl<V> ReadNew for Option<V> {
    fn read_new<T: Tag>(_tag: &mut T) -> Self {
        None
    }
}

impl<V: Reflect + ReadNew> Reflect for Vec<V> {
    fn reflect<T: Tag>(&mut self, tag: &mut T) {
        tag.handle_elements(self);
    }

    fn reflect_field<T: Tag>(&mut self, name: &str, tag: &mut T) {
        tag.handle_sequence(name, self);
    }
}

impl<V> ReadNew for Vec<V> {
    fn read_new<T: Tag>(_tag: &mut T) -> Self {
        Vec::new()
    }
}

impl<V: Reflect + ReadNew> Reflect for BTreeMap<String, V> {
    fn reflect<T: Tag>(&mut self, tag: &mut T) {
        tag.handle_entries(self);
    }
}

impl<V> ReadNew for BTreeMap<String, V> {
    fn read_new<T: Tag>(_tag: &mut T) -> Self {
        BTreeMap::new()
    }
}
