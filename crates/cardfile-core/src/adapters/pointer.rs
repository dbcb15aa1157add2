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

//! Owned and shared pointers.
//!
//! Pointers are transparent: the pointee is read and written in place of
//! the pointer. Shared pointees are copied on read when the handle is not
//! unique.

use crate::reflect::{ReadNew, Reflect, Tag};
use std::rc::Rc;
use std::sync::Arc;

impl<V: Reflect> Reflect for Box<V> {
    fn reflect<T: Tag>(&mut self, tag: &mut T) {
        (**self).reflect(tag);
    }

    fn reflect_field<T: Tag>(&mut self, name: &str, tag: &mut T) {
        (**self).reflect_field(name, tag);
    }
}

impl<V: ReadNew> ReadNew for Box<V> {
    fn read_new<T: Tag>(tag: &mut T) -> Self {
        Box::new(V::read_new(tag))
    }
}

macro_rules! shared_pointer {
    ($ptr:ident) => {
        impl<V: Reflect + Clone> Reflect for $ptr<V> {
            fn reflect<T: Tag>(&mut self, tag: &mut T) {
                if tag.reading() {
                    $ptr::make_mut(self).reflect(tag);
                } else if let Some(inner) = $ptr::get_mut(self) {
                    inner.reflect(tag);
                } else {
                    V::clone(self).reflect(tag);
                }
            }

            fn reflect_field<T: Tag>(&mut self, name: &str, tag: &mut T) {
                if tag.reading() {
                    $ptr::make_mut(self).reflect_field(name, tag);
                } else if let Some(inner) = $ptr::get_mut(self) {
                    inner.reflect_field(name, tag);
                } else {
                    V::clone(self).reflect_field(name, tag);
                }
            }
        }

        impl<V: ReadNew> ReadNew for $ptr<V> {
            fn read_new<T: Tag>(tag: &mut T) -> Self {
                $ptr::new(V::read_new(tag))
            }
        }
    };
}

shared_pointer!(Rc);
shared_pointer!(Arc);
