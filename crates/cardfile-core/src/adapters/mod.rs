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

//! Reflect implementations for standard containers and the adapter
//! wrappers [`Defaultable`], [`Scriptable`] and [`Script`].

mod containers;
mod defaultable;
mod enums;
mod pointer;
mod scalar;
mod scriptable;

pub use defaultable::Defaultable;
pub use enums::{enum_from_name, enum_name, enum_names, EnumReader};
pub use scalar::Script;
pub use scriptable::{is_script_text, Scriptable};
