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

//! Cardfile model: the card, field and style types of a card game template
//! editor, expressed as reflected objects.
//!
//! ```
//! use cardfile_model::{Card, CardSet};
//!
//! let input = "\
//! game: magic
//! cards:
//! \tcard:
//! \t\tname: Lightning Bolt
//! \t\tcost: 1
//! ";
//! let set = cardfile_core::from_str::<CardSet>(input).unwrap().value;
//! assert_eq!(set.game, "magic");
//! assert_eq!(set.card("Lightning Bolt").map(|c: &Card| c.cost), Some(1));
//! ```
//!
//! Spelling dictionaries live in [`dictionary`].

mod card;
mod choice;
pub mod dictionary;
mod field;
mod style;

pub use card::{Card, CardSet, SetInfo};
pub use choice::{Choice, ChoiceField, ChoiceValue};
pub use dictionary::{Dictionaries, Dictionary, DictionaryError};
pub use field::{Field, FieldBase, TextField, UNKNOWN_FIELD_TYPE};
pub use style::{ChoicePopupStyle, ChoiceRenderStyle, ChoiceStyle, StyleBase};
