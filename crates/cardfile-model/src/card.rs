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

//! Cards and the sets that hold them.

use crate::choice::ChoiceValue;
use crate::field::Field;
use crate::style::ChoiceStyle;
use cardfile_core::reflect_struct;
use std::collections::BTreeMap;

/// One card of a set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    pub name: String,
    pub cost: u32,
    pub choices: Vec<String>,
    pub notes: String,
    pub rarity: ChoiceValue,
}

reflect_struct!(Card {
    name,
    cost,
    choices,
    notes,
    rarity,
});

/// Descriptive information about a set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetInfo {
    pub title: String,
    pub code: String,
    pub artist: String,
    pub copyright: String,
    pub description: String,
}

reflect_struct!(SetInfo {
    title,
    code,
    artist,
    copyright,
    description,
});

/// A set of cards together with the game data it was made with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardSet {
    pub game: String,
    pub stylesheet: String,
    pub info: Option<Box<SetInfo>>,
    pub fields: Vec<Field>,
    /// Styles of choice fields, by field name.
    pub styles: BTreeMap<String, ChoiceStyle>,
    pub cards: Vec<Card>,
}

reflect_struct!(CardSet {
    game,
    stylesheet,
    info => "set info",
    fields,
    styles => "choice styles",
    cards,
});

impl CardSet {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn card(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.name == name)
    }
}
