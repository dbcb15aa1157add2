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

//! Layout and rendering styles of fields.

use cardfile_core::{reflect_enum, reflect_struct, Scriptable};
use std::collections::BTreeMap;

/// How the choice list of a choice field pops up in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoicePopupStyle {
    Dropdown,
    Menu,
    InPlace,
}

reflect_enum!(ChoicePopupStyle {
    "dropdown" => Dropdown,
    "menu" => Menu,
    "in place" => InPlace,
});

/// How the selected choice is drawn on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceRenderStyle {
    Text,
    Image,
    Both,
    Hidden,
    ImageHidden,
}

reflect_enum!(ChoiceRenderStyle {
    "text" => Text,
    "image" => Image,
    "both" => Both,
    "hidden" => Hidden,
    "image hidden" => ImageHidden,
});

impl ChoiceRenderStyle {
    pub fn shows_text(self) -> bool {
        matches!(self, Self::Text | Self::Both)
    }

    pub fn shows_image(self) -> bool {
        matches!(self, Self::Image | Self::Both | Self::ImageHidden)
    }
}

/// Position and visibility shared by all styles.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleBase {
    pub z_index: i32,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub visible: Scriptable<bool>,
}

impl Default for StyleBase {
    fn default() -> Self {
        Self {
            z_index: 0,
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            visible: Scriptable::new(true),
        }
    }
}

reflect_struct!(StyleBase {
    z_index,
    left,
    top,
    width,
    height,
    visible,
});

/// Style of a choice field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceStyle {
    pub base: StyleBase,
    pub popup_style: ChoicePopupStyle,
    pub render_style: ChoiceRenderStyle,
    pub mask_filename: String,
    pub combine: String,
    pub alignment: String,
    pub colors_card_list: bool,
    /// Card list color per choice name.
    pub choice_colors: BTreeMap<String, String>,
}

reflect_struct!(ChoiceStyle {
    @base base;
    popup_style,
    render_style,
    mask_filename => "mask",
    combine,
    alignment,
    colors_card_list,
    choice_colors,
});
