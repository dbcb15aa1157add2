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

//! Reading and writing the card game model.

use cardfile_core::{
    from_path, from_str, to_string, to_string_with, DiagnosticKind, ReadOptions, Severity,
    WriteOptions,
};
use cardfile_model::{
    Card, CardSet, Choice, ChoiceField, ChoicePopupStyle, ChoiceRenderStyle, ChoiceStyle,
    ChoiceValue, Field, SetInfo, TextField, UNKNOWN_FIELD_TYPE,
};
use std::io::Write;

fn rarity_field() -> Field {
    let mut field = ChoiceField::default();
    field.base.name = "rarity".to_string();
    field.choices.choices = vec![
        Choice::new("common"),
        Choice::group("special", vec![Choice::new("mythic"), Choice::new("timeshifted")])
            .with_default_name("rare"),
    ];
    field.initial = "common".to_string();
    field.init_ids();
    Field::Choice(field)
}

fn sample_set() -> CardSet {
    let mut text = TextField::default();
    text.base.name = "rule text".to_string();
    text.multi_line = true;

    let mut style = ChoiceStyle::default();
    style.popup_style = ChoicePopupStyle::InPlace;
    style.render_style = ChoiceRenderStyle::ImageHidden;
    style.choice_colors.insert("common".to_string(), "rgb(0,0,0)".to_string());
    style.base.left = 12.5;

    CardSet {
        game: "magic".to_string(),
        stylesheet: "new".to_string(),
        info: Some(Box::new(SetInfo {
            title: "Alpha".to_string(),
            code: "LEA".to_string(),
            ..SetInfo::default()
        })),
        fields: vec![Field::Text(text), rarity_field()],
        styles: [("rarity".to_string(), style)].into_iter().collect(),
        cards: vec![
            Card {
                name: "Lightning Bolt".to_string(),
                cost: 1,
                choices: vec!["red".to_string()],
                notes: "deals 3 damage\nto any target".to_string(),
                rarity: ChoiceValue::new("common"),
            },
            Card {
                name: "Black Lotus".to_string(),
                rarity: ChoiceValue::new("special mythic"),
                ..Card::default()
            },
        ],
    }
}

// ==================== Round trip tests ====================

#[test]
fn test_set_round_trip() {
    let set = sample_set();
    let text = to_string(&set);
    let loaded = from_str::<CardSet>(&text).unwrap();
    assert!(loaded.diagnostics.is_empty(), "{:?}", loaded.diagnostics);
    assert_eq!(loaded.value, set);
}

#[test]
fn test_set_round_trip_with_spaces() {
    let set = sample_set();
    let text = to_string_with(&set, &WriteOptions::default().with_spaces(4));
    let options = ReadOptions::builder().indent_width(4).build();
    let loaded = cardfile_core::from_str_with::<CardSet>(&text, options).unwrap();
    assert_eq!(loaded.value, set);
}

#[test]
fn test_written_layout() {
    let text = to_string(&sample_set());
    assert!(text.starts_with("game: magic\nstylesheet: new\nset info:\n\ttitle: Alpha\n"));
    assert!(text.contains("fields:\n\tfield:\n\t\ttype: text\n"));
    assert!(text.contains("\t\ttype: choice\n"));
    assert!(text.contains("\t\t\tchoice: common\n"));
    assert!(text.contains("\t\t\tchoice:\n\t\t\t\tname: special\n\t\t\t\tgroup choice: rare\n"));
    assert!(text.contains("\t\tpopup style: in place\n"));
    assert!(text.contains("\t\trender style: image hidden\n"));
    assert!(text.contains("\t\trarity: special mythic\n"));
}

// ==================== Field tests ====================

#[test]
fn test_field_type_selects_variant() {
    let input = "\
fields:
\tfield:
\t\ttype: choice
\t\tname: color
\t\tchoices:
\t\t\tchoice: red
\t\t\tchoice: blue
\tfield:
\t\tname: title
";
    let loaded = from_str::<CardSet>(input).unwrap();
    let fields = &loaded.value.fields;
    assert_eq!(fields.len(), 2);
    let Field::Choice(color) = &fields[0] else {
        panic!("expected a choice field, got {:?}", fields[0]);
    };
    assert_eq!(color.base.name, "color");
    assert_eq!(color.choice_count(), 2);
    assert_eq!(color.choice_id("blue"), Some(1));

    assert!(matches!(&fields[1], Field::Text(text) if text.base.name == "title"));
    assert_eq!(loaded.diagnostics.len(), 1);
    assert_eq!(
        loaded.diagnostics[0].kind(),
        &DiagnosticKind::Custom(UNKNOWN_FIELD_TYPE.to_string())
    );
}

#[test]
fn test_unknown_field_type_falls_back_to_text() {
    let input = "fields:\n\tfield:\n\t\ttype: hologram\n\t\tname: shine\n";
    let loaded = from_str::<CardSet>(input).unwrap();
    assert!(matches!(&loaded.value.fields[0], Field::Text(text) if text.base.name == "shine"));
    let diag = &loaded.diagnostics[0];
    assert_eq!(diag.severity(), Severity::Warning);
    assert!(diag.message().contains("hologram"));
}

#[test]
fn test_field_base_properties() {
    let input = "fields:\n\tfield:\n\t\ttype: text\n\t\tname: notes\n\t\teditable: false\n\t\tcard list visible: true\n";
    let set = from_str::<CardSet>(input).unwrap().value;
    let base = set.fields[0].base();
    assert!(!base.editable);
    assert!(base.card_list_visible);
    assert!(base.save_value);
}

// ==================== Choice tests ====================

#[test]
fn test_choice_group_ids_after_read() {
    let text = to_string(&CardSet {
        fields: vec![rarity_field()],
        ..CardSet::default()
    });
    let set = from_str::<CardSet>(&text).unwrap().value;
    let Field::Choice(rarity) = &set.fields[0] else {
        panic!("expected a choice field");
    };
    assert_eq!(rarity.choice_id("common"), Some(0));
    assert_eq!(rarity.choice_id("special"), Some(1));
    assert_eq!(rarity.choice_id("special mythic"), Some(2));
    assert_eq!(rarity.choice_name(3).as_deref(), Some("special timeshifted"));
    assert_eq!(rarity.choice_count(), 4);
}

#[test]
fn test_choice_value_skipped_when_default() {
    let card = Card {
        name: "Plains".to_string(),
        ..Card::default()
    };
    let text = to_string_with(&card, &WriteOptions::default().skip_defaults(true));
    assert!(!text.contains("rarity"));

    let explicit = Card {
        rarity: ChoiceValue::new("common"),
        ..card
    };
    let text = to_string_with(&explicit, &WriteOptions::default().skip_defaults(true));
    assert!(text.contains("rarity: common\n"));
}

// ==================== Style tests ====================

#[test]
fn test_style_enum_fallback() {
    let input = "choice styles:\n\trarity:\n\t\trender style: sparkles\n\t\tvisible: { card.rare }\n";
    let loaded = from_str::<CardSet>(input).unwrap();
    let style = &loaded.value.styles["rarity"];
    assert_eq!(style.render_style, ChoiceRenderStyle::Text);
    assert!(style.base.visible.is_scripted());
    assert_eq!(loaded.diagnostics.len(), 1);
    assert_eq!(loaded.diagnostics[0].severity(), Severity::Hint);
}

// ==================== File tests ====================

#[test]
fn test_read_set_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "game: magic\nbogus: 1\ncards:\n\tcard:\n\t\tname: Island\n").unwrap();

    let loaded = from_path::<CardSet>(file.path(), ReadOptions::default()).unwrap();
    assert_eq!(loaded.value.cards.len(), 1);
    let diag = &loaded.diagnostics[0];
    assert_eq!(diag.line(), Some(2));
    assert_eq!(diag.source(), Some(file.path().display().to_string().as_str()));
}
