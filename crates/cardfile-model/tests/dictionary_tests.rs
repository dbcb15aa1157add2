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

//! Dictionary lookup across local and global directories.

use cardfile_model::{Dictionaries, DictionaryError};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn write_dictionary(dir: &Path, language: &str, words: &[&str]) {
    fs::write(dir.join(format!("{}.aff", language)), "SET UTF-8\n").unwrap();
    let mut list = format!("{}\n", words.len());
    for word in words {
        list.push_str(word);
        list.push('\n');
    }
    fs::write(dir.join(format!("{}.dic", language)), list).unwrap();
}

#[test]
fn test_local_dictionary_preferred() {
    let local = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    write_dictionary(local.path(), "en_us", &["colour"]);
    write_dictionary(global.path(), "en_us", &["color"]);

    let dictionaries = Dictionaries::new(local.path(), global.path());
    let en = dictionaries.get("en_us").unwrap();
    assert!(en.spell("colour"));
    assert!(!en.spell("color"));
}

#[test]
fn test_incomplete_local_dictionary_ignored() {
    let local = TempDir::new().unwrap();
    let global = TempDir::new().unwrap();
    fs::write(local.path().join("de.dic"), "1\nHaus\n").unwrap();
    write_dictionary(global.path(), "de", &["Katze"]);

    let dictionaries = Dictionaries::new(local.path(), global.path());
    let de = dictionaries.get("de").unwrap();
    assert!(de.spell("Katze"));
    assert!(!de.spell("Haus"));
}

#[test]
fn test_missing_dictionary() {
    let local = TempDir::new().unwrap();
    let dictionaries = Dictionaries::new(local.path(), local.path());
    let err = dictionaries.get("nl").unwrap_err();
    assert!(matches!(err, DictionaryError::NotFound { ref language } if language == "nl"));
    assert_eq!(err.to_string(), "dictionary not found for language: nl");
    assert!(!dictionaries.is_loaded("nl"));

    write_dictionary(local.path(), "nl", &["kaart"]);
    assert!(dictionaries.get("nl").unwrap().spell("kaart"));
}

#[test]
fn test_loaded_once() {
    let local = TempDir::new().unwrap();
    write_dictionary(local.path(), "en_us", &["card"]);
    let dictionaries = Dictionaries::new(local.path(), local.path());

    let first = dictionaries.get("en_us").unwrap();
    fs::remove_file(local.path().join("en_us.dic")).unwrap();
    let second = dictionaries.get("en_us").unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    dictionaries.clear();
    assert!(dictionaries.get("en_us").is_err());
}

#[test]
fn test_word_list_with_shared_affix() {
    let local = TempDir::new().unwrap();
    let game = TempDir::new().unwrap();
    write_dictionary(local.path(), "en_us", &["card"]);
    fs::write(game.path().join("keywords.en_us.dic"), "2\nflying/S\ntrample\n").unwrap();

    let dictionaries = Dictionaries::new(local.path(), local.path());
    let word_list = game.path().join("keywords");
    let keywords = dictionaries.get_with_word_list(&word_list, "en_us").unwrap();
    assert!(keywords.spell("Flying"));
    assert!(!keywords.spell("card"));
    assert_eq!(keywords.suggest("trampel"), vec!["trample"]);
    assert!(keywords.suggest("haste").is_empty());
    assert_eq!(keywords.suggest("tample"), vec!["trample"]);
}

#[test]
fn test_missing_word_list() {
    let local = TempDir::new().unwrap();
    write_dictionary(local.path(), "en_us", &["card"]);
    let dictionaries = Dictionaries::new(local.path(), local.path());
    let err = dictionaries
        .get_with_word_list(&local.path().join("nothing"), "en_us")
        .unwrap_err();
    assert!(matches!(err, DictionaryError::WordListNotFound { .. }));
}
