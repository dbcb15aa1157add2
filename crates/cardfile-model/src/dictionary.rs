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

//! Spelling dictionaries.
//!
//! A dictionary is a pair of files in the usual affix/word-list layout:
//! `<language>.aff` names the character encoding on its `SET` line, and
//! `<language>.dic` holds a word count followed by one word per line, each
//! optionally followed by `/` and affix flags. Affix rules are not applied;
//! only the listed words are known.
//!
//! [`Dictionaries`] finds dictionaries in a local directory first and a
//! global one second, and loads each language once.

use cardfile_core::ResourceCache;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Maximum number of suggestions returned for one word.
pub const MAX_SUGGESTIONS: usize = 10;

/// Errors from locating or loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("dictionary not found for language: {language}")]
    NotFound { language: String },

    #[error("word list '{word_list}' not found for language: {language}")]
    WordListNotFound { word_list: PathBuf, language: String },

    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Character encoding of a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryEncoding {
    Utf8,
    Latin1,
    Ascii,
}

impl DictionaryEncoding {
    /// Encoding for a `SET` label. Unknown labels fall back to ASCII, the
    /// subset every single-byte encoding shares.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_ascii_uppercase();
        match label.as_str() {
            "UTF-8" | "UTF8" => Self::Utf8,
            "ISO8859-1" | "ISO-8859-1" | "LATIN1" => Self::Latin1,
            _ => Self::Ascii,
        }
    }

    /// Encoding named by the contents of an affix file.
    pub fn from_affix(affix: &[u8]) -> Self {
        String::from_utf8_lossy(affix)
            .lines()
            .find_map(|line| line.trim_start().strip_prefix("SET "))
            .map_or(Self::Latin1, Self::from_label)
    }

    pub fn can_encode(self, c: char) -> bool {
        match self {
            Self::Utf8 => true,
            Self::Latin1 => (c as u32) <= 0xFF,
            Self::Ascii => c.is_ascii(),
        }
    }

    fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Latin1 => bytes.iter().map(|&b| b as char).collect(),
            Self::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { b as char } else { '\u{fffd}' })
                .collect(),
        }
    }
}

/// Replace curly quotes with straight ones and expand ligatures.
pub fn normalize_word(word: &str) -> String {
    let mut fixed = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            '\u{2018}' | '\u{2019}' => fixed.push('\''),
            '\u{201c}' | '\u{201d}' => fixed.push('"'),
            '\u{00c6}' => fixed.push_str("Ae"),
            '\u{0132}' => fixed.push_str("IJ"),
            '\u{0152}' => fixed.push_str("Oe"),
            '\u{fb01}' => fixed.push_str("fi"),
            '\u{fb02}' => fixed.push_str("fl"),
            c => fixed.push(c),
        }
    }
    fixed
}

/// A loaded word list.
#[derive(Debug, Clone)]
pub struct Dictionary {
    encoding: DictionaryEncoding,
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from the raw contents of its two files.
    pub fn from_bytes(affix: &[u8], words: &[u8]) -> Self {
        let encoding = DictionaryEncoding::from_affix(affix);
        let text = encoding.decode(words);
        let mut lines = text.lines().peekable();
        if lines
            .peek()
            .is_some_and(|first| first.trim().parse::<usize>().is_ok())
        {
            lines.next();
        }
        let words = lines
            .filter_map(|line| {
                let entry = line.split_whitespace().next()?;
                let word = entry.split('/').next().unwrap_or(entry);
                (!word.is_empty()).then(|| word.to_string())
            })
            .collect();
        Self { encoding, words }
    }

    /// Load a dictionary from its affix and word list files.
    pub fn load(affix_path: &Path, words_path: &Path) -> Result<Self, DictionaryError> {
        let read = |path: &Path| {
            std::fs::read(path).map_err(|source| DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        let dictionary = Self::from_bytes(&read(affix_path)?, &read(words_path)?);
        debug!(
            words = dictionary.len(),
            path = %words_path.display(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    pub fn encoding(&self) -> DictionaryEncoding {
        self.encoding
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Normalize `word`, or `None` if it cannot be represented in this
    /// dictionary's encoding.
    fn prepare(&self, word: &str) -> Option<String> {
        let word = normalize_word(word);
        word.chars()
            .all(|c| self.encoding.can_encode(c))
            .then_some(word)
    }

    /// True if `word` is spelled correctly.
    ///
    /// The empty word is correct. A word that cannot be represented in the
    /// dictionary's encoding is not.
    pub fn spell(&self, word: &str) -> bool {
        if word.is_empty() {
            return true;
        }
        let Some(word) = self.prepare(word) else {
            return false;
        };
        self.words.contains(&word) || self.words.contains(&word.to_lowercase())
    }

    /// Known words one edit away from `word`, sorted, at most
    /// [`MAX_SUGGESTIONS`].
    pub fn suggest(&self, word: &str) -> Vec<String> {
        let Some(word) = self.prepare(word) else {
            return Vec::new();
        };
        let target: Vec<char> = word.to_lowercase().chars().collect();
        let mut found: Vec<String> = self
            .words
            .iter()
            .filter(|candidate| {
                let candidate: Vec<char> = candidate.to_lowercase().chars().collect();
                candidate != target && within_one_edit(&candidate, &target)
            })
            .cloned()
            .collect();
        found.sort();
        found.truncate(MAX_SUGGESTIONS);
        found
    }
}

/// One insertion, deletion, substitution or adjacent swap.
fn within_one_edit(a: &[char], b: &[char]) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if long.len() - short.len() > 1 {
        return false;
    }
    let prefix = short.iter().zip(long).take_while(|(x, y)| x == y).count();
    if short.len() == long.len() {
        let rest = prefix + 1;
        if rest >= short.len() {
            return true;
        }
        if short[rest..] == long[rest..] {
            return true;
        }
        short[prefix] == long[rest]
            && short[rest] == long[prefix]
            && short[rest + 1..] == long[rest + 1..]
    } else {
        short[prefix..] == long[prefix + 1..]
    }
}

/// Dictionaries by language, loaded on first use.
#[derive(Debug)]
pub struct Dictionaries {
    local_dir: PathBuf,
    global_dir: PathBuf,
    cache: ResourceCache<Dictionary>,
}

impl Dictionaries {
    /// Search `local_dir` before `global_dir`.
    pub fn new(local_dir: impl Into<PathBuf>, global_dir: impl Into<PathBuf>) -> Self {
        Self {
            local_dir: local_dir.into(),
            global_dir: global_dir.into(),
            cache: ResourceCache::new(),
        }
    }

    /// The dictionary for `language`.
    ///
    /// A directory is used only if it has both files.
    pub fn get(&self, language: &str) -> Result<Arc<Dictionary>, DictionaryError> {
        self.cache.get_or_try_load(language, |language| {
            let affix = format!("{}.aff", language);
            let words = format!("{}.dic", language);
            for dir in [&self.local_dir, &self.global_dir] {
                let (affix_path, words_path) = (dir.join(&affix), dir.join(&words));
                if affix_path.is_file() && words_path.is_file() {
                    return Dictionary::load(&affix_path, &words_path);
                }
            }
            warn!(language, "dictionary not found");
            Err(DictionaryError::NotFound {
                language: language.to_string(),
            })
        })
    }

    /// A dictionary with its own word list `<word_list>.<language>.dic`.
    ///
    /// The affix file is taken from next to the word list if present, then
    /// from the local and global directories.
    pub fn get_with_word_list(
        &self,
        word_list: &Path,
        language: &str,
    ) -> Result<Arc<Dictionary>, DictionaryError> {
        let key = format!("{}.{}", word_list.display(), language);
        self.cache.get_or_try_load(&key, |key| {
            let words_path = PathBuf::from(format!("{}.dic", key));
            let affix = format!("{}.aff", language);
            if words_path.is_file() {
                let candidates = [
                    PathBuf::from(format!("{}.aff", key)),
                    self.local_dir.join(&affix),
                    self.global_dir.join(&affix),
                ];
                if let Some(affix_path) = candidates.iter().find(|path| path.is_file()) {
                    return Dictionary::load(affix_path, &words_path);
                }
            }
            warn!(word_list = %word_list.display(), language, "word list not found");
            Err(DictionaryError::WordListNotFound {
                word_list: word_list.to_path_buf(),
                language: language.to_string(),
            })
        })
    }

    pub fn is_loaded(&self, key: &str) -> bool {
        self.cache.contains(key)
    }

    /// Drop all loaded dictionaries.
    pub fn clear(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Dictionary {
        Dictionary::from_bytes(b"SET UTF-8\nTRY esianrtolcdugmphbyfvkwz\n", b"4\nhello/S\nworld\ncan't\nflame/MS\n")
    }

    // ==================== Encoding tests ====================

    #[test]
    fn test_encoding_from_affix() {
        assert_eq!(DictionaryEncoding::from_affix(b"SET UTF-8\n"), DictionaryEncoding::Utf8);
        assert_eq!(DictionaryEncoding::from_affix(b"# c\nSET ISO8859-1\n"), DictionaryEncoding::Latin1);
        assert_eq!(DictionaryEncoding::from_affix(b"SET KOI8-R\n"), DictionaryEncoding::Ascii);
        assert_eq!(DictionaryEncoding::from_affix(b"TRY abc\n"), DictionaryEncoding::Latin1);
    }

    #[test]
    fn test_latin1_word_list() {
        let dict = Dictionary::from_bytes(b"SET ISO8859-1\n", b"1\ncaf\xe9\n");
        assert!(dict.spell("café"));
        assert!(!dict.spell("日本"));
    }

    // ==================== Normalization tests ====================

    #[test]
    fn test_normalize_quotes() {
        assert_eq!(normalize_word("can\u{2019}t"), "can't");
        assert_eq!(normalize_word("\u{201c}x\u{201d}"), "\"x\"");
    }

    #[test]
    fn test_normalize_ligatures() {
        assert_eq!(normalize_word("\u{fb02}ame"), "flame");
        assert_eq!(normalize_word("\u{00c6}ther"), "Aether");
        assert_eq!(normalize_word("\u{0152}uvre"), "Oeuvre");
    }

    // ==================== Spelling tests ====================

    #[test]
    fn test_word_list_parsing() {
        let dict = english();
        assert_eq!(dict.len(), 4);
        assert!(dict.spell("hello"));
        assert!(!dict.spell("hello/S"));
        assert!(!dict.spell("4"));
    }

    #[test]
    fn test_spell() {
        let dict = english();
        assert!(dict.spell(""));
        assert!(dict.spell("Hello"));
        assert!(dict.spell("can\u{2019}t"));
        assert!(dict.spell("\u{fb02}ame"));
        assert!(!dict.spell("helo"));
    }

    #[test]
    fn test_unencodable_word_is_misspelled() {
        let dict = Dictionary::from_bytes(b"SET KOI8-R\n", b"1\nword\n");
        assert!(!dict.spell("wörd"));
        assert!(dict.suggest("wörd").is_empty());
    }

    #[test]
    fn test_suggest() {
        let dict = english();
        assert_eq!(dict.suggest("helo"), vec!["hello"]);
        assert_eq!(dict.suggest("wrold"), vec!["world"]);
        assert_eq!(dict.suggest("flames"), vec!["flame"]);
        assert!(dict.suggest("xyzzy").is_empty());
        assert!(dict.suggest("hello").is_empty());
    }

    #[test]
    fn test_within_one_edit() {
        let chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert!(within_one_edit(&chars("cat"), &chars("cut")));
        assert!(within_one_edit(&chars("cat"), &chars("cast")));
        assert!(within_one_edit(&chars("cat"), &chars("act")));
        assert!(within_one_edit(&chars("cat"), &chars("ca")));
        assert!(!within_one_edit(&chars("cat"), &chars("dog")));
        assert!(!within_one_edit(&chars("cat"), &chars("cattle")));
    }
}
