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

//! Line tokenizer.
//!
//! Turns a byte stream into [`LineRecord`]s. Structure is not interpreted
//! here; the [`Reader`](crate::Reader) decides what an indentation change
//! means.

mod indent;
mod line;
mod names;
mod record;

pub use indent::{calculate_indent, strip_indent, IndentInfo};
pub use line::{LineReader, RawLine};
pub use names::{canonical_name, names_match, singular_form};
pub use record::{
    needs_quoted_key, quote_key, split_key_value, split_quoted_key, LineRecord, Tokenizer,
    BLOCK_STRING_DELIMITER,
};
