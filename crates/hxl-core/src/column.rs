// Dweve HXL - Humanitarian Exchange Language Toolkit
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

//! Column metadata for a HXL dataset.

/// Metadata for one retained column of a HXL dataset.
///
/// A `Column` is created once when the hashtag row is recognized and is then
/// shared (behind an `Arc`) by every [`Value`](crate::Value) in that column
/// for the rest of the stream. It is immutable after construction, so the
/// schema stays the single source of truth for column metadata.
///
/// # Examples
///
/// ```rust
/// use hxl_core::Column;
///
/// let column = Column::new("#sector", None, 0, Some(2));
/// assert_eq!(column.tag(), "#sector");
/// assert_eq!(column.lang(), None);
/// assert_eq!(column.column_number(), 0);
/// assert_eq!(column.source_column_number(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    tag: String,
    lang: Option<String>,
    column_number: usize,
    source_column_number: Option<usize>,
}

impl Column {
    /// Create a new set of column metadata.
    ///
    /// `tag` is the HXL hashtag including the leading `#`. `lang` is an
    /// ISO 639 language code, or `None` if unspecified. `column_number` is
    /// the logical (HXL) column number, zero-based, counting retained
    /// columns only. `source_column_number` is the zero-based column number
    /// in the source data, or `None` when the column was not derived from a
    /// physical column.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is empty, or if `lang` is present but empty. Both are
    /// contract violations by the caller, not recoverable conditions.
    pub fn new(
        tag: impl Into<String>,
        lang: Option<String>,
        column_number: usize,
        source_column_number: Option<usize>,
    ) -> Self {
        let tag = tag.into();
        assert!(!tag.is_empty(), "HXL column tag must not be empty");
        assert!(
            lang.as_deref() != Some(""),
            "HXL column lang must not be empty when present"
        );
        Self {
            tag,
            lang,
            column_number,
            source_column_number,
        }
    }

    /// Get the HXL hashtag for the column, including the leading `#`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get the ISO 639 language code, or `None` if unspecified.
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Get the logical (HXL) column number, zero-based.
    pub fn column_number(&self) -> usize {
        self.column_number
    }

    /// Get the original source column number, zero-based, or `None` if the
    /// column does not correspond to a physical column.
    pub fn source_column_number(&self) -> Option<usize> {
        self.source_column_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let column = Column::new("#org", Some("en".to_string()), 3, Some(5));
        assert_eq!(column.tag(), "#org");
        assert_eq!(column.lang(), Some("en"));
        assert_eq!(column.column_number(), 3);
        assert_eq!(column.source_column_number(), Some(5));
    }

    #[test]
    fn test_no_lang_no_source() {
        let column = Column::new("#adm1", None, 0, None);
        assert_eq!(column.lang(), None);
        assert_eq!(column.source_column_number(), None);
    }

    #[test]
    #[should_panic(expected = "tag must not be empty")]
    fn test_empty_tag_panics() {
        let _ = Column::new("", None, 0, Some(0));
    }

    #[test]
    #[should_panic(expected = "lang must not be empty")]
    fn test_empty_lang_panics() {
        let _ = Column::new("#sector", Some(String::new()), 0, Some(0));
    }
}
