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

//! A single value in a HXL dataset.

use crate::Column;
use std::sync::Arc;

/// One cell of a HXL dataset, at the intersection of a row and a column.
///
/// The associated [`Column`] provides the column metadata, including the HXL
/// tag; the value itself carries the raw cell content (no trimming, no type
/// coercion) and its position in both the logical and the source table.
/// Column accessors on `Value` are pure projections through the shared
/// column handle.
///
/// # Examples
///
/// ```rust
/// use hxl_core::{Column, Value};
/// use std::sync::Arc;
///
/// let column = Arc::new(Column::new("#country", None, 0, Some(0)));
/// let value = Value::new(column, "Mali", 0, 3);
/// assert_eq!(value.tag(), "#country");
/// assert_eq!(value.content(), "Mali");
/// assert_eq!(value.source_row_number(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Value {
    column: Arc<Column>,
    content: String,
    row_number: usize,
    source_row_number: usize,
}

impl Value {
    /// Create a new value.
    ///
    /// `row_number` is the logical (HXL) row number and `source_row_number`
    /// the row number in the original source, both zero-based.
    pub fn new(
        column: Arc<Column>,
        content: impl Into<String>,
        row_number: usize,
        source_row_number: usize,
    ) -> Self {
        Self {
            column,
            content: content.into(),
            row_number,
            source_row_number,
        }
    }

    /// Get the column metadata associated with this value.
    pub fn column(&self) -> &Column {
        &self.column
    }

    /// Get the raw content of the value.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the logical (HXL) row number, zero-based.
    pub fn row_number(&self) -> usize {
        self.row_number
    }

    /// Get the original source row number, zero-based.
    pub fn source_row_number(&self) -> usize {
        self.source_row_number
    }

    /// Get the HXL hashtag from the column metadata.
    pub fn tag(&self) -> &str {
        self.column.tag()
    }

    /// Get the language code from the column metadata.
    pub fn lang(&self) -> Option<&str> {
        self.column.lang()
    }

    /// Get the logical column number from the column metadata.
    pub fn column_number(&self) -> usize {
        self.column.column_number()
    }

    /// Get the source column number from the column metadata.
    pub fn source_column_number(&self) -> Option<usize> {
        self.column.source_column_number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column() -> Arc<Column> {
        Arc::new(Column::new("#subsector", Some("fr".to_string()), 1, Some(2)))
    }

    #[test]
    fn test_content_and_positions() {
        let value = Value::new(column(), "Water Purification", 4, 7);
        assert_eq!(value.content(), "Water Purification");
        assert_eq!(value.row_number(), 4);
        assert_eq!(value.source_row_number(), 7);
    }

    #[test]
    fn test_column_projections() {
        let value = Value::new(column(), "x", 0, 0);
        assert_eq!(value.tag(), "#subsector");
        assert_eq!(value.lang(), Some("fr"));
        assert_eq!(value.column_number(), 1);
        assert_eq!(value.source_column_number(), Some(2));
    }

    #[test]
    fn test_content_is_untrimmed() {
        let value = Value::new(column(), "  padded  ", 0, 0);
        assert_eq!(value.content(), "  padded  ");
    }

    #[test]
    fn test_shared_column_handle() {
        let shared = column();
        let a = Value::new(Arc::clone(&shared), "a", 0, 1);
        let b = Value::new(Arc::clone(&shared), "b", 1, 2);
        assert!(std::ptr::eq(a.column(), b.column()));
    }
}
