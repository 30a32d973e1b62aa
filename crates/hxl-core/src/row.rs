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

//! A row of data in a HXL dataset.

use crate::Value;

/// One logical record of HXL data.
///
/// A row is equivalent to a single entity, and its [`Value`]s together make
/// up a collection of information about that entity. The row also carries
/// sequence information: its position in the logical dataset (counting only
/// rows returned to the caller) and in the source dataset (counting preamble
/// and hashtag rows too).
///
/// The number of values is row-specific, not fixed by the schema: a raw row
/// shorter than the hashtag row simply yields fewer values, and a row with
/// no retained cells at all is a valid, empty row.
///
/// # Examples
///
/// ```rust,no_run
/// use hxl_core::HxlReader;
///
/// let mut reader = HxlReader::from_path("data.csv").unwrap();
/// while let Some(row) = reader.read().unwrap() {
///     for value in &row {
///         println!("{} = {}", value.tag(), value.content());
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    row_number: usize,
    source_row_number: usize,
    values: Vec<Value>,
}

impl Row {
    /// Create a new row of HXL data.
    ///
    /// `row_number` is the logical (HXL) row number and `source_row_number`
    /// the original source row number, both zero-based.
    pub fn new(row_number: usize, source_row_number: usize, values: Vec<Value>) -> Self {
        Self {
            row_number,
            source_row_number,
            values,
        }
    }

    /// Get the logical (HXL) row number, zero-based.
    pub fn row_number(&self) -> usize {
        self.row_number
    }

    /// Get the original row number in the source data, zero-based.
    ///
    /// This value can be useful for error reporting.
    pub fn source_row_number(&self) -> usize {
        self.source_row_number
    }

    /// Get the row's values, in source column order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Get a value by its position in this row.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Find the first value carrying the given hashtag, if any.
    pub fn find(&self, tag: &str) -> Option<&Value> {
        self.values.iter().find(|v| v.tag() == tag)
    }

    /// Number of values in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row carries no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the row's values.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }
}

impl IntoIterator for Row {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
