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

//! Hashtag-row detection and the column schema built from it.

use crate::Column;
use csv::StringRecord;
use std::collections::HashMap;
use std::sync::Arc;

/// Test if a single field is a HXL hashtag.
///
/// This is a syntactic test only: non-empty and starting with `#`. It does
/// not validate the remainder against any controlled vocabulary.
///
/// # Examples
///
/// ```rust
/// use hxl_core::is_hashtag;
///
/// assert!(is_hashtag("#sector"));
/// assert!(!is_hashtag("Sector"));
/// assert!(!is_hashtag(""));
/// ```
pub fn is_hashtag(field: &str) -> bool {
    field.starts_with('#')
}

/// Test if a raw CSV record qualifies as the HXL hashtag row.
///
/// A record qualifies when every non-empty field is a hashtag and at least
/// one field is non-empty. A record of only empty fields never qualifies
/// (it is indistinguishable from a blank row), and a record mixing prose and
/// hashtags is rejected on the first offending field.
///
/// # Examples
///
/// ```rust
/// use csv::StringRecord;
/// use hxl_core::is_hashtag_row;
///
/// assert!(is_hashtag_row(&StringRecord::from(vec!["#org", "", "#sector"])));
/// assert!(!is_hashtag_row(&StringRecord::from(vec!["#org", "Notes"])));
/// assert!(!is_hashtag_row(&StringRecord::from(vec!["", ""])));
/// ```
pub fn is_hashtag_row(record: &StringRecord) -> bool {
    let mut seen_tag = false;
    for field in record.iter() {
        if !field.is_empty() {
            if is_hashtag(field) {
                seen_tag = true;
            } else {
                return false;
            }
        }
    }
    seen_tag
}

/// The column schema of one HXL stream.
///
/// Built exactly once from the hashtag row, then shared read-only for the
/// reader's lifetime. Holds the retained columns in source order plus a
/// lookup from source column index to column, which the row streamer uses to
/// filter raw records.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<Arc<Column>>,
    by_source: HashMap<usize, Arc<Column>>,
}

impl Schema {
    /// Build the schema from a recognized hashtag row.
    ///
    /// Fields are walked in source order; every non-empty field becomes a
    /// [`Column`] with the next logical column number, carrying no language
    /// code. Empty fields are skipped entirely: they get neither a column
    /// nor a logical index.
    pub(crate) fn from_hashtag_row(record: &StringRecord) -> Self {
        let mut columns = Vec::new();
        let mut by_source = HashMap::new();
        let mut logical = 0;
        for (source, field) in record.iter().enumerate() {
            if !field.is_empty() {
                let column = Arc::new(Column::new(field, None, logical, Some(source)));
                columns.push(Arc::clone(&column));
                by_source.insert(source, column);
                logical += 1;
            }
        }
        Self { columns, by_source }
    }

    /// The retained columns, in source order.
    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    /// Look up the column retained at the given source index, if any.
    pub fn column_at_source(&self, source_index: usize) -> Option<&Arc<Column>> {
        self.by_source.get(&source_index)
    }

    /// Number of retained columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no columns were retained.
    ///
    /// A schema produced by the header scan is never empty: a row with no
    /// non-empty fields does not qualify as a hashtag row in the first
    /// place.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
