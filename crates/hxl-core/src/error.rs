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

//! Error types for HXL reading.
//!
//! Every failure is fatal for the operation that raised it: the reader
//! performs no retries and no partial recovery, and a reader that has
//! surfaced a [`HxlError::Csv`] or [`HxlError::Io`] fault must not be
//! reused. Contract violations (such as constructing a column with an empty
//! tag) panic instead of returning an error.

use thiserror::Error;

/// Errors that can occur while reading HXL data.
///
/// # Examples
///
/// ```rust
/// use hxl_core::{HxlError, HxlReader};
/// use std::io::Cursor;
///
/// let mut reader = HxlReader::new(Cursor::new("Just a title\nno tags here\n"));
/// match reader.schema() {
///     Err(HxlError::HeaderNotFound { rows_scanned }) => assert_eq!(rows_scanned, 2),
///     other => panic!("expected HeaderNotFound, got {:?}", other.map(|_| ())),
/// }
/// ```
#[derive(Error, Debug)]
pub enum HxlError {
    /// No HXL hashtag row was found before the input ran out.
    ///
    /// Fatal to the reader: no schema and no rows can be produced.
    #[error("HXL hashtag row not found in {rows_scanned} rows of input")]
    HeaderNotFound {
        /// Number of raw rows scanned before giving up.
        rows_scanned: usize,
    },

    /// The configured preamble cap was reached before a hashtag row.
    #[error("no HXL hashtag row within the first {limit} rows")]
    PreambleLimitExceeded {
        /// The configured maximum number of preamble rows.
        limit: usize,
    },

    /// The underlying CSV source faulted while tokenizing a record.
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error outside CSV tokenization (e.g. opening a file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for HXL reading operations.
pub type HxlResult<T> = Result<T, HxlError>;
