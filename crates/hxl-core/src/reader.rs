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

//! Reader for HXL data in CSV files.
//!
//! [`HxlReader`] drives the CSV tokenizer, seeks forward to the hashtag row
//! (skipping titles, notes and other preamble), builds the column schema
//! from it, and then streams every subsequent record as a [`Row`] of tagged
//! values. The stream is strictly forward-only and single-pass: once a
//! reader is exhausted, a second pass needs a new source and a new reader.

use crate::error::{HxlError, HxlResult};
use crate::schema::{is_hashtag_row, Schema};
use crate::{Column, Row, Value};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Configurable builder for [`HxlReader`].
///
/// The defaults (comma delimiter, double-quote quoting, no preamble cap)
/// match [`HxlReader::new`]; the builder exists for sources that deviate
/// from them.
///
/// # Examples
///
/// ```rust
/// use hxl_core::HxlReaderBuilder;
/// use std::io::Cursor;
///
/// let input = "#sector;#org\nWASH;UNICEF\n";
/// let mut reader = HxlReaderBuilder::new()
///     .delimiter(b';')
///     .from_reader(Cursor::new(input));
///
/// let row = reader.read().unwrap().unwrap();
/// assert_eq!(row.get(1).unwrap().content(), "UNICEF");
/// ```
#[derive(Debug, Clone)]
pub struct HxlReaderBuilder {
    delimiter: u8,
    quote: u8,
    max_preamble_rows: Option<usize>,
}

impl Default for HxlReaderBuilder {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            max_preamble_rows: None,
        }
    }
}

impl HxlReaderBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter. Defaults to `,`.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character. Defaults to `"`.
    pub fn quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Cap the number of rows scanned while looking for the hashtag row.
    ///
    /// Without a cap the header scan reads until end of input, which for a
    /// large untagged file means tokenizing the whole thing just to report
    /// [`HxlError::HeaderNotFound`]. With a cap, the scan fails early with
    /// [`HxlError::PreambleLimitExceeded`] once `limit` rows have been
    /// scanned without finding a hashtag row.
    pub fn max_preamble_rows(mut self, limit: usize) -> Self {
        self.max_preamble_rows = Some(limit);
        self
    }

    /// Build a reader over any [`Read`] source.
    pub fn from_reader<R: Read>(&self, reader: R) -> HxlReader<R> {
        // has_headers(false): the hashtag row is found by scanning, not by
        // position. flexible(true): data rows may be shorter or longer than
        // the hashtag row.
        let csv = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .from_reader(reader);
        HxlReader {
            csv,
            schema: None,
            max_preamble_rows: self.max_preamble_rows,
            next_source: 0,
            next_logical: 0,
            done: false,
        }
    }

    /// Build a reader over a file.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> HxlResult<HxlReader<File>> {
        Ok(self.from_reader(File::open(path)?))
    }
}

/// Reader for HXL data from a CSV source.
///
/// The hashtag row is located lazily: the first call to [`read`](Self::read),
/// [`schema`](Self::schema) or [`columns`](Self::columns) scans forward
/// through the preamble, and the resulting schema is cached for the reader's
/// lifetime. Requesting the schema and iterating rows may be interleaved
/// freely.
///
/// # Examples
///
/// ```rust
/// use hxl_core::HxlReader;
/// use std::io::Cursor;
///
/// let input = "\
/// Sample dataset,,,
/// Sector,Subsector,Organisation,Country
/// #sector,#subsector,#org,#country
/// WASH,Water Purification,World Health Organization,Mali
/// ";
///
/// let mut reader = HxlReader::new(Cursor::new(input));
/// assert_eq!(reader.schema().unwrap().len(), 4);
///
/// let row = reader.read().unwrap().unwrap();
/// assert_eq!(row.row_number(), 0);
/// assert_eq!(row.source_row_number(), 3);
/// assert_eq!(row.get(1).unwrap().tag(), "#subsector");
/// ```
pub struct HxlReader<R: Read> {
    csv: csv::Reader<R>,
    schema: Option<Schema>,
    max_preamble_rows: Option<usize>,
    /// Index of the next raw record to be pulled from the tokenizer.
    next_source: usize,
    /// Logical number of the next row returned to the caller.
    next_logical: usize,
    done: bool,
}

impl HxlReader<File> {
    /// Open a HXL CSV file with default settings.
    pub fn from_path<P: AsRef<Path>>(path: P) -> HxlResult<Self> {
        HxlReaderBuilder::new().from_path(path)
    }
}

impl<R: Read> HxlReader<R> {
    /// Create a new HXL reader with default settings.
    pub fn new(reader: R) -> Self {
        HxlReaderBuilder::new().from_reader(reader)
    }

    /// Get the column schema, scanning for the hashtag row if needed.
    pub fn schema(&mut self) -> HxlResult<&Schema> {
        if self.schema.is_none() {
            self.scan_header()?;
        }
        Ok(self.schema.as_ref().unwrap())
    }

    /// Get the retained columns in source order.
    pub fn columns(&mut self) -> HxlResult<&[Arc<Column>]> {
        Ok(self.schema()?.columns())
    }

    /// Read the next row of HXL data.
    ///
    /// Returns `Ok(None)` once the source is exhausted, and keeps returning
    /// `Ok(None)` on every call after that. A row whose retained cells are
    /// all absent is still returned (as an empty [`Row`]), so callers see
    /// one row per physical record after the hashtag row.
    pub fn read(&mut self) -> HxlResult<Option<Row>> {
        if self.schema.is_none() {
            self.scan_header()?;
        }
        if self.done {
            return Ok(None);
        }

        let mut record = StringRecord::new();
        if !self.csv.read_record(&mut record)? {
            self.done = true;
            return Ok(None);
        }
        let source_row = self.next_source;
        self.next_source += 1;
        let row_number = self.next_logical;
        self.next_logical += 1;

        let schema = self.schema.as_ref().unwrap();
        let mut values = Vec::new();
        for (source, field) in record.iter().enumerate() {
            if let Some(column) = schema.column_at_source(source) {
                values.push(Value::new(
                    Arc::clone(column),
                    field,
                    row_number,
                    source_row,
                ));
            }
        }
        Ok(Some(Row::new(row_number, source_row, values)))
    }

    /// Iterate over the remaining rows.
    ///
    /// The iterator yields `Result<Row, HxlError>` so that source faults
    /// cross the iteration boundary through the item type. It supports
    /// single-row lookahead via [`Rows::peek`].
    pub fn rows(&mut self) -> Rows<'_, R> {
        Rows {
            reader: self,
            peeked: None,
        }
    }

    /// Seek forward to the row of HXL hashtags and build the schema.
    fn scan_header(&mut self) -> HxlResult<()> {
        let mut record = StringRecord::new();
        loop {
            if let Some(limit) = self.max_preamble_rows {
                if self.next_source >= limit {
                    self.done = true;
                    return Err(HxlError::PreambleLimitExceeded { limit });
                }
            }
            if !self.csv.read_record(&mut record)? {
                self.done = true;
                return Err(HxlError::HeaderNotFound {
                    rows_scanned: self.next_source,
                });
            }
            self.next_source += 1;
            if is_hashtag_row(&record) {
                self.schema = Some(Schema::from_hashtag_row(&record));
                return Ok(());
            }
        }
    }
}

impl<R: Read> IntoIterator for HxlReader<R> {
    type Item = HxlResult<Row>;
    type IntoIter = RowsIntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        RowsIntoIter { reader: self }
    }
}

/// Borrowing row iterator with single-row lookahead.
///
/// The lookahead buffer has exactly two states: empty, or holding the one
/// row (or error) that [`peek`](Self::peek) pulled ahead of the caller.
/// [`next`](Iterator::next) drains the buffer before touching the source
/// again, so peeking never loses data.
pub struct Rows<'r, R: Read> {
    reader: &'r mut HxlReader<R>,
    peeked: Option<HxlResult<Row>>,
}

impl<R: Read> Rows<'_, R> {
    /// Look at the next row without consuming it.
    ///
    /// Returns `None` at end of stream.
    pub fn peek(&mut self) -> Option<&HxlResult<Row>> {
        if self.peeked.is_none() {
            self.peeked = self.reader.read().transpose();
        }
        self.peeked.as_ref()
    }
}

impl<R: Read> Iterator for Rows<'_, R> {
    type Item = HxlResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(item) => Some(item),
            None => self.reader.read().transpose(),
        }
    }
}

/// Owning row iterator returned by [`HxlReader::into_iter`].
pub struct RowsIntoIter<R: Read> {
    reader: HxlReader<R>,
}

impl<R: Read> Iterator for RowsIntoIter<R> {
    type Item = HxlResult<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read().transpose()
    }
}
