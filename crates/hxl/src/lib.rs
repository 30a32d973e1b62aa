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

//! # HXL - Humanitarian Exchange Language
//!
//! HXL is a lightweight convention for annotating CSV datasets used in
//! humanitarian response: one row of hashtags (`#sector`, `#org`,
//! `#country`, ...) declares the meaning of each column, and everything
//! below it is data. The hashtag row may be preceded by titles, notes and
//! other free-form preamble, which this library skips automatically.
//!
//! ## Quick Start
//!
//! ```rust
//! use hxl::HxlReader;
//! use std::io::Cursor;
//!
//! let input = "\
//! 3W report - who does what where,,,
//! #sector,#subsector,#org,#country
//! WASH,Water Purification,World Health Organization,Mali
//! ";
//!
//! let mut reader = HxlReader::new(Cursor::new(input));
//!
//! // The column schema comes from the hashtag row.
//! let tags: Vec<String> = reader
//!     .schema()
//!     .unwrap()
//!     .columns()
//!     .iter()
//!     .map(|c| c.tag().to_string())
//!     .collect();
//! assert_eq!(tags, vec!["#sector", "#subsector", "#org", "#country"]);
//!
//! // Rows stream one at a time, tagged and positioned.
//! for row in reader.rows() {
//!     let row = row.expect("read failed");
//!     if let Some(org) = row.find("#org") {
//!         println!("row {}: {}", row.row_number(), org.content());
//!     }
//! }
//! ```
//!
//! ## Reading files
//!
//! ```rust,no_run
//! use hxl::HxlReader;
//!
//! let mut reader = HxlReader::from_path("3w-report.csv").unwrap();
//! for row in reader.rows() {
//!     let row = row.unwrap();
//!     // Source row numbers point back into the original file, preamble
//!     // included, which makes error messages actionable.
//!     println!("source row {}: {} values", row.source_row_number(), row.len());
//! }
//! ```
//!
//! ## Non-default dialects
//!
//! ```rust
//! use hxl::HxlReaderBuilder;
//! use std::io::Cursor;
//!
//! let mut reader = HxlReaderBuilder::new()
//!     .delimiter(b';')
//!     .max_preamble_rows(100)
//!     .from_reader(Cursor::new("#sector;#org\nWASH;UNICEF\n"));
//! assert_eq!(reader.schema().unwrap().len(), 2);
//! ```

pub use hxl_core::{
    // Detection primitives
    is_hashtag,
    is_hashtag_row,
    // Data model
    Column,
    // Errors
    HxlError,
    // Reader
    HxlReader,
    HxlReaderBuilder,
    HxlResult,
    Row,
    Rows,
    RowsIntoIter,
    Schema,
    Value,
};
