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

//! Core reader and data model for HXL tagged CSV data.
//!
//! HXL (Humanitarian Exchange Language) annotates plain CSV tables with a
//! row of hashtags (`#sector`, `#org`, `#country`, ...) that gives columns
//! machine-readable semantics. That row may sit below arbitrary titles,
//! notes and blank rows; this crate finds it, builds a column schema from
//! it, and streams every following record as a row of tagged values that
//! remember both their logical position (after column filtering) and their
//! original position in the source file.
//!
//! # Quick Start
//!
//! ```rust
//! use hxl_core::HxlReader;
//! use std::io::Cursor;
//!
//! let input = "\
//! Who What Where,,,
//! #sector,#subsector,#org,#country
//! WASH,Water Purification,World Health Organization,Mali
//! ";
//!
//! let mut reader = HxlReader::new(Cursor::new(input));
//! for row in reader.rows() {
//!     let row = row.expect("read failed");
//!     for value in &row {
//!         println!("{} = {}", value.tag(), value.content());
//!     }
//! }
//! ```
//!
//! # Data model
//!
//! - [`Column`]: immutable metadata for one retained column, shared across
//!   the whole stream.
//! - [`Value`]: one cell, referencing its column and carrying the raw
//!   content plus row positions.
//! - [`Row`]: one logical record; its width depends on the physical record,
//!   not the schema.
//! - [`Schema`]: the retained columns plus a source-index lookup.
//! - [`HxlReader`]: the single-pass, pull-based facade over all of it.

mod column;
mod error;
mod reader;
mod row;
mod schema;
mod value;

pub use column::Column;
pub use error::{HxlError, HxlResult};
pub use reader::{HxlReader, HxlReaderBuilder, Rows, RowsIntoIter};
pub use row::Row;
pub use schema::{is_hashtag, is_hashtag_row, Schema};
pub use value::Value;
