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

//! End-to-end tests for the HXL reader.

use hxl_core::{HxlError, HxlReader, HxlReaderBuilder};
use std::io::Cursor;

fn reader(input: &str) -> HxlReader<Cursor<&str>> {
    HxlReader::new(Cursor::new(input))
}

#[test]
fn test_round_trip_sample() {
    let input = "\
#sector,#subsector,#org,#country
WASH,Water Purification,World Health Organization,Mali
";
    let mut reader = reader(input);

    {
        let schema = reader.schema().unwrap();
        assert_eq!(schema.len(), 4);
        let tags: Vec<&str> = schema.columns().iter().map(|c| c.tag()).collect();
        assert_eq!(tags, vec!["#sector", "#subsector", "#org", "#country"]);
        for (i, column) in schema.columns().iter().enumerate() {
            assert_eq!(column.column_number(), i);
            assert_eq!(column.source_column_number(), Some(i));
        }
    }

    let row = reader.read().unwrap().unwrap();
    assert_eq!(row.row_number(), 0);
    assert_eq!(row.len(), 4);
    let value = row.get(1).unwrap();
    assert_eq!(value.tag(), "#subsector");
    assert_eq!(value.content(), "Water Purification");
    assert_eq!(value.row_number(), 0);

    assert!(reader.read().unwrap().is_none());
}

#[test]
fn test_logical_indices_contiguous_with_gaps() {
    let input = ",#sector,,#org,#country\nx,WASH,y,UNICEF,Mali\n";
    let mut reader = reader(input);
    let schema = reader.schema().unwrap();
    assert_eq!(schema.len(), 3);
    let logical: Vec<usize> = schema.columns().iter().map(|c| c.column_number()).collect();
    assert_eq!(logical, vec![0, 1, 2]);
    let source: Vec<usize> = schema
        .columns()
        .iter()
        .map(|c| c.source_column_number().unwrap())
        .collect();
    assert_eq!(source, vec![1, 3, 4]);
}

#[test]
fn test_unretained_cells_are_dropped() {
    let input = ",#sector,,#org\nnoise,WASH,more noise,UNICEF\n";
    let mut r = reader(input);
    let row = r.read().unwrap().unwrap();
    let contents: Vec<&str> = row.values().iter().map(|v| v.content()).collect();
    assert_eq!(contents, vec!["WASH", "UNICEF"]);
}

#[test]
fn test_all_empty_row_never_qualifies_as_header() {
    // The ",," rows parse as records of empty fields; the scan must pass
    // over them and pick the hashtag row further down.
    let input = ",,\n,,\n#sector,#org,\nWASH,UNICEF,\n";
    let mut reader = reader(input);
    assert_eq!(reader.schema().unwrap().len(), 2);
    let row = reader.read().unwrap().unwrap();
    assert_eq!(row.source_row_number(), 3);
}

#[test]
fn test_mixed_row_rejected_as_header() {
    // "#misc" next to prose must not be mistaken for the hashtag row.
    let input = "#misc,Some free text title\n#sector,#org\nWASH,UNICEF\n";
    let mut reader = reader(input);
    let schema = reader.schema().unwrap();
    let tags: Vec<&str> = schema.columns().iter().map(|c| c.tag()).collect();
    assert_eq!(tags, vec!["#sector", "#org"]);
}

#[test]
fn test_short_row_yields_short_values() {
    let input = "#sector,#subsector,#org,#country\nWASH,Water\n";
    let mut reader = reader(input);
    assert_eq!(reader.schema().unwrap().len(), 4);
    let row = reader.read().unwrap().unwrap();
    assert_eq!(row.len(), 2);
    assert_eq!(row.get(0).unwrap().tag(), "#sector");
    assert_eq!(row.get(1).unwrap().tag(), "#subsector");
}

#[test]
fn test_long_row_extra_cells_dropped() {
    let input = "#sector,#org\nWASH,UNICEF,unexpected,extra\n";
    let mut r = reader(input);
    let row = r.read().unwrap().unwrap();
    assert_eq!(row.len(), 2);
}

#[test]
fn test_row_with_no_retained_cells_still_emitted() {
    let input = ",#sector\nskipped\nWASH first,WASH\n";
    let mut r = reader(input);
    // "skipped" has one cell at source index 0, which is not retained.
    let first = r.read().unwrap().unwrap();
    assert!(first.is_empty());
    assert_eq!(first.row_number(), 0);
    let second = r.read().unwrap().unwrap();
    assert_eq!(second.row_number(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(second.get(0).unwrap().content(), "WASH");
}

#[test]
fn test_empty_cells_in_retained_columns_kept() {
    // An empty cell in a retained column still exists in the record, so it
    // produces a value with empty content.
    let input = "#sector,#org\n,UNICEF\n";
    let mut r = reader(input);
    let row = r.read().unwrap().unwrap();
    assert_eq!(row.len(), 2);
    assert_eq!(row.get(0).unwrap().content(), "");
}

#[test]
fn test_logical_rows_skip_nothing_after_header() {
    let input = "title,,\n#a,#b,\n1,2,\n3,4,\n5,6,\n";
    let mut r = reader(input);
    let numbers: Vec<(usize, usize)> = r
        .rows()
        .map(|row| {
            let row = row.unwrap();
            (row.row_number(), row.source_row_number())
        })
        .collect();
    assert_eq!(numbers, vec![(0, 2), (1, 3), (2, 4)]);
}

#[test]
fn test_header_not_found_reports_rows_scanned() {
    let input = "a,b\nc,d\ne,f\n";
    let mut reader = reader(input);
    match reader.schema() {
        Err(HxlError::HeaderNotFound { rows_scanned }) => assert_eq!(rows_scanned, 3),
        other => panic!("expected HeaderNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_header_not_found_on_empty_input() {
    let mut reader = reader("");
    match reader.read() {
        Err(HxlError::HeaderNotFound { rows_scanned }) => assert_eq!(rows_scanned, 0),
        other => panic!("expected HeaderNotFound, got {:?}", other),
    }
}

#[test]
fn test_schema_never_empty_on_success() {
    // Any input that produces a schema produced it from a row with at least
    // one hashtag, so a zero-column schema is impossible.
    let input = "#lone\nvalue\n";
    let mut reader = reader(input);
    let schema = reader.schema().unwrap();
    assert!(!schema.is_empty());
}

#[test]
fn test_interleaving_schema_and_rows() {
    let input = "#a,#b\n1,2\n3,4\n";
    let mut reader = reader(input);
    let first = reader.read().unwrap().unwrap();
    assert_eq!(first.row_number(), 0);
    assert_eq!(reader.schema().unwrap().len(), 2);
    let second = reader.read().unwrap().unwrap();
    assert_eq!(second.row_number(), 1);
    assert_eq!(reader.schema().unwrap().len(), 2);
}

#[test]
fn test_values_share_one_column_handle() {
    let input = "#sector\nWASH\nHealth\n";
    let mut r = reader(input);
    let first = r.read().unwrap().unwrap();
    let second = r.read().unwrap().unwrap();
    assert!(std::ptr::eq(
        first.get(0).unwrap().column(),
        second.get(0).unwrap().column()
    ));
}

#[test]
fn test_quoted_fields_pass_through() {
    let input = "#org,#sector\n\"Doctors, Without Borders\",Health\n";
    let mut r = reader(input);
    let row = r.read().unwrap().unwrap();
    assert_eq!(row.get(0).unwrap().content(), "Doctors, Without Borders");
}

#[test]
fn test_builder_quote_setting() {
    let input = "#org,#sector\n'Doctors, Without Borders',Health\n";
    let mut reader = HxlReaderBuilder::new()
        .quote(b'\'')
        .from_reader(Cursor::new(input));
    let row = reader.read().unwrap().unwrap();
    assert_eq!(row.get(0).unwrap().content(), "Doctors, Without Borders");
}

#[test]
fn test_exhausted_iterator_stays_exhausted() {
    let input = "#a\n1\n";
    let mut reader = reader(input);
    {
        let mut rows = reader.rows();
        assert!(rows.next().is_some());
        assert!(rows.next().is_none());
        assert!(rows.next().is_none());
    }
    // A fresh iterator over the same reader sees the same exhausted stream.
    assert!(reader.rows().next().is_none());
    assert!(reader.read().unwrap().is_none());
}
