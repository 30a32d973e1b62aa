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

//! Basic usage of the HXL reader.
//!
//! Run with: `cargo run --example basic_usage`

use hxl::{HxlReader, HxlResult};
use std::io::Cursor;

fn main() -> HxlResult<()> {
    let input = "\
3W report - who does what where,,,
Sector,Subsector,Organisation,Country
#sector,#subsector,#org,#country
WASH,Water Purification,World Health Organization,Mali
Health,Vaccination,UNICEF,Chad
Health,,M\u{e9}decins Sans Fronti\u{e8}res,Mali
";

    let mut reader = HxlReader::new(Cursor::new(input));

    println!("Columns:");
    for column in reader.columns()? {
        println!(
            "  {} (logical {}, source {:?})",
            column.tag(),
            column.column_number(),
            column.source_column_number()
        );
    }

    println!("\nRows:");
    for row in reader.rows() {
        let row = row?;
        print!("  row {} (source {}):", row.row_number(), row.source_row_number());
        for value in &row {
            print!(" {}={:?}", value.tag(), value.content());
        }
        println!();
    }

    Ok(())
}
