//! # sheet-splice-csv
//!
//! CSV reader and writer for sheet-splice.
//!
//! Cells keep their absolute positions: row 0 of the file is row 0 of the
//! worksheet, and the writer always starts at A1 so blank leading rows and
//! columns survive a round trip.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
