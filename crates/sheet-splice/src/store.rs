//! Opening and persisting workbooks

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sheet_splice_core::Workbook;
use sheet_splice_csv::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};

use crate::error::{Error, Result};

/// Loads a workbook for an action and writes it back afterwards
pub trait WorkbookStore {
    /// Reject paths this store cannot handle, before anything is opened
    fn check_path(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    /// Open the workbook at `path`
    fn open(&self, path: &Path) -> Result<Workbook>;

    /// Persist `workbook` to `path`
    fn save(&self, workbook: &Workbook, path: &Path) -> Result<()>;
}

/// CSV files as single-sheet workbooks
///
/// The worksheet is named after the file stem: `data/report.csv` holds
/// worksheet `report`.
#[derive(Debug, Clone, Default)]
pub struct CsvStore {
    pub read: CsvReadOptions,
    pub write: CsvWriteOptions,
}

impl CsvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

fn sheet_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::Storage(format!("Cannot name a worksheet after {}", path.display())))
}

impl WorkbookStore for CsvStore {
    fn check_path(&self, path: &Path) -> Result<()> {
        if is_csv(path) {
            Ok(())
        } else {
            Err(Error::validation(
                "Invalid file for spreadsheet documents. Expecting file name with extension CSV.",
            ))
        }
    }

    fn open(&self, path: &Path) -> Result<Workbook> {
        self.check_path(path)?;
        let options = CsvReadOptions {
            sheet_name: sheet_name(path)?,
            ..self.read.clone()
        };
        let worksheet = CsvReader::read_file(path, &options)?;

        let mut workbook = Workbook::empty();
        workbook.add_existing_worksheet(worksheet)?;
        log::debug!("opened {}", path.display());
        Ok(workbook)
    }

    fn save(&self, workbook: &Workbook, path: &Path) -> Result<()> {
        self.check_path(path)?;
        let sheet = workbook
            .worksheet(0)
            .ok_or_else(|| Error::Storage("No worksheets to save".to_string()))?;
        CsvWriter::write_file(sheet, path, &self.write)?;
        log::debug!("saved {}", path.display());
        Ok(())
    }
}

/// Workbooks kept in memory, keyed by path
#[derive(Debug, Default)]
pub struct MemoryStore {
    workbooks: RefCell<HashMap<PathBuf, Workbook>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `workbook` under `path`, replacing any previous one
    pub fn insert<P: Into<PathBuf>>(&self, path: P, workbook: Workbook) {
        self.workbooks.borrow_mut().insert(path.into(), workbook);
    }

    /// Copy of the workbook stored under `path`
    pub fn get<P: AsRef<Path>>(&self, path: P) -> Option<Workbook> {
        self.workbooks.borrow().get(path.as_ref()).cloned()
    }
}

impl WorkbookStore for MemoryStore {
    fn open(&self, path: &Path) -> Result<Workbook> {
        self.get(path)
            .ok_or_else(|| Error::Storage(format!("No workbook at {}", path.display())))
    }

    fn save(&self, workbook: &Workbook, path: &Path) -> Result<()> {
        self.insert(path, workbook.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheet_splice_core::CellValue;
    use std::fs;

    #[test]
    fn test_csv_extension_check() {
        let store = CsvStore::new();
        assert!(store.check_path(Path::new("a/b.csv")).is_ok());
        assert!(store.check_path(Path::new("B.CSV")).is_ok());

        let err = store.check_path(Path::new("book.xlsx")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid file for spreadsheet documents. Expecting file name with extension CSV."
        );
        assert!(store.check_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_csv_sheet_named_after_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        fs::write(&path, "1,2\nx,\n").unwrap();

        let workbook = CsvStore::new().open(&path).unwrap();
        let sheet = workbook.worksheet_by_name("report").unwrap();
        assert_eq!(sheet.get_value_at(0, 1), CellValue::Number(2.0));
        assert_eq!(sheet.get_value_at(1, 0), CellValue::string("x"));
    }

    #[test]
    fn test_csv_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let store = CsvStore::new();

        let mut workbook = Workbook::empty();
        workbook.add_worksheet_with_name("out").unwrap();
        workbook
            .worksheet_mut(0)
            .unwrap()
            .set_cell_value_at(1, 1, "b")
            .unwrap();
        store.save(&workbook, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), ",\n,b\n");
    }

    #[test]
    fn test_csv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvStore::new()
            .open(&dir.path().join("missing.csv"))
            .unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.open(Path::new("book")).is_err());

        store.insert("book", Workbook::new());
        let mut workbook = store.open(Path::new("book")).unwrap();
        workbook
            .worksheet_mut(0)
            .unwrap()
            .set_cell_value_at(0, 0, 1.0)
            .unwrap();
        assert!(store.get("book").unwrap().worksheet(0).unwrap().is_empty());

        store.save(&workbook, Path::new("book")).unwrap();
        assert_eq!(
            store.get("book").unwrap().worksheet(0).unwrap().get_value_at(0, 0),
            CellValue::Number(1.0)
        );
    }
}
