//! 求人データの読み込み
//!
//! 拡張子で CSV / スプレッドシートを判定し、1行ずつ `RawJobRecord` に変換する。

mod csv_table;
mod spreadsheet;

pub use csv_table::parse_csv;

use crate::error::{AnalyzerError, Result};
use remote_jobs_common::RawJobRecord;
use std::path::Path;

/// 入力ファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Spreadsheet,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "csv" => Some(InputFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(InputFormat::Spreadsheet),
            _ => None,
        }
    }
}

/// 求人データを読み込む
pub fn load_records(path: &Path) -> Result<Vec<RawJobRecord>> {
    if !path.exists() {
        return Err(AnalyzerError::FileNotFound(path.display().to_string()));
    }

    let format = InputFormat::from_path(path)
        .ok_or_else(|| AnalyzerError::UnsupportedInput(path.display().to_string()))?;

    let records = match format {
        InputFormat::Csv => csv_table::load_csv(path)?,
        InputFormat::Spreadsheet => spreadsheet::load_spreadsheet(path)?,
    };

    tracing::debug!(
        path = %path.display(),
        format = ?format,
        records = records.len(),
        "求人データを読み込みました"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("jobs.csv")), Some(InputFormat::Csv));
        assert_eq!(InputFormat::from_path(Path::new("jobs.CSV")), Some(InputFormat::Csv));
        assert_eq!(
            InputFormat::from_path(Path::new("jobs.xlsx")),
            Some(InputFormat::Spreadsheet)
        );
        assert_eq!(InputFormat::from_path(Path::new("jobs.json")), None);
        assert_eq!(InputFormat::from_path(Path::new("jobs")), None);
    }

    #[test]
    fn test_load_records_not_found() {
        let result = load_records(Path::new("/nonexistent/jobs.csv"));
        assert!(matches!(result, Err(AnalyzerError::FileNotFound(_))));
    }
}
