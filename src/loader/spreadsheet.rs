//! スプレッドシート（xlsx / xls / ods）読み込み
//!
//! 先頭シートの1行目をヘッダとして扱う。

use crate::error::{AnalyzerError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use remote_jobs_common::RawJobRecord;
use std::path::Path;

pub(super) fn load_spreadsheet(path: &Path) -> Result<Vec<RawJobRecord>> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AnalyzerError::Spreadsheet(format!("シートがありません: {}", path.display())))?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();

    let headers: Vec<String> = match rows.next() {
        Some(row) => row.iter().map(cell_text).collect(),
        None => return Ok(Vec::new()),
    };

    let records = rows
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| {
            RawJobRecord::from_pairs(
                headers
                    .iter()
                    .zip(row.iter())
                    .map(|(header, cell)| (header.clone(), cell_text(cell))),
            )
        })
        .collect();

    Ok(records)
}

/// セル値を文字列に変換（数値は "120000" のように整形される）
fn cell_text(cell: &Data) -> String {
    cell.to_string().trim().to_string()
}
