//! CSV読み込み

use crate::error::Result;
use csv::{ReaderBuilder, StringRecord, Trim};
use remote_jobs_common::RawJobRecord;
use std::path::Path;

pub(super) fn load_csv(path: &Path) -> Result<Vec<RawJobRecord>> {
    let bytes = std::fs::read(path)?;
    // UTF-8でない文字は置換して読み込む
    let content = String::from_utf8_lossy(&bytes);
    parse_csv(&content)
}

/// CSV文字列をパースする（1行目はヘッダ）
pub fn parse_csv(content: &str) -> Result<Vec<RawJobRecord>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true) // 列数の違う行も許容
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(to_record(&headers, &row));
    }

    Ok(records)
}

fn to_record(headers: &StringRecord, row: &StringRecord) -> RawJobRecord {
    RawJobRecord::from_pairs(headers.iter().zip(row.iter()))
}
