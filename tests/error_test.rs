//! エラーケーステスト
//!
//! 入力ファイルまわりのエラーハンドリングを検証

use remote_jobs_analyzer::error::AnalyzerError;
use remote_jobs_analyzer::{loader, pipeline};
use remote_jobs_common::SkillAliases;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_file() {
    let result = loader::load_records(Path::new("/nonexistent/path/jobs.csv"));
    assert!(matches!(result, Err(AnalyzerError::FileNotFound(_))));
}

/// 未対応の拡張子
#[test]
fn test_load_unsupported_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("jobs.json");
    std::fs::write(&path, "[]").unwrap();

    let result = loader::load_records(&path);
    assert!(matches!(result, Err(AnalyzerError::UnsupportedInput(_))));
}

/// ヘッダのみのCSVは NoRecords
#[test]
fn test_pipeline_header_only_csv() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("jobs.csv");
    std::fs::write(&path, "Job Title,Company,Salary Range\n").unwrap();

    // 読み込み自体は成功し空になる
    assert!(loader::load_records(&path).unwrap().is_empty());

    let result = pipeline::load_postings(&path, &SkillAliases::default());
    assert!(matches!(result, Err(AnalyzerError::NoRecords(_))));
}

/// 壊れたスプレッドシート
#[test]
fn test_load_corrupt_spreadsheet() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("jobs.xlsx");
    std::fs::write(&path, b"not a zip archive").unwrap();

    let result = loader::load_records(&path);
    assert!(matches!(result, Err(AnalyzerError::Spreadsheet(_))));
}

/// AnalyzerErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        AnalyzerError::Config("テスト設定エラー".to_string()),
        AnalyzerError::FileNotFound("jobs.csv".to_string()),
        AnalyzerError::UnsupportedInput("jobs.pdf".to_string()),
        AnalyzerError::Spreadsheet("壊れたファイル".to_string()),
        AnalyzerError::ExcelGeneration("Excel生成エラー".to_string()),
        AnalyzerError::NoRecords("jobs.csv".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AnalyzerError = io_err.into();

    assert!(matches!(err, AnalyzerError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: AnalyzerError = json_err.into();

    assert!(matches!(err, AnalyzerError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = remote_jobs_common::Error::Config("エイリアス設定エラー".to_string());
    let err: AnalyzerError = common_err.into();

    assert!(matches!(err, AnalyzerError::Common(_)));
    assert!(format!("{}", err).contains("エイリアス設定エラー"));
}
