use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("未対応の入力形式です: {0}（csv / xlsx / xls / ods に対応）")]
    UnsupportedInput(String),

    #[error("CSV読み込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("スプレッドシート読み込みエラー: {0}")]
    Spreadsheet(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("求人レコードがありません: {0}")]
    NoRecords(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] remote_jobs_common::Error),
}

impl From<calamine::Error> for AnalyzerError {
    fn from(err: calamine::Error) -> Self {
        AnalyzerError::Spreadsheet(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AnalyzerError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AnalyzerError::ExcelGeneration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
