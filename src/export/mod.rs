pub mod excel;
pub mod report;

pub use report::{format_money, generate_report, title_case, ReportOptions};

use crate::analysis::AnalysisSummary;
use crate::cli::ReportFormat;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// 出力ファイル名
#[derive(Debug, Clone)]
pub struct OutputFiles {
    pub report_file: String,
    pub json_file: String,
    pub chart_file: String,
}

impl From<&crate::config::Config> for OutputFiles {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            report_file: config.report_file.clone(),
            json_file: config.json_file.clone(),
            chart_file: config.chart_file.clone(),
        }
    }
}

/// 書き出したファイル
#[derive(Debug, Clone, Default)]
pub struct ExportedPaths {
    pub report: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub chart: Option<PathBuf>,
}

/// レポート・グラフを出力する
///
/// `report` は生成済みのテキストレポート（標準出力と同じ内容を保存する）。
pub fn export_results(
    summary: &AnalysisSummary,
    report: &str,
    format: &ReportFormat,
    output_dir: &Path,
    files: &OutputFiles,
    with_charts: bool,
) -> Result<ExportedPaths> {
    std::fs::create_dir_all(output_dir)?;
    let mut exported = ExportedPaths::default();

    if matches!(format, ReportFormat::Text | ReportFormat::Both) {
        let path = output_dir.join(&files.report_file);
        std::fs::write(&path, report)?;
        println!("✔ レポート出力: {}", path.display());
        exported.report = Some(path);
    }

    if matches!(format, ReportFormat::Json | ReportFormat::Both) {
        let path = output_dir.join(&files.json_file);
        let json = serde_json::to_string_pretty(summary)?;
        std::fs::write(&path, json)?;
        println!("✔ JSON出力: {}", path.display());
        exported.json = Some(path);
    }

    if with_charts {
        let path = output_dir.join(&files.chart_file);
        println!("- グラフを生成中...");
        match excel::generate_excel(summary, &path) {
            Ok(()) => {
                println!("✔ グラフ出力: {}", path.display());
                exported.chart = Some(path);
            }
            // グラフ生成の失敗ではレポートを無効にしない
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "グラフ生成に失敗");
                println!("⚠ グラフを生成できませんでした: {}", e);
            }
        }
    }

    Ok(exported)
}
