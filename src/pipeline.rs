//! 読み込み → 正規化 → 集計 の一連処理

use crate::analysis::{self, AnalysisOptions, AnalysisSummary};
use crate::error::{AnalyzerError, Result};
use crate::loader;
use remote_jobs_common::{JobPosting, SalaryStatus, SkillAliases};
use std::path::Path;

/// 入力ファイルを読み込み、求人レコードを正規化する
pub fn load_postings(path: &Path, aliases: &SkillAliases) -> Result<Vec<JobPosting>> {
    let records = loader::load_records(path)?;
    if records.is_empty() {
        return Err(AnalyzerError::NoRecords(path.display().to_string()));
    }

    let postings: Vec<JobPosting> = records
        .iter()
        .map(|record| JobPosting::from_raw_with(record, aliases))
        .collect();

    let unparseable = postings
        .iter()
        .filter(|p| p.salary.status() == SalaryStatus::Unparseable)
        .count();
    tracing::debug!(
        postings = postings.len(),
        unparseable_salaries = unparseable,
        "求人レコードを正規化しました"
    );

    Ok(postings)
}

/// 入力ファイルを集計する
pub fn analyze_file(
    path: &Path,
    aliases: &SkillAliases,
    options: &AnalysisOptions,
) -> Result<AnalysisSummary> {
    let postings = load_postings(path, aliases)?;
    Ok(analysis::analyze(&postings, options))
}
