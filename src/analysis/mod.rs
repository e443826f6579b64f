//! 正規化済み求人の集計
//!
//! ## 集計内容
//! 1. 給与（年額換算の平均・中央値・雇用形態別・高給与上位）
//! 2. スキル（出現回数・出現率・よくある組み合わせ）
//! 3. 雇用形態・勤務地・掲載元・企業の分布
//! 4. 年収ヒストグラム

pub mod counter;
pub mod distribution;
pub mod histogram;
pub mod salary;
pub mod skills;

pub use counter::{CountEntry, Counter};
pub use distribution::{analyze_distribution, Distribution};
pub use histogram::{yearly_salary_samples, Bin, Histogram};
pub use salary::{analyze_salaries, SalaryStats};
pub use skills::{analyze_skills, SkillStats};

use chrono::{DateTime, Utc};
use remote_jobs_common::JobPosting;
use serde::{Deserialize, Serialize};

/// 集計オプション
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub histogram_bins: usize,
    /// この年額以上はヒストグラムから除外
    pub salary_outlier_cap: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            histogram_bins: 15,
            salary_outlier_cap: 1_000_000.0,
        }
    }
}

impl From<&crate::config::Config> for AnalysisOptions {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            histogram_bins: config.histogram_bins,
            salary_outlier_cap: config.salary_outlier_cap,
        }
    }
}

/// 集計結果一式
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub generated_at: DateTime<Utc>,
    pub total_jobs: usize,
    /// 給与情報が1件もなければ None
    pub salary: Option<SalaryStats>,
    pub skills: SkillStats,
    pub distribution: Distribution,
    pub salary_histogram: Option<Histogram>,
}

/// 求人一覧を集計する
pub fn analyze(postings: &[JobPosting], options: &AnalysisOptions) -> AnalysisSummary {
    let salary = analyze_salaries(postings);

    let salary_histogram = if salary.is_some() {
        let samples = yearly_salary_samples(postings, options.salary_outlier_cap);
        tracing::debug!(samples = samples.len(), "年収ヒストグラム対象");
        Histogram::from_values(&samples, options.histogram_bins)
    } else {
        None
    };

    AnalysisSummary {
        generated_at: Utc::now(),
        total_jobs: postings.len(),
        salary,
        skills: analyze_skills(postings),
        distribution: analyze_distribution(postings),
        salary_histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remote_jobs_common::{columns, RawJobRecord};

    #[test]
    fn test_analyze_without_salary() {
        let postings = vec![JobPosting::from_raw(&RawJobRecord::from_pairs([
            (columns::SALARY_RANGE, "Not specified"),
            (columns::REQUIRED_SKILLS, "React, Redux"),
        ]))];

        let summary = analyze(&postings, &AnalysisOptions::default());
        assert_eq!(summary.total_jobs, 1);
        assert!(summary.salary.is_none());
        assert!(summary.salary_histogram.is_none());
        assert_eq!(summary.skills.unique_skills, 2);
    }

    #[test]
    fn test_analyze_with_salary() {
        let postings: Vec<JobPosting> = ["$80,000", "$120,000", "$45/hour"]
            .iter()
            .map(|s| {
                JobPosting::from_raw(&RawJobRecord::from_pairs([(columns::SALARY_RANGE, *s)]))
            })
            .collect();

        let summary = analyze(&postings, &AnalysisOptions::default());
        let hist = summary.salary_histogram.unwrap();
        assert_eq!(hist.counts.len(), 15);
        assert_eq!(hist.total(), 3);
    }
}
