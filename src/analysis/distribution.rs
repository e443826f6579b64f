//! 雇用形態・勤務地・掲載元の分布

use super::counter::{CountEntry, Counter};
use remote_jobs_common::JobPosting;
use serde::{Deserialize, Serialize};

const TOP_COMPANIES_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub job_type_distribution: Vec<CountEntry<String>>,
    pub location_distribution: Vec<CountEntry<String>>,
    pub source_distribution: Vec<CountEntry<String>>,
    pub companies_with_most_jobs: Vec<CountEntry<String>>,
}

/// 欠損値を除いて出現回数を数える
fn value_counts<'a>(values: impl Iterator<Item = Option<&'a String>>) -> Counter<String> {
    values.flatten().cloned().collect()
}

pub fn analyze_distribution(postings: &[JobPosting]) -> Distribution {
    Distribution {
        job_type_distribution: value_counts(postings.iter().map(|p| p.job_type.as_ref()))
            .most_common(None),
        location_distribution: value_counts(postings.iter().map(|p| p.location.as_ref()))
            .most_common(None),
        source_distribution: value_counts(postings.iter().map(|p| p.source.as_ref()))
            .most_common(None),
        companies_with_most_jobs: value_counts(postings.iter().map(|p| p.company.as_ref()))
            .most_common(Some(TOP_COMPANIES_LIMIT)),
    }
}
