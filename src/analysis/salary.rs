//! 給与の集計

use remote_jobs_common::{JobPosting, PayPeriod};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 上位に残す高給与求人の件数
pub const TOP_PAYING_LIMIT: usize = 10;

/// 年額換算した給与（1求人分）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub job_type: Option<String>,
    pub min_yearly: f64,
    pub max_yearly: f64,
    pub avg_yearly: f64,
    pub original_period: PayPeriod,
}

/// 雇用形態別の給与
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTypeSalary {
    pub job_type: String,
    pub mean: f64,
    pub median: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPayingJob {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub avg_yearly: f64,
}

/// 給与の統計情報
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStats {
    pub total_jobs_with_salary: usize,
    pub avg_salary: f64,
    pub median_salary: f64,
    pub min_salary: f64,
    pub max_salary: f64,
    pub salary_by_job_type: Vec<JobTypeSalary>,
    pub top_paying_jobs: Vec<TopPayingJob>,
}

/// 給与の下限が取れた求人を年額換算する
pub fn salary_records(postings: &[JobPosting]) -> Vec<SalaryRecord> {
    postings
        .iter()
        .filter_map(|posting| {
            let (min_yearly, max_yearly) = posting.salary.annualized_bounds()?;
            Some(SalaryRecord {
                job_title: posting.title.clone(),
                company: posting.company.clone(),
                job_type: posting.job_type.clone(),
                min_yearly,
                max_yearly,
                avg_yearly: (min_yearly + max_yearly) / 2.0,
                original_period: posting.salary.period,
            })
        })
        .collect()
}

/// 給与を集計する（給与情報が1件もなければ None）
pub fn analyze_salaries(postings: &[JobPosting]) -> Option<SalaryStats> {
    let records = salary_records(postings);
    if records.is_empty() {
        return None;
    }

    let averages: Vec<f64> = records.iter().map(|r| r.avg_yearly).collect();

    let min_salary = records
        .iter()
        .map(|r| r.min_yearly)
        .fold(f64::INFINITY, f64::min);
    let max_salary = records
        .iter()
        .map(|r| r.max_yearly)
        .fold(f64::NEG_INFINITY, f64::max);

    // 雇用形態名でソート（未記載は除外）
    let mut by_type: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in &records {
        if let Some(job_type) = record.job_type.as_deref() {
            by_type.entry(job_type).or_default().push(record.avg_yearly);
        }
    }
    let salary_by_job_type = by_type
        .into_iter()
        .map(|(job_type, values)| JobTypeSalary {
            job_type: job_type.to_string(),
            mean: mean(&values),
            median: median(&values),
            count: values.len(),
        })
        .collect();

    // 同額は入力順を保つ
    let mut ranked: Vec<&SalaryRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.avg_yearly.total_cmp(&a.avg_yearly));
    let top_paying_jobs = ranked
        .into_iter()
        .take(TOP_PAYING_LIMIT)
        .map(|r| TopPayingJob {
            job_title: r.job_title.clone(),
            company: r.company.clone(),
            avg_yearly: r.avg_yearly,
        })
        .collect();

    Some(SalaryStats {
        total_jobs_with_salary: records.len(),
        avg_salary: mean(&averages),
        median_salary: median(&averages),
        min_salary,
        max_salary,
        salary_by_job_type,
        top_paying_jobs,
    })
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// 中央値（偶数件は中央2件の平均）
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remote_jobs_common::parse_salary;

    fn posting(title: &str, salary: &str, job_type: Option<&str>) -> JobPosting {
        JobPosting {
            title: Some(title.to_string()),
            company: Some(format!("{} Inc", title)),
            job_type: job_type.map(str::to_string),
            salary: parse_salary(Some(salary)),
            ..Default::default()
        }
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_analyze_salaries() {
        let postings = vec![
            posting("A", "$100,000 - $120,000", Some("Full-time")),
            posting("B", "$50/hour", Some("Contract")),
            posting("C", "Not specified", Some("Full-time")),
            posting("D", "$90,000+", Some("Full-time")),
        ];

        let stats = analyze_salaries(&postings).unwrap();
        assert_eq!(stats.total_jobs_with_salary, 3);
        // 110000, 104000, 90000
        assert!((stats.avg_salary - 101333.333).abs() < 0.01);
        assert_eq!(stats.median_salary, 104000.0);
        assert_eq!(stats.min_salary, 90000.0);
        assert_eq!(stats.max_salary, 120000.0);

        assert_eq!(stats.salary_by_job_type.len(), 2);
        assert_eq!(stats.salary_by_job_type[0].job_type, "Contract");
        assert_eq!(stats.salary_by_job_type[1].count, 2);
        assert_eq!(stats.salary_by_job_type[1].mean, 100000.0);

        assert_eq!(stats.top_paying_jobs[0].job_title.as_deref(), Some("A"));
        assert_eq!(stats.top_paying_jobs[2].avg_yearly, 90000.0);
    }

    #[test]
    fn test_analyze_salaries_none() {
        let postings = vec![posting("A", "Not specified", None), posting("B", "DOE", None)];
        assert!(analyze_salaries(&postings).is_none());
    }

    #[test]
    fn test_zero_max_uses_min() {
        let postings = vec![posting("A", "$50,000 - $0", Some("Full-time"))];
        let stats = analyze_salaries(&postings).unwrap();

        assert_eq!(stats.avg_salary, 50000.0);
        assert_eq!(stats.min_salary, 50000.0);
        assert_eq!(stats.max_salary, 50000.0);
    }

    #[test]
    fn test_top_paying_limit_and_ties() {
        let postings: Vec<JobPosting> = (0..12)
            .map(|i| posting(&format!("Job{}", i), "80000", None))
            .collect();
        let stats = analyze_salaries(&postings).unwrap();
        assert_eq!(stats.top_paying_jobs.len(), TOP_PAYING_LIMIT);
        assert_eq!(stats.top_paying_jobs[0].job_title.as_deref(), Some("Job0"));
        assert_eq!(stats.top_paying_jobs[9].job_title.as_deref(), Some("Job9"));
    }
}
