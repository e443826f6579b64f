//! 年収分布のヒストグラム

use remote_jobs_common::JobPosting;
use serde::{Deserialize, Serialize};

/// 等幅ビンのヒストグラム
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// ビン境界（ビン数 + 1 個）
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// 1ビン分
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl Histogram {
    /// 値を `bins` 個の等幅ビンに分ける
    ///
    /// 範囲は [最小値, 最大値] で、最後のビンのみ上端を含む。
    /// 全て同じ値の場合は前後 0.5 に広げる。
    pub fn from_values(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }

        let mut lower = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut upper = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lower == upper {
            lower -= 0.5;
            upper += 0.5;
        }

        let width = (upper - lower) / bins as f64;
        let mut edges: Vec<f64> = (0..=bins).map(|i| lower + width * i as f64).collect();
        edges[bins] = upper;

        let mut counts = vec![0; bins];
        for &value in values {
            let index = (((value - lower) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        Some(Self { edges, counts })
    }

    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.counts.iter().enumerate().map(|(i, &count)| Bin {
            lower: self.edges[i],
            upper: self.edges[i + 1],
            count,
        })
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// ヒストグラム対象の年収（平均）を収集する
///
/// 下限が 0 の求人と `outlier_cap` 以上の外れ値は除外する。
pub fn yearly_salary_samples(postings: &[JobPosting], outlier_cap: f64) -> Vec<f64> {
    postings
        .iter()
        .filter_map(|posting| {
            posting.salary.min.filter(|v| *v != 0.0)?;
            posting.salary.annualized()
        })
        .filter(|yearly| *yearly != 0.0 && *yearly < outlier_cap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use remote_jobs_common::parse_salary;

    #[test]
    fn test_histogram_bins() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 10.0];
        let hist = Histogram::from_values(&values, 5).unwrap();

        assert_eq!(hist.edges, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(hist.counts, vec![2, 2, 1, 0, 1]);
        assert_eq!(hist.total(), values.len());
    }

    #[test]
    fn test_histogram_single_value() {
        let hist = Histogram::from_values(&[100.0, 100.0], 4).unwrap();
        assert_eq!(hist.edges[0], 99.5);
        assert_eq!(hist.edges[4], 100.5);
        assert_eq!(hist.total(), 2);
    }

    #[test]
    fn test_histogram_empty() {
        assert!(Histogram::from_values(&[], 15).is_none());
        assert!(Histogram::from_values(&[1.0], 0).is_none());
    }

    #[test]
    fn test_bins_iter() {
        let hist = Histogram::from_values(&[0.0, 10.0], 2).unwrap();
        let bins: Vec<Bin> = hist.bins().collect();
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[1], Bin { lower: 5.0, upper: 10.0, count: 1 });
    }

    #[test]
    fn test_yearly_salary_samples() {
        let postings: Vec<JobPosting> = [
            "$100,000 - $120,000",
            "$50/hour",
            "$2,000,000",
            "0",
            "Not specified",
        ]
        .iter()
        .map(|s| JobPosting {
            salary: parse_salary(Some(s)),
            ..Default::default()
        })
        .collect();

        let samples = yearly_salary_samples(&postings, 1_000_000.0);
        assert_eq!(samples, vec![110000.0, 104000.0]);
    }
}
