//! 求人レコードの型定義
//!
//! - RawJobRecord: 入力表の1行（列名 → 文字列）
//! - JobPosting: 給与・スキルを構造化した正規化済みレコード

use crate::salary::{parse_salary, ParsedSalary};
use crate::skills::{extract_skills_with, SkillAliases};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 入力表の列名
pub mod columns {
    pub const JOB_TITLE: &str = "Job Title";
    pub const COMPANY: &str = "Company";
    pub const SALARY_RANGE: &str = "Salary Range";
    pub const REQUIRED_SKILLS: &str = "Required Skills";
    pub const JOB_TYPE: &str = "Job Type";
    pub const LOCATION: &str = "Location";
    pub const SOURCE: &str = "Source";
}

/// 欠損値として扱うセル値（pandas の既定 NA 表記と同じ、大文字小文字を区別）
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// 欠損値表記かどうか
pub fn is_na_value(value: &str) -> bool {
    NA_VALUES.contains(&value)
}

/// 入力表の1行
///
/// 空セルと `NA_VALUES` のセルは欠損値として扱う。存在しない列へのアクセスも欠損値になる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawJobRecord {
    fields: HashMap<String, String>,
}

impl RawJobRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// ヘッダと値の組から生成（長さが合わない分は無視）
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// 列の値を取得（空セル・NA 表記は None）
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(|v| v.as_str())
            .filter(|v| !is_na_value(v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// 正規化済みの求人レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub title: Option<String>,
    pub company: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub source: Option<String>,
    pub salary: ParsedSalary,
    pub skills: Vec<String>,
}

impl JobPosting {
    /// 組み込みの同義語テーブルのみで正規化
    pub fn from_raw(record: &RawJobRecord) -> Self {
        Self::from_raw_with(record, &SkillAliases::default())
    }

    /// 追加エイリアスを適用して正規化
    pub fn from_raw_with(record: &RawJobRecord, aliases: &SkillAliases) -> Self {
        let owned = |column: &str| record.get(column).map(str::to_string);

        Self {
            title: owned(columns::JOB_TITLE),
            company: owned(columns::COMPANY),
            job_type: owned(columns::JOB_TYPE),
            location: owned(columns::LOCATION),
            source: owned(columns::SOURCE),
            salary: parse_salary(record.get(columns::SALARY_RANGE)),
            skills: extract_skills_with(record.get(columns::REQUIRED_SKILLS), aliases),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::salary::PayPeriod;

    fn sample_record() -> RawJobRecord {
        RawJobRecord::from_pairs([
            (columns::JOB_TITLE, "Senior React Developer"),
            (columns::COMPANY, "Acme"),
            (columns::SALARY_RANGE, "$120,000 - $150,000"),
            (columns::REQUIRED_SKILLS, "ReactJS, TS; GraphQL"),
            (columns::JOB_TYPE, "Full-time"),
            (columns::LOCATION, ""),
            (columns::SOURCE, "RemoteOK"),
        ])
    }

    #[test]
    fn test_get_treats_empty_as_missing() {
        let record = sample_record();
        assert_eq!(record.get(columns::COMPANY), Some("Acme"));
        assert_eq!(record.get(columns::LOCATION), None);
        assert_eq!(record.get("Unknown Column"), None);
    }

    #[test]
    fn test_get_treats_na_strings_as_missing() {
        let record = RawJobRecord::from_pairs([
            (columns::REQUIRED_SKILLS, "N/A"),
            (columns::LOCATION, "null"),
            (columns::SOURCE, "NaN"),
            (columns::COMPANY, "Nan Labs"),
        ]);
        assert_eq!(record.get(columns::REQUIRED_SKILLS), None);
        assert_eq!(record.get(columns::LOCATION), None);
        assert_eq!(record.get(columns::SOURCE), None);
        assert_eq!(record.get(columns::COMPANY), Some("Nan Labs"));

        let posting = JobPosting::from_raw(&record);
        assert!(posting.skills.is_empty());
        assert!(posting.location.is_none());
    }

    #[test]
    fn test_job_posting_from_raw() {
        let posting = JobPosting::from_raw(&sample_record());

        assert_eq!(posting.title.as_deref(), Some("Senior React Developer"));
        assert_eq!(posting.location, None);
        assert_eq!(posting.salary.min, Some(120000.0));
        assert_eq!(posting.salary.max, Some(150000.0));
        assert_eq!(posting.salary.period, PayPeriod::Yearly);
        assert_eq!(posting.skills, vec!["react", "typescript", "graphql"]);
    }

    #[test]
    fn test_job_posting_missing_columns() {
        let posting = JobPosting::from_raw(&RawJobRecord::new());
        assert_eq!(posting.salary.period, PayPeriod::Unknown);
        assert!(posting.skills.is_empty());
        assert!(posting.title.is_none());
    }
}
