//! 給与文字列のパースと年収換算
//!
//! "$120,000 - $150,000" / "$45/hour" / "80k+" のような自由記述の給与欄を
//! (下限, 上限, 支払単位) に分解し、年額に換算する。

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 給与未記載を表す入力値
pub const NOT_SPECIFIED: &str = "Not specified";

/// 時給 → 年額（40時間/週 × 52週）
pub const HOURS_PER_YEAR: f64 = 2080.0;

lazy_static! {
    static ref RANGE_RE: Regex =
        Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*[-–]\s*([0-9]+(?:\.[0-9]+)?)").unwrap();
    static ref PLUS_RE: Regex = Regex::new(r"([0-9]+(?:\.[0-9]+)?)\+").unwrap();
    static ref SINGLE_RE: Regex = Regex::new(r"([0-9]+(?:\.[0-9]+)?)").unwrap();
}

/// 支払単位
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPeriod {
    Hourly,
    Weekly,
    Monthly,
    Yearly,
    #[default]
    Unknown,
}

impl PayPeriod {
    /// 年額への換算係数（不明は年額とみなす）
    pub fn yearly_multiplier(&self) -> f64 {
        match self {
            PayPeriod::Hourly => HOURS_PER_YEAR,
            PayPeriod::Weekly => 52.0,
            PayPeriod::Monthly => 12.0,
            PayPeriod::Yearly | PayPeriod::Unknown => 1.0,
        }
    }

    /// 元の文字列から支払単位を推定
    ///
    /// "/hour" → "/month" → "/week" の順で最初に見つかったものを採用し、
    /// いずれもなければ年額。
    pub fn detect(text: &str) -> Self {
        if text.contains("/hour") {
            PayPeriod::Hourly
        } else if text.contains("/month") {
            PayPeriod::Monthly
        } else if text.contains("/week") {
            PayPeriod::Weekly
        } else {
            PayPeriod::Yearly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayPeriod::Hourly => "hourly",
            PayPeriod::Weekly => "weekly",
            PayPeriod::Monthly => "monthly",
            PayPeriod::Yearly => "yearly",
            PayPeriod::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PayPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hourly" | "hour" => Ok(PayPeriod::Hourly),
            "weekly" | "week" => Ok(PayPeriod::Weekly),
            "monthly" | "month" => Ok(PayPeriod::Monthly),
            "yearly" | "year" | "annual" => Ok(PayPeriod::Yearly),
            "unknown" => Ok(PayPeriod::Unknown),
            _ => Err(format!("Unknown pay period: {}", s)),
        }
    }
}

/// パース結果の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryStatus {
    /// 下限・上限とも取得
    Parsed,
    /// 下限のみ（"80000+" 形式）
    Partial,
    /// 数値なし・未記載
    Unparseable,
}

/// パース済み給与
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedSalary {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub period: PayPeriod,
}

impl ParsedSalary {
    /// パース不能な給与
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SalaryStatus {
        match (self.min, self.max) {
            (Some(_), Some(_)) => SalaryStatus::Parsed,
            (Some(_), None) => SalaryStatus::Partial,
            _ => SalaryStatus::Unparseable,
        }
    }

    /// 集計に使う上限。未取得または 0 のときは下限
    fn effective_max(&self, min: f64) -> f64 {
        self.max.filter(|v| *v != 0.0).unwrap_or(min)
    }

    /// 年額換算した (下限, 上限)。上限がなければ下限を使う
    pub fn annualized_bounds(&self) -> Option<(f64, f64)> {
        let min = self.min?;
        let max = self.effective_max(min);
        Some((
            min * self.period.yearly_multiplier(),
            max * self.period.yearly_multiplier(),
        ))
    }

    /// 年額換算した中央値 ((min + max) / 2)
    pub fn annualized(&self) -> Option<f64> {
        let min = self.min?;
        let max = self.effective_max(min);
        normalize_to_yearly(Some((min + max) / 2.0), self.period)
    }
}

/// 金額の抽出パターン
#[derive(Debug, Clone, Copy)]
enum AmountPattern {
    /// "120000 - 150000"
    Range,
    /// "80000+"
    Plus,
    /// "95000"
    Single,
}

impl AmountPattern {
    /// 照合順。範囲と「+」の両方に一致する文字列は範囲として扱う
    const PRIORITY: [AmountPattern; 3] =
        [AmountPattern::Range, AmountPattern::Plus, AmountPattern::Single];

    fn extract(self, text: &str) -> Option<(f64, Option<f64>)> {
        match self {
            AmountPattern::Range => {
                let cap = RANGE_RE.captures(text)?;
                let min = cap[1].parse::<f64>().ok()?;
                let max = cap[2].parse::<f64>().ok()?;
                Some((min, Some(max)))
            }
            AmountPattern::Plus => {
                let cap = PLUS_RE.captures(text)?;
                Some((cap[1].parse::<f64>().ok()?, None))
            }
            AmountPattern::Single => {
                let cap = SINGLE_RE.captures(text)?;
                let value = cap[1].parse::<f64>().ok()?;
                Some((value, Some(value)))
            }
        }
    }
}

/// 給与文字列をパースする
///
/// # Arguments
/// * `salary` - 給与欄の値（欠損は None）
///
/// # Returns
/// 数値が見つからない場合は `ParsedSalary::unknown()`
///
/// # Examples
/// ```
/// use remote_jobs_common::salary::{parse_salary, PayPeriod};
///
/// let parsed = parse_salary(Some("$45/hour"));
/// assert_eq!(parsed.min, Some(45.0));
/// assert_eq!(parsed.period, PayPeriod::Hourly);
/// ```
pub fn parse_salary(salary: Option<&str>) -> ParsedSalary {
    let original = match salary {
        Some(s) if s != NOT_SPECIFIED => s,
        _ => return ParsedSalary::unknown(),
    };

    let cleaned: String = original.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let period = PayPeriod::detect(original);

    AmountPattern::PRIORITY
        .iter()
        .find_map(|pattern| pattern.extract(&cleaned))
        .map(|(min, max)| ParsedSalary {
            min: Some(min),
            max,
            period,
        })
        .unwrap_or_default()
}

/// 金額を年額に換算する
pub fn normalize_to_yearly(value: Option<f64>, period: PayPeriod) -> Option<f64> {
    value.map(|v| v * period.yearly_multiplier())
}
