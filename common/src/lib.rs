//! Remote Jobs Common Library
//!
//! 求人データの自由記述欄（給与・スキル）を構造化する純粋関数群

pub mod error;
pub mod salary;
pub mod skills;
pub mod types;

pub use error::{Error, Result};
pub use salary::{normalize_to_yearly, parse_salary, ParsedSalary, PayPeriod, SalaryStatus};
pub use skills::{canonical_skill, extract_skills, extract_skills_with, SkillAliases};
pub use types::{columns, is_na_value, JobPosting, RawJobRecord, NA_VALUES};
