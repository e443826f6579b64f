//! テキストレポート生成

use crate::analysis::{AnalysisSummary, CountEntry};

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 20;

/// レポートの表示件数
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub top_paying_jobs: usize,
    pub top_skills: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_paying_jobs: 5,
            top_skills: 15,
        }
    }
}

impl From<&crate::config::Config> for ReportOptions {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            top_paying_jobs: config.top_paying_jobs,
            top_skills: config.top_skills,
        }
    }
}

/// 集計結果をテキストレポートにする
pub fn generate_report(summary: &AnalysisSummary, options: &ReportOptions) -> String {
    let mut report: Vec<String> = Vec::new();
    let total = summary.total_jobs;

    report.push("=".repeat(BANNER_WIDTH));
    report.push("REMOTE REACT JOBS ANALYSIS REPORT".into());
    report.push("=".repeat(BANNER_WIDTH));
    report.push(format!("Total Jobs Analyzed: {}", total));
    report.push(String::new());

    // 給与
    section(&mut report, "SALARY ANALYSIS");
    match &summary.salary {
        Some(salary) => {
            report.push(format!("Jobs with salary info: {}", salary.total_jobs_with_salary));
            report.push(format!("Average salary: {}", format_money(salary.avg_salary)));
            report.push(format!("Median salary: {}", format_money(salary.median_salary)));
            report.push(format!(
                "Salary range: {} - {}",
                format_money(salary.min_salary),
                format_money(salary.max_salary)
            ));
            report.push(String::new());

            report.push(format!("Top {} Highest Paying Jobs:", options.top_paying_jobs));
            for (i, job) in salary
                .top_paying_jobs
                .iter()
                .take(options.top_paying_jobs)
                .enumerate()
            {
                report.push(format!(
                    "{}. {} at {} - {}",
                    i + 1,
                    or_unknown(job.job_title.as_deref()),
                    or_unknown(job.company.as_deref()),
                    format_money(job.avg_yearly)
                ));
            }
        }
        None => report.push("No valid salary data found".into()),
    }
    report.push(String::new());

    // スキル
    let skills = &summary.skills;
    section(&mut report, "SKILLS ANALYSIS");
    report.push(format!("Total skills mentioned: {}", skills.total_skills_mentioned));
    report.push(format!("Unique skills: {}", skills.unique_skills));
    report.push(String::new());

    report.push(format!("Top {} Most Required Skills:", options.top_skills));
    for (i, entry) in skills
        .most_common_skills
        .iter()
        .take(options.top_skills)
        .enumerate()
    {
        let percentage = skills.frequency_of(&entry.value).unwrap_or(0.0);
        report.push(format!(
            "{:2}. {:<20} - {:3} jobs ({:.1}%)",
            i + 1,
            title_case(&entry.value),
            entry.count,
            percentage
        ));
    }
    report.push(String::new());

    // 分布
    let distribution = &summary.distribution;
    section(&mut report, "JOB DISTRIBUTION");

    report.push("By Job Type:".into());
    push_shares(&mut report, &distribution.job_type_distribution, total);
    report.push(String::new());

    report.push("By Source:".into());
    push_shares(&mut report, &distribution.source_distribution, total);
    report.push(String::new());

    report.push("Companies with Most Job Postings:".into());
    for (i, entry) in distribution.companies_with_most_jobs.iter().enumerate() {
        report.push(format!("{:2}. {}: {} jobs", i + 1, entry.value, entry.count));
    }

    report.join("\n")
}

fn section(report: &mut Vec<String>, heading: &str) {
    report.push(heading.into());
    report.push("-".repeat(RULE_WIDTH));
}

fn push_shares(report: &mut Vec<String>, entries: &[CountEntry<String>], total: usize) {
    for entry in entries {
        report.push(format!(
            "  {}: {} ({:.1}%)",
            entry.value,
            entry.count,
            percent(entry.count, total)
        ));
    }
}

fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or("Unknown")
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// 金額を "$1,234,567" 形式にする（小数点以下は丸める）
pub fn format_money(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}${}", sign, grouped)
}

/// 単語の先頭を大文字にする（"node.js" → "Node.Js"）
///
/// 直前の文字が大文字・小文字を持つ文字なら小文字、それ以外（数字・記号・漢字など）の後は大文字にする。
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_cased = false;

    for c in text.chars() {
        if prev_cased {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        prev_cased = c.is_lowercase() || c.is_uppercase();
    }

    result
}
