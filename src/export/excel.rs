//! グラフ付きExcel生成
//!
//! シートごとに集計表とネイティブグラフを配置する:
//! - JobTypes: 雇用形態の円グラフ
//! - Skills: 上位10スキルの横棒グラフ
//! - Sources: 掲載元別の縦棒グラフ
//! - Salaries: 年収ヒストグラム（給与情報がある場合のみ）

use super::report::format_money;
use crate::analysis::{AnalysisSummary, CountEntry, Histogram};
use crate::error::Result;
use rust_xlsxwriter::{
    Chart, ChartDataLabel, ChartType, DocProperties, Format, Workbook, Worksheet,
};
use std::path::Path;

pub const WORKBOOK_TITLE: &str = "Remote React Jobs Analysis";

const TOP_SKILLS_CHARTED: usize = 10;

/// グラフの配置位置（表の右側）
const CHART_ROW: u32 = 1;
const CHART_COL: u16 = 3;

pub fn generate_excel(summary: &AnalysisSummary, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    workbook.set_properties(&DocProperties::new().set_title(WORKBOOK_TITLE));

    let header_format = Format::new().set_bold();

    // 雇用形態
    let job_types = &summary.distribution.job_type_distribution;
    let sheet = workbook.add_worksheet();
    sheet.set_name("JobTypes")?;
    write_counts(sheet, &header_format, "Job Type", "Jobs", job_types)?;
    if !job_types.is_empty() {
        let mut chart = Chart::new(ChartType::Pie);
        chart
            .add_series()
            .set_categories(("JobTypes", 1, 0, job_types.len() as u32, 0))
            .set_values(("JobTypes", 1, 1, job_types.len() as u32, 1))
            .set_data_label(ChartDataLabel::new().show_percentage());
        chart.title().set_name("Job Type Distribution");
        sheet.insert_chart(CHART_ROW, CHART_COL, &chart)?;
    }

    // スキル
    let top_skills: Vec<CountEntry<String>> = summary
        .skills
        .most_common_skills
        .iter()
        .take(TOP_SKILLS_CHARTED)
        .cloned()
        .collect();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Skills")?;
    write_counts(sheet, &header_format, "Skill", "Frequency", &top_skills)?;
    if !top_skills.is_empty() {
        let mut chart = Chart::new(ChartType::Bar);
        chart
            .add_series()
            .set_categories(("Skills", 1, 0, top_skills.len() as u32, 0))
            .set_values(("Skills", 1, 1, top_skills.len() as u32, 1))
            .set_name("Frequency");
        chart.title().set_name("Top 10 Required Skills");
        chart.legend().set_hidden();
        sheet.insert_chart(CHART_ROW, CHART_COL, &chart)?;
    }

    // 掲載元
    let sources = &summary.distribution.source_distribution;
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sources")?;
    write_counts(sheet, &header_format, "Job Source", "Number of Jobs", sources)?;
    if !sources.is_empty() {
        let mut chart = Chart::new(ChartType::Column);
        chart
            .add_series()
            .set_categories(("Sources", 1, 0, sources.len() as u32, 0))
            .set_values(("Sources", 1, 1, sources.len() as u32, 1))
            .set_name("Jobs");
        chart.title().set_name("Jobs by Source");
        chart.x_axis().set_name("Job Source");
        chart.y_axis().set_name("Number of Jobs");
        chart.legend().set_hidden();
        sheet.insert_chart(CHART_ROW, CHART_COL, &chart)?;
    }

    // 年収分布
    if let Some(histogram) = &summary.salary_histogram {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Salaries")?;
        write_histogram(sheet, &header_format, histogram)?;

        let rows = histogram.counts.len() as u32;
        let mut chart = Chart::new(ChartType::Column);
        chart
            .add_series()
            .set_categories(("Salaries", 1, 0, rows, 0))
            .set_values(("Salaries", 1, 1, rows, 1))
            .set_name("Frequency")
            .set_gap(0);
        chart.title().set_name("Salary Distribution (Yearly)");
        chart.x_axis().set_name("Salary ($)");
        chart.y_axis().set_name("Frequency");
        chart.legend().set_hidden();
        sheet.insert_chart(CHART_ROW, CHART_COL, &chart)?;
    }

    workbook.save(output_path)?;
    Ok(())
}

fn write_counts(
    sheet: &mut Worksheet,
    header_format: &Format,
    label_header: &str,
    count_header: &str,
    entries: &[CountEntry<String>],
) -> Result<()> {
    sheet.write_string_with_format(0, 0, label_header, header_format)?;
    sheet.write_string_with_format(0, 1, count_header, header_format)?;

    for (i, entry) in entries.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, entry.value.as_str())?;
        sheet.write_number(row, 1, entry.count as f64)?;
    }

    sheet.set_column_width(0, 24)?;
    Ok(())
}

fn write_histogram(sheet: &mut Worksheet, header_format: &Format, histogram: &Histogram) -> Result<()> {
    sheet.write_string_with_format(0, 0, "Salary Range", header_format)?;
    sheet.write_string_with_format(0, 1, "Jobs", header_format)?;

    for (i, bin) in histogram.bins().enumerate() {
        let row = i as u32 + 1;
        let label = format!("{} - {}", format_money(bin.lower), format_money(bin.upper));
        sheet.write_string(row, 0, label.as_str())?;
        sheet.write_number(row, 1, bin.count as f64)?;
    }

    sheet.set_column_width(0, 24)?;
    Ok(())
}
