use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobs-analyzer")]
#[command(about = "リモート求人データの給与・スキル解析とレポート生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 求人データを解析してレポートとグラフを出力
    Analyze {
        /// 入力ファイル（csv / xlsx）。省略時は設定の default_input
        input: Option<PathBuf>,

        /// 出力ディレクトリ（省略時は設定の output_dir）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// レポート形式 (text/json/both)
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,

        /// グラフ（Excel）を出力しない
        #[arg(long)]
        no_charts: bool,

        /// 追加のスキルエイリアスJSON
        #[arg(long)]
        aliases: Option<PathBuf>,
    },

    /// 給与文字列をパースして表示
    Salary {
        /// 給与文字列（例: "$120,000 - $150,000"）
        #[arg(required = true)]
        text: String,
    },

    /// スキル文字列を正規化して表示
    Skills {
        /// スキル文字列（例: "ReactJS, Node JS, C++"）
        #[arg(required = true)]
        text: String,

        /// 追加のスキルエイリアスJSON
        #[arg(long)]
        aliases: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の入力ファイルを設定
        #[arg(long)]
        set_input: Option<PathBuf>,

        /// 既定の出力ディレクトリを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// 既定のスキルエイリアスJSONを設定
        #[arg(long)]
        set_aliases: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "both" => Ok(ReportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use text, json, or both", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Both => write!(f, "both"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format_from_str() {
        assert_eq!("TXT".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_parse_analyze_args() {
        let cli = Cli::try_parse_from([
            "jobs-analyzer",
            "analyze",
            "jobs.csv",
            "--format",
            "both",
            "--no-charts",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze { input, format, no_charts, output, .. } => {
                assert_eq!(input, Some(PathBuf::from("jobs.csv")));
                assert_eq!(format, ReportFormat::Both);
                assert!(no_charts);
                assert!(output.is_none());
            }
            _ => panic!("analyze expected"),
        }
    }

    #[test]
    fn test_parse_salary_args() {
        let cli = Cli::try_parse_from(["jobs-analyzer", "salary", "$45/hour"]).unwrap();
        assert!(matches!(cli.command, Commands::Salary { text } if text == "$45/hour"));
    }
}
