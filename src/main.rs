use clap::Parser;
use remote_jobs_analyzer::{analysis, cli, config, error, export, pipeline};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use remote_jobs_common::{extract_skills_with, parse_salary, SkillAliases};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("JOBS_ANALYZER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { input, output, format, no_charts, aliases } => {
            println!("📊 jobs-analyzer - 求人データ解析\n");

            let input = input
                .or_else(|| config.default_input.clone())
                .ok_or_else(|| {
                    error::AnalyzerError::Config(
                        "入力ファイルが指定されていません。`jobs-analyzer config --set-input PATH` で既定値を設定できます".into(),
                    )
                })?;
            let aliases = match aliases {
                Some(path) => SkillAliases::from_file(&path)?,
                None => config.load_skill_aliases()?,
            };

            // 1. 読み込み・正規化
            println!("[1/3] 求人データを読み込み中...");
            let postings = pipeline::load_postings(&input, &aliases)?;
            println!("✔ {}件の求人を読み込み\n", postings.len());

            // 2. 集計
            println!("[2/3] 集計中...");
            let summary = analysis::analyze(&postings, &analysis::AnalysisOptions::from(&config));
            let report = export::generate_report(&summary, &export::ReportOptions::from(&config));
            println!("✔ 集計完了\n");
            println!("{}\n", report);

            // 3. 出力
            println!("[3/3] 結果を保存中...");
            let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
            export::export_results(
                &summary,
                &report,
                &format,
                &output_dir,
                &export::OutputFiles::from(&config),
                !no_charts,
            )?;

            println!("\n✅ 解析完了");
        }

        Commands::Salary { text } => {
            let parsed = parse_salary(Some(&text));
            println!("入力: {}", text);
            println!("  下限: {}", format_amount(parsed.min));
            println!("  上限: {}", format_amount(parsed.max));
            println!("  単位: {}", parsed.period);
            match parsed.annualized() {
                Some(yearly) => println!("  年額換算: {}", export::format_money(yearly)),
                None => println!("  年額換算: -"),
            }
        }

        Commands::Skills { text, aliases } => {
            let aliases = match aliases {
                Some(path) => SkillAliases::from_file(&path)?,
                None => config.load_skill_aliases()?,
            };
            let skills = extract_skills_with(Some(&text), &aliases);
            if skills.is_empty() {
                println!("スキルが見つかりません");
            }
            for (i, skill) in skills.iter().enumerate() {
                println!("{:2}. {}", i + 1, skill);
            }
        }

        Commands::Config { set_input, set_output_dir, set_aliases, show } => {
            let mut config = config;

            if let Some(path) = set_input {
                config.set_default_input(path)?;
                println!("✔ 既定の入力ファイルを設定しました");
            }

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ 既定の出力ディレクトリを設定しました");
            }

            if let Some(path) = set_aliases {
                config.set_skill_aliases(path)?;
                println!("✔ スキルエイリアスを設定しました");
            }

            if show {
                println!("設定: {}", Config::config_path()?.display());
                println!("  入力ファイル: {}", display_path(config.default_input.as_ref()));
                println!("  出力ディレクトリ: {}", config.output_dir.display());
                println!("  レポート: {}", config.report_file);
                println!("  JSON: {}", config.json_file);
                println!("  グラフ: {}", config.chart_file);
                println!("  ヒストグラムのビン数: {}", config.histogram_bins);
                println!("  外れ値の上限: {}", export::format_money(config.salary_outlier_cap));
                println!("  スキルエイリアス: {}", display_path(config.skill_aliases.as_ref()));
            }
        }
    }

    Ok(())
}

fn format_amount(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".into())
}

fn display_path(path: Option<&PathBuf>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "未設定".into())
}
