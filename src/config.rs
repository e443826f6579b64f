use crate::error::{AnalyzerError, Result};
use remote_jobs_common::SkillAliases;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `analyze` で入力を省略したときのファイル
    pub default_input: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub report_file: String,
    pub json_file: String,
    pub chart_file: String,
    /// レポートに載せる高給与求人の件数
    pub top_paying_jobs: usize,
    /// レポートに載せるスキルの件数
    pub top_skills: usize,
    pub histogram_bins: usize,
    /// この年額以上はヒストグラムから除外
    pub salary_outlier_cap: f64,
    /// 追加のスキルエイリアスJSON
    pub skill_aliases: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "設定を読み込みました");
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AnalyzerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home
            .join(".config")
            .join("remote-jobs-analyzer")
            .join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            default_input: None,
            output_dir: PathBuf::from("."),
            report_file: "react_jobs_analysis_report.txt".into(),
            json_file: "react_jobs_analysis.json".into(),
            chart_file: "react_jobs_analysis.xlsx".into(),
            top_paying_jobs: 5,
            top_skills: 15,
            histogram_bins: 15,
            salary_outlier_cap: 1_000_000.0,
            skill_aliases: None,
        }
    }

    /// 追加エイリアスを読み込む（未設定なら空）
    pub fn load_skill_aliases(&self) -> Result<SkillAliases> {
        match &self.skill_aliases {
            Some(path) => {
                if !path.exists() {
                    return Err(AnalyzerError::FileNotFound(path.display().to_string()));
                }
                Ok(SkillAliases::from_file(path)?)
            }
            None => Ok(SkillAliases::default()),
        }
    }

    pub fn set_default_input(&mut self, path: PathBuf) -> Result<()> {
        self.default_input = Some(path);
        self.save()
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.output_dir = dir;
        self.save()
    }

    pub fn set_skill_aliases(&mut self, path: PathBuf) -> Result<()> {
        // 保存前に読めるか確認
        SkillAliases::from_file(&path)?;
        self.skill_aliases = Some(path);
        self.save()
    }
}
