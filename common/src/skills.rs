//! スキル欄の分割と正規化
//!
//! "ReactJS, Node JS; C++" → ["react", "node.js", "c++"]

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    /// 組み込みの同義語テーブル（小文字化・記号除去後の表記 → 正規名）
    static ref SKILL_SYNONYMS: HashMap<&'static str, &'static str> = [
        ("reactjs", "react"),
        ("react js", "react"),
        ("react.js", "react"),
        ("javascript", "javascript"),
        ("js", "javascript"),
        ("typescript", "typescript"),
        ("ts", "typescript"),
        ("nodejs", "node.js"),
        ("node js", "node.js"),
        ("nextjs", "next.js"),
        ("next js", "next.js"),
        ("react native", "react native"),
        ("html5", "html"),
        ("css3", "css"),
    ]
    .into_iter()
    .collect();
}

/// 利用者定義のスキルエイリアス
///
/// 組み込みテーブルで正規化した後に適用される。キーは大文字小文字を区別しない。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillAliases {
    #[serde(default)]
    aliases: HashMap<String, String>,
}

impl SkillAliases {
    pub fn new(aliases: HashMap<String, String>) -> Self {
        Self {
            aliases: aliases
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
                .collect(),
        }
    }

    /// JSONファイルから読み込み
    ///
    /// `{"aliases": {"vue.js": "vue", "golang": "go"}}`
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    ///
    /// キーまたは値が空（空白のみを含む）なら `Error::Config`。
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if let Some((key, value)) = config
            .aliases
            .iter()
            .find(|(k, v)| k.trim().is_empty() || v.trim().is_empty())
        {
            return Err(Error::Config(format!(
                "空のエイリアスがあります: {:?} -> {:?}",
                key, value
            )));
        }
        Ok(Self::new(config.aliases))
    }

    pub fn get(&self, skill: &str) -> Option<&str> {
        self.aliases.get(skill).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// 組み込み同義語で正規名に変換（未登録ならそのまま）
pub fn canonical_skill(cleaned: &str) -> &str {
    SKILL_SYNONYMS.get(cleaned).copied().unwrap_or(cleaned)
}

/// 1要素分を小文字化し、英数字・空白・"+" "#" "." 以外を除去する
fn clean_fragment(fragment: &str) -> String {
    let cleaned: String = fragment
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '_' | '+' | '#' | '.'))
        .collect();
    cleaned.trim().to_string()
}

/// スキル欄からスキル一覧を抽出する
///
/// 出現順を保持し、重複は除去しない。
///
/// # Examples
/// ```
/// use remote_jobs_common::skills::extract_skills;
///
/// assert_eq!(
///     extract_skills(Some("ReactJS, Node JS, C++")),
///     vec!["react", "node.js", "c++"]
/// );
/// ```
pub fn extract_skills(skills: Option<&str>) -> Vec<String> {
    extract_skills_with(skills, &SkillAliases::default())
}

/// 追加エイリアスを適用してスキル一覧を抽出する
pub fn extract_skills_with(skills: Option<&str>, aliases: &SkillAliases) -> Vec<String> {
    let Some(skills) = skills else {
        return Vec::new();
    };

    skills
        .split([',', ';'])
        .map(clean_fragment)
        .filter(|skill| skill.chars().count() > 1)
        .map(|skill| {
            let canonical = canonical_skill(&skill);
            aliases.get(canonical).unwrap_or(canonical).to_string()
        })
        .collect()
}
