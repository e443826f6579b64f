//! スキル要件の集計

use super::counter::{CountEntry, Counter};
use remote_jobs_common::JobPosting;
use serde::{Deserialize, Serialize};

const MOST_COMMON_LIMIT: usize = 20;
const FREQUENCY_LIMIT: usize = 15;
const COMBINATION_LIMIT: usize = 10;

/// スキルの出現率（スキル記載のある求人に対する割合）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillFrequency {
    pub skill: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillStats {
    pub total_skills_mentioned: usize,
    pub unique_skills: usize,
    /// スキル記載のある求人数
    pub jobs_with_skills: usize,
    pub most_common_skills: Vec<CountEntry<String>>,
    pub skill_frequency_percent: Vec<SkillFrequency>,
    pub common_skill_combinations: Vec<CountEntry<Vec<String>>>,
}

impl SkillStats {
    pub fn frequency_of(&self, skill: &str) -> Option<f64> {
        self.skill_frequency_percent
            .iter()
            .find(|f| f.skill == skill)
            .map(|f| f.percent)
    }
}

/// スキルを集計する
pub fn analyze_skills(postings: &[JobPosting]) -> SkillStats {
    let mut skills: Counter<String> = Counter::new();
    let mut combinations: Counter<Vec<String>> = Counter::new();
    let mut jobs_with_skills = 0;

    for posting in postings {
        if posting.skills.is_empty() {
            continue;
        }
        jobs_with_skills += 1;

        for skill in &posting.skills {
            skills.add(skill.clone());
        }

        // 組み合わせは並び順を無視する
        if posting.skills.len() >= 2 {
            let mut combination = posting.skills.clone();
            combination.sort();
            combinations.add(combination);
        }
    }

    let skill_frequency_percent = skills
        .most_common(Some(FREQUENCY_LIMIT))
        .into_iter()
        .map(|entry| SkillFrequency {
            percent: if jobs_with_skills == 0 {
                0.0
            } else {
                entry.count as f64 / jobs_with_skills as f64 * 100.0
            },
            skill: entry.value,
        })
        .collect();

    SkillStats {
        total_skills_mentioned: skills.total(),
        unique_skills: skills.len(),
        jobs_with_skills,
        most_common_skills: skills.most_common(Some(MOST_COMMON_LIMIT)),
        skill_frequency_percent,
        common_skill_combinations: combinations.most_common(Some(COMBINATION_LIMIT)),
    }
}
