//! Prioritized, actionable improvement tips

use crate::processing::experience::ExperienceProfile;
use crate::processing::format::FormatProfile;
use crate::processing::keywords::KeywordProfile;
use crate::processing::skills::SkillProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    pub category: String,
    pub tip: String,
    pub priority: Priority,
    pub impact: String,
}

/// Turns low-scoring categories into tips. Each category is evaluated
/// independently; education never emits one. An empty list means nothing
/// crossed a threshold.
pub fn plan(
    skills: &SkillProfile,
    experience: &ExperienceProfile,
    keywords: &KeywordProfile,
    format: &FormatProfile,
) -> Vec<Improvement> {
    let mut improvements = Vec::new();

    if skills.score < 70.0 {
        let top_missing: Vec<&str> = skills
            .missing_skills
            .iter()
            .take(3)
            .map(|s| s.as_str())
            .collect();
        improvements.push(Improvement {
            category: "Skills Enhancement".to_string(),
            tip: format!(
                "Add {} to better match job requirements. {}",
                top_missing.join(", "),
                skills.explanation
            ),
            priority: Priority::High,
            impact: "Major impact on ATS ranking".to_string(),
        });
    }

    if experience.score < 70.0 {
        let top_missing: Vec<&str> = experience
            .missing_domains
            .iter()
            .take(2)
            .map(|s| s.as_str())
            .collect();
        improvements.push(Improvement {
            category: "Experience Optimization".to_string(),
            tip: format!(
                "Emphasize experience with {}. {}",
                top_missing.join(" and "),
                experience.explanation
            ),
            priority: Priority::High,
            impact: "Significant improvement in relevance score".to_string(),
        });
    }

    if keywords.score < 60.0 {
        let top_missing: Vec<&str> = keywords
            .missing_keywords
            .iter()
            .take(5)
            .map(|s| s.as_str())
            .collect();
        improvements.push(Improvement {
            category: "Keyword Integration".to_string(),
            tip: format!(
                "Naturally incorporate these missing keywords: {}.",
                top_missing.join(", ")
            ),
            priority: Priority::Medium,
            impact: "Better ATS keyword matching".to_string(),
        });
    }

    if format.score < 80.0 {
        improvements.push(Improvement {
            category: "Format Improvements".to_string(),
            tip: "Improve ATS compatibility with better formatting, clear sections, and contact information."
                .to_string(),
            priority: Priority::Medium,
            impact: "Ensures ATS can properly parse your resume".to_string(),
        });
    }

    improvements
}
