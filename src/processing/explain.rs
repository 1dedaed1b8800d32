//! Human-readable strengths, weaknesses, and recommendations

use crate::processing::experience::ExperienceProfile;
use crate::processing::skills::SkillProfile;
use serde::{Deserialize, Serialize};

/// Short, ordered explanation lists. None of the three lists is ever empty;
/// a generic filler sentence stands in when no rule fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explainability {
    pub top_strengths: Vec<String>,
    pub main_weaknesses: Vec<String>,
    pub key_recommendations: Vec<String>,
}

pub fn generate(skills: &SkillProfile, experience: &ExperienceProfile) -> Explainability {
    let mut top_strengths = Vec::new();
    let mut main_weaknesses = Vec::new();
    let mut key_recommendations = Vec::new();

    if skills.score >= 80.0 {
        top_strengths.push("Strong technical skills alignment with job requirements".to_string());
    }
    if experience.score >= 80.0 {
        top_strengths.push("Excellent experience match for the role".to_string());
    }
    if skills.matched_skills.len() > 5 {
        top_strengths.push(format!(
            "{} key skills directly match job requirements",
            skills.matched_skills.len()
        ));
    }

    if skills.score < 60.0 {
        main_weaknesses.push("Limited technical skills matching job requirements".to_string());
    }
    if experience.score < 60.0 {
        main_weaknesses
            .push("Experience doesn't strongly align with role expectations".to_string());
    }
    if skills.missing_skills.len() > 3 {
        main_weaknesses.push(format!(
            "Missing {} important skills",
            skills.missing_skills.len()
        ));
    }

    if !skills.missing_skills.is_empty() {
        let top_missing: Vec<&str> = skills
            .missing_skills
            .iter()
            .take(2)
            .map(|s| s.as_str())
            .collect();
        key_recommendations.push(format!("Add experience with {}", top_missing.join(" and ")));
    }
    if let Some(domain) = experience.missing_domains.first() {
        key_recommendations.push(format!("Highlight {} experience", domain));
    }
    key_recommendations.push("Use more industry-specific keywords naturally".to_string());

    if top_strengths.is_empty() {
        top_strengths.push("Resume shows potential for the role".to_string());
    }
    if main_weaknesses.is_empty() {
        main_weaknesses.push("Minor improvements could enhance the match".to_string());
    }

    Explainability {
        top_strengths,
        main_weaknesses,
        key_recommendations,
    }
}

/// One of five fixed sentences chosen by overall score band.
pub fn overall_explanation(score: u8) -> &'static str {
    if score >= 90 {
        "Exceptional match! Your resume is highly aligned with this job opportunity."
    } else if score >= 80 {
        "Strong match! Your resume shows good alignment with most job requirements."
    } else if score >= 70 {
        "Good match! Some areas could be improved to better align with the job."
    } else if score >= 60 {
        "Fair match. Several key areas need improvement to meet job requirements."
    } else {
        "Poor match. Significant improvements needed to align with this job opportunity."
    }
}
