//! Educational background detection

use crate::processing::document::Document;
use crate::processing::vocab::{self, contains_any};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationProfile {
    pub has_education: bool,
    pub has_relevant_degree: bool,
    pub relevant_field: bool,
    pub degree_required: bool,
    pub field_required: bool,
    pub score: f64,
    pub explanation: String,
}

/// Base score when no explicit requirement is stated. Deliberately high:
/// absence of an education requirement must not be punitive, and education is
/// the lowest-weighted category.
const BASE_SCORE: f64 = 70.0;

pub fn analyze(resume: &Document, job: &Document) -> EducationProfile {
    let resume_text = resume.normalized();
    let job_text = job.normalized();

    let has_education = contains_any(resume_text, vocab::EDUCATION_TERMS);
    let has_relevant_degree = contains_any(resume_text, vocab::DEGREE_TERMS);
    let relevant_field = contains_any(resume_text, vocab::FIELD_TERMS);

    let degree_required = contains_any(job_text, vocab::DEGREE_TERMS);
    let field_required = contains_any(job_text, vocab::FIELD_TERMS);

    let mut score = BASE_SCORE;
    if degree_required && has_relevant_degree {
        score += 20.0;
    }
    if field_required && relevant_field {
        score += 10.0;
    }

    let explanation = if !has_education {
        "No education section found. Consider adding your educational background.".to_string()
    } else if degree_required && !has_relevant_degree {
        "Job requires specific degree level. Highlight relevant educational achievements."
            .to_string()
    } else {
        "Educational background appears adequate for this position.".to_string()
    };

    EducationProfile {
        has_education,
        has_relevant_degree,
        relevant_field,
        degree_required,
        field_required,
        score: score.clamp(0.0, 100.0),
        explanation,
    }
}
