//! Generic keyword overlap scoring

use crate::processing::document::Document;
use crate::processing::vocab;
use serde::{Deserialize, Serialize};

/// Partition of the generic keywords found in the job text by their presence
/// in the resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordProfile {
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub score: f64,
    pub explanation: String,
}

pub fn analyze(resume: &Document, job: &Document) -> KeywordProfile {
    let job_keywords: Vec<&str> = vocab::GENERIC_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| job.normalized().contains(keyword))
        .collect();

    let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = job_keywords
        .iter()
        .map(|keyword| keyword.to_string())
        .partition(|keyword| resume.normalized().contains(keyword.as_str()));

    let score = if job_keywords.is_empty() {
        50.0
    } else {
        matched_keywords.len() as f64 / job_keywords.len() as f64 * 100.0
    };

    let explanation = format!(
        "Found {} of {} important keywords from the job description.",
        matched_keywords.len(),
        job_keywords.len()
    );

    KeywordProfile {
        matched_keywords,
        missing_keywords,
        score,
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::DocumentKind;

    #[test]
    fn test_partition_of_job_keywords() {
        let resume = Document::new(
            "senior engineer focused on collaboration",
            DocumentKind::Resume,
        );
        let job = Document::new(
            "senior engineer role emphasizing collaboration and innovation",
            DocumentKind::JobPosting,
        );

        let profile = analyze(&resume, &job);
        assert_eq!(
            profile.matched_keywords,
            vec!["collaboration", "senior", "engineer"]
        );
        assert_eq!(profile.missing_keywords, vec!["innovation"]);
        assert!((profile.score - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_job_defaults_to_50() {
        let resume = Document::new("leadership and strategy", DocumentKind::Resume);
        let job = Document::new("", DocumentKind::JobPosting);

        let profile = analyze(&resume, &job);
        assert!(profile.matched_keywords.is_empty());
        assert!(profile.missing_keywords.is_empty());
        assert!((profile.score - 50.0).abs() < f64::EPSILON);
        assert_eq!(
            profile.explanation,
            "Found 0 of 0 important keywords from the job description."
        );
    }
}
