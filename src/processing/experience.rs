//! Years-of-experience extraction and domain keyword scoring

use crate::processing::document::Document;
use crate::processing::vocab;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Experience comparison between resume and job posting.
///
/// `matched_domains` and `missing_domains` partition the domain keywords
/// extracted from the job text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceProfile {
    pub years_found: u32,
    pub years_required: u32,
    pub matched_domains: Vec<String>,
    pub missing_domains: Vec<String>,
    pub score: f64,
    pub explanation: String,
}

pub struct ExperienceExtractor {
    years_regex: Regex,
}

impl ExperienceExtractor {
    pub fn new() -> Self {
        let years_regex = Regex::new(r"(?i)(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)")
            .expect("Invalid years regex");

        Self { years_regex }
    }

    /// Maximum years figure mentioned in the text, 0 when none is found.
    /// Multiple mentions yield the maximum, not the sum or the first.
    pub fn extract_years(&self, text: &str) -> u32 {
        self.years_regex
            .captures_iter(text)
            .filter_map(|cap| cap[1].parse::<u32>().ok())
            .max()
            .unwrap_or(0)
    }

    pub fn analyze(&self, resume: &Document, job: &Document) -> ExperienceProfile {
        let years_found = self.extract_years(resume.normalized());
        let years_required = self.extract_years(job.normalized());

        let job_domains: Vec<&str> = vocab::EXPERIENCE_DOMAINS
            .iter()
            .copied()
            .filter(|domain| job.normalized().contains(domain))
            .collect();

        let (matched_domains, missing_domains): (Vec<String>, Vec<String>) = job_domains
            .iter()
            .map(|domain| domain.to_string())
            .partition(|domain| resume.normalized().contains(domain.as_str()));

        let mut score = 50.0;
        if years_required > 0 {
            score = (years_found as f64 / years_required as f64 * 50.0).min(50.0);
        }
        if !job_domains.is_empty() {
            score += matched_domains.len() as f64 / job_domains.len() as f64 * 50.0;
        }

        let explanation = build_explanation(
            years_found,
            years_required,
            matched_domains.len(),
            job_domains.len(),
        );

        ExperienceProfile {
            years_found,
            years_required,
            matched_domains,
            missing_domains,
            score: score.clamp(0.0, 100.0),
            explanation,
        }
    }
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn build_explanation(years: u32, required: u32, matched: usize, total: usize) -> String {
    let mut explanation = String::new();
    if required > 0 {
        explanation.push_str(&format!(
            "You have {} years of experience vs {} required. ",
            years, required
        ));
    }
    if total > 0 {
        explanation.push_str(&format!(
            "{} of {} experience types match the job requirements.",
            matched, total
        ));
    }

    if explanation.is_empty() {
        "Experience analysis based on job relevance and keywords.".to_string()
    } else {
        explanation
    }
}
