//! Structural and contact-info scoring of the resume

use crate::processing::document::Document;
use crate::processing::vocab;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structural hygiene of the resume. The job posting plays no part here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatProfile {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_bullet_points: bool,
    pub has_proper_structure: bool,
    pub score: f64,
    pub explanation: String,
}

pub struct FormatScorer {
    phone_regex: Regex,
}

const EXPLANATION: &str =
    "Format analysis checks for ATS-friendly structure, contact information, and proper formatting.";

impl FormatScorer {
    pub fn new() -> Self {
        let phone_regex =
            Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").expect("Invalid phone regex");

        Self { phone_regex }
    }

    pub fn analyze(&self, resume: &Document) -> FormatProfile {
        let text = resume.raw();

        let has_email = text.contains('@');
        let has_phone = self.phone_regex.is_match(text);
        let has_bullet_points =
            text.contains('•') || text.contains('*') || text.contains('-');
        let has_proper_structure = text.split('\n').count() > 10;

        let mut score = 50.0;
        if has_email {
            score += 15.0;
        }
        if has_phone {
            score += 15.0;
        }
        if has_bullet_points {
            score += 10.0;
        }
        if has_proper_structure {
            score += 10.0;
        }

        let sections_found = vocab::SECTION_HEADERS
            .iter()
            .filter(|section| resume.normalized().contains(*section))
            .count();
        score += sections_found as f64 * 2.5;

        FormatProfile {
            has_email,
            has_phone,
            has_bullet_points,
            has_proper_structure,
            score: score.clamp(0.0, 100.0),
            explanation: EXPLANATION.to_string(),
        }
    }
}

impl Default for FormatScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::DocumentKind;

    #[test]
    fn test_bare_text_scores_base() {
        let scorer = FormatScorer::new();
        let resume = Document::new("just a sentence about myself", DocumentKind::Resume);

        let profile = scorer.analyze(&resume);
        assert!(!profile.has_email);
        assert!(!profile.has_phone);
        assert!(!profile.has_bullet_points);
        assert!(!profile.has_proper_structure);
        assert!((profile.score - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_contact_info_and_bullets() {
        let scorer = FormatScorer::new();
        let resume = Document::new(
            "jane@example.com | 555-123-4567\n- built things",
            DocumentKind::Resume,
        );

        let profile = scorer.analyze(&resume);
        assert!(profile.has_email);
        assert!(profile.has_phone);
        assert!(profile.has_bullet_points);
        // 50 + 15 + 15 + 10
        assert!((profile.score - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_section_headers_add_up_to_ten() {
        let scorer = FormatScorer::new();
        let resume = Document::new(
            "Summary\nSkills\nExperience\nEducation",
            DocumentKind::Resume,
        );

        let profile = scorer.analyze(&resume);
        // 50 base + 4 sections * 2.5; the hyphen-free text has no bullets
        assert!((profile.score - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_full_structure_clamps_to_100() {
        let scorer = FormatScorer::new();
        let text = "Jane Doe\njane@example.com\n555-123-4567\n\nSummary\n• engineer\n\nSkills\n• rust\n\nExperience\n• 5 years of experience\n\nEducation\n• BS";
        let resume = Document::new(text, DocumentKind::Resume);

        let profile = scorer.analyze(&resume);
        assert!(profile.has_proper_structure);
        // 50 + 15 + 15 + 10 + 10 + 10 exceeds 100 and is clamped
        assert!((profile.score - 100.0).abs() < f64::EPSILON);
    }
}
