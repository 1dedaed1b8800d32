//! Score report structure wrapping an analysis result with generation metadata

use crate::processing::analyzer::AnalysisResult;
use crate::processing::document::{Document, DocumentKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub metadata: ReportMetadata,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub resume_path: String,
    pub job_path: String,
    pub resume_word_count: usize,
    pub job_word_count: usize,
}

/// Coarse quality band for presentation (colors, badges). Derived from the
/// overall score only; carries no scoring logic of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 70 {
            ScoreBand::Good
        } else if score >= 60 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

impl ScoreReport {
    pub fn new(
        analysis: AnalysisResult,
        resume_text: &str,
        job_text: &str,
        resume_path: &str,
        job_path: &str,
    ) -> Self {
        let resume_doc = Document::new(resume_text, DocumentKind::Resume);
        let job_doc = Document::new(job_text, DocumentKind::JobPosting);

        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_path: resume_path.to_string(),
                job_path: job_path.to_string(),
                resume_word_count: resume_doc.word_count(),
                job_word_count: job_doc.word_count(),
            },
            analysis,
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.analysis.overall_score)
    }
}
