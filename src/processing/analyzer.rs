//! Main analysis engine combining the five scoring categories

use crate::processing::document::{Document, DocumentKind};
use crate::processing::education::{self, EducationProfile};
use crate::processing::experience::{ExperienceExtractor, ExperienceProfile};
use crate::processing::explain::{self, Explainability};
use crate::processing::format::{FormatProfile, FormatScorer};
use crate::processing::improvements::{self, Improvement};
use crate::processing::keywords::{self, KeywordProfile};
use crate::processing::skills::{SkillMatcher, SkillProfile};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Category weights in percent. They sum to 100 and are kept exactly as the
/// product defined them; no empirical tuning has been attempted.
const SKILLS_WEIGHT: u8 = 35;
const EXPERIENCE_WEIGHT: u8 = 25;
const KEYWORDS_WEIGHT: u8 = 20;
const FORMAT_WEIGHT: u8 = 15;
const EDUCATION_WEIGHT: u8 = 5;

/// Fallback job title when the job text has no content before its first
/// line break.
const FALLBACK_JOB_TITLE: &str = "the role";

const ATS_PASS_RATE_CAP: u8 = 95;
const CALLBACK_RATE_CAP: u8 = 85;

/// Scoring engine holding the pre-built matchers. Stateless across calls;
/// safe to share between threads.
pub struct MatchEngine {
    skills: SkillMatcher,
    experience: ExperienceExtractor,
    format: FormatScorer,
}

/// One row of the per-category breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub name: String,
    pub score: u8,
    pub weight: u8,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedBreakdown {
    pub categories: Vec<CategoryScore>,
    pub overall_explanation: String,
}

/// Derived percentages, deliberately capped below 100 to avoid implying
/// certainty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictiveMetrics {
    pub ats_pass_rate: u8,
    pub interview_callback_rate: u8,
}

/// Aggregate result of one analysis run. Fully determined by the two input
/// strings and serializable to a flat JSON structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub skills_score: u8,
    pub experience_score: u8,
    pub education_score: u8,
    pub format_score: u8,
    pub keyword_score: u8,
    pub skills: SkillProfile,
    pub experience: ExperienceProfile,
    pub education: EducationProfile,
    pub format: FormatProfile,
    pub keywords: KeywordProfile,
    pub detailed_breakdown: DetailedBreakdown,
    pub improvements: Vec<Improvement>,
    pub explainability: Explainability,
    pub job_title: String,
    pub predictive_metrics: PredictiveMetrics,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self {
            skills: SkillMatcher::new(),
            experience: ExperienceExtractor::new(),
            format: FormatScorer::new(),
        }
    }

    /// Score a resume against a job posting. Total over all string inputs,
    /// including empty ones; each category degrades to its fixed default when
    /// it has no signal.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> AnalysisResult {
        let resume = Document::new(resume_text, DocumentKind::Resume);
        let job = Document::new(job_text, DocumentKind::JobPosting);

        // Categories are computed independently and only combined below.
        let skills = self.skills.analyze(&resume, &job);
        let experience = self.experience.analyze(&resume, &job);
        let education = education::analyze(&resume, &job);
        let format = self.format.analyze(&resume);
        let keywords = keywords::analyze(&resume, &job);

        let skills_score = round_score(skills.score);
        let experience_score = round_score(experience.score);
        let education_score = round_score(education.score);
        let format_score = round_score(format.score);
        let keyword_score = round_score(keywords.score);

        let overall_score = aggregate_overall(
            skills_score,
            experience_score,
            keyword_score,
            format_score,
            education_score,
        );

        log::debug!(
            "category scores: skills={} experience={} keywords={} format={} education={} overall={}",
            skills_score,
            experience_score,
            keyword_score,
            format_score,
            education_score,
            overall_score
        );

        let improvements = improvements::plan(&skills, &experience, &keywords, &format);
        let explainability = explain::generate(&skills, &experience);
        let detailed_breakdown = build_breakdown(
            overall_score,
            skills_score,
            experience_score,
            keyword_score,
            format_score,
            education_score,
        );

        let job_title = match job.first_line() {
            "" => FALLBACK_JOB_TITLE.to_string(),
            line => line.to_string(),
        };

        let predictive_metrics = PredictiveMetrics {
            ats_pass_rate: weighted_rate(
                &[
                    (overall_score, 0.4),
                    (keyword_score, 0.3),
                    (format_score, 0.3),
                ],
                ATS_PASS_RATE_CAP,
            ),
            interview_callback_rate: weighted_rate(
                &[
                    (experience_score, 0.5),
                    (skills_score, 0.3),
                    (overall_score, 0.2),
                ],
                CALLBACK_RATE_CAP,
            ),
        };

        AnalysisResult {
            overall_score,
            skills_score,
            experience_score,
            education_score,
            format_score,
            keyword_score,
            skills,
            experience,
            education,
            format,
            keywords,
            detailed_breakdown,
            improvements,
            explainability,
            job_title,
            predictive_metrics,
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Weighted overall score from the five rounded category scores. Using the
/// rounded values keeps re-aggregation of a stored breakdown exactly
/// idempotent. With each input in [0, 100] and weights summing to 100 the
/// result cannot leave [0, 100], so no further clamp is applied.
pub fn aggregate_overall(
    skills: u8,
    experience: u8,
    keywords: u8,
    format: u8,
    education: u8,
) -> u8 {
    let weighted = skills as f64 * SKILLS_WEIGHT as f64
        + experience as f64 * EXPERIENCE_WEIGHT as f64
        + keywords as f64 * KEYWORDS_WEIGHT as f64
        + format as f64 * FORMAT_WEIGHT as f64
        + education as f64 * EDUCATION_WEIGHT as f64;
    (weighted / 100.0).round() as u8
}

fn round_score(score: f64) -> u8 {
    score.clamp(0.0, 100.0).round() as u8
}

fn weighted_rate(components: &[(u8, f64)], cap: u8) -> u8 {
    let rate = components
        .iter()
        .map(|(score, weight)| *score as f64 * weight)
        .sum::<f64>()
        .round() as u8;
    rate.min(cap)
}

fn build_breakdown(
    overall: u8,
    skills: u8,
    experience: u8,
    keywords: u8,
    format: u8,
    education: u8,
) -> DetailedBreakdown {
    let categories = vec![
        CategoryScore {
            name: "Technical Skills".to_string(),
            score: skills,
            weight: SKILLS_WEIGHT,
            description: "Match between your skills and job requirements".to_string(),
        },
        CategoryScore {
            name: "Work Experience".to_string(),
            score: experience,
            weight: EXPERIENCE_WEIGHT,
            description: "Relevance and depth of your professional experience".to_string(),
        },
        CategoryScore {
            name: "Keywords".to_string(),
            score: keywords,
            weight: KEYWORDS_WEIGHT,
            description: "Presence of important keywords from job description".to_string(),
        },
        CategoryScore {
            name: "Resume Format".to_string(),
            score: format,
            weight: FORMAT_WEIGHT,
            description: "ATS-friendly formatting and structure".to_string(),
        },
        CategoryScore {
            name: "Education".to_string(),
            score: education,
            weight: EDUCATION_WEIGHT,
            description: "Educational background alignment".to_string(),
        },
    ];

    DetailedBreakdown {
        categories,
        overall_explanation: explain::overall_explanation(overall).to_string(),
    }
}

static ENGINE: OnceLock<MatchEngine> = OnceLock::new();

/// Analyze a resume against a job posting using a process-wide engine. The
/// matchers are built once on first use; every call is independent and
/// deterministic.
pub fn analyze(resume_text: &str, job_text: &str) -> AnalysisResult {
    ENGINE.get_or_init(MatchEngine::new).analyze(resume_text, job_text)
}
