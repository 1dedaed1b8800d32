//! Skill extraction and overlap scoring

use crate::processing::document::Document;
use crate::processing::vocab;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

/// Result of matching resume skills against the job's required skills.
///
/// `matched_skills` and `missing_skills` partition `required_skills`;
/// `additional_skills` are resume skills with no required counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillProfile {
    pub required_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub additional_skills: Vec<String>,
    pub score: f64,
    pub explanation: String,
}

/// Matcher over the canonical skill vocabulary.
pub struct SkillMatcher {
    automaton: AhoCorasick,
}

impl SkillMatcher {
    pub fn new() -> Self {
        // Leftmost-longest so an entry embedded in a longer one ("java" in
        // "javascript") is not reported on its own.
        let automaton = AhoCorasick::builder()
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(vocab::SKILLS)
            .expect("Invalid skill vocabulary");

        Self { automaton }
    }

    /// Vocabulary entries occurring in `text`, in vocabulary order.
    /// `text` must already be lower-cased.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let mut seen = vec![false; vocab::SKILLS.len()];
        for mat in self.automaton.find_iter(text) {
            seen[mat.pattern().as_usize()] = true;
        }

        vocab::SKILLS
            .iter()
            .enumerate()
            .filter(|(idx, _)| seen[*idx])
            .map(|(_, skill)| skill.to_string())
            .collect()
    }

    pub fn analyze(&self, resume: &Document, job: &Document) -> SkillProfile {
        let required_skills = self.extract_skills(job.normalized());
        let resume_skills = self.extract_skills(resume.normalized());

        let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required_skills
            .iter()
            .cloned()
            .partition(|skill| resume_skills.iter().any(|r| skills_equivalent(r, skill)));

        let additional_skills: Vec<String> = resume_skills
            .into_iter()
            .filter(|skill| !required_skills.iter().any(|r| skills_equivalent(r, skill)))
            .collect();

        let score = if required_skills.is_empty() {
            // No recognizable requirements in the job text, so neither
            // penalize nor reward.
            50.0
        } else {
            matched_skills.len() as f64 / required_skills.len() as f64 * 100.0
        };

        let explanation =
            build_explanation(matched_skills.len(), required_skills.len(), &missing_skills);

        SkillProfile {
            required_skills,
            matched_skills,
            missing_skills,
            additional_skills,
            score,
            explanation,
        }
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Containment equivalence: two skills match when either string contains the
/// other, not only under strict equality.
fn skills_equivalent(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

fn build_explanation(matched: usize, total: usize, missing: &[String]) -> String {
    let percentage = if total > 0 {
        (matched as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    let tail = if missing.is_empty() {
        "Great skill coverage!".to_string()
    } else {
        let preview: Vec<&str> = missing.iter().take(3).map(|s| s.as_str()).collect();
        format!("Consider adding: {}.", preview.join(", "))
    };

    format!(
        "You have {} of {} required skills ({}%). {}",
        matched, total, percentage, tail
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::DocumentKind;

    fn doc(text: &str, kind: DocumentKind) -> Document {
        Document::new(text, kind)
    }

    #[test]
    fn test_extraction_in_vocabulary_order() {
        let matcher = SkillMatcher::new();
        let skills = matcher.extract_skills("we use react, docker and python");
        assert_eq!(skills, vec!["python", "react", "docker"]);
    }

    #[test]
    fn test_longest_entry_wins() {
        let matcher = SkillMatcher::new();
        // "java" must not be reported from inside "javascript"
        let skills = matcher.extract_skills("javascript and python");
        assert_eq!(skills, vec!["javascript", "python"]);

        let skills = matcher.extract_skills("java and javascript");
        assert_eq!(skills, vec!["javascript", "java"]);
    }

    #[test]
    fn test_partition_invariant() {
        let matcher = SkillMatcher::new();
        let resume = doc("python, react and sql", DocumentKind::Resume);
        let job = doc("python, docker, kubernetes", DocumentKind::JobPosting);

        let profile = matcher.analyze(&resume, &job);

        let mut recombined = profile.matched_skills.clone();
        recombined.extend(profile.missing_skills.clone());
        recombined.sort();
        let mut required = profile.required_skills.clone();
        required.sort();
        assert_eq!(recombined, required);

        for extra in &profile.additional_skills {
            assert!(!profile.required_skills.contains(extra));
        }
    }

    #[test]
    fn test_score_is_match_ratio() {
        let matcher = SkillMatcher::new();
        let resume = doc("python and react", DocumentKind::Resume);
        let job = doc("python, react, docker, aws", DocumentKind::JobPosting);

        let profile = matcher.analyze(&resume, &job);
        assert_eq!(profile.required_skills.len(), 4);
        assert_eq!(profile.matched_skills.len(), 2);
        assert!((profile.score - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_job_defaults_to_50() {
        let matcher = SkillMatcher::new();
        let resume = doc("python and react", DocumentKind::Resume);
        let job = doc("", DocumentKind::JobPosting);

        let profile = matcher.analyze(&resume, &job);
        assert!(profile.required_skills.is_empty());
        assert!((profile.score - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_explanation_lists_first_three_missing() {
        let matcher = SkillMatcher::new();
        let resume = doc("", DocumentKind::Resume);
        let job = doc("python, react, docker, aws", DocumentKind::JobPosting);

        let profile = matcher.analyze(&resume, &job);
        assert!(profile.explanation.contains("0 of 4 required skills (0%)"));
        // required skills come back in vocabulary order: python, react, aws, docker
        assert!(profile.explanation.contains("Consider adding: python, react, aws."));
        assert!(!profile.explanation.contains("docker."));
    }
}
