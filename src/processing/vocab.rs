//! Static vocabularies used by the scoring categories
//!
//! These are fixed, read-only lookup tables compiled into the binary. They
//! are not configuration and never change at runtime. Matching is always done
//! against the lower-cased view of a document, so every entry is lowercase.

/// Canonical skill vocabulary, in scoring order. Extraction reports skills in
/// this order regardless of where they appear in a document.
pub const SKILLS: &[&str] = &[
    "javascript",
    "python",
    "react",
    "angular",
    "vue",
    "node.js",
    "typescript",
    "java",
    "c++",
    "c#",
    "sql",
    "mongodb",
    "postgresql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "machine learning",
    "ai",
    "data analysis",
    "project management",
    "leadership",
    "communication",
];

/// Experience-domain keywords checked in the job posting and then looked up
/// in the resume.
pub const EXPERIENCE_DOMAINS: &[&str] = &[
    "management",
    "leadership",
    "development",
    "design",
    "analysis",
    "implementation",
    "strategy",
];

/// Generic keyword vocabulary, independent of the skill taxonomy.
pub const GENERIC_KEYWORDS: &[&str] = &[
    "leadership",
    "management",
    "development",
    "analysis",
    "design",
    "implementation",
    "strategy",
    "communication",
    "collaboration",
    "problem-solving",
    "innovation",
    "project management",
    "team lead",
    "senior",
    "junior",
    "architect",
    "engineer",
];

/// Terms that indicate any educational background at all.
pub const EDUCATION_TERMS: &[&str] = &[
    "education",
    "degree",
    "university",
    "college",
    "bachelor",
    "master",
    "phd",
];

/// Terms that indicate a formal degree.
pub const DEGREE_TERMS: &[&str] = &["bachelor", "master", "phd", "degree"];

/// Recognized fields of study.
pub const FIELD_TERMS: &[&str] = &[
    "computer science",
    "engineering",
    "business",
    "marketing",
];

/// Standard resume section headers checked by the format scorer.
pub const SECTION_HEADERS: &[&str] = &["experience", "education", "skills", "summary"];

/// True when any of the given terms occurs as a substring of `text`.
/// `text` is expected to already be lower-cased.
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}
