//! Behavioral tests for the scoring engine

use resume_match::processing::analyzer::{aggregate_overall, analyze, MatchEngine};

const SCENARIO_RESUME: &str = "I have 5 years of experience with javascript and react.";
const SCENARIO_JOB: &str =
    "Looking for javascript and python developer with 3 years of experience.";

#[test]
fn test_determinism() {
    let inputs = [
        (SCENARIO_RESUME, SCENARIO_JOB),
        ("", ""),
        ("python engineer", "rust shop"),
    ];

    for (resume, job) in inputs {
        let first = analyze(resume, job);
        let second = analyze(resume, job);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}

#[test]
fn test_range_invariant_over_pathological_inputs() {
    let engine = MatchEngine::new();
    let samples = [
        "",
        " ",
        "\n\n\n",
        "@@@@@@",
        "999999999999999999999 years of experience",
        "0 years of experience required",
        "•••***---",
        "日本語のテキスト、Unicode ✓",
        &"python ".repeat(5000),
    ];

    for resume in samples {
        for job in samples {
            let result = engine.analyze(resume, job);
            assert!(result.overall_score <= 100);
            assert!(result.skills_score <= 100);
            assert!(result.experience_score <= 100);
            assert!(result.education_score <= 100);
            assert!(result.format_score <= 100);
            assert!(result.keyword_score <= 100);
            assert!((0.0..=100.0).contains(&result.skills.score));
            assert!((0.0..=100.0).contains(&result.experience.score));
            assert!((0.0..=100.0).contains(&result.education.score));
            assert!((0.0..=100.0).contains(&result.format.score));
            assert!((0.0..=100.0).contains(&result.keywords.score));
        }
    }
}

#[test]
fn test_partition_invariants() {
    let result = analyze(
        "python developer with management and design background",
        "Senior role\npython, react, docker\nrequires leadership, management, design and strategy",
    );

    // skills: matched ∪ missing == required, disjoint
    let mut recombined = result.skills.matched_skills.clone();
    recombined.extend(result.skills.missing_skills.clone());
    recombined.sort();
    let mut required = result.skills.required_skills.clone();
    required.sort();
    assert_eq!(recombined, required);
    for skill in &result.skills.matched_skills {
        assert!(!result.skills.missing_skills.contains(skill));
    }
    for extra in &result.skills.additional_skills {
        assert!(!result.skills.required_skills.contains(extra));
    }

    // experience domains partition the domains found in the job
    for domain in &result.experience.matched_domains {
        assert!(!result.experience.missing_domains.contains(domain));
    }
    assert!(!result.experience.matched_domains.is_empty());
    assert!(!result.experience.missing_domains.is_empty());

    // keywords partition the job vocabulary subset
    for keyword in &result.keywords.matched_keywords {
        assert!(!result.keywords.missing_keywords.contains(keyword));
    }
}

#[test]
fn test_monotonicity_of_skill_additions() {
    let job = "python and docker developer wanted";
    let resumes = ["", "sql analyst", "react frontend developer"];

    for resume in resumes {
        let base = analyze(resume, job);
        let extended = format!("{} python", resume);
        let improved = analyze(&extended, job);
        assert!(
            improved.skills.score >= base.skills.score,
            "adding a required skill lowered the score for {:?}",
            resume
        );
    }
}

#[test]
fn test_default_on_empty_job() {
    let result = analyze("python developer, 5 years of experience", "");

    assert_eq!(result.skills_score, 50);
    assert_eq!(result.keyword_score, 50);
    assert_eq!(result.job_title, "the role");
    assert!(result.skills.required_skills.is_empty());
    assert!(result.keywords.matched_keywords.is_empty());
}

#[test]
fn test_scenario_a_skills() {
    let result = analyze(SCENARIO_RESUME, SCENARIO_JOB);

    assert_eq!(result.skills.required_skills, vec!["javascript", "python"]);
    assert_eq!(result.skills.matched_skills, vec!["javascript"]);
    assert_eq!(result.skills.missing_skills, vec!["python"]);
    assert_eq!(result.skills.additional_skills, vec!["react"]);
    assert_eq!(result.skills_score, 50);
}

#[test]
fn test_scenario_a_experience() {
    let result = analyze(SCENARIO_RESUME, SCENARIO_JOB);

    assert_eq!(result.experience.years_found, 5);
    assert_eq!(result.experience.years_required, 3);
    // years component capped at 50; no domain keywords occur in the job
    assert!(result.experience.matched_domains.is_empty());
    assert!(result.experience.missing_domains.is_empty());
    assert_eq!(result.experience_score, 50);
}

#[test]
fn test_scenario_a_full_numbers() {
    let result = analyze(SCENARIO_RESUME, SCENARIO_JOB);

    assert_eq!(result.education_score, 70);
    // format: base 50 plus 2.5 for the word "experience", rounded
    assert_eq!(result.format_score, 53);
    assert_eq!(result.keyword_score, 50);
    // round((50*35 + 50*25 + 50*20 + 53*15 + 70*5) / 100) = round(51.45)
    assert_eq!(result.overall_score, 51);
    assert_eq!(result.predictive_metrics.ats_pass_rate, 51);
    assert_eq!(result.predictive_metrics.interview_callback_rate, 50);
}

#[test]
fn test_scenario_b_empty_inputs() {
    let result = analyze("", "");

    assert_eq!(result.skills_score, 50);
    assert_eq!(result.experience_score, 50);
    assert_eq!(result.education_score, 70);
    assert_eq!(result.format_score, 50);
    assert_eq!(result.keyword_score, 50);
    assert_eq!(result.overall_score, 51);
    assert_eq!(result.job_title, "the role");

    // no strength rule fires, so the generic filler stands in
    assert_eq!(
        result.explainability.top_strengths,
        vec!["Resume shows potential for the role"]
    );
    // both default scores of 50 sit below the weakness threshold of 60
    assert_eq!(
        result.explainability.main_weaknesses,
        vec![
            "Limited technical skills matching job requirements",
            "Experience doesn't strongly align with role expectations",
        ]
    );
    // nothing is missing, so only the constant closer remains
    assert_eq!(
        result.explainability.key_recommendations,
        vec!["Use more industry-specific keywords naturally"]
    );

    // all four improvement thresholds fire at the default scores
    assert_eq!(result.improvements.len(), 4);
}

#[test]
fn test_idempotent_reaggregation() {
    let cases = [
        (SCENARIO_RESUME, SCENARIO_JOB),
        ("", ""),
        (
            "jane@example.com\npython, react, docker, aws\n8 years of experience\nleadership and strategy",
            "Principal Engineer\npython, aws and kubernetes\n5 years of experience\nleadership required",
        ),
    ];

    for (resume, job) in cases {
        let result = analyze(resume, job);
        let categories = &result.detailed_breakdown.categories;
        let recomputed = aggregate_overall(
            categories[0].score,
            categories[1].score,
            categories[2].score,
            categories[3].score,
            categories[4].score,
        );
        assert_eq!(recomputed, result.overall_score);
    }
}

#[test]
fn test_high_scoring_match_produces_strengths() {
    let resume = "jane@example.com\n555-123-4567\n\nSummary\n• python, react, docker, aws, sql, git\n• 10 years of experience in development and design\n\nSkills\npython react docker aws sql git\n\nExperience\nled development, design, analysis\n\nEducation\nBachelor in computer science";
    let job = "Senior Developer\npython, react, docker, aws, sql and git\n5 years of experience\ndevelopment and design work\nbachelor in computer science required";

    let result = analyze(resume, job);
    assert!(result.skills.score >= 80.0);
    assert!(result.experience.score >= 80.0);
    assert!(result
        .explainability
        .top_strengths
        .iter()
        .any(|s| s.contains("key skills directly match")));
    assert!(result.improvements.is_empty() || result.overall_score < 80);
}
