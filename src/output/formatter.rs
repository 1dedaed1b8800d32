//! Output formatters with console, JSON, and Markdown support

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{ScoreBand, ScoreReport};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering score reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String>;
}

/// Console formatter with colors and band highlighting
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    include_improvements: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
    include_improvements: bool,
}

/// Coordinates the formatters and routes on the configured output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Cyan,
        ScoreBand::Fair => Color::Yellow,
        ScoreBand::Poor => Color::Red,
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, include_improvements: bool) -> Self {
        Self {
            use_colors,
            detailed,
            include_improvements,
        }
    }

    fn score_text(&self, score: u8) -> String {
        let text = format!("{}/100", score);
        if self.use_colors {
            text.color(band_color(ScoreBand::from_score(score)))
                .bold()
                .to_string()
        } else {
            text
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut out = String::new();

        out.push_str(&format!(
            "\n{} {}\n",
            self.heading("🎯 Match score for"),
            analysis.job_title
        ));
        out.push_str(&format!(
            "{} {}\n",
            self.heading("📊 Overall:"),
            self.score_text(analysis.overall_score)
        ));
        out.push_str(&format!(
            "   {}\n\n",
            analysis.detailed_breakdown.overall_explanation
        ));

        out.push_str(&format!("{}\n", self.heading("📈 Category Breakdown:")));
        for category in &analysis.detailed_breakdown.categories {
            out.push_str(&format!(
                "  • {:<16} {} (weight {}%)\n",
                category.name,
                self.score_text(category.score),
                category.weight
            ));
            if self.detailed {
                out.push_str(&format!("      {}\n", category.description));
            }
        }

        out.push_str(&format!("\n{}\n", self.heading("💪 Top Strengths:")));
        for strength in &analysis.explainability.top_strengths {
            out.push_str(&format!("  • {}\n", strength));
        }

        out.push_str(&format!("\n{}\n", self.heading("⚠️  Main Weaknesses:")));
        for weakness in &analysis.explainability.main_weaknesses {
            out.push_str(&format!("  • {}\n", weakness));
        }

        out.push_str(&format!("\n{}\n", self.heading("💡 Key Recommendations:")));
        for recommendation in &analysis.explainability.key_recommendations {
            out.push_str(&format!("  • {}\n", recommendation));
        }

        if self.include_improvements {
            if analysis.improvements.is_empty() {
                out.push_str(&format!(
                    "\n{}\n",
                    self.heading("✅ No category fell below its improvement threshold.")
                ));
            } else {
                out.push_str(&format!("\n{}\n", self.heading("🔧 Improvement Plan:")));
                for (idx, improvement) in analysis.improvements.iter().enumerate() {
                    out.push_str(&format!(
                        "  {}. {} [{}]\n     {}\n     Impact: {}\n",
                        idx + 1,
                        improvement.category,
                        improvement.priority,
                        improvement.tip,
                        improvement.impact
                    ));
                }
            }
        }

        out.push_str(&format!("\n{}\n", self.heading("🔮 Predictive Metrics:")));
        out.push_str(&format!(
            "  • ATS pass rate: {}%\n  • Interview callback rate: {}%\n",
            analysis.predictive_metrics.ats_pass_rate,
            analysis.predictive_metrics.interview_callback_rate
        ));

        if self.detailed {
            out.push_str(&format!("\n{}\n", self.heading("🔍 Category Details:")));
            out.push_str(&format!("  Skills: {}\n", analysis.skills.explanation));
            if !analysis.skills.matched_skills.is_empty() {
                out.push_str(&format!(
                    "    Matched: {}\n",
                    analysis.skills.matched_skills.join(", ")
                ));
            }
            if !analysis.skills.additional_skills.is_empty() {
                out.push_str(&format!(
                    "    Additional: {}\n",
                    analysis.skills.additional_skills.join(", ")
                ));
            }
            out.push_str(&format!("  Experience: {}\n", analysis.experience.explanation));
            out.push_str(&format!("  Education: {}\n", analysis.education.explanation));
            out.push_str(&format!("  Format: {}\n", analysis.format.explanation));
            out.push_str(&format!("  Keywords: {}\n", analysis.keywords.explanation));
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool, include_improvements: bool) -> Self {
        Self {
            include_metadata,
            include_improvements,
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut out = String::new();

        out.push_str(&format!("# Match Report: {}\n\n", analysis.job_title));
        out.push_str(&format!(
            "**Overall score: {}/100** — {}\n\n",
            analysis.overall_score, analysis.detailed_breakdown.overall_explanation
        ));

        out.push_str("## Category Breakdown\n\n");
        out.push_str("| Category | Score | Weight | Description |\n");
        out.push_str("|----------|-------|--------|-------------|\n");
        for category in &analysis.detailed_breakdown.categories {
            out.push_str(&format!(
                "| {} | {} | {}% | {} |\n",
                category.name, category.score, category.weight, category.description
            ));
        }

        out.push_str("\n## Strengths\n\n");
        for strength in &analysis.explainability.top_strengths {
            out.push_str(&format!("- {}\n", strength));
        }

        out.push_str("\n## Weaknesses\n\n");
        for weakness in &analysis.explainability.main_weaknesses {
            out.push_str(&format!("- {}\n", weakness));
        }

        out.push_str("\n## Recommendations\n\n");
        for recommendation in &analysis.explainability.key_recommendations {
            out.push_str(&format!("- {}\n", recommendation));
        }

        if self.include_improvements {
            out.push_str("\n## Improvement Plan\n\n");
            if analysis.improvements.is_empty() {
                out.push_str("No category fell below its improvement threshold.\n");
            } else {
                for improvement in &analysis.improvements {
                    out.push_str(&format!(
                        "- **{}** ({} priority): {} _{}_\n",
                        improvement.category,
                        improvement.priority,
                        improvement.tip,
                        improvement.impact
                    ));
                }
            }
        }

        out.push_str("\n## Predictive Metrics\n\n");
        out.push_str(&format!(
            "- ATS pass rate: {}%\n- Interview callback rate: {}%\n",
            analysis.predictive_metrics.ats_pass_rate,
            analysis.predictive_metrics.interview_callback_rate
        ));

        if self.include_metadata {
            out.push_str("\n---\n\n");
            out.push_str(&format!(
                "Generated {} by resume-match v{} from `{}` and `{}`.\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.tool_version,
                report.metadata.resume_path,
                report.metadata.job_path
            ));
        }

        Ok(out)
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool, include_improvements: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed, include_improvements),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true, include_improvements),
        }
    }

    pub fn format(&self, report: &ScoreReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    pub fn save_to_file(&self, content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, content)?;
        Ok(())
    }
}
