//! Output formatters for upload summaries, job matches and role roadmaps

use crate::config::OutputFormat;
use crate::error::{Result, SkillSparkError};
use crate::output::report::*;
use crate::processing::resources::LearningResource;
use crate::processing::role_inference::RoleInference;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering each report kind in one format
pub trait OutputFormatter {
    fn format_upload(&self, report: &UploadReport) -> Result<String>;
    fn format_jobs(&self, report: &JobMatchesReport) -> Result<String>;
    fn format_roadmap(&self, view: &RoadmapView) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for notes and sharing
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Standalone HTML page
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        h1 { color: #007acc; border-bottom: 3px solid #007acc; padding-bottom: 10px; }
        h2 { color: #007acc; border-bottom: 2px solid #e9ecef; padding-bottom: 6px; }
        .badge {
            display: inline-block;
            padding: 2px 10px;
            margin: 2px;
            border-radius: 12px;
            background: #e9ecef;
            font-size: 0.9em;
        }
        .badge-match { background: #d4edda; }
        .badge-missing { background: #f8d7da; }
        .job { border-left: 4px solid #007acc; padding: 10px 15px; margin: 15px 0; background: #f8f9fa; }
        .score { float: right; font-weight: bold; font-size: 1.3em; }
        .notice { color: #856404; background: #fff3cd; padding: 10px; border-radius: 6px; }
        .metadata { color: #6c757d; font-size: 0.85em; margin-top: 30px; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <h1>{{ title }}</h1>
        {{ body_html|safe }}
        <div class="metadata">
            <p>Generated {{ generated_at }} by SkillSpark v{{ version }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlPage {
    title: String,
    include_styles: bool,
    body_html: String,
    generated_at: String,
    version: String,
}

fn format_timestamp(metadata: &ReportMetadata) -> String {
    metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_match_badge(&self, percentage: u8) -> String {
        let color = match percentage {
            80..=100 => Color::Green,
            50..=79 => Color::Yellow,
            _ => Color::Red,
        };
        let text = format!("{:>3}%", percentage);
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text
        }
    }

    fn format_links(&self, output: &mut String, links: &[LearningResource]) {
        for link in links {
            output.push_str(&format!(
                "  • {} {}\n",
                link.label,
                self.colorize(&format!("<{}>", link.url), Color::BrightBlack)
            ));
        }
    }

    fn format_roadmap_report(&self, report: &RoadmapReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("🗺️  Roadmap for {}", report.role_name), 1));
        output.push_str(&format!("Based on your resume: {}\n", self.colorize(&report.file_name, Color::Cyan)));
        output.push_str(&format!("Experience level: {}\n", report.experience));
        output.push_str(&format!("Core skill coverage: {}\n", self.format_match_badge(report.core_coverage)));

        if let Some(summary) = &report.summary {
            output.push_str(&self.format_header("🤖 AI Summary", 2));
            output.push_str(&format!("{}\n", summary));
        }

        output.push_str(&self.format_header("🎓 Certifications & courses detected", 2));
        if report.certifications.is_empty() {
            output.push_str(&format!(
                "We didn't detect specific certifications. For {}, consider adding at least 1–2 strong courses or certificates from the resources below.\n",
                report.role_name
            ));
        } else {
            output.push_str(&format!("{}\n", report.certifications.join(", ")));
        }
        if self.detailed && !report.recommended_certs.is_empty() {
            output.push_str(&format!("Recommended: {}\n", report.recommended_certs.join(", ")));
        }

        output.push_str(&self.format_header("✅ Strengths", 2));
        output.push_str(&format!("These skills from your resume are strong for a {}:\n", report.role_name));
        if report.gap.strong_skills.is_empty() {
            output.push_str("  No strong core skills detected yet. Don't worry, you can build them.\n");
        } else {
            for skill in &report.gap.strong_skills {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Green)));
            }
        }
        if !report.gap.already_nice.is_empty() {
            output.push_str(&format!("Bonus skills you already have: {}\n", report.gap.already_nice.join(", ")));
        }

        output.push_str(&self.format_header("🎯 Skill gaps", 2));
        output.push_str(&format!("Build these next to become strong for {}:\n", report.role_name));
        if report.gap.missing_core.is_empty() {
            output.push_str("  You cover most of the core skills. Focus on depth & projects now.\n");
        } else {
            for skill in &report.gap.missing_core {
                output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Red)));
            }
        }
        if !report.gap.missing_nice.is_empty() {
            output.push_str(&format!("Nice-to-have extras to stand out: {}\n", report.gap.missing_nice.join(", ")));
        }

        output.push_str(&self.format_header("📚 Learning resources", 2));
        output.push_str(&self.colorize("YouTube:\n", Color::Cyan));
        self.format_links(&mut output, &report.resources.youtube);
        output.push_str(&self.colorize("Courses:\n", Color::Cyan));
        self.format_links(&mut output, &report.resources.courses);

        output.push_str(&self.format_header("💬 Interview & projects", 2));
        if !report.interview_questions.is_empty() {
            output.push_str("Practice these questions first:\n");
            for (i, question) in report.interview_questions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, question));
            }
        }
        output.push_str("Additional interview resources:\n");
        self.format_links(&mut output, &report.resources.interview);
        output.push_str("Good projects to add:\n");
        for project in &report.resources.projects {
            output.push_str(&format!("  • {}\n", project));
        }

        output.push_str(&self.format_header(&format!("💼 Start applying for {}", report.role_name), 2));
        self.format_links(&mut output, &report.job_links);

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_upload(&self, report: &UploadReport) -> Result<String> {
        let mut output = String::new();
        let analysis = &report.analysis;

        output.push_str(&self.format_header("📄 RESUME ANALYZED", 1));
        output.push_str(&format!("File: {}\n", self.colorize(analysis.display_file_name(), Color::Cyan)));
        output.push_str(&format!("Experience level: {}\n", analysis.experience_label()));

        output.push_str(&self.format_header("🧠 Extracted skills", 2));
        output.push_str(&format!("{}\n", join_or(&analysis.skills, "No skills detected")));

        output.push_str(&self.format_header("💼 Suggested roles", 2));
        if report.role_suggestions.is_empty() {
            output.push_str("No roles detected\n");
        }
        for suggestion in &report.role_suggestions {
            match suggestion.inference {
                RoleInference::Supported(key) => output.push_str(&format!(
                    "  • {} {}\n",
                    suggestion.label,
                    self.colorize(&format!("(skillspark select-role {})", key), Color::BrightBlack)
                )),
                RoleInference::Unsupported => output.push_str(&format!(
                    "  • {} {}\n",
                    suggestion.label,
                    self.colorize("(roadmap not supported yet)", Color::Yellow)
                )),
            }
        }

        if self.detailed {
            if !analysis.certifications.is_empty() {
                output.push_str(&self.format_header("🎓 Certifications", 3));
                output.push_str(&format!("{}\n", analysis.certifications.join(", ")));
            }
            if let Some(summary) = &analysis.summary {
                output.push_str(&self.format_header("🤖 Summary", 3));
                output.push_str(&format!("{}\n", summary));
            }
        }

        if let Some(role) = report.selected_role {
            output.push_str(&format!("\nSelected role: {}\n", self.colorize(role.as_str(), Color::Green)));
        }

        Ok(output)
    }

    fn format_jobs(&self, report: &JobMatchesReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("💼 YOUR JOB MATCHES", 1));
        if report.matches.is_empty() {
            output.push_str("No jobs available yet\n");
        } else {
            output.push_str(&format!(
                "Found {} opportunities ranked by your skill match\n",
                report.matches.len()
            ));
        }
        if report.filtered {
            output.push_str(&self.colorize(
                &format!("Filters applied: showing {} of {} jobs\n", report.matches.len(), report.total_jobs),
                Color::BrightBlack,
            ));
        }

        match &report.analysis {
            Some(overview) => {
                output.push_str(&format!("\nBased on your resume: {}\n", self.colorize(&overview.file_name, Color::Cyan)));
                output.push_str(&format!("Suggested roles: {}\n", join_or(&overview.suggested_roles, "No roles detected")));
                output.push_str(&format!("Skills: {}\n", join_or(&overview.skills, "No skills detected")));
            }
            None => {
                output.push_str(&self.colorize(
                    "\nNo resume analysis found. Run `skillspark upload <file>` first for better matches.\n",
                    Color::Yellow,
                ));
            }
        }

        for (i, entry) in report.matches.iter().enumerate() {
            let job = &entry.job_match.job;
            output.push_str(&format!(
                "\n{} {}. {} {}\n",
                self.format_match_badge(entry.job_match.match_percentage),
                i + 1,
                self.colorize(&job.title, Color::White),
                self.colorize(&format!("· {} · {}", job.company, job.location), Color::BrightBlack)
            ));
            output.push_str(&format!(
                "     Matched: {}\n",
                self.colorize(&join_or(&entry.job_match.matched_skills, "none yet"), Color::Green)
            ));
            if !entry.job_match.missing_skills.is_empty() {
                output.push_str(&format!(
                    "     Missing: {}\n",
                    self.colorize(&entry.job_match.missing_skills.join(", "), Color::Red)
                ));
            }
            if self.detailed && !entry.learning_resources.is_empty() {
                output.push_str("     Learn:\n");
                for resource in &entry.learning_resources {
                    output.push_str(&format!("       - {} <{}>\n", resource.label, resource.url));
                }
            }
        }

        Ok(output)
    }

    fn format_roadmap(&self, view: &RoadmapView) -> Result<String> {
        match view {
            RoadmapView::Ready(report) => Ok(self.format_roadmap_report(report)),
            RoadmapView::MissingData { message } => Ok(format!("{}\n", self.colorize(message, Color::Yellow))),
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_upload(&self, report: &UploadReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_jobs(&self, report: &JobMatchesReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_roadmap(&self, view: &RoadmapView) -> Result<String> {
        self.to_json(view)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn footer(&self, metadata: &ReportMetadata) -> String {
        if self.include_metadata {
            format!("\n---\n\n*Generated {} by SkillSpark v{}*\n", format_timestamp(metadata), metadata.version)
        } else {
            String::new()
        }
    }

    fn markdown_links(links: &[LearningResource]) -> String {
        links
            .iter()
            .map(|link| format!("- [{}]({})\n", link.label, link.url))
            .collect()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_upload(&self, report: &UploadReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str("# 📄 Resume Analysis\n\n");
        output.push_str(&format!("**File:** `{}`  \n", analysis.display_file_name()));
        output.push_str(&format!("**Experience level:** {}\n\n", analysis.experience_label()));

        output.push_str("## Extracted Skills\n\n");
        output.push_str(&format!("{}\n\n", join_or(&analysis.skills, "No skills detected")));

        output.push_str("## Suggested Roles\n\n");
        if report.role_suggestions.is_empty() {
            output.push_str("No roles detected\n");
        }
        for suggestion in &report.role_suggestions {
            match suggestion.inference {
                RoleInference::Supported(key) => {
                    output.push_str(&format!("- {} (`{}`)\n", suggestion.label, key))
                }
                RoleInference::Unsupported => {
                    output.push_str(&format!("- {} *(roadmap not supported yet)*\n", suggestion.label))
                }
            }
        }

        if let Some(summary) = &analysis.summary {
            output.push_str(&format!("\n## Summary\n\n> {}\n", summary));
        }

        output.push_str(&self.footer(&report.metadata));
        Ok(output)
    }

    fn format_jobs(&self, report: &JobMatchesReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 💼 Job Matches\n\n");
        match &report.analysis {
            Some(overview) => {
                output.push_str(&format!("**Based on your resume:** `{}`  \n", overview.file_name));
                output.push_str(&format!(
                    "**Suggested roles:** {}  \n",
                    join_or(&overview.suggested_roles, "No roles detected")
                ));
                output.push_str(&format!("**Skills:** {}\n\n", join_or(&overview.skills, "No skills detected")));
            }
            None => output.push_str("*No resume analysis found. Upload your resume first for better matches.*\n\n"),
        }

        output.push_str("| # | Job | Company | Location | Match |\n");
        output.push_str("|---|-----|---------|----------|-------|\n");
        for (i, entry) in report.matches.iter().enumerate() {
            let job = &entry.job_match.job;
            output.push_str(&format!(
                "| {} | {} | {} | {} | {}% |\n",
                i + 1,
                job.title,
                job.company,
                job.location,
                entry.job_match.match_percentage
            ));
        }
        output.push('\n');

        for entry in &report.matches {
            let job_match = &entry.job_match;
            output.push_str(&format!("## {} - {}%\n\n", job_match.job.title, job_match.match_percentage));
            output.push_str(&format!("- **Matched:** {}\n", join_or(&job_match.matched_skills, "none yet")));
            output.push_str(&format!("- **Missing:** {}\n", join_or(&job_match.missing_skills, "none")));
            if !entry.learning_resources.is_empty() {
                output.push_str("\n**Close the gap:**\n\n");
                output.push_str(&Self::markdown_links(&entry.learning_resources));
            }
            output.push('\n');
        }

        output.push_str(&self.footer(&report.metadata));
        Ok(output)
    }

    fn format_roadmap(&self, view: &RoadmapView) -> Result<String> {
        let report = match view {
            RoadmapView::Ready(report) => report,
            RoadmapView::MissingData { message } => return Ok(format!("> {}\n", message)),
        };

        let mut output = String::new();
        output.push_str(&format!("# 🗺️ Roadmap for {}\n\n", report.role_name));
        output.push_str(&format!("**Based on your resume:** `{}`  \n", report.file_name));
        output.push_str(&format!("**Experience level:** {}  \n", report.experience));
        output.push_str(&format!("**Core skill coverage:** {}%\n\n", report.core_coverage));

        if let Some(summary) = &report.summary {
            output.push_str(&format!("> {}\n\n", summary));
        }

        output.push_str("## Certifications\n\n");
        output.push_str(&format!("{}\n\n", join_or(&report.certifications, "None detected")));
        if !report.recommended_certs.is_empty() {
            output.push_str(&format!("**Recommended:** {}\n\n", report.recommended_certs.join(", ")));
        }

        output.push_str("## Skills\n\n");
        output.push_str("| Category | Skills |\n|----------|--------|\n");
        output.push_str(&format!("| ✅ Strong | {} |\n", join_or(&report.gap.strong_skills, "none")));
        output.push_str(&format!("| 🎯 Missing core | {} |\n", join_or(&report.gap.missing_core, "none")));
        output.push_str(&format!("| ⭐ Bonus | {} |\n", join_or(&report.gap.already_nice, "none")));
        output.push_str(&format!("| ➕ Nice to have | {} |\n\n", join_or(&report.gap.missing_nice, "none")));

        output.push_str("## Learning Resources\n\n### YouTube\n\n");
        output.push_str(&Self::markdown_links(&report.resources.youtube));
        output.push_str("\n### Courses\n\n");
        output.push_str(&Self::markdown_links(&report.resources.courses));

        output.push_str("\n## Interview Preparation\n\n");
        for (i, question) in report.interview_questions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, question));
        }
        if !report.interview_questions.is_empty() {
            output.push('\n');
        }
        output.push_str(&Self::markdown_links(&report.resources.interview));

        output.push_str("\n## Project Ideas\n\n");
        for project in &report.resources.projects {
            output.push_str(&format!("- {}\n", project));
        }

        output.push_str("\n## Job Boards\n\n");
        output.push_str(&Self::markdown_links(&report.job_links));

        output.push_str(&self.footer(&report.metadata));
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn html_badges(items: &[String], class: &str) -> String {
    items
        .iter()
        .map(|item| format!("<span class=\"badge {}\">{}</span>", class, escape_html(item)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn html_links(links: &[LearningResource]) -> String {
    let items: String = links
        .iter()
        .map(|link| {
            format!(
                "<li><a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a></li>",
                escape_html(&link.url),
                escape_html(&link.label)
            )
        })
        .collect();
    format!("<ul>{}</ul>", items)
}

fn html_list(items: &[String], ordered: bool) -> String {
    let tag = if ordered { "ol" } else { "ul" };
    let body: String = items.iter().map(|item| format!("<li>{}</li>", escape_html(item))).collect();
    format!("<{tag}>{body}</{tag}>")
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn render_page(&self, title: &str, body_html: String, metadata: &ReportMetadata) -> Result<String> {
        let page = HtmlPage {
            title: title.to_string(),
            include_styles: self.include_styles,
            body_html,
            generated_at: format_timestamp(metadata),
            version: metadata.version.clone(),
        };
        page.render()
            .map_err(|e| SkillSparkError::OutputFormatting(e.to_string()))
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_upload(&self, report: &UploadReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut body = String::new();

        body.push_str(&format!("<p><strong>File:</strong> {}</p>", escape_html(analysis.display_file_name())));
        body.push_str(&format!(
            "<p><strong>Experience level:</strong> {}</p>",
            escape_html(&analysis.experience_label())
        ));
        body.push_str("<h2>Extracted Skills</h2>");
        body.push_str(&format!("<p>{}</p>", html_badges(&analysis.skills, "badge-match")));
        body.push_str("<h2>Suggested Roles</h2><ul>");
        for suggestion in &report.role_suggestions {
            let note = match suggestion.inference {
                RoleInference::Supported(key) => format!("<code>{}</code>", key),
                RoleInference::Unsupported => "<em>roadmap not supported yet</em>".to_string(),
            };
            body.push_str(&format!("<li>{} {}</li>", escape_html(&suggestion.label), note));
        }
        body.push_str("</ul>");
        if let Some(summary) = &analysis.summary {
            body.push_str(&format!("<h2>Summary</h2><p>{}</p>", escape_html(summary)));
        }

        self.render_page("Resume Analysis", body, &report.metadata)
    }

    fn format_jobs(&self, report: &JobMatchesReport) -> Result<String> {
        let mut body = String::new();

        match &report.analysis {
            Some(overview) => {
                body.push_str(&format!(
                    "<p><strong>Based on your resume:</strong> {}</p>",
                    escape_html(&overview.file_name)
                ));
                body.push_str(&format!(
                    "<p><strong>Suggested roles:</strong> {}</p>",
                    escape_html(&join_or(&overview.suggested_roles, "No roles detected"))
                ));
            }
            None => body.push_str(
                "<p class=\"notice\">No resume analysis found. Upload your resume first for better matches.</p>",
            ),
        }

        for entry in &report.matches {
            let job_match = &entry.job_match;
            body.push_str("<div class=\"job\">");
            body.push_str(&format!("<span class=\"score\">{}%</span>", job_match.match_percentage));
            body.push_str(&format!(
                "<h2>{}</h2><p>{} · {}</p>",
                escape_html(&job_match.job.title),
                escape_html(&job_match.job.company),
                escape_html(&job_match.job.location)
            ));
            body.push_str(&format!(
                "<p>{} {}</p>",
                html_badges(&job_match.matched_skills, "badge-match"),
                html_badges(&job_match.missing_skills, "badge-missing")
            ));
            if !entry.learning_resources.is_empty() {
                body.push_str(&html_links(&entry.learning_resources));
            }
            body.push_str("</div>");
        }

        self.render_page("Your Job Matches", body, &report.metadata)
    }

    fn format_roadmap(&self, view: &RoadmapView) -> Result<String> {
        let report = match view {
            RoadmapView::Ready(report) => report,
            RoadmapView::MissingData { message } => {
                let body = format!("<p class=\"notice\">{}</p>", escape_html(message));
                return self.render_page("Roadmap", body, &ReportMetadata::now());
            }
        };

        let mut body = String::new();
        body.push_str(&format!(
            "<p><strong>Based on your resume:</strong> {} | <strong>Experience level:</strong> {}</p>",
            escape_html(&report.file_name),
            escape_html(&report.experience)
        ));
        if let Some(summary) = &report.summary {
            body.push_str(&format!("<h2>AI Summary</h2><p>{}</p>", escape_html(summary)));
        }

        body.push_str("<h2>Certifications</h2>");
        if report.certifications.is_empty() {
            body.push_str(&format!(
                "<p>We didn't detect specific certifications. For {}, consider adding at least 1–2 strong courses or certificates.</p>",
                escape_html(&report.role_name)
            ));
        } else {
            body.push_str(&format!("<p>{}</p>", html_badges(&report.certifications, "")));
        }

        body.push_str(&format!("<h2>Strengths ({}% core coverage)</h2>", report.core_coverage));
        body.push_str(&format!("<p>{}</p>", html_badges(&report.gap.strong_skills, "badge-match")));
        if !report.gap.already_nice.is_empty() {
            body.push_str(&format!(
                "<p>Bonus skills you already have: {}</p>",
                escape_html(&report.gap.already_nice.join(", "))
            ));
        }

        body.push_str("<h2>Skill Gaps</h2>");
        body.push_str(&format!("<p>{}</p>", html_badges(&report.gap.missing_core, "badge-missing")));
        if !report.gap.missing_nice.is_empty() {
            body.push_str(&format!(
                "<p>Nice-to-have extras to stand out: {}</p>",
                escape_html(&report.gap.missing_nice.join(", "))
            ));
        }

        body.push_str("<h2>YouTube</h2>");
        body.push_str(&html_links(&report.resources.youtube));
        body.push_str("<h2>Courses</h2>");
        body.push_str(&html_links(&report.resources.courses));
        body.push_str("<h2>Interview &amp; Projects</h2>");
        if !report.interview_questions.is_empty() {
            body.push_str(&html_list(&report.interview_questions, true));
        }
        body.push_str(&html_links(&report.resources.interview));
        body.push_str(&html_list(&report.resources.projects, false));
        body.push_str(&format!("<h2>Start applying for {}</h2>", escape_html(&report.role_name)));
        body.push_str(&html_links(&report.job_links));

        self.render_page(&format!("Roadmap for {}", report.role_name), body, &report.metadata)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, report_name: &str, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}{}.{}", report_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::roles::RoleKey;
    use crate::catalog::Catalog;
    use crate::processing::job_matcher::JobFilter;
    use crate::service::analysis::AnalysisResult;
    use crate::session::AnalysisSession;

    fn session() -> AnalysisSession {
        AnalysisSession::Present(AnalysisResult {
            file_name: Some("jane_<cv>.pdf".to_string()),
            skills: vec!["React".to_string(), "Python".to_string()],
            suggested_roles: vec!["Frontend Developer".to_string(), "QA Engineer".to_string()],
            interview_questions: vec!["Explain the virtual DOM.".to_string()],
            ..Default::default()
        })
    }

    #[test]
    fn test_console_jobs_without_colors() {
        let catalog = Catalog::builtin().unwrap();
        let report = JobMatchesReport::build(&AnalysisSession::Absent, &catalog, &JobFilter::default());
        let output = ConsoleFormatter::new(false, false).format_jobs(&report).unwrap();

        assert!(output.contains("Found 6 opportunities"));
        assert!(output.contains("No resume analysis found"));
        assert!(output.contains("  0% 1. Senior Full Stack Engineer"));
    }

    #[test]
    fn test_console_upload_marks_unsupported_roles() {
        let AnalysisSession::Present(analysis) = session() else { unreachable!() };
        let output = ConsoleFormatter::new(false, false)
            .format_upload(&UploadReport::new(analysis))
            .unwrap();

        assert!(output.contains("Frontend Developer (skillspark select-role frontend)"));
        assert!(output.contains("QA Engineer (roadmap not supported yet)"));
    }

    #[test]
    fn test_missing_data_in_every_format() {
        let catalog = Catalog::builtin().unwrap();
        let view = RoadmapView::build(&AnalysisSession::Absent, Some(RoleKey::Backend), &catalog);
        let generator = ReportGenerator::with_options(false, false, false, false);

        for format in [OutputFormat::Console, OutputFormat::Markdown, OutputFormat::Html] {
            let output = generator.formatter(format).format_roadmap(&view).unwrap();
            assert!(output.contains("Missing data"), "{:?}", format);
        }

        let json = generator.formatter(OutputFormat::Json).format_roadmap(&view).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "missingData");
    }

    #[test]
    fn test_html_escapes_user_content() {
        let catalog = Catalog::builtin().unwrap();
        let report = JobMatchesReport::build(&session(), &catalog, &JobFilter::default());
        let html = HtmlFormatter::new(false).format_jobs(&report).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("jane_&lt;cv&gt;.pdf"));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_markdown_roadmap() {
        let catalog = Catalog::builtin().unwrap();
        let view = RoadmapView::build(&session(), Some(RoleKey::Frontend), &catalog);
        let markdown = MarkdownFormatter::new(false).format_roadmap(&view).unwrap();

        assert!(markdown.starts_with("# 🗺️ Roadmap for Frontend Developer"));
        assert!(markdown.contains("| ✅ Strong | React |"));
        assert!(markdown.contains("| 🎯 Missing core | HTML, CSS, JavaScript |"));
        assert!(markdown.contains("1. Explain the virtual DOM."));
    }

    #[test]
    fn test_json_jobs_flatten_match() {
        let catalog = Catalog::builtin().unwrap();
        let report = JobMatchesReport::build(&session(), &catalog, &JobFilter::default());
        let json = JsonFormatter::new(false).format_jobs(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value["matches"][0];
        assert!(first["matchPercentage"].is_u64());
        assert!(first["job"]["requiredSkills"].is_array());
        assert!(first["learning_resources"].is_array());
    }

    #[test]
    fn test_markdown_empty_cells_and_headings() {
        let catalog = Catalog::builtin().unwrap();
        let view = RoadmapView::build(&session(), Some(RoleKey::Devops), &catalog);
        let markdown = MarkdownFormatter::new(false).format_roadmap(&view).unwrap();

        assert!(markdown.contains("| ✅ Strong | none |"));
        assert!(markdown.contains("| ⭐ Bonus | none |"));

        let report = JobMatchesReport::build(&session(), &catalog, &JobFilter::default());
        let jobs = MarkdownFormatter::new(false).format_jobs(&report).unwrap();
        assert!(jobs.contains("## Frontend Developer - 20%"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(OutputFormat::Markdown, "roadmap", false), "roadmap.md");
        assert!(suggest_filename(OutputFormat::Html, "jobs", true).starts_with("jobs_"));
    }
}
