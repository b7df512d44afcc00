//! Report structures assembled from the stored session and the catalog

use crate::catalog::roles::{RoleKey, RoleResources};
use crate::catalog::Catalog;
use crate::processing::job_matcher::{match_jobs, JobFilter, JobMatch};
use crate::processing::resources::LearningResource;
use crate::processing::role_gap::{analyze_role_gap, RoleGapReport};
use crate::processing::role_inference::{infer_role, RoleInference};
use crate::processing::skills::SkillSet;
use crate::service::analysis::AnalysisResult;
use crate::session::{AnalysisSession, RoadmapPrerequisites};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MISSING_DATA_MESSAGE: &str = "Missing data. Please upload your resume again and select a role.";

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub version: String,
}

impl ReportMetadata {
    pub fn now() -> Self {
        Self {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Result of a successful upload
#[derive(Debug, Clone, Serialize)]
pub struct UploadReport {
    pub metadata: ReportMetadata,
    pub analysis: AnalysisResult,
    pub role_suggestions: Vec<RoleSuggestion>,
    /// Set when the upload also selected a role
    pub selected_role: Option<RoleKey>,
}

/// A role label from the service and the roadmap it maps to, if any
#[derive(Debug, Clone, Serialize)]
pub struct RoleSuggestion {
    pub label: String,
    pub inference: RoleInference,
}

impl UploadReport {
    pub fn new(analysis: AnalysisResult) -> Self {
        let role_suggestions = analysis
            .suggested_roles
            .iter()
            .map(|label| RoleSuggestion {
                label: label.clone(),
                inference: infer_role(label),
            })
            .collect();

        Self {
            metadata: ReportMetadata::now(),
            analysis,
            role_suggestions,
            selected_role: None,
        }
    }

    /// First suggested role that has a roadmap
    pub fn first_supported_role(&self) -> Option<RoleKey> {
        self.role_suggestions
            .iter()
            .find_map(|suggestion| suggestion.inference.role_key())
    }
}

/// Ranked job matches for the stored analysis
#[derive(Debug, Clone, Serialize)]
pub struct JobMatchesReport {
    pub metadata: ReportMetadata,
    /// Absent when no usable analysis is stored
    pub analysis: Option<AnalysisOverview>,
    pub total_jobs: usize,
    pub filtered: bool,
    pub matches: Vec<JobMatchEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOverview {
    pub file_name: String,
    pub suggested_roles: Vec<String>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobMatchEntry {
    #[serde(flatten)]
    pub job_match: JobMatch,
    pub learning_resources: Vec<LearningResource>,
}

impl JobMatchesReport {
    pub fn build(session: &AnalysisSession, catalog: &Catalog, filter: &JobFilter) -> Self {
        let ranked = match_jobs(session.skills(), catalog.jobs());
        let total_jobs = ranked.len();

        let matches = filter
            .apply(ranked)
            .into_iter()
            .map(|job_match| {
                let learning_resources = catalog.resources().resources_for(&job_match.missing_skills);
                JobMatchEntry {
                    job_match,
                    learning_resources,
                }
            })
            .collect();

        let analysis = session.analysis().map(|a| AnalysisOverview {
            file_name: a.display_file_name().to_string(),
            suggested_roles: a.suggested_roles.clone(),
            skills: a.skills.clone(),
        });

        Self {
            metadata: ReportMetadata::now(),
            analysis,
            total_jobs,
            filtered: !filter.is_empty(),
            matches,
        }
    }
}

/// Learning roadmap for the selected role
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapReport {
    pub metadata: ReportMetadata,
    pub role: RoleKey,
    pub role_name: String,
    pub file_name: String,
    pub experience: String,
    pub summary: Option<String>,
    pub certifications: Vec<String>,
    pub gap: RoleGapReport,
    pub core_coverage: u8,
    pub recommended_certs: Vec<String>,
    pub resources: RoleResources,
    pub interview_questions: Vec<String>,
    pub job_links: Vec<LearningResource>,
}

impl RoadmapReport {
    pub fn build(prerequisites: RoadmapPrerequisites<'_>) -> Self {
        let RoadmapPrerequisites { analysis, role } = prerequisites;
        let gap = analyze_role_gap(&SkillSet::from_skills(&analysis.skills), role);

        Self {
            metadata: ReportMetadata::now(),
            role: role.id,
            role_name: role.display_name.clone(),
            file_name: analysis.display_file_name().to_string(),
            experience: analysis.experience_label(),
            summary: analysis.summary.clone().filter(|s| !s.trim().is_empty()),
            certifications: analysis.certifications.clone(),
            core_coverage: gap.core_coverage(),
            gap,
            recommended_certs: role.recommended_certs.clone(),
            resources: role.resources.clone(),
            interview_questions: analysis.interview_questions.clone(),
            job_links: role.job_links.clone(),
        }
    }
}

/// What the roadmap command shows: a roadmap, or the missing-data notice
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RoadmapView {
    Ready(Box<RoadmapReport>),
    MissingData { message: String },
}

impl RoadmapView {
    pub fn build(session: &AnalysisSession, selected: Option<RoleKey>, catalog: &Catalog) -> Self {
        match RoadmapPrerequisites::resolve(session, selected, catalog) {
            Some(prerequisites) => RoadmapView::Ready(Box::new(RoadmapReport::build(prerequisites))),
            None => RoadmapView::MissingData {
                message: MISSING_DATA_MESSAGE.to_string(),
            },
        }
    }
}
