//! Role identifiers and per-role roadmap configuration

use crate::error::SkillSparkError;
use crate::processing::resources::LearningResource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of roles the application has roadmaps for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoleKey {
    #[serde(rename = "fullstack")]
    Fullstack,
    #[serde(rename = "frontend")]
    Frontend,
    #[serde(rename = "backend")]
    Backend,
    #[serde(rename = "data-engineer")]
    DataEngineer,
    #[serde(rename = "ml-engineer")]
    MlEngineer,
    #[serde(rename = "devops")]
    Devops,
}

impl RoleKey {
    pub const ALL: [RoleKey; 6] = [
        RoleKey::Fullstack,
        RoleKey::Frontend,
        RoleKey::Backend,
        RoleKey::DataEngineer,
        RoleKey::MlEngineer,
        RoleKey::Devops,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKey::Fullstack => "fullstack",
            RoleKey::Frontend => "frontend",
            RoleKey::Backend => "backend",
            RoleKey::DataEngineer => "data-engineer",
            RoleKey::MlEngineer => "ml-engineer",
            RoleKey::Devops => "devops",
        }
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleKey {
    type Err = SkillSparkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RoleKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| SkillSparkError::UnknownRole(wanted.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleConfig {
    pub id: RoleKey,
    pub display_name: String,
    pub core_skills: Vec<String>,
    pub nice_to_have_skills: Vec<String>,
    pub recommended_certs: Vec<String>,
    pub resources: RoleResources,
    pub job_links: Vec<LearningResource>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoleResources {
    pub youtube: Vec<LearningResource>,
    pub courses: Vec<LearningResource>,
    pub interview: Vec<LearningResource>,
    pub projects: Vec<String>,
}
