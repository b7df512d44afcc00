//! Static reference data: the job catalog, role roadmaps and learning resources.
//!
//! The tables live in JSON files embedded at compile time so the matching code
//! never branches on catalog content.

pub mod roles;

use crate::error::{Result, SkillSparkError};
use crate::processing::job_matcher::Job;
use crate::processing::resources::{LearningResource, ResourceCatalog};
use log::debug;
use roles::{RoleConfig, RoleKey};
use std::collections::{BTreeMap, HashMap};

const JOBS_JSON: &str = include_str!("data/jobs.json");
const ROLES_JSON: &str = include_str!("data/roles.json");
const LEARNING_RESOURCES_JSON: &str = include_str!("data/learning_resources.json");

#[derive(Debug, Clone)]
pub struct Catalog {
    jobs: Vec<Job>,
    roles: BTreeMap<RoleKey, RoleConfig>,
    resources: ResourceCatalog,
}

impl Catalog {
    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(JOBS_JSON, ROLES_JSON, LEARNING_RESOURCES_JSON)
    }

    pub fn from_json(jobs_json: &str, roles_json: &str, resources_json: &str) -> Result<Self> {
        let jobs: Vec<Job> = serde_json::from_str(jobs_json)
            .map_err(|e| SkillSparkError::Catalog(format!("Failed to parse job catalog: {}", e)))?;

        let role_list: Vec<RoleConfig> = serde_json::from_str(roles_json)
            .map_err(|e| SkillSparkError::Catalog(format!("Failed to parse role configuration: {}", e)))?;

        let resource_table: HashMap<String, Vec<LearningResource>> = serde_json::from_str(resources_json)
            .map_err(|e| SkillSparkError::Catalog(format!("Failed to parse learning resources: {}", e)))?;

        let mut roles = BTreeMap::new();
        for role in role_list {
            if roles.insert(role.id, role).is_some() {
                return Err(SkillSparkError::Catalog("Duplicate role configuration".to_string()));
            }
        }

        let missing: Vec<&str> = RoleKey::ALL
            .iter()
            .filter(|key| !roles.contains_key(*key))
            .map(|key| key.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(SkillSparkError::Catalog(format!(
                "No configuration for roles: {}",
                missing.join(", ")
            )));
        }

        let resources = ResourceCatalog::new(resource_table);
        debug!(
            "Loaded catalog: {} jobs, {} roles, {} skills with learning resources",
            jobs.len(),
            roles.len(),
            resources.skill_count()
        );

        Ok(Self { jobs, roles, resources })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn role(&self, key: RoleKey) -> Option<&RoleConfig> {
        self.roles.get(&key)
    }

    /// Role configurations in `RoleKey` order
    pub fn roles(&self) -> impl Iterator<Item = &RoleConfig> {
        self.roles.values()
    }

    pub fn resources(&self) -> &ResourceCatalog {
        &self.resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.jobs().len(), 6);
        assert_eq!(catalog.roles().count(), 6);
        assert!(catalog.resources().skill_count() >= 9);
    }

    #[test]
    fn test_every_role_is_configured() {
        let catalog = Catalog::builtin().unwrap();
        for key in RoleKey::ALL {
            let role = catalog.role(key).unwrap();
            assert_eq!(role.id, key);
            assert!(!role.core_skills.is_empty());
            assert!(!role.job_links.is_empty());
        }
        assert_eq!(catalog.role(RoleKey::MlEngineer).unwrap().display_name, "Machine Learning Engineer");
    }

    #[test]
    fn test_missing_role_is_rejected() {
        let err = Catalog::from_json("[]", "[]", "{}").unwrap_err();
        assert!(matches!(err, SkillSparkError::Catalog(_)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(Catalog::from_json("{", ROLES_JSON, LEARNING_RESOURCES_JSON).is_err());
        assert!(Catalog::from_json(JOBS_JSON, ROLES_JSON, "[]").is_err());
    }
}
