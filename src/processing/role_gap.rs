//! Gap analysis between a user's skills and a role's skill lists

use crate::catalog::roles::RoleConfig;
use crate::processing::skills::SkillSet;
use serde::{Deserialize, Serialize};

/// Which of a role's core and nice-to-have skills the user has or lacks.
/// Each list keeps the order of the role configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGapReport {
    pub strong_skills: Vec<String>,
    pub missing_core: Vec<String>,
    pub already_nice: Vec<String>,
    pub missing_nice: Vec<String>,
}

/// Partition the role's core and nice-to-have lists by membership in `user_skills`.
///
/// Callers resolve both inputs first; see `session::RoadmapPrerequisites`.
pub fn analyze_role_gap(user_skills: &SkillSet, role: &RoleConfig) -> RoleGapReport {
    let (strong_skills, missing_core) = user_skills.partition(&role.core_skills);
    let (already_nice, missing_nice) = user_skills.partition(&role.nice_to_have_skills);

    RoleGapReport {
        strong_skills,
        missing_core,
        already_nice,
        missing_nice,
    }
}

impl RoleGapReport {
    pub fn core_coverage(&self) -> u8 {
        crate::processing::job_matcher::match_percentage(
            self.strong_skills.len(),
            self.strong_skills.len() + self.missing_core.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::roles::{RoleKey, RoleResources};

    fn role(core: &[&str], nice: &[&str]) -> RoleConfig {
        RoleConfig {
            id: RoleKey::Frontend,
            display_name: "Frontend Developer".to_string(),
            core_skills: core.iter().map(|s| s.to_string()).collect(),
            nice_to_have_skills: nice.iter().map(|s| s.to_string()).collect(),
            recommended_certs: Vec::new(),
            resources: RoleResources::default(),
            job_links: Vec::new(),
        }
    }

    #[test]
    fn test_partitions_both_lists() {
        let role = role(&["HTML", "CSS", "JavaScript", "React"], &["TypeScript", "Next.js", "Testing"]);
        let skills = SkillSet::from_skills(&["react", " html", "TYPESCRIPT", "Python"]);

        let report = analyze_role_gap(&skills, &role);

        assert_eq!(report.strong_skills, vec!["HTML", "React"]);
        assert_eq!(report.missing_core, vec!["CSS", "JavaScript"]);
        assert_eq!(report.already_nice, vec!["TypeScript"]);
        assert_eq!(report.missing_nice, vec!["Next.js", "Testing"]);
        assert_eq!(report.core_coverage(), 50);
    }

    #[test]
    fn test_cover_is_complete_and_disjoint() {
        let role = role(&["Linux", "Git", "CI/CD", "Docker"], &["Kubernetes", "AWS", "Terraform", "Monitoring"]);
        let skills = SkillSet::from_skills(&["git", "docker", "aws"]);

        let report = analyze_role_gap(&skills, &role);

        for (have, lack, source) in [
            (&report.strong_skills, &report.missing_core, &role.core_skills),
            (&report.already_nice, &report.missing_nice, &role.nice_to_have_skills),
        ] {
            assert_eq!(have.len() + lack.len(), source.len());
            assert!(have.iter().all(|s| !lack.contains(s)));
            for skill in source {
                assert!(have.contains(skill) ^ lack.contains(skill));
            }
        }
    }

    #[test]
    fn test_no_matching_skills() {
        let role = role(&["Python", "SQL"], &["Spark"]);
        let skills = SkillSet::from_skills(&["Figma"]);

        let report = analyze_role_gap(&skills, &role);
        assert!(report.strong_skills.is_empty());
        assert_eq!(report.missing_core, role.core_skills);
        assert_eq!(report.missing_nice, role.nice_to_have_skills);
        assert_eq!(report.core_coverage(), 0);
    }
}
