//! Learning resource lookup for missing skills

use crate::processing::skills::normalize_skill;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A labelled link to a course, video, docs page or job board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LearningResource {
    pub label: String,
    pub url: String,
}

/// Static skill -> resources table. Keys are stored normalized.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    by_skill: HashMap<String, Vec<LearningResource>>,
}

impl ResourceCatalog {
    pub fn new(table: HashMap<String, Vec<LearningResource>>) -> Self {
        let mut by_skill: HashMap<String, Vec<LearningResource>> = HashMap::new();
        for (skill, resources) in table {
            by_skill.entry(normalize_skill(&skill)).or_default().extend(resources);
        }
        Self { by_skill }
    }

    pub fn skill_count(&self) -> usize {
        self.by_skill.len()
    }

    pub fn get(&self, skill: &str) -> Option<&[LearningResource]> {
        self.by_skill.get(&normalize_skill(skill)).map(|r| r.as_slice())
    }

    /// Collect resources for `skills` in order.
    ///
    /// Unmapped skills contribute nothing. A resource is emitted at most once per
    /// (skill, url) pair, so case variants of one skill do not repeat it, while the
    /// same url reached through two different skills appears twice.
    pub fn resources_for<S: AsRef<str>>(&self, skills: &[S]) -> Vec<LearningResource> {
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut result = Vec::new();

        for skill in skills {
            let key = normalize_skill(skill.as_ref());
            let Some(resources) = self.by_skill.get(&key) else {
                continue;
            };
            for resource in resources {
                if seen.insert((key.clone(), resource.url.clone())) {
                    result.push(resource.clone());
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(label: &str, url: &str) -> LearningResource {
        LearningResource {
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    fn catalog() -> ResourceCatalog {
        let mut table = HashMap::new();
        table.insert(
            "react".to_string(),
            vec![
                resource("React Official Docs", "https://react.dev/learn"),
                resource("React Course", "https://example.com/react"),
            ],
        );
        table.insert("Node.js".to_string(), vec![resource("Node.js Docs", "https://nodejs.org/en/docs")]);
        table.insert("typescript".to_string(), vec![resource("Shared", "https://example.com/shared")]);
        table.insert("javascript".to_string(), vec![resource("Shared", "https://example.com/shared")]);
        ResourceCatalog::new(table)
    }

    #[test]
    fn test_case_variants_deduplicate() {
        let resources = catalog().resources_for(&["React", "react", " REACT "]);
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].url, "https://react.dev/learn");
        assert_eq!(resources[1].url, "https://example.com/react");
    }

    #[test]
    fn test_unmapped_skills_are_skipped() {
        let resources = catalog().resources_for(&["Kubernetes", "node.js", "Terraform"]);
        assert_eq!(resources, vec![resource("Node.js Docs", "https://nodejs.org/en/docs")]);

        let none: Vec<String> = Vec::new();
        assert!(catalog().resources_for(&none).is_empty());
    }

    #[test]
    fn test_same_url_through_different_skills() {
        let resources = catalog().resources_for(&["TypeScript", "JavaScript"]);
        assert_eq!(resources.len(), 2);
        assert!(resources.iter().all(|r| r.url == "https://example.com/shared"));
    }

    #[test]
    fn test_keys_are_normalized() {
        let catalog = catalog();
        assert!(catalog.get("NODE.JS").is_some());
        assert!(catalog.get("nodejs").is_none());
        assert_eq!(catalog.skill_count(), 4);
    }
}
