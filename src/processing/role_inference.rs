//! Mapping free-text role labels from the analysis service onto supported roles

use crate::catalog::roles::RoleKey;
use serde::Serialize;

/// Ordered keyword rules; the first rule whose keyword appears in the label wins.
/// "full" comes first so "Full Stack Data Developer" is not read as a data role.
const ROLE_RULES: &[(&str, RoleKey)] = &[
    ("full", RoleKey::Fullstack),
    ("ml", RoleKey::MlEngineer),
    ("machine", RoleKey::MlEngineer),
    ("data", RoleKey::DataEngineer),
    ("front", RoleKey::Frontend),
    ("back", RoleKey::Backend),
    ("devops", RoleKey::Devops),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "role", rename_all = "camelCase")]
pub enum RoleInference {
    Supported(RoleKey),
    Unsupported,
}

impl RoleInference {
    pub fn role_key(&self) -> Option<RoleKey> {
        match self {
            RoleInference::Supported(key) => Some(*key),
            RoleInference::Unsupported => None,
        }
    }
}

/// Infer the role key for a label such as "Machine Learning Engineer"
pub fn infer_role(label: &str) -> RoleInference {
    let lower = label.to_lowercase();
    ROLE_RULES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, key)| RoleInference::Supported(*key))
        .unwrap_or(RoleInference::Unsupported)
}

/// Resolve user input that is either a role key or a free-text role label
pub fn resolve_role(input: &str) -> RoleInference {
    match input.parse::<RoleKey>() {
        Ok(key) => RoleInference::Supported(key),
        Err(_) => infer_role(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(infer_role("Full Stack Developer"), RoleInference::Supported(RoleKey::Fullstack));
        assert_eq!(infer_role("Machine Learning Engineer"), RoleInference::Supported(RoleKey::MlEngineer));
        assert_eq!(infer_role("Frontend Developer"), RoleInference::Supported(RoleKey::Frontend));
        assert_eq!(infer_role("Backend Developer"), RoleInference::Supported(RoleKey::Backend));
        assert_eq!(infer_role("DevOps Engineer"), RoleInference::Supported(RoleKey::Devops));
        assert_eq!(infer_role("Data Engineer"), RoleInference::Supported(RoleKey::DataEngineer));
    }

    #[test]
    fn test_unsupported_label() {
        assert_eq!(infer_role("Quality Assurance Engineer"), RoleInference::Unsupported);
        assert_eq!(infer_role("Software Engineer"), RoleInference::Unsupported);
        assert_eq!(infer_role(""), RoleInference::Unsupported);
        assert_eq!(infer_role("Quality Assurance Engineer").role_key(), None);
    }

    #[test]
    fn test_rule_order() {
        // "full" beats "data" and "back"
        assert_eq!(infer_role("Full Stack Data Developer"), RoleInference::Supported(RoleKey::Fullstack));
        assert_eq!(infer_role("Backend FULL-stack"), RoleInference::Supported(RoleKey::Fullstack));
        // "ml" beats "data"
        assert_eq!(infer_role("ML Data Scientist"), RoleInference::Supported(RoleKey::MlEngineer));
        // substring containment, no word boundaries
        assert_eq!(infer_role("HTML Developer"), RoleInference::Supported(RoleKey::MlEngineer));
        assert_eq!(infer_role("Data Analyst"), RoleInference::Supported(RoleKey::DataEngineer));
    }

    #[test]
    fn test_resolve_role_accepts_keys_and_labels() {
        assert_eq!(resolve_role("data-engineer"), RoleInference::Supported(RoleKey::DataEngineer));
        assert_eq!(resolve_role("DevOps Engineer"), RoleInference::Supported(RoleKey::Devops));
        assert_eq!(resolve_role("Technical Writer"), RoleInference::Unsupported);
    }
}
