//! Skill name normalization shared by every comparison in the crate

use std::collections::HashSet;

/// Normalize a skill name for comparison: trim surrounding whitespace and lower-case.
///
/// No other canonicalization happens, so "Node.js" and "nodejs" stay distinct.
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// A set of normalized skill names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: HashSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_skills<S: AsRef<str>>(skills: &[S]) -> Self {
        skills.iter().map(|s| s.as_ref()).collect()
    }

    pub fn insert(&mut self, skill: &str) -> bool {
        self.skills.insert(normalize_skill(skill))
    }

    /// Case- and whitespace-insensitive membership
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.contains(&normalize_skill(skill))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Split `source` into (present, absent) subsequences, preserving order and casing
    pub fn partition(&self, source: &[String]) -> (Vec<String>, Vec<String>) {
        source.iter().cloned().partition(|skill| self.contains(skill))
    }
}

impl<'a> FromIterator<&'a str> for SkillSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}
