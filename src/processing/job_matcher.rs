//! Skill-based job matching and ranking

use crate::processing::skills::SkillSet;
use serde::{Deserialize, Serialize};

/// A job posting from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub required_skills: Vec<String>,
}

/// A job together with how well a user's skills cover its requirements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub job: Job,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_percentage: u8,
}

/// Post-ranking filters for a match listing
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub remote_only: bool,
    pub min_match: Option<u8>,
}

/// Match every job against the user's skills and rank by match percentage.
///
/// Absent or empty skills are valid and yield all-missing matches at 0%.
/// Ties keep the catalog order.
pub fn match_jobs(user_skills: Option<&[String]>, jobs: &[Job]) -> Vec<JobMatch> {
    let skill_set = user_skills.map(|s| SkillSet::from_skills(s)).unwrap_or_default();

    let mut matches: Vec<JobMatch> = jobs.iter().map(|job| match_job(&skill_set, job)).collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    matches
}

/// Match a single job against an already normalized skill set
pub fn match_job(skill_set: &SkillSet, job: &Job) -> JobMatch {
    let (matched_skills, missing_skills) = skill_set.partition(&job.required_skills);
    let match_percentage = match_percentage(matched_skills.len(), job.required_skills.len());

    JobMatch {
        job: job.clone(),
        matched_skills,
        missing_skills,
        match_percentage,
    }
}

/// `round(100 * matched / total)` with halves rounded up; 0 when `total` is 0
pub fn match_percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let matched = matched.min(total);
    ((200 * matched + total) / (2 * total)) as u8
}

impl JobFilter {
    pub fn is_empty(&self) -> bool {
        !self.remote_only && self.min_match.is_none()
    }

    pub fn accepts(&self, job_match: &JobMatch) -> bool {
        if self.remote_only && !job_match.job.location.to_lowercase().contains("remote") {
            return false;
        }
        match self.min_match {
            Some(min) => job_match.match_percentage >= min,
            None => true,
        }
    }

    /// Keep the accepted matches in their ranked order
    pub fn apply(&self, matches: Vec<JobMatch>) -> Vec<JobMatch> {
        matches.into_iter().filter(|m| self.accepts(m)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, location: &str, skills: &[&str]) -> Job {
        Job {
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_half_matched_job() {
        let jobs = vec![job("Full Stack", "Remote", &["React", "TypeScript", "Node.js", "AWS"])];
        let user = skills(&["React", "TypeScript"]);

        let result = match_jobs(Some(user.as_slice()), &jobs);

        assert_eq!(result[0].matched_skills, vec!["React", "TypeScript"]);
        assert_eq!(result[0].missing_skills, vec!["Node.js", "AWS"]);
        assert_eq!(result[0].match_percentage, 50);
    }

    #[test]
    fn test_no_user_skills() {
        let jobs = vec![
            job("A", "Austin, TX", &["Python", "SQL", "Docker"]),
            job("B", "Remote", &["Go"]),
        ];

        let empty: Vec<String> = Vec::new();
        for result in [match_jobs(None, &jobs), match_jobs(Some(empty.as_slice()), &jobs)] {
            assert_eq!(result.len(), 2);
            for (m, j) in result.iter().zip(jobs.iter()) {
                assert!(m.matched_skills.is_empty());
                assert_eq!(m.missing_skills, j.required_skills);
                assert_eq!(m.match_percentage, 0);
            }
        }
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let jobs = vec![job("Frontend", "NYC", &["react", "CSS"])];
        let user = skills(&["React ", "  css"]);

        let result = match_jobs(Some(user.as_slice()), &jobs);
        assert_eq!(result[0].matched_skills, vec!["react", "CSS"]);
        assert_eq!(result[0].match_percentage, 100);
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let jobs = vec![job("Backend", "NYC", &["Node.js"])];
        let user = skills(&["nodejs", "Node"]);

        let result = match_jobs(Some(user.as_slice()), &jobs);
        assert!(result[0].matched_skills.is_empty());
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(match_percentage(1, 3), 33);
        assert_eq!(match_percentage(2, 3), 67);
        assert_eq!(match_percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(match_percentage(5, 6), 83);
        assert_eq!(match_percentage(0, 0), 0);
        assert_eq!(match_percentage(4, 4), 100);
    }

    #[test]
    fn test_empty_required_skills() {
        let jobs = vec![job("Intern", "Remote", &[])];
        let user = skills(&["React"]);

        let result = match_jobs(Some(user.as_slice()), &jobs);
        assert_eq!(result[0].match_percentage, 0);
        assert!(result[0].matched_skills.is_empty());
        assert!(result[0].missing_skills.is_empty());
    }

    #[test]
    fn test_stable_descending_sort() {
        // 40%, 90%, 90%, 10%
        let ten: Vec<String> = (0..10).map(|i| format!("skill{}", i)).collect();
        let user: Vec<String> = ten[..9].to_vec();
        let refs = |n: usize, offset: usize| -> Vec<String> {
            let mut req: Vec<String> = ten[..n].to_vec();
            req.extend((0..10 - n).map(|i| format!("other{}-{}", offset, i)));
            req
        };
        let jobs = vec![
            Job { title: "forty".into(), company: "c".into(), location: "l".into(), required_skills: refs(4, 0) },
            Job { title: "ninety-a".into(), company: "c".into(), location: "l".into(), required_skills: refs(9, 1) },
            Job { title: "ninety-b".into(), company: "c".into(), location: "l".into(), required_skills: refs(9, 2) },
            Job { title: "ten".into(), company: "c".into(), location: "l".into(), required_skills: refs(1, 3) },
        ];

        let result = match_jobs(Some(user.as_slice()), &jobs);
        let order: Vec<(&str, u8)> = result.iter().map(|m| (m.job.title.as_str(), m.match_percentage)).collect();

        assert_eq!(order, vec![("ninety-a", 90), ("ninety-b", 90), ("forty", 40), ("ten", 10)]);
    }

    #[test]
    fn test_partition_is_complete_cover() {
        let jobs = vec![
            job("A", "Remote", &["React", "Docker", "AWS", "Go", "Rust"]),
            job("B", "Remote", &["Python", "aws", "Kafka"]),
        ];
        let user = skills(&["AWS", "rust", "kafka", "Haskell"]);

        for m in match_jobs(Some(user.as_slice()), &jobs) {
            let mut rebuilt = Vec::new();
            let (mut mi, mut xi) = (0, 0);
            for skill in &m.job.required_skills {
                if mi < m.matched_skills.len() && &m.matched_skills[mi] == skill {
                    rebuilt.push(skill.clone());
                    mi += 1;
                } else {
                    assert_eq!(&m.missing_skills[xi], skill);
                    rebuilt.push(skill.clone());
                    xi += 1;
                }
            }
            assert_eq!(rebuilt, m.job.required_skills);
            assert_eq!(mi + xi, m.job.required_skills.len());
            assert!(m.matched_skills.iter().all(|s| !m.missing_skills.contains(s)));
        }
    }

    #[test]
    fn test_filters_keep_ranked_order() {
        let jobs = vec![
            job("Remote A", "Remote (USA)", &["React", "AWS"]),
            job("Office", "Austin, TX", &["React"]),
            job("Remote B", "remote (Europe)", &["Go", "AWS"]),
        ];
        let user = skills(&["React", "AWS"]);
        let ranked = match_jobs(Some(user.as_slice()), &jobs);

        let remote = JobFilter { remote_only: true, min_match: None }.apply(ranked.clone());
        let titles: Vec<&str> = remote.iter().map(|m| m.job.title.as_str()).collect();
        assert_eq!(titles, vec!["Remote A", "Remote B"]);

        let strong = JobFilter { remote_only: false, min_match: Some(100) }.apply(ranked);
        let titles: Vec<&str> = strong.iter().map(|m| m.job.title.as_str()).collect();
        assert_eq!(titles, vec!["Remote A", "Office"]);
    }
}
