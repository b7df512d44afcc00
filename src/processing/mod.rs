//! Skill comparison: job matching, role gaps, role inference and resource lookup

pub mod skills;
pub mod job_matcher;
pub mod role_gap;
pub mod role_inference;
pub mod resources;
