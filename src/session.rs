//! Persisted analysis session shared between commands.
//!
//! The state directory holds the last analysis result and the last selected
//! role. Both are overwritten on every write.

use crate::catalog::roles::{RoleConfig, RoleKey};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::service::analysis::AnalysisResult;
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const ANALYSIS_FILE: &str = "analysis_result.json";
pub const SELECTED_ROLE_FILE: &str = "selected_role";

/// The stored analysis, if there is a usable one
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisSession {
    Present(AnalysisResult),
    Absent,
}

impl AnalysisSession {
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisSession::Present(result) => Some(result),
            AnalysisSession::Absent => None,
        }
    }

    pub fn skills(&self) -> Option<&[String]> {
        self.analysis().map(|a| a.skills.as_slice())
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AnalysisSession::Present(_))
    }
}

/// Everything a role roadmap needs. Only constructed when both parts exist.
#[derive(Debug, Clone, Copy)]
pub struct RoadmapPrerequisites<'a> {
    pub analysis: &'a AnalysisResult,
    pub role: &'a RoleConfig,
}

impl<'a> RoadmapPrerequisites<'a> {
    pub fn resolve(
        session: &'a AnalysisSession,
        selected: Option<RoleKey>,
        catalog: &'a Catalog,
    ) -> Option<Self> {
        let analysis = session.analysis()?;
        let role = catalog.role(selected?)?;
        Some(Self { analysis, role })
    }
}

pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn analysis_path(&self) -> PathBuf {
        self.dir.join(ANALYSIS_FILE)
    }

    fn role_path(&self) -> PathBuf {
        self.dir.join(SELECTED_ROLE_FILE)
    }

    pub fn save_analysis(&self, analysis: &AnalysisResult) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(analysis)?;
        fs::write(self.analysis_path(), content)?;
        debug!("Saved analysis to {}", self.analysis_path().display());
        Ok(())
    }

    /// Read the stored analysis. Missing, unreadable or malformed state is `Absent`.
    pub fn load_analysis(&self) -> AnalysisSession {
        let path = self.analysis_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return AnalysisSession::Absent,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return AnalysisSession::Absent;
            }
        };

        // a stored `null` counts as no analysis
        match serde_json::from_str::<Option<AnalysisResult>>(&content) {
            Ok(Some(result)) => AnalysisSession::Present(result),
            Ok(None) => AnalysisSession::Absent,
            Err(e) => {
                warn!("Ignoring malformed analysis state in {}: {}", path.display(), e);
                AnalysisSession::Absent
            }
        }
    }

    pub fn save_selected_role(&self, role: RoleKey) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.role_path(), role.as_str())?;
        debug!("Saved selected role {}", role);
        Ok(())
    }

    /// Read the selected role. Missing or unrecognized values are `None`.
    pub fn load_selected_role(&self) -> Option<RoleKey> {
        let content = fs::read_to_string(self.role_path()).ok()?;
        match content.parse::<RoleKey>() {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("Ignoring stored role: {}", e);
                None
            }
        }
    }

    /// Remove both stored entries
    pub fn clear(&self) -> Result<()> {
        for path in [self.analysis_path(), self.role_path()] {
            match fs::remove_file(&path) {
                Ok(()) => debug!("Removed {}", path.display()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
