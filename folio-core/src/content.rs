//! Portfolio content: profile, experience, skills and the project records
//!
//! Content lives in a TOML document. A default document is compiled into the
//! binary; `Portfolio::from_path` loads a replacement.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::ProjectRecord;
use crate::error::{FolioError, Result};

const BUNDLED: &str = include_str!("../content/portfolio.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub tracks: BTreeMap<String, Track>,
    #[serde(default)]
    pub navigation: Vec<NavLink>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline_alt: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub bio_short: String,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    /// Everything after the first word, or empty for a one-word name.
    pub fn last_name(&self) -> &str {
        let trimmed = self.name.trim();
        match trimmed.split_once(char::is_whitespace) {
            Some((_, rest)) => rest.trim_start(),
            None => "",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub university: String,
    pub degree: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Languages and frameworks shown in [`Skills::preview`].
const PREVIEW_PER_GROUP: usize = 2;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub game_and_simulation: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

impl Skills {
    /// Labelled groups in display order, empty groups skipped.
    pub fn groups(&self) -> Vec<(&'static str, &[String])> {
        [
            ("Languages", self.languages.as_slice()),
            ("Frameworks", self.frameworks.as_slice()),
            ("Game & Simulation", self.game_and_simulation.as_slice()),
            ("Tools", self.tools.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }

    /// Short skill list for the home page: two languages, two frameworks and every
    /// game/simulation entry. Tools are left out.
    pub fn preview(&self) -> Vec<&str> {
        self.languages
            .iter()
            .take(PREVIEW_PER_GROUP)
            .chain(self.frameworks.iter().take(PREVIEW_PER_GROUP))
            .chain(&self.game_and_simulation)
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl Portfolio {
    /// The document compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED, "bundled portfolio")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FolioError::path_not_found(path));
        }
        let raw = fs::read_to_string(path)?;
        let portfolio = Self::from_toml_str(&raw, &path.display().to_string())?;
        info!(
            path = %path.display(),
            projects = portfolio.projects.len(),
            "loaded portfolio content"
        );
        Ok(portfolio)
    }

    /// Parse and validate a document. `origin` names the source in errors.
    pub fn from_toml_str(raw: &str, origin: &str) -> Result<Self> {
        let portfolio: Portfolio =
            toml::from_str(raw).map_err(|e| FolioError::toml(origin, e))?;
        portfolio.validate()?;
        debug!(origin, projects = portfolio.projects.len(), "parsed portfolio");
        Ok(portfolio)
    }

    /// Slugs must be non-empty and unique; the profile needs a name.
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(FolioError::invalid_content("profile.name is empty"));
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            let slug = project.slug.trim();
            if slug.is_empty() {
                return Err(FolioError::invalid_content(format!(
                    "project '{}' has an empty slug",
                    project.title
                )));
            }
            if !seen.insert(slug) {
                return Err(FolioError::duplicate_slug(slug));
            }
        }
        Ok(())
    }

    pub fn project(&self, slug: &str) -> Option<&ProjectRecord> {
        crate::catalog::find_by_slug(&self.projects, slug)
    }
}
