//! Command implementations for the folio CLI

pub mod about;
pub mod clock;
pub mod contact;
pub mod projects;

use std::path::PathBuf;

use anyhow::{Context, Result};
use folio_core::config::FolioConfig;
use folio_core::content::Portfolio;
use folio_core::locale::Locale;
use tracing::debug;

// Re-export main dispatcher functions for flat access from main.rs
pub use about::run_about;
pub use clock::run_clock;
pub use contact::run_contact;
pub use projects::{run_categories, run_featured, run_project, run_projects};

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalOpts {
    pub config: Option<PathBuf>,
    pub content: Option<PathBuf>,
    pub locale: Option<Locale>,
}

/// Resolved config, content and locale for one invocation
#[derive(Debug)]
pub struct Session {
    pub config: FolioConfig,
    pub portfolio: Portfolio,
    pub locale: Locale,
}

impl Session {
    /// Flags win over config, config wins over the bundled defaults.
    pub fn load(opts: &GlobalOpts) -> Result<Self> {
        let config = FolioConfig::load(opts.config.as_deref()).context("Failed to load config")?;

        let content_path = opts.content.clone().or_else(|| config.content.clone());
        let portfolio = match &content_path {
            Some(path) => Portfolio::from_path(path)
                .with_context(|| format!("Failed to load content from {}", path.display()))?,
            None => Portfolio::bundled().context("Bundled content is invalid")?,
        };

        let locale = opts.locale.unwrap_or(config.locale);
        debug!(%locale, content = ?content_path, "session ready");

        Ok(Self {
            config,
            portfolio,
            locale,
        })
    }
}
