use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::nr::shims::clean::clean_generated;
use crate::nr::shims::error::{Result, ToolError};
use crate::nr::shims::generate::{Outcome, generate};
use crate::nr::shims::io::aliases::read_aliases;
use crate::nr::shims::model::Layout;

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub home: PathBuf,
    pub profile: String,
    pub force: bool,
}

impl Settings {
    /// Creates settings for `profile` rooted at an explicit home directory.
    pub fn new(home: impl Into<PathBuf>, profile: impl Into<String>, force: bool) -> Self {
        Self {
            home: home.into(),
            profile: profile.into(),
            force,
        }
    }

    /// Builds settings rooted at the current user's home directory.
    pub fn for_current_user(profile: impl Into<String>, force: bool) -> Result<Self> {
        let home = dirs::home_dir().ok_or(ToolError::HomeNotFound)?;
        Ok(Self::new(home, profile, force))
    }

    /// Paths below the configured home directory.
    pub fn layout(&self) -> Layout {
        Layout::new(&self.home)
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub removed: Vec<PathBuf>,
    pub outcomes: Vec<Outcome>,
}

impl SyncReport {
    /// Paths of the shims written during the run, in alias order.
    pub fn generated(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            Outcome::Generated(path) => Some(path.as_path()),
            Outcome::Skipped(_) => None,
        })
    }

    /// Commands left alone because they are already installed.
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            Outcome::Skipped(command) => Some(command.as_str()),
            Outcome::Generated(_) => None,
        })
    }
}

/// Regenerates every shim of a profile: load its aliases, drop all shims
/// carrying its marker, then write the new set.
///
/// Shims of aliases that disappeared from the file are removed too. The alias
/// file is parsed before anything on disk changes.
#[instrument(level = "info", skip_all, fields(profile = %settings.profile))]
pub fn sync_profile(settings: &Settings) -> Result<SyncReport> {
    let layout = settings.layout();
    println!("> nr generate {}", settings.profile);

    let aliases = read_aliases(&layout.alias_file(&settings.profile))?;
    info!(alias_count = aliases.len(), "loaded aliases");

    let removed = clean_generated(&layout.shim_dir(), &settings.profile)?;
    let outcomes = generate(&layout, &settings.profile, &aliases, settings.force)?;

    Ok(SyncReport { removed, outcomes })
}
