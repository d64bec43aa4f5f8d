use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::nr::shims::error::{Result, ToolError};
use crate::nr::shims::io::shim;
use crate::nr::shims::model::{Alias, Layout};

/// What happened to a single alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A shim was written at the given path.
    Generated(PathBuf),
    /// The command is already installed in the nix profile.
    Skipped(String),
}

/// Writes one shim per alias, in order, into the layout's shim directory.
///
/// Without `force`, aliases whose command already exists in
/// `~/.nix-profile/bin` are skipped. The first failure stops the loop; shims
/// written for earlier aliases are left in place.
#[instrument(
    level = "info",
    skip_all,
    fields(home = %layout.home().display(), profile = %profile, force = force)
)]
pub fn generate(
    layout: &Layout,
    profile: &str,
    aliases: &[Alias],
    force: bool,
) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::with_capacity(aliases.len());

    for alias in aliases {
        if !force && is_installed(layout, &alias.command)? {
            println!("> {} already exists", alias.command);
            outcomes.push(Outcome::Skipped(alias.command.clone()));
            continue;
        }

        let path = layout.shim_path(&alias.command);
        shim::write_shim(&path, profile, alias)?;
        debug!(
            command = %alias.command,
            package = alias.effective_package(),
            channel = alias.effective_channel(),
            path = %path.display(),
            "shim written"
        );
        outcomes.push(Outcome::Generated(path));
    }

    info!(
        generated = outcomes.iter().filter(|o| matches!(o, Outcome::Generated(_))).count(),
        skipped = outcomes.iter().filter(|o| matches!(o, Outcome::Skipped(_))).count(),
        "generation finished"
    );
    Ok(outcomes)
}

fn is_installed(layout: &Layout, command: &str) -> Result<bool> {
    let path = layout.installed_binary(command);
    match fs::metadata(&path) {
        Ok(_) => Ok(true),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(ToolError::Stat { path, source }),
    }
}
