use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::nr::shims::error::{Result, ToolError};
use crate::nr::shims::model::Alias;

/// Reads a profile's alias file: a JSON array of `{"cmd", "pkg", "chan"}`
/// records, returned in file order.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_aliases(path: &Path) -> Result<Vec<Alias>> {
    let source = fs::read(path).map_err(|source| ToolError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let aliases: Vec<Alias> =
        serde_json::from_slice(&source).map_err(|source| ToolError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(index) = aliases.iter().position(|alias| alias.command.is_empty()) {
        return Err(ToolError::InvalidAlias {
            path: path.to_path_buf(),
            index,
        });
    }

    debug!(alias_count = aliases.len(), "alias file parsed");
    Ok(aliases)
}
