use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::nr::shims::error::{Result, ToolError};
use crate::nr::shims::model::{Alias, marker};

/// Mode given to every shim: read, write and execute for everyone.
pub const SHIM_MODE: u32 = 0o777;

/// Renders the shim script for `alias`.
pub fn render(profile: &str, alias: &Alias) -> String {
    format!(
        "#!/usr/bin/env bash\n{}\n{} $@\n",
        marker(profile),
        alias.invocation().join(" ")
    )
}

/// Writes the shim for `alias` to `path`, replacing any existing file, and
/// makes it executable.
pub fn write_shim(path: &Path, profile: &str, alias: &Alias) -> Result<()> {
    let file = File::create(path).map_err(|source| ToolError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(render(profile, alias).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| ToolError::TemplateRender {
            path: path.to_path_buf(),
            source,
        })?;
    drop(writer);

    set_executable(path)
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(SHIM_MODE)).map_err(|source| {
        ToolError::Permission {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn set_executable(path: &Path) -> Result<()> {
    let mut permissions = fs::metadata(path)
        .map_err(|source| ToolError::Permission {
            path: path.to_path_buf(),
            source,
        })?
        .permissions();
    permissions.set_readonly(false);
    fs::set_permissions(path, permissions).map_err(|source| ToolError::Permission {
        path: path.to_path_buf(),
        source,
    })
}
