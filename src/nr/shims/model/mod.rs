use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

/// Channel used when an alias does not name one. Packages from it are resolved
/// by `nix run` without an explicit channel file.
pub const DEFAULT_CHANNEL: &str = "nixpkgs";

/// Channel definitions consulted for every non-default channel. The tilde is
/// expanded by the shell running the shim, not by us.
pub const CHANNELS_FILE: &str = "~/.config/nixpkgs/channels.nix";

/// Leading tokens of every generated invocation.
pub const BASE_INVOCATION: [&str; 2] = ["nix", "run"];

const MARKER_PREFIX: &str = "# Generated by nr ";

/// One entry of a profile's alias file.
///
/// Only `cmd` is meaningful on its own: `pkg` falls back to the command name
/// and `chan` to [`DEFAULT_CHANNEL`] when they are empty or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Alias {
    #[serde(rename = "cmd", default, deserialize_with = "null_as_empty")]
    pub command: String,
    #[serde(rename = "pkg", default, deserialize_with = "null_as_empty")]
    pub package: String,
    #[serde(rename = "chan", default, deserialize_with = "null_as_empty")]
    pub channel: String,
}

impl Alias {
    /// Creates an alias that relies on the package and channel defaults.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    /// Sets the package run by the shim.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Sets the channel the package is pulled from.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Package to run, defaulting to the command name.
    pub fn effective_package(&self) -> &str {
        if self.package.is_empty() {
            &self.command
        } else {
            &self.package
        }
    }

    /// Channel to pull the package from, defaulting to [`DEFAULT_CHANNEL`].
    pub fn effective_channel(&self) -> &str {
        if self.channel.is_empty() {
            DEFAULT_CHANNEL
        } else {
            &self.channel
        }
    }

    /// Builds the `nix run` argument list the shim executes.
    ///
    /// Tokens are not shell-quoted; command and package names are emitted
    /// verbatim.
    pub fn invocation(&self) -> Vec<String> {
        let channel = self.effective_channel();
        let mut tokens: Vec<String> = BASE_INVOCATION.iter().map(|t| t.to_string()).collect();
        if channel != DEFAULT_CHANNEL {
            tokens.push("-f".to_string());
            tokens.push(CHANNELS_FILE.to_string());
        }
        tokens.push(format!("{channel}.{}", self.effective_package()));
        tokens.push("-c".to_string());
        tokens.push(self.command.clone());
        tokens
    }
}

/// Marker line stamped into every shim generated for `profile`.
///
/// Detection is a prefix match, so a profile whose name extends another
/// (`work` and `workstation`) is also matched by the shorter one.
pub fn marker(profile: &str) -> String {
    format!("{MARKER_PREFIX}{profile}")
}

/// Well-known locations below a home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    home: PathBuf,
}

impl Layout {
    /// Creates a layout rooted at `home`.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Home directory every other path is resolved against.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// `<home>/.config/nr/<profile>`
    pub fn alias_file(&self, profile: &str) -> PathBuf {
        self.home.join(".config").join("nr").join(profile)
    }

    /// `<home>/bin`, where shims are written. It is never created by us.
    pub fn shim_dir(&self) -> PathBuf {
        self.home.join("bin")
    }

    /// `<home>/bin/<command>`
    pub fn shim_path(&self, command: &str) -> PathBuf {
        self.shim_dir().join(command)
    }

    /// `<home>/.nix-profile/bin/<command>`
    pub fn installed_binary(&self, command: &str) -> PathBuf {
        self.home.join(".nix-profile").join("bin").join(command)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
