//! Catalog entry types
//!
//! An [`Entry`] describes one language or tool: what it is, how to install it
//! on each supported operating system, and how to verify the install worked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LangdevError;

/// Operating systems the catalog carries install commands for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Windows,
    #[default]
    Mac,
    Linux,
}

impl Os {
    /// All supported systems, in display order.
    pub const ALL: [Os; 3] = [Os::Windows, Os::Mac, Os::Linux];

    /// Stable identifier used in CLI flags and serialized data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Windows => "windows",
            Os::Mac => "mac",
            Os::Linux => "linux",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Os::Windows => "Windows",
            Os::Mac => "macOS",
            Os::Linux => "Linux",
        }
    }

    /// The shell the install command is meant to be pasted into.
    pub fn shell_label(&self) -> &'static str {
        match self {
            Os::Windows => "PowerShell",
            Os::Mac | Os::Linux => "Terminal",
        }
    }

    /// Next OS in display order, wrapping around.
    pub fn next(self) -> Os {
        match self {
            Os::Windows => Os::Mac,
            Os::Mac => Os::Linux,
            Os::Linux => Os::Windows,
        }
    }

    /// Previous OS in display order, wrapping around.
    pub fn prev(self) -> Os {
        match self {
            Os::Windows => Os::Linux,
            Os::Mac => Os::Windows,
            Os::Linux => Os::Mac,
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Os {
    type Err = LangdevError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(Os::Windows),
            "mac" | "macos" => Ok(Os::Mac),
            "linux" => Ok(Os::Linux),
            other => Err(LangdevError::UnknownOs(other.to_string())),
        }
    }
}

/// Per-OS install command.
///
/// One field per supported system, so every entry carries exactly the three
/// required commands by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallCommand {
    pub windows: String,
    pub mac: String,
    pub linux: String,
}

impl InstallCommand {
    pub fn for_os(&self, os: Os) -> &str {
        match os {
            Os::Windows => &self.windows,
            Os::Mac => &self.mac,
            Os::Linux => &self.linux,
        }
    }
}

/// One catalog record: a language or developer tool with install instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique, stable identifier used for lookup.
    pub id: String,

    /// Display name.
    pub name: String,

    /// One-line description.
    pub description: String,

    /// Free-form grouping label; multiple entries may share one.
    pub category: String,

    /// Display glyph shown next to the name.
    pub icon: String,

    /// Shell command per operating system.
    pub install_command: InstallCommand,

    /// OS-independent command that confirms the install succeeded.
    pub verify_command: String,

    /// Extra notes shown after the install command. Empty means no section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_steps: Vec<String>,

    /// Link to the official documentation.
    pub official_docs: String,

    /// What must already be present before installing. Empty means no section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
}
