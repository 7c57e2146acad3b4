use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Versions of the execution runtime the sandbox can boot.
///
/// This is a closed set: the embedding application ships exactly these
/// runtime builds, so an out-of-range choice cannot be expressed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeVersion {
    #[serde(rename = "8.3")]
    V8_3,
    #[serde(rename = "8.2")]
    V8_2,
    #[serde(rename = "8.1")]
    V8_1,
    #[serde(rename = "8.0")]
    V8_0,
    #[serde(rename = "7.4")]
    V7_4,
    #[serde(rename = "7.3")]
    V7_3,
    #[serde(rename = "7.2")]
    V7_2,
    #[serde(rename = "7.1")]
    V7_1,
    #[serde(rename = "7.0")]
    V7_0,
}

impl RuntimeVersion {
    /// Every shipped runtime build, newest first. Presentation order.
    pub const ALL: [RuntimeVersion; 9] = [
        RuntimeVersion::V8_3,
        RuntimeVersion::V8_2,
        RuntimeVersion::V8_1,
        RuntimeVersion::V8_0,
        RuntimeVersion::V7_4,
        RuntimeVersion::V7_3,
        RuntimeVersion::V7_2,
        RuntimeVersion::V7_1,
        RuntimeVersion::V7_0,
    ];

    pub fn latest() -> RuntimeVersion {
        RuntimeVersion::ALL[0]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeVersion::V8_3 => "8.3",
            RuntimeVersion::V8_2 => "8.2",
            RuntimeVersion::V8_1 => "8.1",
            RuntimeVersion::V8_0 => "8.0",
            RuntimeVersion::V7_4 => "7.4",
            RuntimeVersion::V7_3 => "7.3",
            RuntimeVersion::V7_2 => "7.2",
            RuntimeVersion::V7_1 => "7.1",
            RuntimeVersion::V7_0 => "7.0",
        }
    }
}

// Implement Display so version pickers can render the dotted form directly
impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuntimeVersion {
    type Err = UnknownRuntimeVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuntimeVersion::ALL
            .iter()
            .find(|version| version.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownRuntimeVersion(s.to_string()))
    }
}

/// A runtime version string outside the supported set, e.g. read back from
/// a configuration persisted by an incompatible build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported runtime version: {0}")]
pub struct UnknownRuntimeVersion(pub String);

/// Where the sandbox keeps its state between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Ephemeral: everything is gone on the next page load.
    None,
    /// Persisted in the browser's local storage.
    Browser,
    /// Synced to a directory on the user's device.
    Device,
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageMode::None => write!(f, "None"),
            StorageMode::Browser => write!(f, "Browser"),
            StorageMode::Device => write!(f, "Device"),
        }
    }
}

/// The value a submission hands to the embedding application.
///
/// Callers persist and restore these snapshots; the form itself only ever
/// holds one in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandboxConfiguration {
    /// Selected platform version, or "" while nothing is chosen yet.
    pub platform_version: String,
    pub runtime_version: RuntimeVersion,
    pub with_extensions: bool,
    pub with_networking: bool,
    pub storage: StorageMode,
    /// Destructive-reset intent; only meaningful under browser storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_site: Option<bool>,
}

/// Selectable platform versions, keyed by version identifier with a human
/// display label. Insertion order is presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformVersions {
    entries: Vec<(String, String)>,
}

impl PlatformVersions {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a version. Re-inserting a known identifier replaces its label
    /// without moving it.
    pub fn insert(&mut self, version: impl Into<String>, label: impl Into<String>) {
        let version = version.into();
        let label = label.into();
        match self.entries.iter_mut().find(|(v, _)| *v == version) {
            Some(entry) => entry.1 = label,
            None => self.entries.push((version, label)),
        }
    }

    pub fn label_for(&self, version: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(v, _)| v == version)
            .map(|(_, label)| label.as_str())
    }

    pub fn contains(&self, version: &str) -> bool {
        self.label_for(version).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(version, label)| (version.as_str(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PlatformVersions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut versions = PlatformVersions::new();
        for (version, label) in iter {
            versions.insert(version, label);
        }
        versions
    }
}

/// Progress pushed by the external mount subsystem while a selected
/// directory is being loaded into the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountProgress {
    pub files_processed: u64,
    pub files_total: u64,
}

impl MountProgress {
    /// Completed fraction in 0.0..=1.0. An unknown total reads as 0.0.
    pub fn fraction(&self) -> f32 {
        if self.files_total == 0 {
            0.0
        } else {
            (self.files_processed as f32 / self.files_total as f32).min(1.0)
        }
    }
}

/// Whether the host environment can offer device-backed storage, as
/// reported by the external directory-sync collaborator.
pub enum LocalDirectoryAvailability {
    /// The host cannot sync to a local directory at all.
    NotAvailable,
    /// Sync is supported in general, but not for this site's origin.
    OriginMismatch,
    /// Sync works here; the trigger starts the external directory picker.
    Available(Box<dyn FnMut()>),
}

impl LocalDirectoryAvailability {
    pub fn is_available(&self) -> bool {
        matches!(self, LocalDirectoryAvailability::Available(_))
    }

    /// User-facing explanation for a disabled device-storage option.
    pub fn unavailable_reason(&self) -> Option<&'static str> {
        match self {
            LocalDirectoryAvailability::NotAvailable => Some("Not supported in this browser."),
            LocalDirectoryAvailability::OriginMismatch => Some("Not supported on this site."),
            LocalDirectoryAvailability::Available(_) => None,
        }
    }
}

impl fmt::Debug for LocalDirectoryAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalDirectoryAvailability::NotAvailable => write!(f, "NotAvailable"),
            LocalDirectoryAvailability::OriginMismatch => write!(f, "OriginMismatch"),
            LocalDirectoryAvailability::Available(_) => write!(f, "Available(..)"),
        }
    }
}
