use crate::models::{MountProgress, RuntimeVersion, SandboxConfiguration, StorageMode};

/// In-progress form state. Each configuration field is held on its own so
/// one edit never reconstructs the rest; values keep living while their
/// controls are hidden and resurface when the storage mode switches back.
#[derive(Debug, Clone)]
pub struct ConfigurationState {
    pub platform_version: String,
    pub runtime_version: RuntimeVersion,
    pub with_extensions: bool,
    pub with_networking: bool,
    pub storage: StorageMode,
    pub reset_site: Option<bool>,
    /// Pushed by the mount collaborator; display only.
    pub is_mounting: bool,
    pub mount_progress: Option<MountProgress>,
}

impl ConfigurationState {
    pub fn new() -> Self {
        Self {
            platform_version: String::new(),
            runtime_version: RuntimeVersion::latest(),
            with_extensions: false,
            with_networking: false,
            storage: StorageMode::None,
            reset_site: None,
            is_mounting: false,
            mount_progress: None,
        }
    }

    /// Seed the form from the caller-owned initial configuration.
    pub fn from_initial(initial: &SandboxConfiguration) -> Self {
        Self {
            platform_version: initial.platform_version.clone(),
            runtime_version: initial.runtime_version,
            with_extensions: initial.with_extensions,
            with_networking: initial.with_networking,
            storage: initial.storage,
            reset_site: initial.reset_site,
            is_mounting: false,
            mount_progress: None,
        }
    }

    /// A known running platform version that differs from the selected one
    /// makes the destructive reset mandatory: reusing browser storage
    /// across platform versions would leave stale, incompatible state.
    /// Without a running version (fresh session) nothing is forced.
    pub fn reset_forced(&self, currently_running: Option<&str>) -> bool {
        match currently_running {
            Some(running) => self.platform_version != running,
            None => false,
        }
    }

    /// The reset value the form currently stands for: the forced override
    /// while a version mismatch persists, the user's own choice otherwise.
    pub fn effective_reset_site(&self, currently_running: Option<&str>) -> Option<bool> {
        if self.reset_forced(currently_running) {
            Some(true)
        } else {
            self.reset_site
        }
    }

    /// The destructive-reset control only applies to browser storage. The
    /// stored choice survives unchanged while the control is hidden.
    pub fn shows_reset_option(&self) -> bool {
        self.storage == StorageMode::Browser
    }

    /// Runtime version, feature flags and the submit action only apply
    /// while the sandbox owns its configuration. With device storage the
    /// synced directory determines them, so those controls are suppressed.
    pub fn shows_runtime_controls(&self) -> bool {
        self.storage != StorageMode::Device
    }

    pub fn shows_directory_picker(&self) -> bool {
        self.storage == StorageMode::Device
    }

    /// Immutable snapshot of the six configuration fields as they stand.
    pub fn snapshot(&self, currently_running: Option<&str>) -> SandboxConfiguration {
        SandboxConfiguration {
            platform_version: self.platform_version.clone(),
            runtime_version: self.runtime_version,
            with_extensions: self.with_extensions,
            with_networking: self.with_networking,
            storage: self.storage,
            reset_site: self.effective_reset_site(currently_running),
        }
    }
}

impl Default for ConfigurationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browser_state() -> ConfigurationState {
        let mut state = ConfigurationState::new();
        state.platform_version = "6.4".to_string();
        state.storage = StorageMode::Browser;
        state
    }

    #[test]
    fn test_reset_never_forced_without_running_version() {
        let mut state = browser_state();
        state.platform_version = "6.5".to_string();
        assert!(!state.reset_forced(None));
        assert_eq!(state.effective_reset_site(None), None);
    }

    #[test]
    fn test_version_mismatch_forces_reset() {
        let mut state = browser_state();
        state.platform_version = "6.5".to_string();
        assert!(state.reset_forced(Some("6.4")));
        assert_eq!(state.effective_reset_site(Some("6.4")), Some(true));
    }

    #[test]
    fn test_matching_version_restores_user_choice() {
        let mut state = browser_state();
        state.reset_site = Some(false);

        state.platform_version = "6.5".to_string();
        assert_eq!(state.effective_reset_site(Some("6.4")), Some(true));

        state.platform_version = "6.4".to_string();
        assert!(!state.reset_forced(Some("6.4")));
        assert_eq!(state.effective_reset_site(Some("6.4")), Some(false));
    }

    #[test]
    fn test_empty_selection_counts_as_mismatch() {
        let mut state = browser_state();
        state.platform_version = String::new();
        assert!(state.reset_forced(Some("6.4")));
    }

    #[test]
    fn test_control_visibility_follows_storage_mode() {
        let mut state = ConfigurationState::new();
        assert!(!state.shows_reset_option());
        assert!(state.shows_runtime_controls());
        assert!(!state.shows_directory_picker());

        state.storage = StorageMode::Browser;
        assert!(state.shows_reset_option());
        assert!(state.shows_runtime_controls());
        assert!(!state.shows_directory_picker());

        state.storage = StorageMode::Device;
        assert!(!state.shows_reset_option());
        assert!(!state.shows_runtime_controls());
        assert!(state.shows_directory_picker());
    }

    #[test]
    fn test_snapshot_copies_fields_verbatim() {
        let initial = SandboxConfiguration {
            platform_version: "6.5".to_string(),
            runtime_version: RuntimeVersion::V8_2,
            with_extensions: true,
            with_networking: false,
            storage: StorageMode::Browser,
            reset_site: Some(true),
        };

        let state = ConfigurationState::from_initial(&initial);
        assert_eq!(state.snapshot(None), initial);
    }

    #[test]
    fn test_snapshot_carries_forced_reset() {
        let mut state = browser_state();
        state.reset_site = Some(false);
        state.platform_version = "6.5".to_string();

        let snapshot = state.snapshot(Some("6.4"));
        assert_eq!(snapshot.reset_site, Some(true));
        // The stored choice itself is never overwritten by the override.
        assert_eq!(state.reset_site, Some(false));
    }
}
