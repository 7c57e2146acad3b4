use std::fmt;

use crate::models::{LocalDirectoryAvailability, PlatformVersions, SandboxConfiguration};

/// Collaborators the embedding application supplies when it opens the
/// form, fixed for the lifetime of one presentation.
pub struct FormContext {
    /// Selectable platform versions, in presentation order.
    pub supported_platform_versions: PlatformVersions,
    /// The platform version already live against existing storage, if any.
    pub currently_running_platform_version: Option<String>,
    /// Submission sink; receives one snapshot per submit.
    pub on_submit: Box<dyn FnMut(SandboxConfiguration)>,
    /// Device-backed storage availability and its picker trigger.
    pub local_directory: LocalDirectoryAvailability,
}

impl FormContext {
    pub fn new(
        supported_platform_versions: PlatformVersions,
        currently_running_platform_version: Option<String>,
        on_submit: Box<dyn FnMut(SandboxConfiguration)>,
        local_directory: LocalDirectoryAvailability,
    ) -> Self {
        Self {
            supported_platform_versions,
            currently_running_platform_version,
            on_submit,
            local_directory,
        }
    }

    pub fn running_version(&self) -> Option<&str> {
        self.currently_running_platform_version.as_deref()
    }
}

impl fmt::Debug for FormContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormContext")
            .field(
                "supported_platform_versions",
                &self.supported_platform_versions,
            )
            .field(
                "currently_running_platform_version",
                &self.currently_running_platform_version,
            )
            .field("local_directory", &self.local_directory)
            .finish_non_exhaustive()
    }
}
