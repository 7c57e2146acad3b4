use crate::models::{MountProgress, RuntimeVersion, StorageMode};

/// One variant per discrete user-input event, plus the display updates the
/// external mount collaborator pushes while a directory is loading.
#[derive(Debug, Clone)]
pub enum ConfigurationMessage {
    SetStorage(StorageMode),
    SetPlatformVersion(String),
    SetRuntimeVersion(RuntimeVersion),
    SetWithExtensions(bool),
    SetWithNetworking(bool),
    SetResetSite(bool),
    SelectLocalDirectory,           // forward to the external directory picker
    MountStateChanged(bool),        // mount collaborator: started / finished
    MountProgressed(MountProgress), // mount collaborator: files copied so far
    Submit,
}
