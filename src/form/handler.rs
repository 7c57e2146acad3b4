use tracing::debug;

use super::{ConfigurationMessage, ConfigurationState, FormContext};
use crate::models::{LocalDirectoryAvailability, StorageMode};

/// Applies one user-input event to the form state.
///
/// Every arm is a plain synchronous field update. "Failure" only ever
/// means an event is dropped because its control is gated off, never an
/// error returned to the caller.
pub fn handle_message(
    state: &mut ConfigurationState,
    context: &mut FormContext,
    message: ConfigurationMessage,
) {
    match message {
        ConfigurationMessage::SetStorage(mode) => {
            // Device storage is only selectable while the collaborator
            // reports an available directory; hold the current mode
            // otherwise.
            if mode == StorageMode::Device && !context.local_directory.is_available() {
                debug!("Dropped device storage selection: directory sync unavailable");
                return;
            }
            state.storage = mode;
            debug!("Set storage mode: {:?}", mode);
        }

        ConfigurationMessage::SetPlatformVersion(version) => {
            state.platform_version = version;
            debug!("Set platform version: {:?}", state.platform_version);
        }

        ConfigurationMessage::SetRuntimeVersion(version) => {
            state.runtime_version = version;
            debug!("Set runtime version: {}", version);
        }

        ConfigurationMessage::SetWithExtensions(enabled) => {
            state.with_extensions = enabled;
            debug!("Set extension bundle: {}", enabled);
        }

        ConfigurationMessage::SetWithNetworking(enabled) => {
            state.with_networking = enabled;
            debug!("Set network access: {}", enabled);
        }

        ConfigurationMessage::SetResetSite(enabled) => {
            state.reset_site = Some(enabled);
            debug!("Set destructive reset: {}", enabled);
        }

        ConfigurationMessage::SelectLocalDirectory => match &mut context.local_directory {
            LocalDirectoryAvailability::Available(trigger) => {
                debug!("Starting local directory selection");
                trigger();
            }
            unavailable => {
                debug!("Dropped directory selection request: {:?}", unavailable);
            }
        },

        ConfigurationMessage::MountStateChanged(mounting) => {
            state.is_mounting = mounting;
            debug!("Mount in progress: {}", mounting);
        }

        ConfigurationMessage::MountProgressed(progress) => {
            state.mount_progress = Some(progress);
            debug!(
                "Mount progress: {}/{} files",
                progress.files_processed, progress.files_total
            );
        }

        ConfigurationMessage::Submit => {
            let config = state.snapshot(context.running_version());
            debug!("Submitting configuration: {:?}", config);
            (context.on_submit)(config);
        }
    }
}
