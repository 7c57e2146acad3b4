// Configuration form model for a sandboxed execution environment.
//
// Holds the in-progress configuration, applies field edits one at a time,
// keeps the interdependent choices consistent, and hands a finished
// snapshot to the embedding application's submission sink. Rendering is
// the embedder's job; this crate only exposes the state and the
// derivation rules the form is drawn from.

pub mod form;
pub mod models;

pub use form::{ConfigurationMessage, ConfigurationState, FormContext, handle_message};
pub use models::{
    LocalDirectoryAvailability, MountProgress, PlatformVersions, RuntimeVersion,
    SandboxConfiguration, StorageMode, UnknownRuntimeVersion,
};
