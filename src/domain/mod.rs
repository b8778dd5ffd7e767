pub mod project;
pub mod service_hook;

pub use project::ProjectSettings;
pub use service_hook::ServiceHook;
