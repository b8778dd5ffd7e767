pub mod config_store;
pub mod settings_api;

pub use config_store::{ConfigStore, ConfigStoreError, DashboardProfile};
pub use settings_api::{ApiError, ApiTarget, SettingsApi};

#[cfg(test)]
pub use settings_api::MockSettingsApi;
