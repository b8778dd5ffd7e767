pub mod config_store;
pub mod http_api;

pub use config_store::TomlConfigStore;
pub use http_api::HttpSettingsApi;
