use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{ProjectSettings, ServiceHook};

/// Addressing for every API call: organization and project slugs.
/// Carried inside effects so a mid-flight slug rename cannot cross wires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiTarget {
    pub organization: String,
    pub project: String,
}

impl ApiTarget {
    pub fn new(organization: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            project: project.into(),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server returned {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("Unable to save change. Enable two-factor authentication on your account first.")]
    TwoFactorRequired,
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait SettingsApi: Send + Sync {
    async fn fetch_project(&self, target: &ApiTarget) -> Result<ProjectSettings, ApiError>;

    /// Partial update; `patch` holds only the changed field.
    async fn update_project(
        &self,
        target: &ApiTarget,
        patch: Value,
    ) -> Result<ProjectSettings, ApiError>;

    async fn remove_project(&self, target: &ApiTarget) -> Result<(), ApiError>;

    async fn transfer_project(&self, target: &ApiTarget, owner_email: &str)
    -> Result<(), ApiError>;

    async fn list_hooks(&self, target: &ApiTarget) -> Result<Vec<ServiceHook>, ApiError>;

    async fn update_hook(
        &self,
        target: &ApiTarget,
        id: &str,
        patch: Value,
    ) -> Result<ServiceHook, ApiError>;

    async fn delete_hook(&self, target: &ApiTarget, id: &str) -> Result<(), ApiError>;
}
