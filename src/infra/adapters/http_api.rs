//! REST adapter for the dashboard API.

use async_trait::async_trait;
use serde_json::Value;

use crate::app::ports::{ApiError, ApiTarget, SettingsApi};
use crate::domain::{ProjectSettings, ServiceHook};

pub struct HttpSettingsApi {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpSettingsApi {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn project_url(&self, target: &ApiTarget) -> String {
        format!(
            "{}/api/0/projects/{}/{}/",
            self.base_url,
            urlencoding::encode(&target.organization),
            urlencoding::encode(&target.project),
        )
    }

    fn hooks_url(&self, target: &ApiTarget) -> String {
        format!("{}hooks/", self.project_url(target))
    }

    fn hook_url(&self, target: &ApiTarget, id: &str) -> String {
        format!("{}{}/", self.hooks_url(target), urlencoding::encode(id))
    }

    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(parse_error_body(status.as_u16(), &body))
    }
}

/// Maps a non-2xx response onto an `ApiError`. A body carrying
/// `require2FA` gets its dedicated variant so the UI can explain the
/// actual fix.
fn parse_error_body(status: u16, body: &str) -> ApiError {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if value.get("require2FA").and_then(Value::as_bool) == Some(true) {
            return ApiError::TwoFactorRequired;
        }
        if let Some(detail) = value.get("detail").and_then(Value::as_str) {
            return ApiError::Status {
                status,
                detail: detail.to_string(),
            };
        }
    }
    let detail = if body.trim().is_empty() {
        "no response body".to_string()
    } else {
        body.trim().to_string()
    };
    ApiError::Status { status, detail }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[async_trait]
impl SettingsApi for HttpSettingsApi {
    async fn fetch_project(&self, target: &ApiTarget) -> Result<ProjectSettings, ApiError> {
        let response = self
            .client
            .get(self.project_url(target))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport)?;
        self.check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_project(
        &self,
        target: &ApiTarget,
        patch: Value,
    ) -> Result<ProjectSettings, ApiError> {
        let response = self
            .client
            .put(self.project_url(target))
            .bearer_auth(&self.token)
            .json(&patch)
            .send()
            .await
            .map_err(transport)?;
        self.check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn remove_project(&self, target: &ApiTarget) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.project_url(target))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport)?;
        self.check(response).await?;
        Ok(())
    }

    async fn transfer_project(
        &self,
        target: &ApiTarget,
        owner_email: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}transfer/", self.project_url(target)))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "email": owner_email }))
            .send()
            .await
            .map_err(transport)?;
        self.check(response).await?;
        Ok(())
    }

    async fn list_hooks(&self, target: &ApiTarget) -> Result<Vec<ServiceHook>, ApiError> {
        let response = self
            .client
            .get(self.hooks_url(target))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport)?;
        self.check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_hook(
        &self,
        target: &ApiTarget,
        id: &str,
        patch: Value,
    ) -> Result<ServiceHook, ApiError> {
        let response = self
            .client
            .put(self.hook_url(target, id))
            .bearer_auth(&self.token)
            .json(&patch)
            .send()
            .await
            .map_err(transport)?;
        self.check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn delete_hook(&self, target: &ApiTarget, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.hook_url(target, id))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(transport)?;
        self.check(response).await?;
        Ok(())
    }
}
