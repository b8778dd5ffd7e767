use serde::{Deserialize, Serialize};

/// Project resource as served by the settings API.
///
/// Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub default_environment: Option<String>,
    #[serde(default)]
    pub subject_prefix: String,
    /// Hours without a new event before an issue auto-resolves. 0 disables.
    #[serde(default)]
    pub resolve_age: u32,
    #[serde(default)]
    pub data_scrubber: bool,
    #[serde(default)]
    pub scrub_ip_addresses: bool,
    #[serde(default)]
    pub allowed_domains: Vec<String>,
    #[serde(default)]
    pub security_token: String,
    #[serde(default)]
    pub verify_ssl: bool,
    /// Internal projects are used by the server itself and can be neither
    /// removed nor transferred.
    #[serde(default)]
    pub is_internal: bool,
}

impl ProjectSettings {
    pub fn allowed_domains_display(&self) -> String {
        self.allowed_domains.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "name": "Backend",
            "slug": "backend",
            "team": "platform",
            "defaultEnvironment": "production",
            "subjectPrefix": "[backend]",
            "resolveAge": 720,
            "dataScrubber": true,
            "scrubIpAddresses": false,
            "allowedDomains": ["example.com", "*.example.org"],
            "securityToken": "abc123",
            "verifySsl": true,
            "isInternal": false
        }"#
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let project: ProjectSettings = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(project.slug, "backend");
        assert_eq!(project.resolve_age, 720);
        assert!(project.data_scrubber);
        assert!(!project.is_internal);
        assert_eq!(project.allowed_domains.len(), 2);
    }

    #[test]
    fn missing_optional_fields_default() {
        let project: ProjectSettings =
            serde_json::from_str(r#"{"name": "Backend", "slug": "backend"}"#).unwrap();

        assert_eq!(project.team, None);
        assert_eq!(project.resolve_age, 0);
        assert!(!project.is_internal);
        assert!(project.allowed_domains.is_empty());
    }

    #[test]
    fn allowed_domains_display_joins_with_comma() {
        let project: ProjectSettings = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(
            project.allowed_domains_display(),
            "example.com, *.example.org"
        );
    }
}
