use serde::{Deserialize, Serialize};

/// A service hook delivers project events to an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHook {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default, rename = "isActive")]
    pub active: bool,
}

impl ServiceHook {
    pub fn events_display(&self) -> String {
        self.events.join(", ")
    }

    pub fn status_label(&self) -> &'static str {
        if self.active { "active" } else { "disabled" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_hook_payload() {
        let hook: ServiceHook = serde_json::from_str(
            r#"{"id": "a1b2", "url": "https://example.com/hook", "events": ["event.created"], "isActive": true}"#,
        )
        .unwrap();

        assert_eq!(hook.id, "a1b2");
        assert_eq!(hook.events_display(), "event.created");
        assert_eq!(hook.status_label(), "active");
    }

    #[test]
    fn inactive_hook_shows_disabled() {
        let hook: ServiceHook =
            serde_json::from_str(r#"{"id": "a1b2", "url": "https://example.com/hook"}"#).unwrap();

        assert_eq!(hook.status_label(), "disabled");
        assert!(hook.events.is_empty());
    }
}
