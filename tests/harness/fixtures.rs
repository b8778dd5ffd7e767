use serde_json::json;

use hookdash::app::load_state::LoadState;
use hookdash::app::state::AppState;
use hookdash::domain::{ProjectSettings, ServiceHook};

pub fn sample_project() -> ProjectSettings {
    serde_json::from_value(json!({
        "name": "Backend",
        "slug": "backend",
        "team": "platform",
        "defaultEnvironment": "production",
        "subjectPrefix": "[backend]",
        "resolveAge": 720,
        "dataScrubber": true,
        "scrubIpAddresses": false,
        "allowedDomains": ["example.com"],
        "securityToken": "abc123",
        "verifySsl": true,
        "isInternal": false
    }))
    .unwrap()
}

pub fn internal_project() -> ProjectSettings {
    serde_json::from_value(json!({
        "name": "Internal",
        "slug": "internal",
        "isInternal": true
    }))
    .unwrap()
}

pub fn sample_hooks() -> Vec<ServiceHook> {
    vec![
        ServiceHook {
            id: "a1b2".to_string(),
            url: "https://example.com/alerts".to_string(),
            events: vec!["event.alert".to_string(), "event.created".to_string()],
            active: true,
        },
        ServiceHook {
            id: "c3d4".to_string(),
            url: "https://example.com/audit".to_string(),
            events: vec!["event.created".to_string()],
            active: false,
        },
    ]
}

pub fn load_project(state: &mut AppState, project: ProjectSettings) {
    state.settings.project = Some(project);
    state.settings.load = LoadState::Loaded;
    state.settings.select(0);
}

pub fn load_hooks(state: &mut AppState, hooks: Vec<ServiceHook>) {
    state.hooks.hooks = hooks;
    state.hooks.load = LoadState::Loaded;
    state.hooks.select(0);
}
