use ratatui::widgets::ListState;
use serde_json::{Value, json};

use crate::app::load_state::LoadState;
use crate::domain::ProjectSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Name,
    Slug,
    Team,
    DefaultEnvironment,
    SubjectPrefix,
    ResolveAge,
    DataScrubber,
    ScrubIpAddresses,
    AllowedDomains,
    SecurityToken,
    VerifySsl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Toggle,
}

pub struct FieldDef {
    pub key: FieldKey,
    pub label: &'static str,
    pub help: &'static str,
    pub kind: FieldKind,
    /// camelCase name in the PUT body.
    pub api_name: &'static str,
}

/// Field catalog for the general settings form, in display order.
pub const SETTINGS_FIELDS: &[FieldDef] = &[
    FieldDef {
        key: FieldKey::Name,
        label: "Name",
        help: "Human readable project name",
        kind: FieldKind::Text,
        api_name: "name",
    },
    FieldDef {
        key: FieldKey::Slug,
        label: "Slug",
        help: "Short identifier used in URLs; changing it moves the project",
        kind: FieldKind::Text,
        api_name: "slug",
    },
    FieldDef {
        key: FieldKey::Team,
        label: "Team",
        help: "Owning team slug",
        kind: FieldKind::Text,
        api_name: "team",
    },
    FieldDef {
        key: FieldKey::DefaultEnvironment,
        label: "Default Environment",
        help: "Environment shown by default in the dashboard",
        kind: FieldKind::Text,
        api_name: "defaultEnvironment",
    },
    FieldDef {
        key: FieldKey::SubjectPrefix,
        label: "Subject Prefix",
        help: "Prefix added to notification email subjects",
        kind: FieldKind::Text,
        api_name: "subjectPrefix",
    },
    FieldDef {
        key: FieldKey::ResolveAge,
        label: "Auto Resolve",
        help: "Hours without a new event before an issue auto-resolves; 0 disables. \
               Enabling this immediately resolves anything not seen within the period",
        kind: FieldKind::Number,
        api_name: "resolveAge",
    },
    FieldDef {
        key: FieldKey::DataScrubber,
        label: "Data Scrubber",
        help: "Apply server-side data scrubbing to incoming events",
        kind: FieldKind::Toggle,
        api_name: "dataScrubber",
    },
    FieldDef {
        key: FieldKey::ScrubIpAddresses,
        label: "Scrub IP Addresses",
        help: "Prevent IP addresses from being stored",
        kind: FieldKind::Toggle,
        api_name: "scrubIpAddresses",
    },
    FieldDef {
        key: FieldKey::AllowedDomains,
        label: "Allowed Domains",
        help: "Origins accepted for client reports, comma separated",
        kind: FieldKind::Text,
        api_name: "allowedDomains",
    },
    FieldDef {
        key: FieldKey::SecurityToken,
        label: "Security Token",
        help: "Token outbound requests are signed with",
        kind: FieldKind::Text,
        api_name: "securityToken",
    },
    FieldDef {
        key: FieldKey::VerifySsl,
        label: "Verify TLS/SSL",
        help: "Verify server certificates when delivering outbound requests",
        kind: FieldKind::Toggle,
        api_name: "verifySsl",
    },
];

pub fn field_def(key: FieldKey) -> &'static FieldDef {
    SETTINGS_FIELDS
        .iter()
        .find(|def| def.key == key)
        .unwrap_or(&SETTINGS_FIELDS[0])
}

/// Current display value for a field, used for the form and for edit
/// buffer seeding.
pub fn display_value(project: &ProjectSettings, key: FieldKey) -> String {
    match key {
        FieldKey::Name => project.name.clone(),
        FieldKey::Slug => project.slug.clone(),
        FieldKey::Team => project.team.clone().unwrap_or_default(),
        FieldKey::DefaultEnvironment => project.default_environment.clone().unwrap_or_default(),
        FieldKey::SubjectPrefix => project.subject_prefix.clone(),
        FieldKey::ResolveAge => project.resolve_age.to_string(),
        FieldKey::DataScrubber => bool_display(project.data_scrubber),
        FieldKey::ScrubIpAddresses => bool_display(project.scrub_ip_addresses),
        FieldKey::AllowedDomains => project.allowed_domains_display(),
        FieldKey::SecurityToken => project.security_token.clone(),
        FieldKey::VerifySsl => bool_display(project.verify_ssl),
    }
}

fn bool_display(value: bool) -> String {
    if value { "on" } else { "off" }.to_string()
}

/// Parses an edit buffer into the JSON value for the PUT body.
pub fn parse_value(key: FieldKey, buffer: &str) -> Result<Value, String> {
    let trimmed = buffer.trim();
    match key {
        FieldKey::ResolveAge => trimmed
            .parse::<u32>()
            .map(|hours| json!(hours))
            .map_err(|_| "Auto resolve must be a number of hours".to_string()),
        FieldKey::AllowedDomains => {
            let domains: Vec<&str> = trimmed
                .split([',', ' '])
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .collect();
            Ok(json!(domains))
        }
        FieldKey::Name | FieldKey::Slug => {
            if trimmed.is_empty() {
                Err(format!("{} cannot be empty", field_def(key).label))
            } else {
                Ok(json!(trimmed))
            }
        }
        FieldKey::Team | FieldKey::DefaultEnvironment => {
            if trimmed.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(json!(trimmed))
            }
        }
        _ => Ok(json!(trimmed)),
    }
}

#[derive(Debug, Default)]
pub struct SettingsState {
    pub project: Option<ProjectSettings>,
    pub load: LoadState,
    pub selected: usize,
    pub list_state: ListState,
    pub edit_buffer: String,
}

impl SettingsState {
    pub fn selected_field(&self) -> &'static FieldDef {
        &SETTINGS_FIELDS[self.selected.min(SETTINGS_FIELDS.len() - 1)]
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(SETTINGS_FIELDS.len() - 1);
        self.list_state.select(Some(self.selected));
    }

    pub fn select_next(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    pub fn select_previous(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    pub fn select_last(&mut self) {
        self.select(SETTINGS_FIELDS.len() - 1);
    }

    /// Seeds the edit buffer from the current value. Returns false for
    /// toggles (they flip in place) and when no project is loaded.
    pub fn begin_edit(&mut self) -> bool {
        let Some(project) = &self.project else {
            return false;
        };
        let def = self.selected_field();
        if def.kind == FieldKind::Toggle {
            return false;
        }
        self.edit_buffer = display_value(project, def.key);
        true
    }

    /// Patch value for flipping the selected toggle field.
    pub fn toggle_patch(&self) -> Option<(FieldKey, Value)> {
        let project = self.project.as_ref()?;
        let def = self.selected_field();
        if def.kind != FieldKind::Toggle {
            return None;
        }
        let current = match def.key {
            FieldKey::DataScrubber => project.data_scrubber,
            FieldKey::ScrubIpAddresses => project.scrub_ip_addresses,
            FieldKey::VerifySsl => project.verify_ssl,
            _ => return None,
        };
        Some((def.key, json!(!current)))
    }
}
