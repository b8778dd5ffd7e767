use ratatui::widgets::ListState;
use serde_json::{Value, json};

use crate::app::load_state::LoadState;
use crate::domain::ServiceHook;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HooksView {
    #[default]
    List,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookField {
    Url,
    Events,
    Active,
}

pub struct HookFieldDef {
    pub key: HookField,
    pub label: &'static str,
    pub api_name: &'static str,
}

pub const HOOK_FIELDS: &[HookFieldDef] = &[
    HookFieldDef {
        key: HookField::Url,
        label: "URL",
        api_name: "url",
    },
    HookFieldDef {
        key: HookField::Events,
        label: "Events",
        api_name: "events",
    },
    HookFieldDef {
        key: HookField::Active,
        label: "Active",
        api_name: "isActive",
    },
];

pub fn hook_display_value(hook: &ServiceHook, key: HookField) -> String {
    match key {
        HookField::Url => hook.url.clone(),
        HookField::Events => hook.events_display(),
        HookField::Active => hook.status_label().to_string(),
    }
}

/// Parses a hook detail edit buffer into the JSON value for the PUT body.
pub fn parse_hook_value(key: HookField, buffer: &str) -> Result<Value, String> {
    let trimmed = buffer.trim();
    match key {
        HookField::Url => {
            if trimmed.is_empty() {
                Err("URL cannot be empty".to_string())
            } else {
                Ok(json!(trimmed))
            }
        }
        HookField::Events => {
            let events: Vec<&str> = trimmed
                .split([',', ' '])
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .collect();
            Ok(json!(events))
        }
        HookField::Active => Err("Active flips in place".to_string()),
    }
}

#[derive(Debug, Default)]
pub struct HooksState {
    pub hooks: Vec<ServiceHook>,
    pub load: LoadState,
    pub selected: usize,
    pub list_state: ListState,
    pub view: HooksView,
    pub detail_field: usize,
    pub edit_buffer: String,
}

impl HooksState {
    pub fn selected_hook(&self) -> Option<&ServiceHook> {
        self.hooks.get(self.selected)
    }

    pub fn select(&mut self, index: usize) {
        if self.hooks.is_empty() {
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        self.selected = index.min(self.hooks.len() - 1);
        self.list_state.select(Some(self.selected));
    }

    pub fn select_next(&mut self) {
        match self.view {
            HooksView::List => self.select(self.selected.saturating_add(1)),
            HooksView::Detail => {
                self.detail_field = (self.detail_field + 1).min(HOOK_FIELDS.len() - 1);
            }
        }
    }

    pub fn select_previous(&mut self) {
        match self.view {
            HooksView::List => self.select(self.selected.saturating_sub(1)),
            HooksView::Detail => self.detail_field = self.detail_field.saturating_sub(1),
        }
    }

    pub fn select_first(&mut self) {
        match self.view {
            HooksView::List => self.select(0),
            HooksView::Detail => self.detail_field = 0,
        }
    }

    pub fn select_last(&mut self) {
        match self.view {
            HooksView::List => {
                let last = self.hooks.len().saturating_sub(1);
                self.select(last);
            }
            HooksView::Detail => self.detail_field = HOOK_FIELDS.len() - 1,
        }
    }

    pub fn selected_detail_field(&self) -> &'static HookFieldDef {
        &HOOK_FIELDS[self.detail_field.min(HOOK_FIELDS.len() - 1)]
    }

    pub fn open_detail(&mut self) -> bool {
        if self.selected_hook().is_none() {
            return false;
        }
        self.view = HooksView::Detail;
        self.detail_field = 0;
        true
    }

    pub fn close_detail(&mut self) {
        self.view = HooksView::List;
        self.edit_buffer.clear();
    }

    /// Seeds the edit buffer for the selected detail field. Returns
    /// false for the active flag (it flips in place).
    pub fn begin_edit(&mut self) -> bool {
        let def = self.selected_detail_field();
        if def.key == HookField::Active {
            return false;
        }
        let Some(hook) = self.selected_hook() else {
            return false;
        };
        self.edit_buffer = hook_display_value(hook, def.key);
        true
    }

    /// Id and PUT body for flipping the active flag of the selected hook.
    pub fn active_patch(&self) -> Option<(String, Value)> {
        let hook = self.selected_hook()?;
        Some((hook.id.clone(), json!({ "isActive": !hook.active })))
    }

    pub fn replace_hook(&mut self, updated: ServiceHook) {
        if let Some(slot) = self.hooks.iter_mut().find(|h| h.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn remove_hook(&mut self, id: &str) {
        self.hooks.retain(|h| h.id != id);
        if self.selected >= self.hooks.len() {
            let last = self.hooks.len().saturating_sub(1);
            self.select(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hooks() -> Vec<ServiceHook> {
        vec![
            ServiceHook {
                id: "a1".to_string(),
                url: "https://example.com/a".to_string(),
                events: vec!["event.alert".to_string()],
                active: true,
            },
            ServiceHook {
                id: "b2".to_string(),
                url: "https://example.com/b".to_string(),
                events: vec!["event.created".to_string()],
                active: false,
            },
        ]
    }

    #[test]
    fn selection_clamps_to_hook_count() {
        let mut state = HooksState {
            hooks: sample_hooks(),
            ..Default::default()
        };

        state.select(99);

        assert_eq!(state.selected, 1);
    }

    #[test]
    fn empty_list_clears_selection() {
        let mut state = HooksState::default();

        state.select(3);

        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn open_detail_requires_a_hook() {
        let mut state = HooksState::default();

        assert!(!state.open_detail());

        state.hooks = sample_hooks();
        state.select(1);
        assert!(state.open_detail());
        assert_eq!(state.view, HooksView::Detail);
        assert_eq!(state.detail_field, 0);
    }

    #[test]
    fn detail_navigation_moves_between_fields() {
        let mut state = HooksState {
            hooks: sample_hooks(),
            view: HooksView::Detail,
            ..Default::default()
        };

        state.select_next();
        state.select_next();
        state.select_next();

        assert_eq!(state.detail_field, HOOK_FIELDS.len() - 1);

        state.select_first();
        assert_eq!(state.detail_field, 0);
    }

    #[test]
    fn begin_edit_refuses_the_active_flag() {
        let mut state = HooksState {
            hooks: sample_hooks(),
            view: HooksView::Detail,
            ..Default::default()
        };
        state.select(0);
        state.detail_field = HOOK_FIELDS
            .iter()
            .position(|d| d.key == HookField::Active)
            .unwrap();

        assert!(!state.begin_edit());
        assert_eq!(
            state.active_patch(),
            Some(("a1".to_string(), json!({ "isActive": false })))
        );
    }

    #[test]
    fn remove_hook_reclamps_selection() {
        let mut state = HooksState {
            hooks: sample_hooks(),
            ..Default::default()
        };
        state.select(1);

        state.remove_hook("b2");

        assert_eq!(state.hooks.len(), 1);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn replace_hook_swaps_by_id() {
        let mut state = HooksState {
            hooks: sample_hooks(),
            ..Default::default()
        };

        state.replace_hook(ServiceHook {
            id: "a1".to_string(),
            url: "https://example.com/new".to_string(),
            events: vec![],
            active: false,
        });

        assert_eq!(state.hooks[0].url, "https://example.com/new");
    }

    #[test]
    fn url_edit_rejects_empty() {
        assert!(parse_hook_value(HookField::Url, "  ").is_err());
    }

    #[test]
    fn events_split_on_commas_and_spaces() {
        let parsed = parse_hook_value(HookField::Events, "event.alert, event.created").unwrap();

        assert_eq!(parsed, json!(["event.alert", "event.created"]));
    }
}
