use std::time::Instant;

use crate::app::confirm::ConfirmFlow;
use crate::app::hooks_state::HooksState;
use crate::app::message_state::MessageState;
use crate::app::settings_state::SettingsState;
use crate::app::ui_state::UiState;

/// Identity of the project the session is pointed at. The slug can
/// change mid-session when the user renames it.
#[derive(Debug, Clone)]
pub struct RuntimeState {
    pub organization: String,
    pub project: String,
}

#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    pub render_dirty: bool,
    pub runtime: RuntimeState,
    pub ui: UiState,
    pub settings: SettingsState,
    pub hooks: HooksState,
    pub confirm: ConfirmFlow,
    pub messages: MessageState,
}

impl AppState {
    pub fn new(organization: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            render_dirty: true,
            runtime: RuntimeState {
                organization: organization.into(),
                project: project.into(),
            },
            ui: UiState::default(),
            settings: SettingsState::default(),
            hooks: HooksState::default(),
            confirm: ConfirmFlow::default(),
            messages: MessageState::default(),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn clear_expired_messages(&mut self, now: Instant) {
        self.messages.clear_expired_at(now);
    }
}
