//! General settings sub-reducer: loading, field editing, and the
//! destructive project operations dispatched from the confirm dialog.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::input_mode::InputMode;
use crate::app::load_state::LoadState;
use crate::app::mode::Mode;
use crate::app::reducers::api_target;
use crate::app::settings_state::{FieldKey, display_value, field_def, parse_value};
use crate::app::state::AppState;

pub fn reduce_settings(
    state: &mut AppState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::LoadSettings => {
            state.settings.load = LoadState::Loading;
            Some(vec![Effect::FetchSettings {
                target: api_target(state),
            }])
        }
        Action::Reload => {
            state.settings.load = LoadState::Loading;
            state.hooks.load = LoadState::Loading;
            // One task, so the two fetches land in a stable order.
            let target = api_target(state);
            Some(vec![Effect::Sequence(vec![
                Effect::FetchSettings {
                    target: target.clone(),
                },
                Effect::FetchHooks { target },
            ])])
        }
        Action::SettingsLoaded(project) => {
            state.settings.project = Some((**project).clone());
            state.settings.load = LoadState::Loaded;
            state.settings.select(state.settings.selected);
            Some(vec![])
        }
        Action::SettingsFailed(msg) => {
            state.settings.load = LoadState::Error(msg.clone());
            state.messages.set_error_at(msg.clone(), now);
            Some(vec![])
        }

        Action::BeginFieldEdit if state.ui.mode == Mode::General => {
            // Toggles save in place; text fields open the edit line.
            if let Some((field, value)) = state.settings.toggle_patch() {
                return Some(vec![Effect::SaveSetting {
                    target: api_target(state),
                    field,
                    value,
                }]);
            }
            if state.settings.begin_edit() {
                state.ui.input_mode = InputMode::FieldEdit;
            }
            Some(vec![])
        }
        Action::FieldInput(c) if state.ui.mode == Mode::General => {
            state.settings.edit_buffer.push(*c);
            Some(vec![])
        }
        Action::FieldBackspace if state.ui.mode == Mode::General => {
            state.settings.edit_buffer.pop();
            Some(vec![])
        }
        Action::FieldSubmit if state.ui.mode == Mode::General => {
            let field = state.settings.selected_field().key;
            match parse_value(field, &state.settings.edit_buffer) {
                Ok(value) => {
                    state.ui.input_mode = InputMode::Normal;
                    state.settings.edit_buffer.clear();
                    Some(vec![Effect::SaveSetting {
                        target: api_target(state),
                        field,
                        value,
                    }])
                }
                Err(msg) => {
                    state.messages.set_error_at(msg, now);
                    Some(vec![])
                }
            }
        }
        Action::FieldCancel if state.ui.mode == Mode::General => {
            state.ui.input_mode = InputMode::Normal;
            state.settings.edit_buffer.clear();
            Some(vec![])
        }

        Action::SettingSaved { field, updated } => {
            let label = field_def(*field).label;
            let old = state
                .settings
                .project
                .as_ref()
                .map(|p| display_value(p, *field))
                .unwrap_or_default();
            let new = display_value(updated, *field);
            if *field == FieldKey::Slug {
                state.runtime.project = updated.slug.clone();
            }
            state.settings.project = Some((**updated).clone());
            state
                .messages
                .set_success_at(format!("Changed {label} from \"{old}\" to \"{new}\""), now);
            Some(vec![])
        }
        Action::SettingSaveFailed(msg) => {
            state.messages.set_error_at(msg.clone(), now);
            Some(vec![])
        }

        Action::RemoveProject => Some(vec![Effect::RemoveProject {
            target: api_target(state),
        }]),
        Action::ProjectRemoved => {
            state.should_quit = true;
            Some(vec![])
        }
        Action::ProjectRemoveFailed(msg) => {
            state.messages.set_error_at(msg.clone(), now);
            Some(vec![])
        }

        Action::TransferProject { owner_email } => {
            if owner_email.trim().is_empty() {
                state
                    .messages
                    .set_error_at("An organization owner email is required.", now);
                return Some(vec![]);
            }
            Some(vec![Effect::TransferProject {
                target: api_target(state),
                owner_email: owner_email.clone(),
            }])
        }
        Action::TransferRequested => {
            state.messages.set_success_at(
                "Transfer request sent. The new owner must confirm it by email.",
                now,
            );
            Some(vec![])
        }
        Action::TransferFailed(msg) => {
            state.messages.set_error_at(msg.clone(), now);
            Some(vec![])
        }

        _ => None,
    }
}
