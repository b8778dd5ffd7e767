//! Service hooks sub-reducer: list, detail editing, and deletion
//! results coming back from the confirm dialog.

use std::time::Instant;

use serde_json::json;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::hooks_state::{
    HOOK_FIELDS, HookField, HooksView, hook_display_value, parse_hook_value,
};
use crate::app::input_mode::InputMode;
use crate::app::load_state::LoadState;
use crate::app::mode::Mode;
use crate::app::reducers::api_target;
use crate::app::state::AppState;
use crate::domain::ServiceHook;

pub fn reduce_hooks(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::LoadHooks => {
            state.hooks.load = LoadState::Loading;
            Some(vec![Effect::FetchHooks {
                target: api_target(state),
            }])
        }
        Action::HooksLoaded(hooks) => {
            state.hooks.hooks = hooks.clone();
            state.hooks.load = LoadState::Loaded;
            state.hooks.select(state.hooks.selected);
            Some(vec![])
        }
        Action::HooksFailed(msg) => {
            state.hooks.load = LoadState::Error(msg.clone());
            state.messages.set_error_at(msg.clone(), now);
            Some(vec![])
        }

        Action::OpenHookDetail if state.ui.mode == Mode::Hooks => {
            state.hooks.open_detail();
            Some(vec![])
        }
        Action::CloseHookDetail => {
            state.hooks.close_detail();
            Some(vec![])
        }

        Action::BeginFieldEdit if state.ui.mode == Mode::Hooks => {
            if state.hooks.view != HooksView::Detail {
                return Some(vec![]);
            }
            // The active flag flips in place; url/events open the edit line.
            if state.hooks.selected_detail_field().key == HookField::Active {
                let Some((id, patch)) = state.hooks.active_patch() else {
                    return Some(vec![]);
                };
                return Some(vec![Effect::SaveHookField {
                    target: api_target(state),
                    id,
                    patch,
                }]);
            }
            if state.hooks.begin_edit() {
                state.ui.input_mode = InputMode::FieldEdit;
            }
            Some(vec![])
        }
        Action::FieldInput(c) if state.ui.mode == Mode::Hooks => {
            state.hooks.edit_buffer.push(*c);
            Some(vec![])
        }
        Action::FieldBackspace if state.ui.mode == Mode::Hooks => {
            state.hooks.edit_buffer.pop();
            Some(vec![])
        }
        Action::FieldSubmit if state.ui.mode == Mode::Hooks => {
            let def = state.hooks.selected_detail_field();
            let Some(hook) = state.hooks.selected_hook() else {
                return Some(vec![]);
            };
            let id = hook.id.clone();
            match parse_hook_value(def.key, &state.hooks.edit_buffer) {
                Ok(value) => {
                    state.ui.input_mode = InputMode::Normal;
                    state.hooks.edit_buffer.clear();
                    Some(vec![Effect::SaveHookField {
                        target: api_target(state),
                        id,
                        patch: json!({ def.api_name: value }),
                    }])
                }
                Err(msg) => {
                    state.messages.set_error_at(msg, now);
                    Some(vec![])
                }
            }
        }
        Action::FieldCancel if state.ui.mode == Mode::Hooks => {
            state.ui.input_mode = InputMode::Normal;
            state.hooks.edit_buffer.clear();
            Some(vec![])
        }

        Action::HookSaved { updated } => {
            let message = change_message(&state.hooks.hooks, updated);
            state.hooks.replace_hook((**updated).clone());
            state.messages.set_success_at(message, now);
            Some(vec![])
        }
        Action::HookSaveFailed(msg) => {
            state.messages.set_error_at(msg.clone(), now);
            Some(vec![])
        }

        Action::DeleteHook { id } => Some(vec![Effect::DeleteHook {
            target: api_target(state),
            id: id.clone(),
        }]),
        Action::HookDeleted { id } => {
            state.hooks.remove_hook(id);
            if state.hooks.view == HooksView::Detail {
                state.hooks.close_detail();
            }
            state.messages.set_success_at("Removed hook.", now);
            Some(vec![])
        }
        Action::HookDeleteFailed(msg) => {
            state.messages.set_error_at(msg.clone(), now);
            Some(vec![])
        }

        _ => None,
    }
}

/// Reports the first field whose value actually changed.
fn change_message(hooks: &[ServiceHook], updated: &ServiceHook) -> String {
    let Some(old) = hooks.iter().find(|h| h.id == updated.id) else {
        return "Saved hook.".to_string();
    };
    for def in HOOK_FIELDS {
        let before = hook_display_value(old, def.key);
        let after = hook_display_value(updated, def.key);
        if before != after {
            return format!("Changed {} from \"{before}\" to \"{after}\"", def.label);
        }
    }
    "Saved hook.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hook(url: &str, active: bool) -> ServiceHook {
        ServiceHook {
            id: "a1".to_string(),
            url: url.to_string(),
            events: vec!["event.alert".to_string()],
            active,
        }
    }

    #[test]
    fn change_message_names_the_changed_field() {
        let old = vec![hook("https://example.com/a", true)];
        let updated = hook("https://example.com/b", true);

        let msg = change_message(&old, &updated);

        assert_eq!(
            msg,
            "Changed URL from \"https://example.com/a\" to \"https://example.com/b\""
        );
    }

    #[test]
    fn change_message_reports_active_flips() {
        let old = vec![hook("https://example.com/a", true)];
        let updated = hook("https://example.com/a", false);

        let msg = change_message(&old, &updated);

        assert_eq!(msg, "Changed Active from \"active\" to \"disabled\"");
    }

    #[test]
    fn unknown_hook_falls_back_to_a_generic_message() {
        let updated = hook("https://example.com/a", true);

        assert_eq!(change_message(&[], &updated), "Saved hook.");
    }
}
