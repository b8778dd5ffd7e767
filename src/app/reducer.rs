//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! This keeps the reducer testable without mocking time or I/O.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::reducers::{reduce_hooks, reduce_modal, reduce_navigation, reduce_settings};
use crate::app::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    // Mark dirty for all state-changing actions (except None and Render)
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_modal(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_navigation(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_settings(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_hooks(state, &action, now) {
        return effects;
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Resize(_w, h) => {
            state.ui.terminal_height = h;
            vec![]
        }
        Action::Render => {
            state.clear_expired_messages(now);
            state.clear_dirty();
            vec![Effect::Render]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::confirm::{ConfirmOutcome, DialogBody};
    use crate::app::input_mode::InputMode;
    use crate::app::mode::Mode;
    use crate::app::settings_state::FieldKey;
    use crate::domain::{ProjectSettings, ServiceHook};
    use serde_json::json;

    fn now() -> Instant {
        Instant::now()
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new("acme", "backend");
        let project: ProjectSettings = serde_json::from_value(json!({
            "name": "Backend",
            "slug": "backend",
            "resolveAge": 0
        }))
        .unwrap();
        reduce(&mut state, Action::SettingsLoaded(Box::new(project)), now());
        state
    }

    fn internal_state() -> AppState {
        let mut state = AppState::new("acme", "internal");
        let project: ProjectSettings = serde_json::from_value(json!({
            "name": "Internal",
            "slug": "internal",
            "isInternal": true
        }))
        .unwrap();
        reduce(&mut state, Action::SettingsLoaded(Box::new(project)), now());
        state
    }

    #[test]
    fn quit_sets_should_quit() {
        let mut state = AppState::new("acme", "backend");

        reduce(&mut state, Action::Quit, now());

        assert!(state.should_quit);
    }

    #[test]
    fn render_clears_dirty_and_emits_render_effect() {
        let mut state = AppState::new("acme", "backend");
        state.mark_dirty();

        let effects = reduce(&mut state, Action::Render, now());

        assert!(!state.render_dirty);
        assert!(matches!(effects.as_slice(), [Effect::Render]));
    }

    #[test]
    fn state_changing_actions_mark_dirty() {
        let mut state = AppState::new("acme", "backend");
        state.clear_dirty();

        reduce(&mut state, Action::NextTab, now());

        assert!(state.render_dirty);
    }

    mod remove_project_flow {
        use super::*;

        #[test]
        fn request_opens_a_danger_dialog() {
            let mut state = loaded_state();

            reduce(&mut state, Action::RequestRemoveProject, now());

            assert!(state.confirm.is_open());
            assert_eq!(state.ui.input_mode, InputMode::ConfirmDialog);
            let spec = state.confirm.spec().unwrap();
            assert_eq!(spec.confirm_text, "Remove project");
            assert!(matches!(spec.body, DialogBody::Static(_)));
        }

        #[test]
        fn confirm_emits_the_remove_effect_once() {
            let mut state = loaded_state();
            reduce(&mut state, Action::RequestRemoveProject, now());

            let effects = reduce(&mut state, Action::ConfirmDialogConfirm, now());

            assert!(matches!(
                effects.as_slice(),
                [Effect::RemoveProject { target }] if target.project == "backend"
            ));
            assert_eq!(state.ui.input_mode, InputMode::Normal);

            // Second confirm lands on a closed flow.
            let effects = reduce(&mut state, Action::ConfirmDialogConfirm, now());
            assert!(effects.is_empty());
        }

        #[test]
        fn toggle_while_open_cancels_without_effect() {
            let mut state = loaded_state();
            reduce(&mut state, Action::RequestRemoveProject, now());

            let effects = reduce(&mut state, Action::ConfirmDialogToggle, now());

            assert!(effects.is_empty());
            assert!(!state.confirm.is_open());
            assert_eq!(state.ui.input_mode, InputMode::Normal);
        }

        #[test]
        fn escape_cancels_the_dialog() {
            let mut state = loaded_state();
            reduce(&mut state, Action::RequestRemoveProject, now());

            reduce(&mut state, Action::Escape, now());

            assert!(!state.confirm.is_open());
            assert_eq!(state.ui.input_mode, InputMode::Normal);
        }

        #[test]
        fn internal_project_blocks_the_dialog_with_a_message() {
            let mut state = internal_state();

            reduce(&mut state, Action::RequestRemoveProject, now());

            assert!(!state.confirm.is_open());
            assert_eq!(state.ui.input_mode, InputMode::Normal);
            assert!(state.messages.last_error().unwrap().contains("internally"));
        }

        #[test]
        fn removed_project_quits_the_app() {
            let mut state = loaded_state();

            reduce(&mut state, Action::ProjectRemoved, now());

            assert!(state.should_quit);
        }
    }

    mod transfer_project_flow {
        use super::*;

        #[test]
        fn request_opens_a_prompt_dialog() {
            let mut state = loaded_state();

            reduce(&mut state, Action::RequestTransferProject, now());

            assert!(state.confirm.is_open());
            assert!(state.confirm.has_prompt());
        }

        #[test]
        fn submit_carries_the_typed_email_into_the_effect() {
            let mut state = loaded_state();
            reduce(&mut state, Action::RequestTransferProject, now());
            for c in "owner@example.org".chars() {
                reduce(&mut state, Action::ConfirmPromptInput(c), now());
            }

            let effects = reduce(&mut state, Action::ConfirmPromptSubmit, now());

            assert!(matches!(
                effects.as_slice(),
                [Effect::TransferProject { owner_email, .. }]
                    if owner_email == "owner@example.org"
            ));
        }

        #[test]
        fn empty_required_prompt_is_rejected_and_dialog_stays_open() {
            let mut state = loaded_state();
            reduce(&mut state, Action::RequestTransferProject, now());

            let effects = reduce(&mut state, Action::ConfirmPromptSubmit, now());

            assert!(effects.is_empty());
            assert!(state.confirm.is_open());
            assert!(state.messages.last_error().is_some());
        }

        #[test]
        fn cancel_then_reopen_clears_the_prompt() {
            let mut state = loaded_state();
            reduce(&mut state, Action::RequestTransferProject, now());
            reduce(&mut state, Action::ConfirmPromptInput('x'), now());
            reduce(&mut state, Action::ConfirmDialogToggle, now());

            reduce(&mut state, Action::ConfirmDialogToggle, now());

            assert!(state.confirm.is_open());
            assert_eq!(state.confirm.prompt_input(), "");
        }
    }

    mod settings_flow {
        use super::*;

        #[test]
        fn reload_fetches_settings_then_hooks_in_order() {
            let mut state = loaded_state();

            let effects = reduce(&mut state, Action::Reload, now());

            assert!(matches!(
                effects.as_slice(),
                [Effect::Sequence(seq)] if matches!(
                    seq.as_slice(),
                    [Effect::FetchSettings { .. }, Effect::FetchHooks { .. }]
                )
            ));
        }

        #[test]
        fn saved_setting_reports_old_and_new_value() {
            let mut state = loaded_state();
            let updated: ProjectSettings = serde_json::from_value(json!({
                "name": "Backend",
                "slug": "backend",
                "resolveAge": 720
            }))
            .unwrap();

            reduce(
                &mut state,
                Action::SettingSaved {
                    field: FieldKey::ResolveAge,
                    updated: Box::new(updated),
                },
                now(),
            );

            let msg = state.messages.last_success().unwrap();
            assert!(msg.contains("Auto Resolve"));
            assert!(msg.contains('0'));
            assert!(msg.contains("720"));
        }

        #[test]
        fn slug_rename_retargets_the_session() {
            let mut state = loaded_state();
            let updated: ProjectSettings = serde_json::from_value(json!({
                "name": "Backend",
                "slug": "backend-v2"
            }))
            .unwrap();

            reduce(
                &mut state,
                Action::SettingSaved {
                    field: FieldKey::Slug,
                    updated: Box::new(updated),
                },
                now(),
            );

            assert_eq!(state.runtime.project, "backend-v2");
        }

        #[test]
        fn invalid_field_value_keeps_edit_mode_and_shows_error() {
            let mut state = loaded_state();
            let resolve_age = crate::app::settings_state::SETTINGS_FIELDS
                .iter()
                .position(|d| d.key == FieldKey::ResolveAge)
                .unwrap();
            state.settings.select(resolve_age);
            reduce(&mut state, Action::BeginFieldEdit, now());
            state.settings.edit_buffer = "soon".to_string();

            let effects = reduce(&mut state, Action::FieldSubmit, now());

            assert!(effects.is_empty());
            assert_eq!(state.ui.input_mode, InputMode::FieldEdit);
            assert!(state.messages.last_error().is_some());
        }

        #[test]
        fn toggle_field_saves_in_place_without_edit_mode() {
            let mut state = loaded_state();
            let scrubber = crate::app::settings_state::SETTINGS_FIELDS
                .iter()
                .position(|d| d.key == FieldKey::DataScrubber)
                .unwrap();
            state.settings.select(scrubber);

            let effects = reduce(&mut state, Action::BeginFieldEdit, now());

            assert_eq!(state.ui.input_mode, InputMode::Normal);
            assert!(matches!(
                effects.as_slice(),
                [Effect::SaveSetting {
                    field: FieldKey::DataScrubber,
                    ..
                }]
            ));
        }
    }

    mod hooks_flow {
        use super::*;

        fn hooks_state() -> AppState {
            let mut state = loaded_state();
            state.ui.mode = Mode::Hooks;
            reduce(
                &mut state,
                Action::HooksLoaded(vec![ServiceHook {
                    id: "a1".to_string(),
                    url: "https://example.com/a".to_string(),
                    events: vec!["event.alert".to_string()],
                    active: true,
                }]),
                now(),
            );
            state
        }

        #[test]
        fn delete_hook_is_guarded_by_a_confirm_dialog() {
            let mut state = hooks_state();

            reduce(&mut state, Action::RequestDeleteHook, now());
            assert!(state.confirm.is_open());

            let effects = reduce(&mut state, Action::ConfirmDialogConfirm, now());

            assert!(matches!(
                effects.as_slice(),
                [Effect::DeleteHook { id, .. }] if id == "a1"
            ));
        }

        #[test]
        fn active_flag_flips_in_place_from_the_detail_view() {
            use crate::app::hooks_state::{HOOK_FIELDS, HookField};

            let mut state = hooks_state();
            reduce(&mut state, Action::OpenHookDetail, now());
            state.hooks.detail_field = HOOK_FIELDS
                .iter()
                .position(|d| d.key == HookField::Active)
                .unwrap();

            let effects = reduce(&mut state, Action::BeginFieldEdit, now());

            // No edit line opens; the save goes straight out.
            assert_eq!(state.ui.input_mode, InputMode::Normal);
            assert!(matches!(
                effects.as_slice(),
                [Effect::SaveHookField { id, patch, .. }]
                    if id == "a1" && *patch == json!({ "isActive": false })
            ));
        }

        #[test]
        fn deleted_hook_leaves_the_list_and_detail_view() {
            let mut state = hooks_state();
            reduce(&mut state, Action::OpenHookDetail, now());

            reduce(
                &mut state,
                Action::HookDeleted {
                    id: "a1".to_string(),
                },
                now(),
            );

            assert!(state.hooks.hooks.is_empty());
            assert_eq!(
                state.hooks.view,
                crate::app::hooks_state::HooksView::List
            );
        }
    }

    #[test]
    fn unarmed_confirm_actions_are_ignored() {
        let mut state = AppState::new("acme", "backend");

        assert_eq!(state.confirm.activate(), ConfirmOutcome::Ignored);
        let effects = reduce(&mut state, Action::ConfirmDialogConfirm, now());

        assert!(effects.is_empty());
        assert_eq!(state.ui.input_mode, InputMode::Normal);
    }
}
