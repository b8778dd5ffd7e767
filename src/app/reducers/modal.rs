//! Modal sub-reducer: help overlay and the confirm dialog.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::confirm::{ConfirmOutcome, ConfirmSpec, PromptSpec};
use crate::app::effect::Effect;
use crate::app::hooks_state::HooksView;
use crate::app::input_mode::InputMode;
use crate::app::mode::Mode;
use crate::app::reducer::reduce;
use crate::app::state::AppState;

/// Handles overlay toggles and confirm dialog actions.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_modal(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::OpenHelp => {
            state.ui.input_mode = if state.ui.input_mode == InputMode::Help {
                InputMode::Normal
            } else {
                InputMode::Help
            };
            Some(vec![])
        }
        Action::CloseHelp => {
            state.ui.input_mode = InputMode::Normal;
            state.ui.help_scroll_offset = 0;
            Some(vec![])
        }
        Action::HelpScrollUp => {
            state.ui.help_scroll_offset = state.ui.help_scroll_offset.saturating_sub(1);
            Some(vec![])
        }
        Action::HelpScrollDown => {
            state.ui.help_scroll_offset = state
                .ui
                .help_scroll_offset
                .saturating_add(1)
                .min(state.ui.help_max_scroll());
            Some(vec![])
        }

        Action::RequestRemoveProject => {
            let Some(project) = &state.settings.project else {
                return Some(vec![]);
            };
            let spec = ConfirmSpec::new(Action::RemoveProject)
                .title("Remove Project")
                .message(format!(
                    "Removing the project \"{}\" is permanent and cannot be undone! \
                     Are you sure you want to continue?",
                    project.slug
                ))
                .confirm_text("Remove project")
                .danger()
                .disabled(project.is_internal);
            state.confirm.arm(spec);
            Some(arm_and_activate(
                state,
                "This project cannot be removed. It is used internally.",
                now,
            ))
        }
        Action::RequestTransferProject => {
            let Some(project) = &state.settings.project else {
                return Some(vec![]);
            };
            let spec = ConfirmSpec::new(Action::TransferProject {
                owner_email: String::new(),
            })
            .title("Transfer Project")
            .prompt(PromptSpec {
                label: "Organization Owner".to_string(),
                placeholder: "new-owner@example.com".to_string(),
                required: true,
            })
            .confirm_text("Transfer project")
            .danger()
            .disabled(project.is_internal);
            state.confirm.arm(spec);
            Some(arm_and_activate(
                state,
                "This project cannot be transferred. It is used internally.",
                now,
            ))
        }
        Action::RequestDeleteHook => {
            let Some(hook) = state.hooks.selected_hook() else {
                return Some(vec![]);
            };
            let spec = ConfirmSpec::new(Action::DeleteHook {
                id: hook.id.clone(),
            })
            .title("Remove Hook")
            .message("Are you sure you want to remove this hook?")
            .confirm_text("Remove")
            .danger();
            state.confirm.arm(spec);
            let outcome = state.confirm.activate();
            Some(apply_outcome(state, outcome, now))
        }

        Action::ConfirmDialogToggle => {
            let outcome = state.confirm.activate();
            Some(apply_outcome(state, outcome, now))
        }
        Action::ConfirmDialogConfirm => {
            let outcome = state.confirm.confirm();
            Some(apply_outcome(state, outcome, now))
        }
        Action::ConfirmPromptSubmit => {
            let outcome = state.confirm.submit_prompt();
            if outcome == ConfirmOutcome::Ignored
                && state.confirm.is_open()
                && state.confirm.prompt_input().trim().is_empty()
            {
                state
                    .messages
                    .set_error_at("An organization owner email is required.", now);
                return Some(vec![]);
            }
            Some(apply_outcome(state, outcome, now))
        }
        Action::ConfirmPromptInput(c) => {
            state.confirm.push_prompt_char(*c);
            Some(vec![])
        }
        Action::ConfirmPromptBackspace => {
            state.confirm.pop_prompt_char();
            Some(vec![])
        }

        Action::Escape => match state.ui.input_mode {
            InputMode::ConfirmDialog => {
                let outcome = state.confirm.cancel();
                Some(apply_outcome(state, outcome, now))
            }
            InputMode::Help => {
                state.ui.input_mode = InputMode::Normal;
                state.ui.help_scroll_offset = 0;
                Some(vec![])
            }
            InputMode::FieldEdit => Some(reduce(state, Action::FieldCancel, now)),
            InputMode::Normal => {
                if state.ui.mode == Mode::Hooks && state.hooks.view == HooksView::Detail {
                    state.hooks.close_detail();
                }
                Some(vec![])
            }
        },

        _ => None,
    }
}

/// Activation right after arming. A session disabled for internal
/// projects never opens; explain why instead.
fn arm_and_activate(state: &mut AppState, disabled_msg: &str, now: Instant) -> Vec<Effect> {
    let outcome = state.confirm.activate();
    if outcome == ConfirmOutcome::Ignored {
        if state.confirm.spec().is_some_and(|s| s.disabled) {
            state.messages.set_error_at(disabled_msg, now);
        }
        return vec![];
    }
    apply_outcome(state, outcome, now)
}

/// Maps a transition outcome onto input mode changes and follow-up
/// dispatches through the reducer.
fn apply_outcome(state: &mut AppState, outcome: ConfirmOutcome, now: Instant) -> Vec<Effect> {
    match outcome {
        ConfirmOutcome::Ignored => vec![],
        ConfirmOutcome::Opened { notify } => {
            state.ui.input_mode = InputMode::ConfirmDialog;
            match notify {
                Some(action) => reduce(state, action, now),
                None => vec![],
            }
        }
        ConfirmOutcome::Cancelled { notify } => {
            state.ui.input_mode = InputMode::Normal;
            match notify {
                Some(action) => reduce(state, action, now),
                None => vec![],
            }
        }
        ConfirmOutcome::Confirmed { effect, input } => {
            state.ui.input_mode = InputMode::Normal;
            let effect = match (effect, input) {
                // The prompt value rides into the transfer request.
                (Action::TransferProject { .. }, Some(email)) => Action::TransferProject {
                    owner_email: email.trim().to_string(),
                },
                (other, _) => other,
            };
            reduce(state, effect, now)
        }
    }
}
