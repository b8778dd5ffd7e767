use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::action::Action;
use crate::app::hooks_state::HooksView;
use crate::app::input_mode::InputMode;
use crate::app::mode::Mode;
use crate::app::state::AppState;

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Render => Action::Render,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
        Event::Tick => Action::None,
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    match state.ui.input_mode {
        InputMode::Normal => handle_normal_mode(key, state),
        InputMode::FieldEdit => handle_field_edit_mode(key),
        InputMode::ConfirmDialog => handle_confirm_dialog_mode(key, state),
        InputMode::Help => handle_help_keys(key),
    }
}

fn handle_normal_mode(key: KeyEvent, state: &AppState) -> Action {
    match (key.code, key.modifiers) {
        // Shift+Tab: Previous tab
        (KeyCode::Tab, m) if m.contains(KeyModifiers::SHIFT) => {
            return Action::PreviousTab;
        }
        // BackTab (some terminals send this for Shift+Tab)
        (KeyCode::BackTab, _) => {
            return Action::PreviousTab;
        }
        (KeyCode::Tab, _) => {
            return Action::NextTab;
        }
        _ => {}
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Char('r') => Action::Reload,
        KeyCode::Esc => Action::Escape,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Char('g') | KeyCode::Home => Action::SelectFirst,
        KeyCode::Char('G') | KeyCode::End => Action::SelectLast,

        KeyCode::Enter => match state.ui.mode {
            Mode::General => Action::BeginFieldEdit,
            Mode::Hooks => match state.hooks.view {
                HooksView::List => Action::OpenHookDetail,
                HooksView::Detail => Action::BeginFieldEdit,
            },
        },

        // Destructive operations, all confirm-guarded
        KeyCode::Char('x') if state.ui.mode == Mode::General => Action::RequestRemoveProject,
        KeyCode::Char('t') if state.ui.mode == Mode::General => Action::RequestTransferProject,
        KeyCode::Char('d') | KeyCode::Delete if state.ui.mode == Mode::Hooks => {
            Action::RequestDeleteHook
        }

        _ => Action::None,
    }
}

fn handle_field_edit_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::FieldSubmit,
        KeyCode::Esc => Action::FieldCancel,
        KeyCode::Backspace => Action::FieldBackspace,
        KeyCode::Char(c) => Action::FieldInput(c),
        _ => Action::None,
    }
}

/// With an interactive body most printable keys belong to the prompt,
/// so only Enter/Esc keep their dialog meaning.
fn handle_confirm_dialog_mode(key: KeyEvent, state: &AppState) -> Action {
    if state.confirm.has_prompt() {
        return match key.code {
            KeyCode::Enter => Action::ConfirmPromptSubmit,
            KeyCode::Esc => Action::Escape,
            KeyCode::Backspace => Action::ConfirmPromptBackspace,
            KeyCode::Char(c) => Action::ConfirmPromptInput(c),
            _ => Action::None,
        };
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => Action::ConfirmDialogConfirm,
        KeyCode::Esc | KeyCode::Char('n') => Action::Escape,
        KeyCode::Char(' ') => Action::ConfirmDialogToggle,
        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc | KeyCode::Char('?') => Action::CloseHelp,
        KeyCode::Up | KeyCode::Char('k') => Action::HelpScrollUp,
        KeyCode::Down | KeyCode::Char('j') => Action::HelpScrollDown,
        _ => Action::None,
    }
}
