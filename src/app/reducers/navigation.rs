//! Navigation sub-reducer: tab switching and list movement.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::mode::Mode;
use crate::app::state::AppState;

pub fn reduce_navigation(
    state: &mut AppState,
    action: &Action,
    _now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::NextTab => {
            state.ui.next_tab();
            Some(vec![])
        }
        Action::PreviousTab => {
            state.ui.previous_tab();
            Some(vec![])
        }
        Action::SelectNext => {
            match state.ui.mode {
                Mode::General => state.settings.select_next(),
                Mode::Hooks => state.hooks.select_next(),
            }
            Some(vec![])
        }
        Action::SelectPrevious => {
            match state.ui.mode {
                Mode::General => state.settings.select_previous(),
                Mode::Hooks => state.hooks.select_previous(),
            }
            Some(vec![])
        }
        Action::SelectFirst => {
            match state.ui.mode {
                Mode::General => state.settings.select(0),
                Mode::Hooks => state.hooks.select_first(),
            }
            Some(vec![])
        }
        Action::SelectLast => {
            match state.ui.mode {
                Mode::General => state.settings.select_last(),
                Mode::Hooks => state.hooks.select_last(),
            }
            Some(vec![])
        }
        _ => None,
    }
}
