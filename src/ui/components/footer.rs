use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::hooks_state::HooksView;
use crate::app::input_mode::InputMode;
use crate::app::keybindings::{
    CONFIRM_DIALOG_KEYS, FIELD_EDIT_KEYS, GENERAL_KEYS, GLOBAL_KEYS, HELP_KEYS, HOOKS_KEYS,
    NAVIGATION_KEYS, idx,
};
use crate::app::mode::Mode;
use crate::app::state::AppState;
use crate::ui::theme::Theme;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        if let Some(error) = state.messages.last_error() {
            let line = Line::from(Span::styled(
                format!("✗ {error}"),
                Style::default().fg(Theme::STATUS_ERROR),
            ));
            frame.render_widget(Paragraph::new(line), area);
        } else {
            let hints = Self::get_context_hints(state);
            let line = Self::build_hint_line_with_success(&hints, state.messages.last_success());
            frame.render_widget(Paragraph::new(line), area);
        }
    }

    /// Hint ordering: Actions → Navigation → Help → Close/Cancel → Quit
    fn get_context_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        match state.ui.input_mode {
            InputMode::Normal => match state.ui.mode {
                Mode::General => vec![
                    GLOBAL_KEYS[idx::global::EDIT].as_hint(),
                    GENERAL_KEYS[idx::general::REMOVE].as_hint(),
                    GENERAL_KEYS[idx::general::TRANSFER].as_hint(),
                    GLOBAL_KEYS[idx::global::RELOAD].as_hint(),
                    NAVIGATION_KEYS[idx::nav::SCROLL].as_hint(),
                    GLOBAL_KEYS[idx::global::TABS].as_hint(),
                    GLOBAL_KEYS[idx::global::HELP].as_hint(),
                    GLOBAL_KEYS[idx::global::QUIT].as_hint(),
                ],
                Mode::Hooks => {
                    let mut list = vec![
                        if state.hooks.view == HooksView::Detail {
                            GLOBAL_KEYS[idx::global::EDIT].as_hint()
                        } else {
                            HOOKS_KEYS[idx::hooks::DETAIL].as_hint()
                        },
                        HOOKS_KEYS[idx::hooks::DELETE].as_hint(),
                        NAVIGATION_KEYS[idx::nav::SCROLL].as_hint(),
                    ];
                    if state.hooks.view == HooksView::Detail {
                        list.push(HOOKS_KEYS[idx::hooks::BACK].as_hint());
                    }
                    list.push(GLOBAL_KEYS[idx::global::TABS].as_hint());
                    list.push(GLOBAL_KEYS[idx::global::HELP].as_hint());
                    list.push(GLOBAL_KEYS[idx::global::QUIT].as_hint());
                    list
                }
            },
            InputMode::FieldEdit => vec![
                FIELD_EDIT_KEYS[idx::field_edit::SAVE].as_hint(),
                FIELD_EDIT_KEYS[idx::field_edit::CANCEL].as_hint(),
            ],
            InputMode::ConfirmDialog => {
                if state.confirm.has_prompt() {
                    vec![
                        ("Enter", "Submit"),
                        ("type", "Owner email"),
                        CONFIRM_DIALOG_KEYS[idx::confirm::NO].as_hint(),
                    ]
                } else {
                    vec![
                        CONFIRM_DIALOG_KEYS[idx::confirm::YES].as_hint(),
                        CONFIRM_DIALOG_KEYS[idx::confirm::NO].as_hint(),
                        CONFIRM_DIALOG_KEYS[idx::confirm::TOGGLE].as_hint(),
                    ]
                }
            }
            InputMode::Help => vec![
                HELP_KEYS[idx::help::SCROLL].as_hint(),
                HELP_KEYS[idx::help::CLOSE].as_hint(),
            ],
        }
    }

    fn build_hint_line_with_success(
        hints: &[(&str, &str)],
        success_msg: Option<&str>,
    ) -> Line<'static> {
        let mut spans = Vec::new();

        if let Some(msg) = success_msg {
            spans.push(Span::styled(
                format!("✓ {}  ", msg),
                Style::default().fg(Theme::STATUS_SUCCESS),
            ));
        }

        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default().fg(Theme::TEXT_ACCENT),
            ));
            spans.push(Span::raw(format!(":{}", desc)));
        }

        Line::from(spans)
    }
}
