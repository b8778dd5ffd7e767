use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::overlay::{centered_rect, clear_area, render_scrim};
use crate::app::confirm::{ConfirmSpec, DialogBody, Priority};
use crate::app::state::AppState;
use crate::ui::theme::Theme;

pub struct ConfirmDialog;

impl ConfirmDialog {
    pub fn render(frame: &mut Frame, state: &AppState) {
        if !state.confirm.is_open() {
            return;
        }
        let Some(spec) = state.confirm.spec() else {
            return;
        };

        let area = centered_rect(
            frame.area(),
            Constraint::Percentage(50),
            Constraint::Length(9),
        );
        render_scrim(frame);
        clear_area(frame, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", spec.title))
            .style(Style::default().bg(Theme::MODAL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [body_area, button_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(inner);

        match &spec.body {
            DialogBody::Static(message) => {
                // Static messages render emphasized.
                let body = Paragraph::new(message.as_str())
                    .style(Style::default().add_modifier(Modifier::BOLD))
                    .wrap(Wrap { trim: true })
                    .alignment(Alignment::Center);
                frame.render_widget(body, body_area);
            }
            DialogBody::Prompt(prompt) => {
                let input = state.confirm.prompt_input();
                let input_line = if input.is_empty() {
                    Line::from(Span::styled(
                        prompt.placeholder.clone(),
                        Style::default().fg(Theme::TEXT_MUTED),
                    ))
                } else {
                    Line::from(vec![Span::raw(input.to_string()), Span::raw("▏")])
                };
                let lines = vec![
                    Line::from(Span::styled(
                        prompt.label.clone(),
                        Style::default().fg(Theme::TEXT_ACCENT),
                    )),
                    input_line,
                ];
                frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body_area);
            }
        }

        frame.render_widget(
            Paragraph::new(Self::button_line(spec, state.confirm.confirm_button_disabled()))
                .alignment(Alignment::Right),
            button_area,
        );
    }

    fn button_line(spec: &ConfirmSpec, confirm_disabled: bool) -> Line<'static> {
        let confirm_style = if confirm_disabled || spec.disabled {
            Style::default().fg(Theme::TEXT_MUTED)
        } else {
            let color = match spec.priority {
                Priority::Danger => Theme::DANGER,
                Priority::Primary => Theme::PRIMARY,
            };
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        };
        Line::from(vec![
            Span::raw(format!("[ {} ]", spec.cancel_text)),
            Span::raw("  "),
            Span::styled(format!("[ {} ]", spec.confirm_text), confirm_style),
        ])
    }
}
