use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::hooks_state::{HOOK_FIELDS, HooksView, hook_display_value};
use crate::app::input_mode::InputMode;
use crate::app::load_state::LoadState;
use crate::app::state::AppState;
use crate::ui::theme::Theme;

pub struct HooksScreen;

impl HooksScreen {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        match state.hooks.view {
            HooksView::List => Self::render_list(frame, area, state),
            HooksView::Detail => Self::render_detail(frame, area, state),
        }
    }

    fn render_list(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let block = Block::default().borders(Borders::ALL).title(" Service Hooks ");

        match &state.hooks.load {
            LoadState::NotLoaded | LoadState::Loading => {
                frame.render_widget(
                    Paragraph::new("Loading service hooks...")
                        .style(Style::default().fg(Theme::TEXT_MUTED))
                        .block(block),
                    area,
                );
                return;
            }
            LoadState::Error(msg) => {
                frame.render_widget(
                    Paragraph::new(format!("Failed to load hooks: {msg}\nPress r to retry"))
                        .style(Style::default().fg(Theme::STATUS_ERROR))
                        .block(block),
                    area,
                );
                return;
            }
            LoadState::Loaded => {}
        }

        if state.hooks.hooks.is_empty() {
            frame.render_widget(
                Paragraph::new("No service hooks are registered for this project.")
                    .style(Style::default().fg(Theme::TEXT_MUTED))
                    .block(block),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = state
            .hooks
            .hooks
            .iter()
            .map(|hook| {
                let status_style = if hook.active {
                    Style::default().fg(Theme::STATUS_SUCCESS)
                } else {
                    Style::default().fg(Theme::TEXT_MUTED)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:8}", hook.status_label()), status_style),
                    Span::raw(hook.url.clone()),
                    Span::styled(
                        format!("  [{}]", hook.events_display()),
                        Style::default().fg(Theme::TEXT_MUTED),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Theme::SELECTED_BG));
        frame.render_stateful_widget(list, area, &mut state.hooks.list_state);
    }

    fn render_detail(frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(hook) = state.hooks.selected_hook() else {
            return;
        };
        let editing = state.ui.input_mode == InputMode::FieldEdit;

        let label_width = HOOK_FIELDS
            .iter()
            .map(|d| d.label.width())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = HOOK_FIELDS
            .iter()
            .enumerate()
            .map(|(i, def)| {
                let selected = i == state.hooks.detail_field;
                let value = if selected && editing {
                    format!("{}▏", state.hooks.edit_buffer)
                } else {
                    hook_display_value(hook, def.key)
                };
                let label_style = if selected {
                    Style::default()
                        .fg(Theme::TEXT_ACCENT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(format!("{:label_width$}", def.label), label_style),
                    Span::raw("  "),
                    Span::raw(value),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Hook {} ", hook.id));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
