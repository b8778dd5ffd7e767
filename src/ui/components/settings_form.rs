use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::input_mode::InputMode;
use crate::app::load_state::LoadState;
use crate::app::settings_state::{SETTINGS_FIELDS, display_value};
use crate::app::state::AppState;
use crate::ui::theme::Theme;

pub struct SettingsForm;

impl SettingsForm {
    pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" General Settings ");

        match &state.settings.load {
            LoadState::NotLoaded | LoadState::Loading => {
                frame.render_widget(
                    Paragraph::new("Loading project settings...")
                        .style(Style::default().fg(Theme::TEXT_MUTED))
                        .block(block),
                    area,
                );
                return;
            }
            LoadState::Error(msg) => {
                frame.render_widget(
                    Paragraph::new(format!("Failed to load settings: {msg}\nPress r to retry"))
                        .style(Style::default().fg(Theme::STATUS_ERROR))
                        .block(block),
                    area,
                );
                return;
            }
            LoadState::Loaded => {}
        }

        let Some(project) = state.settings.project.clone() else {
            return;
        };

        let editing = state.ui.input_mode == InputMode::FieldEdit;
        let [list_area, detail_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(4)]).areas(area);

        let label_width = SETTINGS_FIELDS
            .iter()
            .map(|d| d.label.width())
            .max()
            .unwrap_or(0);

        let items: Vec<ListItem> = SETTINGS_FIELDS
            .iter()
            .enumerate()
            .map(|(i, def)| {
                let selected = i == state.settings.selected;
                let value = if selected && editing {
                    format!("{}▏", state.settings.edit_buffer)
                } else {
                    display_value(&project, def.key)
                };
                let label_style = if selected {
                    Style::default()
                        .fg(Theme::TEXT_ACCENT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:label_width$}", def.label), label_style),
                    Span::raw("  "),
                    Span::raw(value),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Theme::SELECTED_BG));
        frame.render_stateful_widget(list, list_area, &mut state.settings.list_state);

        // Help text for the selected field
        let def = state.settings.selected_field();
        let detail = Paragraph::new(def.help)
            .style(Style::default().fg(Theme::TEXT_MUTED))
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(detail, detail_area);
    }
}
