use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::overlay::{centered_rect, clear_area, render_scrim};
use crate::app::keybindings::{
    CONFIRM_DIALOG_KEYS, FIELD_EDIT_KEYS, GENERAL_KEYS, GLOBAL_KEYS, HOOKS_KEYS, KeyBinding,
    NAVIGATION_KEYS,
};
use crate::app::state::AppState;
use crate::ui::theme::Theme;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = centered_rect(
            frame.area(),
            Constraint::Percentage(60),
            Constraint::Percentage(70),
        );
        render_scrim(frame);
        clear_area(frame, area);

        let mut lines = Vec::new();
        Self::push_section(&mut lines, "Global", GLOBAL_KEYS);
        Self::push_section(&mut lines, "General Settings", GENERAL_KEYS);
        Self::push_section(&mut lines, "Service Hooks", HOOKS_KEYS);
        Self::push_section(&mut lines, "Navigation", NAVIGATION_KEYS);
        Self::push_section(&mut lines, "Field Edit", FIELD_EDIT_KEYS);
        Self::push_section(&mut lines, "Confirm Dialog", CONFIRM_DIALOG_KEYS);

        let help = Paragraph::new(lines)
            .scroll((state.ui.help_scroll_offset, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .style(Style::default().bg(Theme::MODAL_BG)),
            );
        frame.render_widget(help, area);
    }

    fn push_section(lines: &mut Vec<Line<'static>>, title: &'static str, keys: &[KeyBinding]) {
        if !lines.is_empty() {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            title,
            Style::default()
                .fg(Theme::TEXT_ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        for binding in keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:12}", binding.key), Style::default().fg(Theme::TEXT_ACCENT)),
                Span::raw(binding.description),
            ]));
        }
    }
}
