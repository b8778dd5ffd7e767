use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::app::mode::Mode;
use crate::app::state::AppState;
use crate::ui::theme::Theme;

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let titles = [Mode::General, Mode::Hooks].map(|m| Line::from(m.title()));
        let selected = match state.ui.mode {
            Mode::General => 0,
            Mode::Hooks => 1,
        };

        let tabs = Tabs::new(titles)
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Theme::TEXT_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default().borders(Borders::BOTTOM).title(format!(
                    " hookdash · {}/{} ",
                    state.runtime.organization, state.runtime.project
                )),
            );

        frame.render_widget(tabs, area);
    }
}
