use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::confirm_dialog::ConfirmDialog;
use super::footer::Footer;
use super::header::Header;
use super::help_overlay::HelpOverlay;
use super::hooks::HooksScreen;
use super::settings_form::SettingsForm;
use crate::app::input_mode::InputMode;
use crate::app::mode::Mode;
use crate::app::state::AppState;

pub struct MainLayout;

impl MainLayout {
    /// Draws the whole frame: header tabs, the active screen, the
    /// footer, and any overlay on top.
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let [header_area, content_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        Header::render(frame, header_area, state);

        match state.ui.mode {
            Mode::General => SettingsForm::render(frame, content_area, state),
            Mode::Hooks => HooksScreen::render(frame, content_area, state),
        }

        Footer::render(frame, footer_area, state);

        match state.ui.input_mode {
            InputMode::ConfirmDialog => ConfirmDialog::render(frame, state),
            InputMode::Help => HelpOverlay::render(frame, state),
            InputMode::Normal | InputMode::FieldEdit => {}
        }
    }
}
