use crate::app::input_mode::InputMode;
use crate::app::keybindings::HELP_TOTAL_LINES;
use crate::app::mode::Mode;

/// Chrome-level UI state shared across screens.
#[derive(Debug, Default)]
pub struct UiState {
    pub mode: Mode,
    pub input_mode: InputMode,
    pub help_scroll_offset: u16,
    pub terminal_height: u16,
}

impl UiState {
    pub fn next_tab(&mut self) {
        self.mode = match self.mode {
            Mode::General => Mode::Hooks,
            Mode::Hooks => Mode::General,
        };
    }

    pub fn previous_tab(&mut self) {
        // Two tabs, so the cycle is symmetric.
        self.next_tab();
    }

    /// Max scroll for the help overlay. The modal is 70% height with a
    /// 2-line border, so the viewport is terminal_height * 0.7 - 2.
    pub fn help_max_scroll(&self) -> u16 {
        let viewport = (usize::from(self.terminal_height) * 70 / 100).saturating_sub(2);
        u16::try_from(HELP_TOTAL_LINES.saturating_sub(viewport)).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cycle_both_directions() {
        let mut ui = UiState::default();

        ui.next_tab();
        assert_eq!(ui.mode, Mode::Hooks);

        ui.next_tab();
        assert_eq!(ui.mode, Mode::General);

        ui.previous_tab();
        assert_eq!(ui.mode, Mode::Hooks);
    }

    #[test]
    fn help_scroll_disabled_when_content_fits() {
        let mut ui = UiState::default();
        ui.terminal_height = 120;

        assert_eq!(ui.help_max_scroll(), 0);
    }
}
