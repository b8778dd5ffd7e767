pub mod fixtures;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Modifier;

use hookdash::app::state::AppState;
use hookdash::ui::components::MainLayout;

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub fn create_test_state() -> AppState {
    AppState::new("acme", "backend")
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &mut AppState) -> String {
    terminal
        .draw(|frame| MainLayout::render(frame, state))
        .unwrap();

    buffer_to_string(terminal.backend().buffer())
}

/// Style modifier of the first cell where `needle` starts in the
/// rendered buffer. Empty when the text is not on screen.
pub fn modifier_at(terminal: &Terminal<TestBackend>, needle: &str) -> Modifier {
    let buffer = terminal.backend().buffer();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let mut run = String::new();
            for col in x..buffer.area.width {
                run.push_str(buffer.cell((col, y)).unwrap().symbol());
                if run.len() >= needle.len() {
                    break;
                }
            }
            if run.starts_with(needle) {
                return buffer.cell((x, y)).unwrap().modifier;
            }
        }
    }
    Modifier::empty()
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}
