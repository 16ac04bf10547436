//! Test harness for rendering `AppState` into an in-memory terminal.

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::render;
use crate::state::AppState;

pub struct TestTui {
    terminal: Terminal<TestBackend>,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("failed to create terminal");
        Self { terminal }
    }

    /// 80x24.
    pub fn default_size() -> Self {
        Self::new(80, 24)
    }

    /// Renders `app` and returns the screen as text.
    pub fn render(&mut self, app: &AppState) -> String {
        self.terminal
            .draw(|frame| render::render(app, frame))
            .expect("failed to draw");
        buffer_to_string(self.terminal.backend().buffer())
    }

    pub fn assert_contains(&mut self, app: &AppState, expected: &str) {
        let rendered = self.render(app);
        assert!(
            rendered.contains(expected),
            "Expected to find '{expected}' in:\n{rendered}"
        );
    }

    pub fn assert_not_contains(&mut self, app: &AppState, unexpected: &str) {
        let rendered = self.render(app);
        assert!(
            !rendered.contains(unexpected),
            "Expected NOT to find '{unexpected}' in:\n{rendered}"
        );
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in 0..area.height {
        let mut line = String::new();
        for x in 0..area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        result.push_str(line.trim_end());
        result.push('\n');
    }

    result
}

/// Key event builders.
pub mod keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn char(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    pub fn enter() -> KeyEvent {
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
    }

    pub fn esc() -> KeyEvent {
        KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
    }

    pub fn tab() -> KeyEvent {
        KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}
