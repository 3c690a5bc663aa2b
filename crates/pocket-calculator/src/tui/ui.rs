//! TUI rendering
//!
//! Display, history line, clickable keypad and a one-line key help. Layout is
//! a pure function of the terminal area, so mouse hit-testing recomputes it
//! instead of remembering where things were drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use crate::command::Command;
use crate::keypad::{Keypad, KeypadButton};

const HELP_LINE: &str = "0-9 . digits  + - * / ops  s √  Enter =  Esc AC  Bksp CE  q quit";

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// History line
    pub history: Rect,
    /// Main display
    pub display: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Key help
    pub help: Rect,
}

/// Splits the terminal area into its regions
#[must_use]
pub fn layout(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // History
            Constraint::Length(3), // Display
            Constraint::Min(5),    // Keypad
            Constraint::Length(1), // Help
        ])
        .split(area);

    Areas {
        history: chunks[0],
        display: chunks[1],
        keypad: chunks[2],
        help: chunks[3],
    }
}

/// Screen rectangle of one keypad button inside the keypad region
#[must_use]
pub fn button_rect(keypad_area: Rect, keypad: &Keypad, button: &KeypadButton) -> Rect {
    let (rows, cols) = keypad.dimensions();
    let cell_width = keypad_area.width / cols as u16;
    let cell_height = keypad_area.height / rows as u16;

    Rect::new(
        keypad_area.x + button.col as u16 * cell_width,
        keypad_area.y + button.row as u16 * cell_height,
        cell_width * button.span as u16,
        cell_height,
    )
}

/// Finds the keypad command under a terminal cell
#[must_use]
pub fn button_at(area: Rect, keypad: &Keypad, column: u16, row: u16) -> Option<Command> {
    let keypad_area = layout(area).keypad;
    keypad
        .buttons()
        .iter()
        .find(|button| {
            let rect = button_rect(keypad_area, keypad, button);
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|button| button.command)
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.engine().history_text(),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" History ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let engine = self.app.engine();
        let style = if engine.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(engine.current_input(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        let keypad = self.app.keypad();
        for button in keypad.buttons() {
            let rect = button_rect(area, keypad, button);
            if rect.width < 3 || rect.height < 1 {
                continue;
            }

            let pressed = self.app.last_command() == Some(button.command);
            let style = if pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(button_color(button.command))
            };

            let paragraph = Paragraph::new(Span::styled(button.label(), style))
                .alignment(Alignment::Center);
            if rect.height >= 3 {
                paragraph
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(Color::DarkGray)),
                    )
                    .render(rect, buf);
            } else {
                paragraph.render(rect, buf);
            }
        }
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)))
            .render(area, buf);
    }
}

fn button_color(command: Command) -> Color {
    match command {
        Command::Input(_) => Color::White,
        Command::Operator(_) | Command::Function(_) => Color::Cyan,
        Command::Evaluate => Color::Green,
        Command::ResetAll | Command::ResetEntry => Color::Red,
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = layout(area);
        self.render_history(areas.history, buf);
        self.render_display(areas.display, buf);
        self.render_keypad(areas.keypad, buf);
        Self::render_help(areas.help, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InputSymbol, Operator};
    use ratatui::{backend::TestBackend, Terminal};

    fn create_test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 24)).unwrap()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app_after(commands: &[Command]) -> CalculatorApp {
        let mut app = CalculatorApp::new();
        for command in commands {
            app.apply(*command);
        }
        app
    }

    #[test]
    fn test_layout_regions() {
        let areas = layout(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.history.height, 3);
        assert_eq!(areas.display.height, 3);
        assert_eq!(areas.help.height, 1);
        assert_eq!(areas.keypad.height, 15);
        assert_eq!(areas.keypad.width, 78);
    }

    #[test]
    fn test_render_initial() {
        let mut terminal = create_test_terminal();
        let app = CalculatorApp::new();
        terminal.draw(|f| render(&app, f)).unwrap();
        let content = screen_text(&terminal);
        assert!(content.contains("History"));
        assert!(content.contains("AC"));
        assert!(content.contains("CE"));
        assert!(content.contains("Esc AC"));
    }

    #[test]
    fn test_render_result_and_history() {
        let mut terminal = create_test_terminal();
        let app = app_after(&[
            Command::Input(InputSymbol::Digit(6)),
            Command::Operator(Operator::Multiply),
            Command::Input(InputSymbol::Digit(7)),
            Command::Evaluate,
        ]);
        terminal.draw(|f| render(&app, f)).unwrap();
        let content = screen_text(&terminal);
        assert!(content.contains("42"));
        assert!(content.contains("6 × 7 ="));
    }

    #[test]
    fn test_render_error() {
        let mut terminal = create_test_terminal();
        let app = app_after(&[
            Command::Input(InputSymbol::Digit(5)),
            Command::Operator(Operator::Divide),
            Command::Input(InputSymbol::Digit(0)),
            Command::Evaluate,
        ]);
        terminal.draw(|f| render(&app, f)).unwrap();
        assert!(screen_text(&terminal).contains("Error"));
    }

    #[test]
    fn test_render_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        let app = CalculatorApp::new();
        terminal.draw(|f| render(&app, f)).unwrap();
    }

    #[test]
    fn test_button_at_hits_every_button() {
        let area = Rect::new(0, 0, 80, 24);
        let keypad = Keypad::new();
        let keypad_area = layout(area).keypad;
        for button in keypad.buttons() {
            let rect = button_rect(keypad_area, &keypad, button);
            let (x, y) = (rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(button_at(area, &keypad, x, y), Some(button.command), "{}", button.id);
        }
    }

    #[test]
    fn test_button_at_outside_keypad() {
        let keypad = Keypad::new();
        assert_eq!(button_at(Rect::new(0, 0, 80, 24), &keypad, 0, 0), None);
        assert_eq!(button_at(Rect::new(0, 0, 80, 24), &keypad, 40, 2), None);
    }

    #[test]
    fn test_wide_zero_button() {
        let keypad = Keypad::new();
        let keypad_area = layout(Rect::new(0, 0, 80, 24)).keypad;
        let zero = keypad.find_by_id("btn-0").unwrap();
        let point = keypad.find_by_id("btn-decimal").unwrap();
        let zero_rect = button_rect(keypad_area, &keypad, zero);
        let point_rect = button_rect(keypad_area, &keypad, point);
        assert_eq!(zero_rect.width, point_rect.width * 2);
        assert_eq!(zero_rect.right(), point_rect.x);
    }
}
