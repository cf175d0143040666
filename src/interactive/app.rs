//! TUI application state and logic

use crate::core::{PlayerId, Position};
use crate::session::{Command, EndReason, Response, Session, TurnRecord};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Application state
pub struct App<'d> {
    pub session: Session<'d>,
    pub cursor: Position,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub show_help: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Number of messages kept for the message panel
const MAX_MESSAGES: usize = 6;

impl<'d> App<'d> {
    #[must_use]
    pub fn new(session: Session<'d>) -> Self {
        let mut app = Self {
            session,
            cursor: Position::new(0, 0),
            input_buffer: String::new(),
            messages: Vec::new(),
            show_help: false,
            should_quit: false,
        };
        app.add_message(
            "Welcome! Arrows + Space pick tiles, Enter plays. Type 'help' for commands.",
            MessageStyle::Info,
        );
        app.run_computers();
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn report_turn(&mut self, record: &TurnRecord) {
        let name = self.session.game().player(record.player).name().to_string();
        let style = if record.player == PlayerId::One {
            MessageStyle::Info
        } else {
            MessageStyle::Success
        };
        self.add_message(&format!("{name} {} ({})", record.outcome, record.scores), style);
    }

    fn report_result(&mut self) {
        let Some(result) = self.session.result() else {
            return;
        };
        let game = self.session.game();
        let reason = match result.reason {
            EndReason::BoardFull => "Every tile is taken".to_string(),
            EndReason::Resigned(player) => format!("{} resigned", game.player(player).name()),
            EndReason::Passes => "Both players passed".to_string(),
        };
        let verdict = match result.winner {
            Some(winner) => format!(
                "{} wins {}-{}!",
                game.player(winner).name(),
                result.scores.get(winner),
                result.scores.get(winner.opponent())
            ),
            None => format!("Draw at {} each!", result.scores.one),
        };
        info!(%reason, %verdict, "match finished");
        self.add_message(&format!("{reason}. {verdict} Press Esc to quit."), MessageStyle::Success);
    }

    /// Let computer seats move until a human is to play
    pub fn run_computers(&mut self) {
        match self.session.advance_computers() {
            Ok(records) => {
                for record in &records {
                    self.report_turn(record);
                }
            }
            Err(err) => {
                error!(%err, "computer turn failed");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
        if self.session.is_over() {
            self.report_result();
        }
    }

    /// Apply one command for the human to move
    pub fn apply(&mut self, command: Command) {
        match self.session.apply(command) {
            Ok(Response::Help) => self.show_help = !self.show_help,
            Ok(Response::Selection) => {}
            Ok(Response::Turn(_)) => {
                if let Some(record) = self.session.log().last().cloned() {
                    self.report_turn(&record);
                }
                if self.session.is_over() {
                    self.report_result();
                } else {
                    self.run_computers();
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Parse and apply the typed command
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match input.parse::<Command>() {
            Ok(command) => self.apply(command),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Move the tile cursor, staying on the board
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let board = self.session.game().board();
        let x = self.cursor.x.saturating_add_signed(dx).min(board.width() - 1);
        let y = self.cursor.y.saturating_add_signed(dy).min(board.height() - 1);
        self.cursor = Position::new(x, y);
    }

    /// Add the tile under the cursor to the word
    pub fn select_cursor_tile(&mut self) {
        self.apply(Command::AddTile {
            x: self.cursor.x,
            y: self.cursor.y,
            position: None,
        });
    }

    /// Drop the last letter of the word
    pub fn remove_last_letter(&mut self) {
        let len = self.session.selection().len();
        if len > 0 {
            self.apply(Command::Remove(len - 1));
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ if self.session.is_over() => {}
            KeyCode::Up => self.move_cursor(0, -1),
            KeyCode::Down => self.move_cursor(0, 1),
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Char(' ') if self.input_buffer.is_empty() => self.select_cursor_tile(),
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                if self.input_buffer.pop().is_none() {
                    self.remove_last_letter();
                }
            }
            KeyCode::Enter => {
                if self.input_buffer.trim().is_empty() {
                    self.input_buffer.clear();
                    self.apply(Command::Play);
                } else {
                    self.submit_input();
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored first.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(%err, "TUI stopped with an error");
    }

    res
}

fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::dictionary::Dictionary;
    use crate::game::{Game, Player};
    use crate::session::Seat;
    use crate::solver::StrategyType;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn app(dictionary: &Dictionary, seats: [Seat; 2]) -> App<'_> {
        let board = Board::from_letters(3, 2, "cabtxx").unwrap();
        let game = Game::new(dictionary, board, [Player::new("Ann"), Player::new("Bob")]);
        App::new(Session::new(game, seats))
    }

    #[test]
    fn cursor_picks_tiles_and_enter_plays() {
        let dictionary = Dictionary::from_words(["cab"]);
        let mut app = app(&dictionary, [Seat::Human, Seat::Human]);

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, Position::new(2, 0));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.selection().text(), "cab");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.game().get_points(PlayerId::One), 3);
        assert_eq!(app.session.to_move(), PlayerId::Two);
    }

    #[test]
    fn typed_commands_are_applied() {
        let dictionary = Dictionary::from_words(["cab"]);
        let mut app = app(&dictionary, [Seat::Human, Seat::Human]);

        type_line(&mut app, "2,1");
        type_line(&mut app, "1,1 1");
        assert_eq!(app.session.selection().text(), "ca");
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.selection().text(), "c");

        type_line(&mut app, "help");
        assert!(app.show_help);
    }

    #[test]
    fn errors_become_messages() {
        let dictionary = Dictionary::from_words(["cab"]);
        let mut app = app(&dictionary, [Seat::Human, Seat::Human]);

        type_line(&mut app, "9,9");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);

        type_line(&mut app, "nonsense");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert!(app.messages.len() <= MAX_MESSAGES);
    }

    #[test]
    fn computer_replies_after_human_turn() {
        let dictionary = Dictionary::from_words(["cab", "tab"]);
        let mut app = app(
            &dictionary,
            [Seat::Human, Seat::Computer(StrategyType::Longest)],
        );

        type_line(&mut app, "pass");
        assert_eq!(app.session.log().len(), 2);
        assert_eq!(app.session.to_move(), PlayerId::One);
        assert_eq!(app.session.game().history(), &["cab"]);
    }

    #[test]
    fn event_loop_stops_on_escape() {
        let dictionary = Dictionary::from_words(["cab"]);
        let app = app(&dictionary, [Seat::Human, Seat::Human]);
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(100, 30)).unwrap();

        let mut keys = vec![KeyCode::Esc, KeyCode::Right].into_iter().rev();
        let result = run_app(&mut terminal, app, || {
            Ok(Event::Key(KeyEvent::new(
                keys.next().unwrap_or(KeyCode::Esc),
                KeyModifiers::NONE,
            )))
        });
        assert!(result.is_ok());
    }

    #[test]
    fn event_loop_reports_input_errors() {
        let dictionary = Dictionary::from_words(["cab"]);
        let app = app(&dictionary, [Seat::Human, Seat::Human]);
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(100, 30)).unwrap();

        let result = run_app(&mut terminal, app, || {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "input closed"))
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn escape_quits() {
        let dictionary = Dictionary::from_words(["cab"]);
        let mut app = app(&dictionary, [Seat::Human, Seat::Human]);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn cursor_stays_on_board() {
        let dictionary = Dictionary::from_words(["cab"]);
        let mut app = app(&dictionary, [Seat::Human, Seat::Human]);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, Position::new(0, 0));
        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, Position::new(2, 1));
    }
}
