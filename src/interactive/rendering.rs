//! TUI rendering with ratatui
//!
//! Board grid, scores and match log for the Wordsmush interface.

use super::app::{App, MessageStyle};
use crate::core::{Ownership, PlayerId, Tile};
use crate::session::HELP_LINES;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and word
            Constraint::Percentage(45), // Scores, log, messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDSMUSH")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let board_height = u16::try_from(app.session.game().board().height()).unwrap_or(u16::MAX - 3);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height + 3), // Board with labels and borders
            Constraint::Length(4),                // Current word
            Constraint::Min(3),                   // Help
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_word(f, app, chunks[1]);
    render_help(f, app, chunks[2]);
}

/// Style of a board cell by ownership
#[must_use]
pub fn tile_style(tile: &Tile) -> Style {
    match tile.ownership() {
        Ownership::Untaken => Style::default().fg(Color::Black).bg(Color::White),
        Ownership::Taken(PlayerId::One) => Style::default().fg(Color::Cyan).bg(Color::Blue),
        Ownership::Taken(PlayerId::Two) => Style::default().fg(Color::Red).bg(Color::Yellow),
        Ownership::Protected(PlayerId::One) => Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        Ownership::Protected(PlayerId::Two) => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.game().board();
    let selection = app.session.selection();

    let mut header = vec![Span::raw("    ")];
    for x in 1..=board.width() {
        header.push(Span::styled(
            format!("{x:^3}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let mut lines = vec![Line::from(header)];

    for y in 0..board.height() {
        let mut spans = vec![Span::styled(
            format!("{:>3} ", y + 1),
            Style::default().fg(Color::DarkGray),
        )];
        for tile in board.row(y) {
            let mut style = tile_style(tile);
            if selection.contains(tile.position()) {
                style = Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD);
            }
            if tile.position() == app.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(
                format!(" {} ", char::from(tile.letter()).to_ascii_uppercase()),
                style,
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let game = session.game();
    let word = session.selection();

    let (text, style) = if word.is_empty() {
        ("(no letters selected)".to_string(), Style::default().fg(Color::DarkGray))
    } else if game.is_playable(word) {
        (
            word.text().to_uppercase(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            word.text().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mover = session.to_move();
    let mut content = vec![Line::from(vec![
        Span::raw("Word: "),
        Span::styled(text, style),
    ])];
    if !word.is_empty() {
        let potential = game.potential_score(mover, word);
        content.push(Line::from(format!(
            "Would make it {}-{}",
            potential.one, potential.two
        )));
    }

    let title = if session.is_over() {
        " Match over ".to_string()
    } else {
        format!(" {} to play ", game.player(mover).name())
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = if app.show_help {
        HELP_LINES.iter().map(|line| Line::from(*line)).collect()
    } else {
        vec![Line::from("Type 'help' and press Enter to list commands")]
    };

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title(" Help ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Score gauge
            Constraint::Percentage(50), // Turn log
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_scores(f, app, chunks[0]);
    render_log(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_scores(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let scores = game.scores();
    let tiles = game.board().tiles().len();
    let ratio = if tiles == 0 {
        0.0
    } else {
        scores.one as f64 / tiles as f64
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Scores ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::Red))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!(
            "{} {} - {} {} ({} untaken)",
            game.player(PlayerId::One).name(),
            scores.one,
            scores.two,
            game.player(PlayerId::Two).name(),
            tiles - scores.total()
        ));

    f.render_widget(gauge, area);
}

fn render_log(f: &mut Frame, app: &App, area: Rect) {
    let log = app.session.log();
    let game = app.session.game();
    let items: Vec<ListItem> = log
        .iter()
        .enumerate()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, record)| {
            let color = match record.player {
                PlayerId::One => Color::LightBlue,
                PlayerId::Two => Color::LightRed,
            };
            ListItem::new(format!(
                "{}: {} {} [{}]",
                i + 1,
                game.player(record.player).name(),
                record.outcome,
                record.scores
            ))
            .style(Style::default().fg(color))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Turns ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = if app.session.is_over() {
        (" Match over | Esc to quit ", Color::Green)
    } else {
        (
            " Command (x,y | x,y p | rem p | clear | play | pass | resign) ",
            Color::Yellow,
        )
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.game().history().len();
    let text = format!(
        "Words played: {history} | Arrows: move | Space: pick tile | Backspace: undo letter | Enter: play | Esc: quit"
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;
    use crate::dictionary::Dictionary;
    use crate::game::{Game, Player};
    use crate::session::{Seat, Session};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_and_scores() {
        let dictionary = Dictionary::from_words(["cab"]);
        let board = Board::from_letters(3, 2, "cabtxx").unwrap();
        let game = Game::new(&dictionary, board, [Player::new("Ann"), Player::new("Bob")]);
        let app = App::new(Session::new(game, [Seat::Human, Seat::Human]));

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("WORDSMUSH"));
        assert!(text.contains(" C  A  B "));
        assert!(text.contains("Ann 0 - 0 Bob"));
        assert!(text.contains("Ann to play"));
    }

    #[test]
    fn untaken_tiles_are_white() {
        let board = Board::from_letters(1, 1, "a").unwrap();
        let style = tile_style(&board.tiles()[0]);
        assert_eq!(style.bg, Some(Color::White));
    }

    #[test]
    fn help_lines_show_when_toggled() {
        let dictionary = Dictionary::from_words(["cab"]);
        let board = Board::from_letters(3, 2, "cabtxx").unwrap();
        let game = Game::new(&dictionary, board, [Player::new("Ann"), Player::new("Bob")]);
        let mut app = App::new(Session::new(game, [Seat::Human, Seat::Human]));
        app.show_help = true;

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("resign"));
    }
}
