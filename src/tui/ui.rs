//! Stateless UI rendering for vanishing tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::App;
use crate::games::vanishing::{MAX_PIECES, Player, Position, RoundState};
use crate::score::ScoreTracker;
use crate::session::View;

/// Renders the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    match (app.view(), app.round()) {
        (View::Playing, Some(round)) => draw_game(frame, app, round),
        _ => draw_menu(frame),
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Magenta,
        Player::O => Color::Cyan,
    }
}

fn draw_menu(frame: &mut Frame) {
    let area = center_rect(frame.area(), 48, 11);

    let text = vec![
        Line::from(Span::styled(
            "VANISHING TIC-TAC-TOE",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Three pieces each. Place a fourth"),
        Line::from("and your oldest piece vanishes."),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: start    q: quit",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let menu = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(menu, area);
}

fn draw_game(frame: &mut Frame, app: &App, round: &RoundState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Panels + board
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Vanishing Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(chunks[1]);

    let scores = app.session().scores();
    draw_player_panel(frame, columns[0], round, scores, Player::O);
    draw_board(frame, columns[1], app, round);
    draw_player_panel(frame, columns[2], round, scores, Player::X);

    let help = "arrows/1-9: move  enter: place  r: restart  m: menu  q: quit";
    let status = if app.status_message().is_empty() {
        help
    } else {
        app.status_message()
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    if let Some(winner) = round.winner() {
        draw_win_overlay(frame, winner);
    }
}

fn draw_player_panel(
    frame: &mut Frame,
    area: Rect,
    round: &RoundState,
    scores: &ScoreTracker,
    player: Player,
) {
    let is_turn = round.current_player() == player && !round.is_decided();
    let color = player_color(player);
    let border_style = if is_turn {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let pieces = if round.is_rotating(player) {
        "Rotate mode".to_string()
    } else {
        format!(
            "{} of {} pieces left",
            round.pieces_remaining(player),
            MAX_PIECES
        )
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Player {}", player),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Wins: {}", scores.score(player))),
        Line::from(pieces),
    ];
    if is_turn {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "YOUR TURN",
            Style::default().fg(Color::Black).bg(color),
        )));
    }

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(panel, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, round: &RoundState) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            if let Some(pos) = Position::from_index(row * 3 + col) {
                draw_cell(frame, cell_area, app, round, pos);
            }
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, round: &RoundState, pos: Position) {
    let cell = pos.to_index();
    let on_win_line = round.winning_line().is_some_and(|line| line.contains(cell));

    let (symbol, mut style) = match round.piece_at(cell) {
        Some(player) => {
            let mut style = Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD);
            if round.dying_piece() == Some(cell) {
                style = style.add_modifier(Modifier::SLOW_BLINK | Modifier::DIM);
            }
            (player.to_string(), style)
        }
        None => match app.ghost() {
            Some((ghost_cell, player)) if ghost_cell == cell => (
                player.to_string(),
                Style::default().fg(player_color(player)).add_modifier(Modifier::DIM),
            ),
            _ => ((cell + 1).to_string(), Style::default().fg(Color::DarkGray)),
        },
    };

    if on_win_line {
        style = style.bg(Color::White).fg(Color::Black);
    } else if pos == app.cursor() && !round.is_decided() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center)
        .block(Block::default());
    frame.render_widget(paragraph, vertical_middle(area));
}

fn draw_win_overlay(frame: &mut Frame, winner: Player) {
    let area = center_rect(frame.area(), 36, 7);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("PLAYER {} WINS", winner),
            Style::default()
                .fg(player_color(winner))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("r: rematch    m: menu"),
    ];

    let modal = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Victory"));
    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn vertical_middle(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_menu_renders_title() {
        let app = App::new(Session::default());
        assert!(render(&app).contains("VANISHING TIC-TAC-TOE"));
    }

    #[test]
    fn test_game_renders_panels() {
        let mut app = App::new(Session::default());
        app.handle_action(Action::Start);
        let screen = render(&app);
        assert!(screen.contains("Player O"));
        assert!(screen.contains("Player X"));
        assert!(screen.contains("YOUR TURN"));
    }

    #[test]
    fn test_win_overlay_renders() {
        let mut app = App::new(Session::default());
        app.handle_action(Action::Start);
        for cell in [3, 0, 4, 1, 8, 2] {
            app.handle_action(Action::Place(cell));
        }
        assert!(render(&app).contains("PLAYER X WINS"));
    }
}
