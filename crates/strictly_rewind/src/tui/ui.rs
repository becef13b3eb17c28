//! Stateless UI rendering for the board, history list, and status line.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use strictly_rewind::{Position, Square, TicTacToePlayer as Player};

use super::app::{App, Focus};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + status
            Constraint::Min(9),    // Board + history
            Constraint::Length(3), // Last event
        ])
        .split(frame.area());

    let status = Paragraph::new(app.session().status_message())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Strictly Rewind"));
    frame.render_widget(status, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, panes[0], app);
    draw_history(frame, panes[1], app);

    let footer = Paragraph::new(format!(
        "{}   [1-9] place  [Tab] switch pane  [r] restart  [q] quit",
        app.last_event()
    ))
    .style(Style::default().fg(Color::Yellow))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(pane_title("Board", app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            let sep = Paragraph::new("───────┼───────┼───────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let winning = app.session().winning_line();
    let board = app.session().current_board();

    let mut spans = Vec::with_capacity(5);
    for col in 0..3 {
        let Some(pos) = Position::from_row_col(row, col) else {
            continue;
        };
        let (symbol, mut style) = match board.get(pos) {
            Square::Empty => (format!("{}", pos.to_index() + 1), Style::default().fg(Color::DarkGray)),
            Square::Occupied(player) => (
                app.session().label(player).to_string(),
                Style::default()
                    .fg(player_color(player))
                    .add_modifier(Modifier::BOLD),
            ),
        };
        if winning.is_some_and(|line| line.contains(&pos)) {
            style = style.bg(Color::Indexed(54)).fg(Color::White);
        }
        if app.focus() == Focus::Board && pos == app.cursor() {
            style = style.bg(Color::White).fg(Color::Black);
        }
        spans.push(Span::styled(format!("{:^7}", symbol), style));
        if col < 2 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let items: Vec<ListItem> = (0..session.list_history().len())
        .map(|index| {
            let marker = if index == session.cursor() { "▶" } else { " " };
            let text = if index == 0 {
                format!("{} #{}. Go to game start", marker, index)
            } else {
                format!("{} #{}. Go to move {}", marker, index, index)
            };
            let style = if app.focus() == Focus::History && index == app.selected() {
                Style::default().bg(Color::White).fg(Color::Black)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(pane_title("History", app.focus() == Focus::History)),
    );
    frame.render_widget(list, area);
}

fn pane_title(name: &str, focused: bool) -> String {
    if focused {
        format!("{} *", name)
    } else {
        name.to_string()
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use strictly_rewind::{GameConfig, GameSession};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_status_and_history() {
        let session = GameSession::replay(GameConfig::default(), &[0, 4, 1, 3, 2]).unwrap();
        let screen = render(&App::new(session));
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("#0. Go to game start"));
        assert!(screen.contains("#5. Go to move 5"));
    }
}
