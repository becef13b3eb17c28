//! End-to-end tests for the game session: moves, time travel, status.

use strictly_rewind::{
    Board, GameConfig, GamePhase, GameSession, JumpError, MoveError, Position, Square, Status,
    TicTacToePlayer as Player,
};

fn session_after(cells: &[usize]) -> GameSession {
    GameSession::replay(GameConfig::default(), cells).expect("Valid replay")
}

#[test]
fn test_first_move_is_x_then_parity_says_o() {
    let mut session = GameSession::new();
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.to_move(), Player::X);

    session.on_cell_clicked(4).unwrap();

    assert_eq!(
        session.current_board().get(Position::Center),
        Square::Occupied(Player::X)
    );
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.to_move(), Player::O);
}

#[test]
fn test_win_scenario() {
    let mut session = session_after(&[0, 4, 1, 3, 2]);

    assert_eq!(session.status(), Status::Winner(Player::X));
    assert_eq!(session.status_message(), "Winner: X");
    assert_eq!(
        session.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );

    let before = session.history().clone();
    for cell in [5, 6, 7, 8] {
        assert_eq!(session.on_cell_clicked(cell), Err(MoveError::GameOver));
    }
    assert_eq!(session.history(), &before);
}

#[test]
fn test_draw_scenario() {
    let session = session_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(session.move_count(), 9);
    assert_eq!(session.phase(), GamePhase::Drawn);
    assert_eq!(session.status(), Status::Draw);
    assert_eq!(session.status_message(), "Game over: draw");
    assert_eq!(session.winning_line(), None);
}

#[test]
fn test_click_on_drawn_board_is_rejected() {
    let mut session = session_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let before = session.history().clone();

    for cell in 0..9 {
        assert_eq!(session.on_cell_clicked(cell), Err(MoveError::GameOver));
    }
    assert_eq!(session.history(), &before);
    assert_eq!(session.status(), Status::Draw);
}

#[test]
fn test_no_line_forms_during_draw_scenario() {
    let cells = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    for n in 0..=cells.len() {
        let session = session_after(&cells[..n]);
        assert_eq!(session.phase().winner(), None, "after {} moves", n);
    }
}

#[test]
fn test_jump_back_into_decided_game_and_click_occupied() {
    let mut session = session_after(&[0, 4, 1, 3, 2]);
    session.on_history_entry_clicked(2).unwrap();

    // Snapshot 2 holds X at 0 and O at 4, nothing else.
    let snapshot = session.current_board();
    assert_eq!(snapshot.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(snapshot.get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(snapshot.occupied_count(), 2);
    assert_eq!(session.phase(), GamePhase::InProgress);

    let before = session.history().clone();
    assert_eq!(
        session.on_cell_clicked(4),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(session.history(), &before);
    assert_eq!(session.cursor(), 2);
}

#[test]
fn test_jump_back_then_play_discards_future() {
    let mut session = session_after(&[0, 4, 1, 3]);
    assert_eq!(session.list_history().len(), 5);

    session.on_history_entry_clicked(2).unwrap();
    session.on_cell_clicked(8).unwrap();

    let history = session.list_history();
    assert_eq!(history.len(), 4);
    assert_eq!(history[3].get(Position::BottomRight), Square::Occupied(Player::X));
    assert!(history[3].is_empty(Position::TopCenter));
    assert_eq!(session.cursor(), 3);
    assert_eq!(session.to_move(), Player::O);
}

#[test]
fn test_resume_play_after_jumping_out_of_win() {
    let mut session = session_after(&[0, 4, 1, 3, 2]);
    session.on_history_entry_clicked(4).unwrap();
    assert_eq!(session.status(), Status::NextTurn(Player::X));

    // X blocks a different square instead of winning.
    session.on_cell_clicked(5).unwrap();
    assert_eq!(session.list_history().len(), 6);
    assert_eq!(session.status(), Status::NextTurn(Player::O));
}

#[test]
fn test_jump_is_idempotent() {
    let mut session = session_after(&[0, 4, 1]);
    let boards = session.list_history().to_vec();

    session.on_history_entry_clicked(1).unwrap();
    let first = session.current_board();
    session.on_history_entry_clicked(1).unwrap();

    assert_eq!(session.current_board(), first);
    assert_eq!(session.list_history(), boards.as_slice());
}

#[test]
fn test_out_of_range_jump_is_rejected() {
    let mut session = session_after(&[0, 4]);
    assert_eq!(
        session.on_history_entry_clicked(3),
        Err(JumpError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(session.cursor(), 2);
}

#[test]
fn test_history_length_follows_record_rule() {
    let cells = [0, 4, 1, 3];
    let full = session_after(&cells);
    for c in 0..full.list_history().len() {
        let mut session = session_after(&cells);
        session.on_history_entry_clicked(c).unwrap();
        let board = session.current_board();
        let free = Position::ALL
            .into_iter()
            .find(|pos| board.is_empty(*pos))
            .expect("Undecided snapshot has a free square");
        session.on_cell_clicked(free.to_index()).unwrap();
        assert_eq!(session.list_history().len(), c + 2);
        assert_eq!(session.cursor(), c + 1);
    }
}

#[test]
fn test_board_at_and_history_listing() {
    let session = session_after(&[0, 4]);
    assert_eq!(session.board_at(0), Some(Board::new()));
    assert_eq!(session.board_at(3), None);
    assert_eq!(session.list_history()[2], session.current_board());
}

#[test]
fn test_status_messages_through_a_game() {
    let mut session = GameSession::with_config(GameConfig::new("Cross", "Nought").unwrap());
    assert_eq!(session.status_message(), "Game start, Cross moves first");
    session.on_cell_clicked(0).unwrap();
    assert_eq!(session.status_message(), "Next player: Nought");
    session.on_cell_clicked(4).unwrap();
    assert_eq!(session.status_message(), "Next player: Cross");
}

#[test]
fn test_restart_returns_to_start() {
    let mut session = session_after(&[0, 4, 1, 3, 2]);
    session.restart();
    assert_eq!(session.list_history(), &[Board::new()]);
    assert_eq!(session.status(), Status::Start(Player::X));
    session.on_cell_clicked(8).unwrap();
    assert_eq!(session.move_count(), 1);
}

#[test]
fn test_replay_stops_at_first_rejected_click() {
    let result = GameSession::replay(GameConfig::default(), &[0, 0, 1]);
    assert_eq!(result.err(), Some(MoveError::SquareOccupied(Position::TopLeft)));
}
