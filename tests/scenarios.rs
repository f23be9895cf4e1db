use chess_rules::{Board, Color, Game, GameError, GameStatus, Move, Piece, PieceType, Position};

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn game_from(pieces: &[(&str, PieceType, Color)], turn: Color) -> Game {
    let mut board = Board::empty();
    for &(square, pt, color) in pieces {
        board.add_piece(pos(square), Piece::new(pt, color));
    }
    let mut game = Game::new();
    game.set_board(board);
    game.set_team_turn(turn);
    game
}

#[test]
fn opening_rook_pawn() {
    let game = Game::new();
    let mut moves = game.valid_moves(Position::new(2, 1)).unwrap();
    moves.sort();
    assert_eq!(
        moves,
        vec![
            Move::quiet(Position::new(2, 1), Position::new(3, 1)),
            Move::quiet(Position::new(2, 1), Position::new(4, 1)),
        ]
    );
}

#[test]
fn first_move_hands_turn_to_black() {
    let mut game = Game::new();
    game.make_move(mv("a2a4")).unwrap();
    assert_eq!(game.team_turn(), Color::Black);
    assert_eq!(game.board().get_piece(pos("a2")), None);
    assert_eq!(
        game.board().get_piece(pos("a4")),
        Some(Piece::new(PieceType::Pawn, Color::White))
    );
}

#[test]
fn bare_kings() {
    let game = game_from(
        &[
            ("e1", PieceType::King, Color::White),
            ("e8", PieceType::King, Color::Black),
        ],
        Color::White,
    );
    for color in [Color::White, Color::Black] {
        assert!(!game.is_in_checkmate(color).unwrap());
        assert!(!game.is_in_stalemate(color).unwrap());
    }
}

#[test]
fn queen_mates_on_open_e_file() {
    // Black's own rooks and pawns box the king in; the queen is defended from e1.
    let game = game_from(
        &[
            ("e8", PieceType::King, Color::Black),
            ("d8", PieceType::Rook, Color::Black),
            ("f8", PieceType::Rook, Color::Black),
            ("d7", PieceType::Pawn, Color::Black),
            ("f7", PieceType::Pawn, Color::Black),
            ("e7", PieceType::Queen, Color::White),
            ("e1", PieceType::Rook, Color::White),
            ("g1", PieceType::King, Color::White),
        ],
        Color::Black,
    );
    assert!(game.is_in_check(Color::Black).unwrap());
    assert!(game.is_in_checkmate(Color::Black).unwrap());
    assert!(game.all_valid_moves(Color::Black).unwrap().is_empty());
}

#[test]
fn pawn_promotes_to_queen() {
    let mut game = game_from(
        &[
            ("a7", PieceType::Pawn, Color::White),
            ("e1", PieceType::King, Color::White),
            ("e8", PieceType::King, Color::Black),
        ],
        Color::White,
    );
    let moves = game.valid_moves(pos("a7")).unwrap();
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.end == pos("a8")));
    for pt in PieceType::PROMOTIONS {
        assert!(moves.contains(&Move::new(pos("a7"), pos("a8"), Some(pt))));
    }

    game.make_move(Move::new(pos("a7"), pos("a8"), Some(PieceType::Queen))).unwrap();
    assert_eq!(
        game.board().get_piece(pos("a8")),
        Some(Piece::new(PieceType::Queen, Color::White))
    );
    // The new queen checks along the back rank.
    assert_eq!(game.status(Color::Black).unwrap(), GameStatus::Check);
}

#[test]
fn algebraic_parsing() {
    assert_eq!("e4".parse::<Position>(), Ok(Position::new(4, 5)));
    assert!("i9".parse::<Position>().is_err());
    assert!("z".parse::<Position>().is_err());
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        game.make_move(mv(m)).unwrap();
    }
    assert_eq!(game.team_turn(), Color::White);
    assert!(game.is_in_checkmate(Color::White).unwrap());
    assert!(!game.is_in_stalemate(Color::White).unwrap());
    assert!(!game.is_in_check(Color::Black).unwrap());
}

#[test]
fn illegal_move_leaves_board_unchanged() {
    let mut game = Game::new();
    game.make_move(mv("e2e4")).unwrap();
    game.make_move(mv("e7e5")).unwrap();
    let board = *game.board();

    let err = game.make_move(mv("e4e5")).unwrap_err();
    assert_eq!(err, GameError::IllegalMove(mv("e4e5")));
    assert_eq!(err.to_string(), "e4e5 is not a legal move");
    assert_eq!(*game.board(), board);
    assert_eq!(game.team_turn(), Color::White);
}

#[test]
fn json_round_trip_of_played_game() {
    let mut game = Game::new();
    for m in ["d2d4", "g8f6", "c1g5"] {
        game.make_move(mv(m)).unwrap();
    }
    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
    assert_eq!(
        restored.valid_moves(pos("f6")).unwrap(),
        game.valid_moves(pos("f6")).unwrap()
    );
}
