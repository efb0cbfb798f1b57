//! Castling, en passant, the double step and promotion.

use super::*;
use crate::board::{MoveError, SpecialMoveKind};

fn castling_board() -> BoardBuilder {
    kings("e1", "e8")
        .piece(sq("a1"), PieceKind::Rook, Color::White)
        .piece(sq("h1"), PieceKind::Rook, Color::White)
}

fn castle_targets(board: &Board) -> Vec<String> {
    let moves: Vec<Position> = board
        .legal_special_moves(Color::White, sq("e1"))
        .iter()
        .filter(|mv| mv.kind == SpecialMoveKind::Castle)
        .map(|mv| mv.to)
        .collect();
    names(&moves)
}

#[test]
fn test_castling_both_sides() {
    let board = castling_board().build().unwrap();
    let moves = board.legal_special_moves(Color::White, sq("e1"));
    assert!(moves.contains(&SpecialMove::castle(sq("g1"), sq("h1"))));
    assert!(moves.contains(&SpecialMove::castle(sq("c1"), sq("a1"))));
}

#[test]
fn test_castle_kingside() {
    let mut board = castling_board().build().unwrap();
    let outcome = board
        .perform_special_move(sq("e1"), &SpecialMove::castle(sq("g1"), sq("h1")))
        .unwrap();
    board.calculate_moves();

    assert_eq!(outcome.notation, "O-O");
    assert_eq!(outcome.secondary, Some(sq("f1")));
    let king = board.piece_at(sq("g1")).unwrap();
    let rook = board.piece_at(sq("f1")).unwrap();
    assert_eq!(king.kind(), PieceKind::King);
    assert_eq!(rook.kind(), PieceKind::Rook);
    assert!(king.has_moved());
    assert!(rook.has_moved());
    assert!(board.piece_at(sq("e1")).is_none());
    assert!(board.piece_at(sq("h1")).is_none());
}

#[test]
fn test_castle_queenside() {
    let mut board = castling_board().build().unwrap();
    let outcome = board
        .perform_special_move(sq("e1"), &SpecialMove::castle(sq("c1"), sq("a1")))
        .unwrap();

    assert_eq!(outcome.notation, "O-O-O");
    assert_eq!(outcome.secondary, Some(sq("d1")));
    assert!(board.piece_at(sq("c1")).is_some_and(|p| p.kind() == PieceKind::King));
    assert!(board.piece_at(sq("d1")).is_some_and(|p| p.kind() == PieceKind::Rook));
}

#[test]
fn test_castling_needs_empty_corridor() {
    let board = castling_board()
        .piece(sq("b1"), PieceKind::Knight, Color::White)
        .build()
        .unwrap();
    assert_eq!(castle_targets(&board), vec!["g1"]);
}

#[test]
fn test_no_castling_out_of_check() {
    let board = castling_board()
        .piece(sq("e5"), PieceKind::Rook, Color::Black)
        .build()
        .unwrap();
    assert!(board.is_in_check(Color::White));
    assert!(castle_targets(&board).is_empty());
}

#[test]
fn test_no_castling_through_or_into_threats() {
    let through = castling_board()
        .piece(sq("f5"), PieceKind::Rook, Color::Black)
        .build()
        .unwrap();
    assert_eq!(castle_targets(&through), vec!["c1"]);

    let into = castling_board()
        .piece(sq("c5"), PieceKind::Rook, Color::Black)
        .build()
        .unwrap();
    assert_eq!(castle_targets(&into), vec!["g1"]);
}

#[test]
fn test_threat_on_rook_side_of_corridor_is_allowed() {
    let board = castling_board()
        .piece(sq("b5"), PieceKind::Rook, Color::Black)
        .build()
        .unwrap();
    assert_eq!(castle_targets(&board), vec!["c1", "g1"]);
}

#[test]
fn test_no_castling_after_king_or_rook_moved() {
    let moved_king = BoardBuilder::new()
        .moved_piece(sq("e1"), PieceKind::King, Color::White)
        .piece(sq("e8"), PieceKind::King, Color::Black)
        .piece(sq("a1"), PieceKind::Rook, Color::White)
        .piece(sq("h1"), PieceKind::Rook, Color::White)
        .build()
        .unwrap();
    assert!(castle_targets(&moved_king).is_empty());

    let moved_rook = kings("e1", "e8")
        .moved_piece(sq("a1"), PieceKind::Rook, Color::White)
        .piece(sq("h1"), PieceKind::Rook, Color::White)
        .build()
        .unwrap();
    assert_eq!(castle_targets(&moved_rook), vec!["g1"]);
}

#[test]
fn test_double_step() {
    let mut board = Board::new();
    let moves = board.legal_special_moves(Color::White, sq("e2")).to_vec();
    assert_eq!(moves, vec![SpecialMove::double_step(sq("e4"))]);

    let outcome = board.perform_special_move(sq("e2"), &moves[0]).unwrap();
    assert_eq!(outcome.notation, "e4");
    assert_eq!(outcome.secondary, None);
    let pawn = board.piece_at(sq("e4")).unwrap();
    assert!(pawn.has_moved());
    assert!(pawn.has_double_stepped());
}

#[test]
fn test_double_step_needs_both_squares_empty() {
    let near = kings("h1", "h8")
        .piece(sq("e2"), PieceKind::Pawn, Color::White)
        .piece(sq("e3"), PieceKind::Knight, Color::Black)
        .build()
        .unwrap();
    assert!(near.legal_special_moves(Color::White, sq("e2")).is_empty());
    assert!(near.legal_moves(Color::White, sq("e2")).is_empty());

    let far = kings("h1", "h8")
        .piece(sq("e2"), PieceKind::Pawn, Color::White)
        .piece(sq("e4"), PieceKind::Knight, Color::Black)
        .build()
        .unwrap();
    assert!(far.legal_special_moves(Color::White, sq("e2")).is_empty());
    assert_eq!(names(far.legal_moves(Color::White, sq("e2"))), vec!["e3"]);
}

fn en_passant_board() -> BoardBuilder {
    kings("a1", "h8")
        .piece(sq("e5"), PieceKind::Pawn, Color::White)
        .double_stepped_pawn(sq("d5"), Color::Black)
}

#[test]
fn test_en_passant() {
    let mut board = en_passant_board().build().unwrap();
    let expected = SpecialMove::en_passant(sq("d6"), sq("d5"));
    assert_eq!(board.legal_special_moves(Color::White, sq("e5")), &[expected]);

    let outcome = board.perform_special_move(sq("e5"), &expected).unwrap();
    board.calculate_moves();
    assert_eq!(outcome.notation, "exd6");
    assert_eq!(outcome.secondary, Some(sq("d5")));
    assert!(board.piece_at(sq("d5")).is_none());
    assert!(board.piece_at(sq("e5")).is_none());
    assert!(board
        .piece_at(sq("d6"))
        .is_some_and(|p| p.kind() == PieceKind::Pawn && p.color() == Color::White));
}

#[test]
fn test_en_passant_needs_empty_landing() {
    let board = en_passant_board()
        .piece(sq("d6"), PieceKind::Knight, Color::Black)
        .build()
        .unwrap();
    assert!(board.legal_special_moves(Color::White, sq("e5")).is_empty());
}

#[test]
fn test_en_passant_ignores_plain_neighbours() {
    let board = kings("a1", "h8")
        .piece(sq("e5"), PieceKind::Pawn, Color::White)
        .moved_piece(sq("d5"), PieceKind::Pawn, Color::Black)
        .build()
        .unwrap();
    assert!(board.legal_special_moves(Color::White, sq("e5")).is_empty());
}

#[test]
fn test_en_passant_does_not_expire() {
    let mut board = en_passant_board().build().unwrap();
    board.perform_move(sq("a1"), sq("a2")).unwrap();
    board.perform_move(sq("h8"), sq("h7")).unwrap();
    board.calculate_moves();
    assert_eq!(
        board.legal_special_moves(Color::White, sq("e5")),
        &[SpecialMove::en_passant(sq("d6"), sq("d5"))]
    );
}

#[test]
fn test_en_passant_exposing_king_on_rank() {
    let board = kings("a5", "h8")
        .piece(sq("b5"), PieceKind::Pawn, Color::White)
        .double_stepped_pawn(sq("c5"), Color::Black)
        .piece(sq("h5"), PieceKind::Rook, Color::Black)
        .build()
        .unwrap();
    assert!(board.legal_special_moves(Color::White, sq("b5")).is_empty());
    assert_eq!(names(board.legal_moves(Color::White, sq("b5"))), vec!["b6"]);
}

#[test]
fn test_en_passant_removes_checking_pawn() {
    let board = kings("e4", "h8")
        .piece(sq("e5"), PieceKind::Pawn, Color::White)
        .double_stepped_pawn(sq("d5"), Color::Black)
        .build()
        .unwrap();
    assert!(board.is_in_check(Color::White));
    assert_eq!(
        board.legal_special_moves(Color::White, sq("e5")),
        &[SpecialMove::en_passant(sq("d6"), sq("d5"))]
    );
}

#[test]
fn test_promotion_to_queen() {
    let mut board = kings("e1", "h8")
        .piece(sq("a7"), PieceKind::Pawn, Color::White)
        .build()
        .unwrap();
    let outcome = board.perform_move(sq("a7"), sq("a8")).unwrap();
    board.calculate_moves();

    assert_eq!(outcome.notation, "a8=Q");
    assert_eq!(outcome.promotion, Some(PieceKind::Queen));
    let queen = board.piece_at(sq("a8")).unwrap();
    assert_eq!(queen.kind(), PieceKind::Queen);
    assert_eq!(queen.color(), Color::White);
    assert!(board.is_in_check(Color::Black));
}

#[test]
fn test_capture_notation() {
    let mut board = kings("e1", "h8")
        .piece(sq("d4"), PieceKind::Knight, Color::White)
        .piece(sq("e6"), PieceKind::Pawn, Color::Black)
        .build()
        .unwrap();
    let outcome = board.perform_move(sq("d4"), sq("e6")).unwrap();
    assert_eq!(outcome.notation, "Nxe6");
    assert_eq!(
        outcome.captured.map(|p| p.kind()),
        Some(PieceKind::Pawn)
    );
}

#[test]
fn test_invalid_moves_leave_board_untouched() {
    let mut board = Board::new();
    let before = board.create_snapshot(Color::White);

    assert_eq!(
        board.perform_move(sq("e4"), sq("e5")),
        Err(MoveError::EmptySquare { position: sq("e4") })
    );
    assert_eq!(
        board.perform_move(sq("e2"), Position::new(4, 8)),
        Err(MoveError::OutOfBounds {
            position: Position::new(4, 8)
        })
    );
    assert_eq!(
        board.perform_special_move(sq("e2"), &SpecialMove::castle(sq("g2"), sq("h2"))),
        Err(MoveError::WrongMover {
            kind: SpecialMoveKind::Castle,
            found: PieceKind::Pawn
        })
    );
    let no_rook = SpecialMove {
        kind: SpecialMoveKind::Castle,
        to: sq("g1"),
        involved: None,
    };
    assert_eq!(
        board.perform_special_move(sq("e1"), &no_rook),
        Err(MoveError::MissingInvolvedPosition {
            kind: SpecialMoveKind::Castle
        })
    );
    assert_eq!(board.create_snapshot(Color::White), before);
}
