//! Move notation: piece letter, capture marker, destination.
//!
//! Disambiguation and check/mate markers are left to the caller; the game
//! controller appends `+` and `#`.

use super::{Piece, PieceKind, Position};

pub(crate) fn ordinary(
    piece: Piece,
    from: Position,
    to: Position,
    capture: bool,
    promotion: Option<PieceKind>,
) -> String {
    let mut text = String::new();
    if piece.kind() == PieceKind::Pawn {
        if capture {
            text.push((from.x() as u8 + b'a') as char);
            text.push('x');
        }
    } else {
        text.push_str(piece.kind().notation());
        if capture {
            text.push('x');
        }
    }
    text.push_str(&to.to_string());
    if let Some(kind) = promotion {
        text.push('=');
        text.push_str(kind.notation());
    }
    text
}

pub(crate) fn castle(kingside: bool) -> String {
    if kingside { "O-O" } else { "O-O-O" }.to_string()
}
