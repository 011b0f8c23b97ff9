use crate::board::{Board, Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

// Rook directions first, then bishop directions. Shared by queen and king.
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

// Destinations reachable by the piece on `from` under its movement pattern
// and board occupancy alone. Whether the mover's king ends up attacked is
// not considered here.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece, &mut moves),
        PieceKind::Knight => step_moves(board, from, piece, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop => ray_moves(board, from, piece, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Rook => ray_moves(board, from, piece, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Queen => ray_moves(board, from, piece, &QUEEN_DIRECTIONS, &mut moves),
        PieceKind::King => {
            step_moves(board, from, piece, &QUEEN_DIRECTIONS, &mut moves);
            castling_moves(board, from, piece, &mut moves);
        }
    }
    moves
}

fn pawn_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Square>) {
    let direction: i8 = if piece.color == Color::White { 1 } else { -1 };

    if let Some(ahead) = from.offset(direction, 0) {
        if board.piece_at(ahead).is_none() {
            moves.push(ahead);

            // The double step hides behind an empty single step.
            let start_rank = if piece.color == Color::White { 1 } else { 6 };
            if from.rank == start_rank {
                if let Some(two_ahead) = from.offset(2 * direction, 0) {
                    if board.piece_at(two_ahead).is_none() {
                        moves.push(two_ahead);
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        if let Some(diagonal) = from.offset(direction, df) {
            match board.piece_at(diagonal) {
                Some(other) if other.color != piece.color => moves.push(diagonal),
                // An empty diagonal still captures when it is the square a
                // pawn just skipped over.
                None if board.en_passant_target == Some(diagonal) => moves.push(diagonal),
                _ => {}
            }
        }
    }
}

fn step_moves(board: &Board, from: Square, piece: Piece, offsets: &[(i8, i8)], moves: &mut Vec<Square>) {
    for &(dr, df) in offsets {
        if let Some(to) = from.offset(dr, df) {
            match board.piece_at(to) {
                Some(other) if other.color == piece.color => {}
                _ => moves.push(to),
            }
        }
    }
}

fn ray_moves(board: &Board, from: Square, piece: Piece, directions: &[(i8, i8)], moves: &mut Vec<Square>) {
    for &(dr, df) in directions {
        let mut to = from;
        while let Some(next) = to.offset(dr, df) {
            to = next;
            match board.piece_at(to) {
                None => moves.push(to),
                Some(other) => {
                    if other.color != piece.color {
                        moves.push(to);
                    }
                    break;
                }
            }
        }
    }
}

// Two-file king moves, offered when king and rook are unmoved and the squares
// between them are empty. Attack status of the transit squares is not
// consulted; landing in check is still caught by the move simulation.
fn castling_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Square>) {
    if piece.has_moved || from.file != 4 {
        return;
    }
    let rank = from.rank;

    // Kingside: rook on the h-file, f and g empty.
    if unmoved_rook(board, piece.color, Square::new(rank, 7))
        && board.piece_at(Square::new(rank, 5)).is_none()
        && board.piece_at(Square::new(rank, 6)).is_none()
    {
        moves.push(Square::new(rank, 6));
    }

    // Queenside: rook on the a-file, b, c and d empty.
    if unmoved_rook(board, piece.color, Square::new(rank, 0))
        && board.piece_at(Square::new(rank, 1)).is_none()
        && board.piece_at(Square::new(rank, 2)).is_none()
        && board.piece_at(Square::new(rank, 3)).is_none()
    {
        moves.push(Square::new(rank, 2));
    }
}

fn unmoved_rook(board: &Board, color: Color, sq: Square) -> bool {
    matches!(
        board.piece_at(sq),
        Some(p) if p.kind == PieceKind::Rook && p.color == color && !p.has_moved
    )
}

pub fn in_check(board: &Board, color: Color) -> bool {
    let king = match board.king_square(color) {
        Some(sq) => sq,
        // A side without a king is corrupted state, not a game outcome.
        None => panic!("invariant violated: no {} king on the board", color),
    };
    for (from, _) in board.pieces(color.opposite()) {
        if pseudo_legal_moves(board, from).contains(&king) {
            return true;
        }
    }
    false
}

pub fn is_checkmate(board: &Board, color: Color) -> bool {
    in_check(board, color) && !has_escaping_move(board, color)
}

pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !in_check(board, color) && !has_escaping_move(board, color)
}

// Whether any pseudo-legal move, simulated by plain relocation, leaves the
// king out of check.
fn has_escaping_move(board: &Board, color: Color) -> bool {
    for (from, _) in board.pieces(color) {
        for to in pseudo_legal_moves(board, from) {
            let mut scratch = board.clone();
            scratch.relocate(from, to);
            if !in_check(&scratch, color) {
                return true;
            }
        }
    }
    false
}
