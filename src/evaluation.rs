use crate::board::{Board, Color, Piece, PieceKind, Square};

pub struct Evaluator {
    // Piece values
    pub pawn_value: i32,
    pub knight_value: i32,
    pub bishop_value: i32,
    pub rook_value: i32,
    pub queen_value: i32,
    pub king_value: i32,

    // Positional bonuses
    pub pawn_table: [[i32; 8]; 8],
    pub knight_table: [[i32; 8]; 8],
    pub bishop_table: [[i32; 8]; 8],
    pub rook_table: [[i32; 8]; 8],
    pub queen_table: [[i32; 8]; 8],
    pub king_table: [[i32; 8]; 8],

    // Structural weights
    pub doubled_pawn_penalty: i32,
    pub isolated_pawn_penalty: i32,
    pub bishop_pair_bonus: i32,
    pub knight_pawn_bonus: i32,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            pawn_value: 100,
            knight_value: 320,
            bishop_value: 330,
            rook_value: 500,
            queen_value: 900,
            king_value: 20000,

            // Pawn position bonuses (encourages central control and advancement)
            pawn_table: [
                [0, 0, 0, 0, 0, 0, 0, 0],
                [50, 50, 50, 50, 50, 50, 50, 50],
                [10, 10, 20, 30, 30, 20, 10, 10],
                [5, 5, 10, 25, 25, 10, 5, 5],
                [0, 0, 0, 20, 20, 0, 0, 0],
                [5, -5, -10, 0, 0, -10, -5, 5],
                [5, 10, 10, -20, -20, 10, 10, 5],
                [0, 0, 0, 0, 0, 0, 0, 0],
            ],

            // Knight position bonuses (encourages central control)
            knight_table: [
                [-50, -40, -30, -30, -30, -30, -40, -50],
                [-40, -20, 0, 0, 0, 0, -20, -40],
                [-30, 0, 10, 15, 15, 10, 0, -30],
                [-30, 5, 15, 20, 20, 15, 5, -30],
                [-30, 0, 15, 20, 20, 15, 0, -30],
                [-30, 5, 10, 15, 15, 10, 5, -30],
                [-40, -20, 0, 5, 5, 0, -20, -40],
                [-50, -40, -30, -30, -30, -30, -40, -50],
            ],

            // Bishop position bonuses (encourages central control and long diagonals)
            bishop_table: [
                [-20, -10, -10, -10, -10, -10, -10, -20],
                [-10, 0, 0, 0, 0, 0, 0, -10],
                [-10, 0, 5, 10, 10, 5, 0, -10],
                [-10, 5, 5, 10, 10, 5, 5, -10],
                [-10, 0, 10, 10, 10, 10, 0, -10],
                [-10, 10, 10, 10, 10, 10, 10, -10],
                [-10, 5, 0, 0, 0, 0, 5, -10],
                [-20, -10, -10, -10, -10, -10, -10, -20],
            ],

            // Rook position bonuses (encourages open files and central control)
            rook_table: [
                [0, 0, 0, 0, 0, 0, 0, 0],
                [5, 10, 10, 10, 10, 10, 10, 5],
                [-5, 0, 0, 0, 0, 0, 0, -5],
                [-5, 0, 0, 0, 0, 0, 0, -5],
                [-5, 0, 0, 0, 0, 0, 0, -5],
                [-5, 0, 0, 0, 0, 0, 0, -5],
                [-5, 0, 0, 0, 0, 0, 0, -5],
                [0, 0, 0, 5, 5, 0, 0, 0],
            ],

            // Queen position bonuses (encourages central control and mobility)
            queen_table: [
                [-20, -10, -10, -5, -5, -10, -10, -20],
                [-10, 0, 0, 0, 0, 0, 0, -10],
                [-10, 0, 5, 5, 5, 5, 0, -10],
                [-5, 0, 5, 5, 5, 5, 0, -5],
                [0, 0, 5, 5, 5, 5, 0, -5],
                [-10, 5, 5, 5, 5, 5, 0, -10],
                [-10, 0, 5, 0, 0, 0, 0, -10],
                [-20, -10, -10, -5, -5, -10, -10, -20],
            ],

            // King position bonuses (encourages safety behind the pawn line)
            king_table: [
                [-30, -40, -40, -50, -50, -40, -40, -30],
                [-30, -40, -40, -50, -50, -40, -40, -30],
                [-30, -40, -40, -50, -50, -40, -40, -30],
                [-30, -40, -40, -50, -50, -40, -40, -30],
                [-20, -30, -30, -40, -40, -30, -30, -20],
                [-10, -20, -20, -20, -20, -20, -20, -10],
                [20, 20, 0, 0, 0, 0, 20, 20],
                [20, 30, 10, 0, 0, 10, 30, 20],
            ],

            doubled_pawn_penalty: 50,
            isolated_pawn_penalty: 30,
            bishop_pair_bonus: 50,
            knight_pawn_bonus: 2,
        }
    }

    // Positive favors White, negative favors Black.
    pub fn evaluate(&self, board: &Board) -> i32 {
        let mut score = 0;
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square::new(rank, file);
                let Some(piece) = board.piece_at(sq) else {
                    continue;
                };

                let base = self.piece_value(piece.kind);
                // Tables are laid out from White's side; Black reads them
                // rank-mirrored with the bonus negated.
                let positional = match piece.color {
                    Color::White => self.piece_table(piece.kind)[rank as usize][file as usize],
                    Color::Black => {
                        -self.piece_table(piece.kind)[(7 - rank) as usize][file as usize]
                    }
                };
                let value = base + positional;
                score += match piece.color {
                    Color::White => value,
                    Color::Black => -value,
                };

                score += self.structural_terms(board, sq, piece);
            }
        }
        score
    }

    pub fn piece_value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn_value,
            PieceKind::Knight => self.knight_value,
            PieceKind::Bishop => self.bishop_value,
            PieceKind::Rook => self.rook_value,
            PieceKind::Queen => self.queen_value,
            PieceKind::King => self.king_value,
        }
    }

    fn piece_table(&self, kind: PieceKind) -> &[[i32; 8]; 8] {
        match kind {
            PieceKind::Pawn => &self.pawn_table,
            PieceKind::Knight => &self.knight_table,
            PieceKind::Bishop => &self.bishop_table,
            PieceKind::Rook => &self.rook_table,
            PieceKind::Queen => &self.queen_table,
            PieceKind::King => &self.king_table,
        }
    }

    fn structural_terms(&self, board: &Board, sq: Square, piece: Piece) -> i32 {
        let sign = match piece.color {
            Color::White => 1,
            Color::Black => -1,
        };
        match piece.kind {
            PieceKind::Pawn => {
                let mut term = 0;

                // Doubled: every other friendly pawn sharing this file.
                for rank in 0..8 {
                    if rank != sq.rank && self.pawn_of(board, Square::new(rank, sq.file), piece.color) {
                        term -= sign * self.doubled_pawn_penalty;
                    }
                }

                // Isolated: no friendly pawn anywhere on an adjacent file.
                let mut isolated = true;
                for df in [-1i8, 1] {
                    let file = sq.file as i8 + df;
                    if !(0..8).contains(&file) {
                        continue;
                    }
                    for rank in 0..8 {
                        if self.pawn_of(board, Square::new(rank, file as u8), piece.color) {
                            isolated = false;
                        }
                    }
                }
                if isolated {
                    term -= sign * self.isolated_pawn_penalty;
                }

                term
            }
            PieceKind::Bishop => {
                // Re-applied for each bishop while the side holds the pair.
                let bishops = board
                    .pieces(piece.color)
                    .iter()
                    .filter(|(_, p)| p.kind == PieceKind::Bishop)
                    .count();
                if bishops >= 2 {
                    sign * self.bishop_pair_bonus
                } else {
                    0
                }
            }
            PieceKind::Knight => {
                // Knights favor closed, pawn-rich positions.
                let pawns = self.count_pawns(board);
                sign * pawns * self.knight_pawn_bonus
            }
            _ => 0,
        }
    }

    fn pawn_of(&self, board: &Board, sq: Square, color: Color) -> bool {
        matches!(
            board.piece_at(sq),
            Some(p) if p.kind == PieceKind::Pawn && p.color == color
        )
    }

    fn count_pawns(&self, board: &Board) -> i32 {
        let mut count = 0;
        for rank in 0..8 {
            for file in 0..8 {
                if let Some(p) = board.piece_at(Square::new(rank, file)) {
                    if p.kind == PieceKind::Pawn {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}
