//! The authoritative game: board, side to move and phase.
//!
//! `GameController` is the only thing that mutates a live position. All
//! legality questions are answered against its board without touching it.

use tracing::{debug, info};

use crate::board::{Board, Color, Square};
use crate::check::{has_legal_moves, is_king_in_check, leaves_king_in_check};
use crate::error::MoveError;
use crate::rules::is_valid_move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Checkmated(Color),
}

/// Result of an accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub side_to_move: Color,
    /// The new side to move is in check.
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    /// Square of the mated king, only when `checkmate` is set.
    pub mated_king: Option<Square>,
}

#[derive(Clone, Debug)]
pub struct GameController {
    board: Board,
    side_to_move: Color,
    phase: Phase,
    enforce_king_safety: bool,
}

impl GameController {
    /// A new game in the standard starting position, white to move.
    pub fn new() -> Self {
        Self {
            board: Board::starting(),
            side_to_move: Color::White,
            phase: Phase::InProgress,
            enforce_king_safety: false,
        }
    }

    /// Start from an arbitrary position.
    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        let phase = phase_of(&board, side_to_move);
        Self {
            board,
            side_to_move,
            phase,
            enforce_king_safety: false,
        }
    }

    /// Reject moves that leave the mover's own king attacked.
    pub fn with_king_safety(mut self, enforce: bool) -> Self {
        self.enforce_king_safety = enforce;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn enforces_king_safety(&self) -> bool {
        self.enforce_king_safety
    }

    /// Back to the starting position with white to move.
    pub fn reset(&mut self) {
        self.board = Board::starting();
        self.side_to_move = Color::White;
        self.phase = Phase::InProgress;
        info!("Game reset");
    }

    /// Validate and play `from -> to`.
    ///
    /// On rejection the game is left exactly as it was. The controller does
    /// not refuse moves after checkmate; that is up to the caller.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if let Err(e) = self.validate(from, to) {
            debug!(
                from = %from.to_algebraic(),
                to = %to.to_algebraic(),
                reason = e.code(),
                "Move rejected"
            );
            return Err(e);
        }

        self.board.move_piece(from, to);
        self.side_to_move = self.side_to_move.opponent();

        let mover = self.side_to_move;
        let check = is_king_in_check(&self.board, mover);
        let can_move = has_legal_moves(&self.board, mover);
        let checkmate = check && !can_move;
        let stalemate = !check && !can_move;

        let mated_king = if checkmate {
            self.phase = Phase::Checkmated(mover);
            self.board.find_king(mover)
        } else {
            self.phase = Phase::InProgress;
            None
        };

        debug!(
            from = %from.to_algebraic(),
            to = %to.to_algebraic(),
            turn = %mover,
            check,
            "Move applied"
        );
        if checkmate {
            info!(loser = %mover, "Checkmate");
        } else if stalemate {
            info!(side = %mover, "Stalemate");
        }

        Ok(MoveOutcome {
            board: self.board.clone(),
            side_to_move: mover,
            check,
            checkmate,
            stalemate,
            mated_king,
        })
    }

    fn validate(&self, from: Square, to: Square) -> Result<(), MoveError> {
        let piece = self.board.piece_at(from).ok_or(MoveError::EmptySquare)?;

        if piece.color != self.side_to_move {
            return Err(MoveError::WrongTurn(self.side_to_move));
        }

        if self.board.color_at(to) == Some(piece.color) {
            return Err(MoveError::FriendlyCapture);
        }

        if !is_valid_move(&self.board, from, to, piece) {
            return Err(MoveError::IllegalGeometry);
        }

        if self.enforce_king_safety && leaves_king_in_check(&self.board, from, to, piece.color) {
            return Err(MoveError::ExposesKing);
        }

        Ok(())
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

fn phase_of(board: &Board, side_to_move: Color) -> Phase {
    if is_king_in_check(board, side_to_move) && !has_legal_moves(board, side_to_move) {
        Phase::Checkmated(side_to_move)
    } else {
        Phase::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Kind, Piece};
    use crate::notation::parse_square;

    fn sq(s: &str) -> Square {
        parse_square(s).unwrap()
    }

    fn play(game: &mut GameController, from: &str, to: &str) -> Result<MoveOutcome, MoveError> {
        game.apply_move(sq(from), sq(to))
    }

    #[test]
    fn test_opening_moves_alternate_turns() {
        let mut game = GameController::new();

        let outcome = play(&mut game, "E2", "E4").unwrap();
        assert_eq!(outcome.side_to_move, Color::Black);
        assert!(!outcome.checkmate);
        assert_eq!(outcome.mated_king, None);
        assert_eq!(
            game.board().piece_at(Square::new(4, 4).unwrap()),
            Some(Piece::new(Kind::Pawn, Color::White))
        );

        // E2 is vacated now, so repeating the move fails before the turn check.
        assert_eq!(play(&mut game, "E2", "E4"), Err(MoveError::EmptySquare));
        assert_eq!(play(&mut game, "D2", "D4"), Err(MoveError::WrongTurn(Color::Black)));

        let outcome = play(&mut game, "E7", "E5").unwrap();
        assert_eq!(outcome.side_to_move, Color::White);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn test_validation_order() {
        let mut game = GameController::new();
        assert_eq!(play(&mut game, "E4", "E5"), Err(MoveError::EmptySquare));
        assert_eq!(play(&mut game, "E7", "E5"), Err(MoveError::WrongTurn(Color::White)));
        // Friendly capture is reported even though the geometry is also wrong.
        assert_eq!(play(&mut game, "A1", "H1"), Err(MoveError::FriendlyCapture));
        assert_eq!(play(&mut game, "A1", "A2"), Err(MoveError::FriendlyCapture));
        assert_eq!(play(&mut game, "B1", "B3"), Err(MoveError::IllegalGeometry));
        assert_eq!(play(&mut game, "E2", "E5"), Err(MoveError::IllegalGeometry));
    }

    #[test]
    fn test_rejection_leaves_state_unchanged() {
        let mut game = GameController::new();
        play(&mut game, "D2", "D4").unwrap();
        let before_board = game.board().clone();
        let before_turn = game.side_to_move();

        for (from, to) in [("D4", "D5"), ("A8", "A1"), ("C8", "H3"), ("E5", "E4")] {
            assert!(play(&mut game, from, to).is_err());
            assert_eq!(game.board(), &before_board);
            assert_eq!(game.side_to_move(), before_turn);
        }
    }

    #[test]
    fn test_capture_removes_one_enemy_piece() {
        let mut game = GameController::new();
        play(&mut game, "E2", "E4").unwrap();
        play(&mut game, "D7", "D5").unwrap();
        let before = game.board().pieces().count();
        let outcome = play(&mut game, "E4", "D5").unwrap();
        assert_eq!(outcome.board.pieces().count(), before - 1);
        assert_eq!(
            outcome.board.piece_at(sq("D5")),
            Some(Piece::new(Kind::Pawn, Color::White))
        );
        assert!(outcome.board.is_empty(sq("E4")));
    }

    #[test]
    fn test_fools_mate_reports_checkmate() {
        let mut game = GameController::new();
        play(&mut game, "F2", "F3").unwrap();
        play(&mut game, "E7", "E5").unwrap();
        play(&mut game, "G2", "G4").unwrap();
        let outcome = play(&mut game, "D8", "H4").unwrap();

        assert!(outcome.check);
        assert!(outcome.checkmate);
        assert_eq!(outcome.side_to_move, Color::White);
        assert_eq!(outcome.mated_king, Some(sq("E1")));
        assert_eq!(game.phase(), Phase::Checkmated(Color::White));

        game.reset();
        assert_eq!(game.phase(), Phase::InProgress);
        assert_eq!(game.board(), &Board::starting());
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn test_moving_into_check_is_allowed_by_default() {
        let mut board = Board::empty();
        board.put(sq("E1"), Piece::new(Kind::King, Color::White));
        board.put(sq("D8"), Piece::new(Kind::Rook, Color::Black));
        board.put(sq("A8"), Piece::new(Kind::King, Color::Black));

        let mut game = GameController::from_position(board.clone(), Color::White);
        assert!(play(&mut game, "E1", "D1").is_ok());

        let mut strict = GameController::from_position(board, Color::White).with_king_safety(true);
        assert_eq!(play(&mut strict, "E1", "D1"), Err(MoveError::ExposesKing));
        assert!(play(&mut strict, "E1", "F1").is_ok());
    }

    #[test]
    fn test_from_position_detects_existing_mate() {
        let mut board = Board::empty();
        board.put(sq("H8"), Piece::new(Kind::King, Color::Black));
        board.put(sq("H7"), Piece::new(Kind::Queen, Color::White));
        board.put(sq("G6"), Piece::new(Kind::King, Color::White));
        let game = GameController::from_position(board, Color::Black);
        assert_eq!(game.phase(), Phase::Checkmated(Color::Black));
    }

    #[test]
    fn test_stalemate_reported_but_game_continues() {
        let mut board = Board::empty();
        board.put(sq("H8"), Piece::new(Kind::King, Color::Black));
        board.put(sq("E7"), Piece::new(Kind::Queen, Color::White));
        board.put(sq("G6"), Piece::new(Kind::King, Color::White));
        let mut game = GameController::from_position(board, Color::White);

        let outcome = play(&mut game, "E7", "F7").unwrap();
        assert!(outcome.stalemate);
        assert!(!outcome.checkmate);
        assert_eq!(game.phase(), Phase::InProgress);
    }
}
