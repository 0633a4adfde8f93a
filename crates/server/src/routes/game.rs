use axum::{
    extract::{rejection::JsonRejection, Query},
    Extension, Json,
};
use chess_core::{
    fen, legal_destinations, parse_square, Color, GameController, MoveError, NotationError, Phase,
    Square,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::SharedGame;

#[derive(Serialize)]
pub struct BoardStateResponse {
    pub board: [[char; 8]; 8],
    pub turn: Color,
    pub fen: String,
    pub phase: &'static str,
    pub check: bool,
}

fn board_state(game: &GameController) -> BoardStateResponse {
    let board = game.board();
    let turn = game.side_to_move();
    BoardStateResponse {
        board: board.to_codes(),
        turn,
        fen: fen::to_fen(board, turn),
        phase: match game.phase() {
            Phase::InProgress => "in_progress",
            Phase::Checkmated(_) => "checkmated",
        },
        check: chess_core::is_king_in_check(board, turn),
    }
}

/// GET /board_state
/// Current board as a grid of piece codes plus the side to move.
pub async fn get_board_state(Extension(game): Extension<SharedGame>) -> Json<BoardStateResponse> {
    let game = game.lock().await;
    Json(board_state(&game))
}

/// POST /reset
pub async fn reset_game(Extension(game): Extension<SharedGame>) -> Json<BoardStateResponse> {
    let mut game = game.lock().await;
    game.reset();
    Json(board_state(&game))
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Serialize)]
pub struct MoveResponse {
    pub success: bool,
    pub board: [[char; 8]; 8],
    pub turn: Color,
    pub checkmate: bool,
    pub king_pos: Option<String>,
    pub check: bool,
    pub stalemate: bool,
}

/// Parse both squares; a format problem in either wins over a bounds problem.
fn parse_move_squares(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<(Square, Square), NotationError> {
    let start = parse_square(start.unwrap_or_default());
    let end = parse_square(end.unwrap_or_default());
    match (start, end) {
        (Ok(start), Ok(end)) => Ok((start, end)),
        (Err(e @ NotationError::Format(_)), _) | (_, Err(e @ NotationError::Format(_))) => Err(e),
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

/// POST /move {"start": "E2", "end": "E4"}
pub async fn make_move(
    Extension(game): Extension<SharedGame>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, AppError> {
    // A body that is not JSON, or has non-string squares, is a format error too.
    let Json(req) = body.map_err(|rejection| {
        tracing::debug!("Unreadable move body: {}", rejection.body_text());
        MoveError::from(NotationError::Format(rejection.body_text()))
    })?;
    let (start, end) = parse_move_squares(req.start.as_deref(), req.end.as_deref())
        .map_err(MoveError::from)?;

    let mut game = game.lock().await;
    if let Phase::Checkmated(color) = game.phase() {
        return Err(AppError::Conflict(format!("Game is over: {color} is checkmated")));
    }

    let outcome = game.apply_move(start, end)?;

    Ok(Json(MoveResponse {
        success: true,
        board: outcome.board.to_codes(),
        turn: outcome.side_to_move,
        checkmate: outcome.checkmate,
        king_pos: outcome.mated_king.map(Square::to_algebraic),
        check: outcome.check,
        stalemate: outcome.stalemate,
    }))
}

#[derive(Deserialize)]
pub struct LegalMovesQuery {
    pub square: Option<String>,
}

#[derive(Serialize)]
pub struct LegalMovesResponse {
    pub square: String,
    pub moves: Vec<String>,
}

/// GET /legal_moves?square=E2
/// Destinations the side to move can reach from `square` without leaving
/// its king in check. Empty for empty squares and opponent pieces.
pub async fn get_legal_moves(
    Extension(game): Extension<SharedGame>,
    Query(q): Query<LegalMovesQuery>,
) -> Result<Json<LegalMovesResponse>, AppError> {
    let text = q
        .square
        .ok_or_else(|| AppError::BadRequest("Missing square parameter".into()))?;
    let from = parse_square(&text).map_err(MoveError::from)?;

    let game = game.lock().await;
    let board = game.board();
    let moves = match board.color_at(from) {
        Some(color) if color == game.side_to_move() => legal_destinations(board, from)
            .into_iter()
            .map(Square::to_algebraic)
            .collect(),
        _ => Vec::new(),
    };

    Ok(Json(LegalMovesResponse {
        square: from.to_algebraic(),
        moves,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_wins_over_bounds() {
        assert!(matches!(
            parse_move_squares(Some("I9"), Some("E")),
            Err(NotationError::Format(_))
        ));
        assert!(matches!(
            parse_move_squares(Some("E2"), Some("I9")),
            Err(NotationError::OutOfBounds(_))
        ));
        assert!(matches!(
            parse_move_squares(None, Some("E4")),
            Err(NotationError::Format(_))
        ));
        assert!(parse_move_squares(Some("e2"), Some("E4")).is_ok());
    }
}
