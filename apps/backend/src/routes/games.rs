//! Game-related HTTP routes.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::game_id::GameId;
use crate::extractors::validated_json::ValidatedJson;
use crate::protocol::game_state::{
    AddPlayerRequest, AddPlayerResponse, CreateGameRequest, GameStateResponse, SubmitScoreRequest,
};
use crate::state::app_state::AppState;

/// POST /api/games
///
/// Opens a game in the lobby. The starting score falls back to the configured default.
async fn create_game(
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let snapshot = app_state
        .registry
        .create_game(req.starting_score, req.submission_policy)?;
    Ok(HttpResponse::Created().json(GameStateResponse::from(&snapshot)))
}

/// POST /api/games/{game_id}/players
async fn add_player(
    game_id: GameId,
    body: ValidatedJson<AddPlayerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let profile = body.into_inner().into_profile()?;
    let handle = app_state.registry.add_player(game_id.0, profile)?;
    let snapshot = app_state.registry.get_state(game_id.0)?;
    Ok(HttpResponse::Created().json(AddPlayerResponse {
        player_id: handle.id,
        seat: handle.seat,
        game: GameStateResponse::from(&snapshot),
    }))
}

/// POST /api/games/{game_id}/start
async fn start_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameStateResponse>, AppError> {
    let snapshot = app_state.registry.start(game_id.0)?;
    Ok(web::Json(GameStateResponse::from(&snapshot)))
}

/// POST /api/games/{game_id}/turns/simulate
///
/// Plays the current player's turn. When a real player is up nothing is
/// thrown: the response has no turn result and `awaiting_submission` set.
async fn simulate_turn(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameStateResponse>, AppError> {
    let outcome = app_state.registry.play_turn(game_id.0)?;
    Ok(web::Json(GameStateResponse::with_turn(
        &outcome.state,
        outcome.result.as_ref(),
    )))
}

/// POST /api/games/{game_id}/turns/submit
async fn submit_turn(
    game_id: GameId,
    body: ValidatedJson<SubmitScoreRequest>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameStateResponse>, AppError> {
    let (result, snapshot) = app_state.registry.submit_score(game_id.0, &body.scores)?;
    Ok(web::Json(GameStateResponse::with_turn(&snapshot, Some(&result))))
}

/// GET /api/games/{game_id}
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameStateResponse>, AppError> {
    let snapshot = app_state.registry.get_state(game_id.0)?;
    Ok(web::Json(GameStateResponse::from(&snapshot)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_game)))
        .service(web::resource("/{game_id}").route(web::get().to(get_game)))
        .service(web::resource("/{game_id}/players").route(web::post().to(add_player)))
        .service(web::resource("/{game_id}/start").route(web::post().to(start_game)))
        .service(
            web::resource("/{game_id}/turns/simulate").route(web::post().to(simulate_turn)),
        )
        .service(web::resource("/{game_id}/turns/submit").route(web::post().to(submit_turn)));
}
