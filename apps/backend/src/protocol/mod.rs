pub mod game_state;

pub use game_state::{
    AddPlayerRequest, AddPlayerResponse, CreateGameRequest, DartResponse, GameStateResponse,
    PlayerStateResponse, SubmitScoreRequest, TurnResultResponse,
};
