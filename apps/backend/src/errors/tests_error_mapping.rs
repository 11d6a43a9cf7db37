// Unit tests for error mapping - pure domain logic without HTTP server setup
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::AppError;

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation(ValidationKind::InvalidDartCount, "four darts");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidDartCount);
    assert_eq!(app.status().as_u16(), 422);

    let empty = DomainError::validation(ValidationKind::EmptyRoster, "no players");
    let app: AppError = empty.into();
    assert_eq!(app.code().as_str(), "EMPTY_ROSTER");
    assert_eq!(app.status().as_u16(), 422);

    let other = DomainError::validation(ValidationKind::Other("x".into()), "odd input");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_conflicts() {
    let over = DomainError::conflict(ConflictKind::GameOver, "leg finished");
    let app: AppError = over.into();
    assert_eq!(app.code().as_str(), "GAME_OVER");
    assert_eq!(app.status().as_u16(), 409);

    let not_real = DomainError::conflict(ConflictKind::NotRealPlayer, "simulated player is up");
    let app: AppError = not_real.into();
    assert_eq!(app.code().as_str(), "NOT_REAL_PLAYER");
    assert_eq!(app.status().as_u16(), 409);

    let other = DomainError::conflict(ConflictKind::Other("x".to_string()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Game, "no game");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_invariant_to_500() {
    let inv = DomainError::invariant("score 1 reached the checkout chart");
    let app: AppError = inv.into();
    assert_eq!(app.code(), ErrorCode::InvariantViolation);
    assert_eq!(app.status().as_u16(), 500);
    assert!(matches!(app, AppError::Internal { .. }));
}
