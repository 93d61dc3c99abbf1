use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, CredentialsRequest, PublicUser, VerifyResponse},
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
        repo::User,
    },
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/verify", get(verify))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        warn!("signup with missing email or password");
        return Err(AppError::BadRequest(
            "Email and password are required".into(),
        ));
    }

    if User::find_by_email(&state.db, &email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let hash = hash_password(&password)?;
    let user = User::create(&state.db, &email, &hash).await?;

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(user.id)?;

    info!(user_id = %user.id, email = %user.email, "user signed up");
    Ok(Json(AuthResponse {
        access_token,
        user: PublicUser {
            id: user.id,
            email: user.email,
        },
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        warn!("login with missing email or password");
        return Err(AppError::BadRequest(
            "Email and password are required".into(),
        ));
    }

    // Unknown email and wrong password fail the same way.
    let user = match User::find_by_email(&state.db, &email).await? {
        Some(u) => u,
        None => {
            warn!(email = %email, "login with unknown email");
            return Err(AppError::Unauthorized("Invalid credentials".into()));
        }
    };

    if !verify_password(&password, &user.password_hash)? {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(user.id)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        access_token,
        user: PublicUser {
            id: user.id,
            email: user.email,
        },
    }))
}

/// A valid token does not imply the row still exists, so look the user up
/// again on every call.
#[instrument(skip(state))]
pub async fn verify(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<VerifyResponse>, AppError> {
    let user = match User::find_by_id(&state.db, user_id).await? {
        Some(u) => u,
        None => {
            warn!(user_id = %user_id, "token subject no longer exists");
            return Err(AppError::NotFound("User not found".into()));
        }
    };

    Ok(Json(VerifyResponse {
        user: PublicUser {
            id: user.id,
            email: user.email,
        },
    }))
}
