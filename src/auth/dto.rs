use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for signup and login. Both fields are optional at the type
/// level so presence can be checked explicitly instead of failing in the
/// deserializer.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response returned after signup or login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: PublicUser,
}

/// Response for token verification.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub user: PublicUser,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
}
