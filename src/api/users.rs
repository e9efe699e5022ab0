//! Account endpoints - sign-up, sign-in and profile lookup

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Envelope, Json};
use crate::infrastructure::user::{RegisterRequest, SignInRequest};

/// Create the account router
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/profile/{id}", get(profile))
}

/// Sign-up request body.
///
/// Every field deserializes as optional so a missing key reaches the service
/// as an absent value; the presence check belongs to the account logic, not
/// to deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignUpBody {
    pub id: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

/// Sign-in request body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignInBody {
    pub id: Option<String>,
    pub password: Option<String>,
}

/// Data payload carrying the id of the affected user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdData {
    pub user_id: String,
}

/// Data payload for a profile read; the password never appears here
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

/// Register a new user
///
/// POST /user/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignUpBody>,
) -> Result<Json<Envelope<UserIdData>>, ApiError> {
    debug!(id = body.id.as_deref().unwrap_or("<missing>"), "sign-up request");

    let user_id = state
        .user_service
        .register(RegisterRequest {
            id: body.id,
            name: body.name,
            password: body.password,
            email: body.email,
        })
        .await?;

    Ok(Json(Envelope::success(
        StatusCode::OK,
        "created user",
        UserIdData {
            user_id: user_id.to_string(),
        },
    )))
}

/// Authenticate a user
///
/// POST /user/signin
pub async fn signin(
    State(state): State<AppState>,
    Json(body): Json<SignInBody>,
) -> Result<Json<Envelope<UserIdData>>, ApiError> {
    debug!(id = body.id.as_deref().unwrap_or("<missing>"), "sign-in request");

    let user_id = state
        .user_service
        .authenticate(SignInRequest {
            id: body.id,
            password: body.password,
        })
        .await?;

    Ok(Json(Envelope::success(
        StatusCode::OK,
        "login success",
        UserIdData {
            user_id: user_id.to_string(),
        },
    )))
}

/// Read a user's profile
///
/// GET /user/profile/{id}
pub async fn profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<ProfileData>>, ApiError> {
    debug!(id = %id, "profile request");

    let user_profile = state.user_service.profile(&id).await?;

    Ok(Json(Envelope::success(
        StatusCode::OK,
        "read profile success",
        ProfileData {
            user_id: user_profile.id.to_string(),
            name: user_profile.name,
            email: user_profile.email,
        },
    )))
}
