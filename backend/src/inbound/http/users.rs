//! Users API handlers.
//!
//! ```text
//! POST /api/users {"auth":{"username":"bob","password":"pw1"},"meta":{"firstName":"B","lastName":"O"}}
//! POST /api/users/login {"username":"bob","password":"pw1"}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use chrono::Utc;
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Credential, Error, User, UserRole};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiError, ApiResult};

/// Credential payload used by registration and login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAuth {
    pub username: String,
    pub password: String,
}

/// Profile fields read at registration.
///
/// Clients may post a full profile shape here; extra keys such as
/// `username` or `createdAt` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMeta {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRegister {
    pub auth: UserAuth,
    pub meta: RegisterMeta,
}

/// Password change request body.
///
/// The `username` field is carried for client symmetry; the path parameter
/// is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetPasswordData {
    pub username: String,
    pub current_password: String,
    pub password: String,
    pub password_repeat: String,
}

fn user_not_found(username: &str) -> Error {
    Error::not_found(format!("User ({username}) does not exist"))
}

/// List every stored user as a single page.
#[utoipa::path(
    get,
    path = "/api/users",
    responses((status = 200, description = "All users in one page")),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Page<User>>> {
    let items = state.users.list().await?;
    Ok(web::Json(Page::single(items)))
}

/// Register a user and its credential.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRegister,
    responses((status = 200, description = "Created user", body = User)),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/users")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRegister>,
) -> ApiResult<web::Json<User>> {
    let UserRegister { auth, meta } = payload.into_inner();

    // TODO: restrict admin role assignment to admin callers once a
    // capability-check layer exists; today any caller may claim any role.
    let user = User {
        username: auth.username.clone(),
        role: meta.role.unwrap_or(UserRole::Master),
        created_at: Utc::now().timestamp(),
        first_name: meta.first_name,
        last_name: meta.last_name,
    };

    // Existing entries under the same username are overwritten silently;
    // duplicate registrations are not rejected.
    state
        .credentials
        .put(Credential {
            username: auth.username,
            password: auth.password,
        })
        .await?;
    state.users.put(user.clone()).await?;

    Ok(web::Json(user))
}

/// Check a credential pair and return the matching profile.
#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = UserAuth,
    responses(
        (status = 200, description = "Authenticated user", body = User),
        (status = 403, description = "Password mismatch"),
        (status = 404, description = "Unknown username")
    ),
    tags = ["users"],
    operation_id = "loginUser"
)]
#[post("/users/login")]
pub async fn login_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserAuth>,
) -> ApiResult<web::Json<User>> {
    let UserAuth { username, password } = payload.into_inner();

    let credential = state
        .credentials
        .get(&username)
        .await?
        .ok_or_else(|| user_not_found(&username))?;
    if credential.password != password {
        return Err(Error::forbidden("Incorrect credentials").into());
    }

    // A credential can outlive its profile (user deletion leaves it behind);
    // that inconsistency surfaces here as an internal error.
    let user = state
        .users
        .get(&username)
        .await?
        .ok_or_else(|| ApiError::internal(format!("credential without profile for {username}")))?;
    Ok(web::Json(user))
}

/// End a session. No session state exists, so there is nothing to clear.
#[utoipa::path(
    get,
    path = "/api/users/logout",
    responses((status = 204, description = "No content")),
    tags = ["users"],
    operation_id = "logoutUser"
)]
#[get("/users/logout")]
pub async fn logout_user() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Fetch one user by username.
#[utoipa::path(
    get,
    path = "/api/users/u/{username}",
    params(("username" = String, Path, description = "Username key")),
    responses(
        (status = 200, description = "Stored user", body = User),
        (status = 404, description = "Unknown username")
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/u/{username}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let username = path.into_inner();
    let user = state
        .users
        .get(&username)
        .await?
        .ok_or_else(|| user_not_found(&username))?;
    Ok(web::Json(user))
}

/// Delete one user by username.
#[utoipa::path(
    delete,
    path = "/api/users/u/{username}",
    params(("username" = String, Path, description = "Username key")),
    responses(
        (status = 204, description = "User removed"),
        (status = 404, description = "Unknown username")
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/u/{username}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let username = path.into_inner();
    // The paired credential entry is left in place; login keeps accepting
    // the old password after this returns.
    state
        .users
        .remove(&username)
        .await?
        .ok_or_else(|| user_not_found(&username))?;
    Ok(HttpResponse::NoContent().finish())
}

/// Overwrite the stored password after the three credential checks.
#[utoipa::path(
    patch,
    path = "/api/users/u/{username}/password",
    params(("username" = String, Path, description = "Username key")),
    request_body = SetPasswordData,
    responses(
        (status = 204, description = "Password updated"),
        (status = 403, description = "Credential check failed"),
        (status = 404, description = "Unknown username")
    ),
    tags = ["users"],
    operation_id = "updatePassword"
)]
#[patch("/users/u/{username}/password")]
pub async fn update_password(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<SetPasswordData>,
) -> ApiResult<HttpResponse> {
    let username = path.into_inner();
    let data = payload.into_inner();

    let credential = state
        .credentials
        .get(&username)
        .await?
        .ok_or_else(|| user_not_found(&username))?;

    // TODO: only the owner or an admin should pass this point once the
    // capability-check layer exists.
    if data.current_password != credential.password {
        return Err(Error::forbidden("Incorrect credentials").into());
    }
    if data.password == credential.password {
        return Err(Error::forbidden("Password matches with current").into());
    }
    // The confirmation field is compared against the current password, so a
    // successful request must echo it in passwordRepeat.
    if data.current_password != data.password_repeat {
        return Err(Error::forbidden("New passwords do not match").into());
    }

    state
        .credentials
        .put(Credential {
            username,
            password: data.password,
        })
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
