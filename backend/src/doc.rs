//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint and the request/response schemas
//! they reference. The generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Engine, User, UserRole};
use crate::inbound::http::users::{RegisterMeta, SetPasswordData, UserAuth, UserRegister};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users and engines API",
        description = "In-memory CRUD endpoints for user and engine resources."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::register_user,
        crate::inbound::http::users::login_user,
        crate::inbound::http::users::logout_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::update_password,
        crate::inbound::http::engines::list_engines,
        crate::inbound::http::engines::create_engine,
        crate::inbound::http::engines::get_engine,
        crate::inbound::http::engines::delete_engine,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        UserRole,
        Engine,
        UserAuth,
        RegisterMeta,
        UserRegister,
        SetPasswordData
    )),
    tags(
        (name = "users", description = "Operations on the user resource"),
        (name = "engines", description = "Operations on the engine resource"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_registers_all_api_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/users",
            "/api/users/login",
            "/api/users/logout",
            "/api/users/u/{username}",
            "/api/users/u/{username}/password",
            "/api/engines",
            "/api/engines/{engineId}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path '{path}'"
            );
        }
    }

    #[test]
    fn document_registers_domain_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        for name in ["User", "UserRole", "Engine", "UserRegister", "SetPasswordData"] {
            assert!(schemas.contains_key(name), "missing schema '{name}'");
        }
    }
}
