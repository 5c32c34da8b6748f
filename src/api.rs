use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{self, AccessToken};

#[derive(OpenApi)]
#[openapi(
    paths(auth::authorization),
    info(title = "implicit-stub", description = "OAuth 2.0 implicit flow redirect stub")
)]
pub struct ApiDoc;

pub const AUTHORIZATION_PATH: &str = "/oauth2/authorization";
pub const LEGACY_AUTHORIZATION_PATH: &str = "/oauth2/authorization2";

pub fn router(access_token: AccessToken, legacy_routes: bool) -> Router {
    let mut router = Router::new().route(AUTHORIZATION_PATH, get(auth::authorization));

    if legacy_routes {
        router = router.route(LEGACY_AUTHORIZATION_PATH, get(auth::authorization));
    }

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(access_token)
}
