mod query;
mod token;


use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use query::{AuthorizationQueryParsingError, AuthorizationRequestQuery};
use token::ImplicitGrantFragment;

pub use token::{AccessToken, DEFAULT_ACCESS_TOKEN};

#[utoipa::path(
    get,
    path = "/oauth2/authorization",
    params(AuthorizationRequestQuery),
    responses(
        (status = 302, description = "
Location will be set to redirect_uri, used verbatim.

The fragment `#state=<state>&access_token=<token>&token_type=bearer&expires_in=900` is appended to it. \
Neither `state` nor the token are escaped and the token is the same for every request."),
        (status = 400, description = "A parameter is missing or the resulting Location is not a valid header value.")
    )
)]
pub async fn authorization(
    State(access_token): State<AccessToken>,
    query: AuthorizationRequestQuery,
) -> Result<Response, AuthorizationQueryParsingError> {
    tracing::debug!(
        response_type = %query.response_type,
        client_id = %query.client_id,
        redirect_uri = query.redirect_uri.get(),
        scope = %query.scope,
        state = %query.state,
        "Received authorization request"
    );

    let location = query.redirect_uri.with_fragment(ImplicitGrantFragment {
        state: &query.state,
        access_token: &access_token,
    });

    tracing::trace!("Redirecting to: {:?}", location);

    // control characters in redirect_uri or state can't go in a header
    let location = HeaderValue::try_from(location)
        .map_err(|_| AuthorizationQueryParsingError::InvalidUri)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
