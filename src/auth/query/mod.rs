//! Extraction of the authorization request query.
//!
//! Parameters are bound the way the stub's clients expect: empty values count as sent,
//! repeated values are joined with a comma and unknown parameters are ignored.

use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use itertools::{Either, Itertools};
use tracing::instrument;


mod openapi;
mod redirect_uri;

use self::redirect_uri::RedirectUri;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
enum AuthorizationQueryParams {
    ResponseType,
    ClientId,
    RedirectUri,
    Scope,
    State,
}

impl AuthorizationQueryParams {
    fn name(&self) -> &'static str {
        match self {
            Self::ResponseType => "response_type",
            Self::ClientId => "client_id",
            Self::RedirectUri => "redirect_uri",
            Self::Scope => "scope",
            Self::State => "state",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "response_type" => Some(Self::ResponseType),
            "client_id" => Some(Self::ClientId),
            "redirect_uri" => Some(Self::RedirectUri),
            "scope" => Some(Self::Scope),
            "state" => Some(Self::State),
            _ => None,
        }
    }
}

pub type ResponseType = String;
pub type ClientId = String;
pub type Scope = String;
pub type State = String;

/// Represents the authorization request query. All five parameters are required.
#[derive(Debug, PartialEq, Eq)]
pub struct AuthorizationRequestQuery {
    /// Expected to be `token`, never checked.
    pub response_type: ResponseType,
    pub client_id: ClientId,
    pub redirect_uri: RedirectUri,
    pub scope: Scope,
    pub state: State,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AuthorizationQueryParsingError {
    #[error("the query is not in urlencoded format")]
    ParsingError,
    #[error("missing parameter {0:?}")]
    MissingParameter(&'static str),
    #[error("the redirect_uri can't be used as a Location")]
    InvalidUri,
}

impl IntoResponse for AuthorizationQueryParsingError {
    /// Never redirects: the caller gets a plain 400 without a Location.
    fn into_response(self) -> Response {
        let error_text = format!("invalid_request: {}", self);
        (StatusCode::BAD_REQUEST, error_text).into_response()
    }
}

impl std::str::FromStr for AuthorizationRequestQuery {
    type Err = AuthorizationQueryParsingError;
    /// Tries to generate itself from a still percentage-encoded string.
    fn from_str(query: &str) -> Result<Self, Self::Err> {
        use AuthorizationQueryParams as Params;
        use AuthorizationQueryParsingError as Error;

        let parameters: Vec<(String, String)> =
            serde_urlencoded::from_str(query).map_err(|_| Error::ParsingError)?;

        let (known, opaque): (Vec<(Params, String)>, Vec<(String, String)>) = parameters
            .into_iter()
            .partition_map(|(key, value)| match Params::from_name(&key) {
                Some(param) => Either::Left((param, value)),
                None => Either::Right((key, value)),
            });

        tracing::trace!("Ignoring opaque parameters: {:?}", opaque);

        let mut known = known.into_iter().into_group_map();
        let mut take = |param: Params| {
            known
                .remove(&param)
                .map(|values| values.join(","))
                .ok_or(Error::MissingParameter(param.name()))
        };

        let result = AuthorizationRequestQuery {
            response_type: take(Params::ResponseType)?,
            client_id: take(Params::ClientId)?,
            redirect_uri: RedirectUri::new(take(Params::RedirectUri)?),
            scope: take(Params::Scope)?,
            state: take(Params::State)?,
        };

        tracing::trace!("Resulted in: {:?}", result);

        Ok(result)
    }
}

impl AuthorizationRequestQuery {
    /// Simply maps to `str::parse`
    #[instrument(name = "parse_authorization_query", skip_all)]
    async fn internal_from_request(req: Request) -> Result<Self, AuthorizationQueryParsingError> {
        // this string will be percent-encoded. we'll have to decode it!
        let query = req.uri().query().unwrap_or_default();

        tracing::trace!("Started to parse query: {:?}", query);

        let result = query.parse();

        tracing::trace!("Resulted in: {:?}", result);

        result
    }
}

#[async_trait::async_trait]
impl<S> FromRequest<S> for AuthorizationRequestQuery
where
    S: Send + Sync,
{
    type Rejection = AuthorizationQueryParsingError;
    /// Simply maps to `Self::internal_from_request`
    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        Self::internal_from_request(req).await
    }
}
