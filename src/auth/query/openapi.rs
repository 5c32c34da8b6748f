use super::AuthorizationRequestQuery;

impl utoipa::IntoParams for AuthorizationRequestQuery {
    fn into_params(
        _parameter_in_provider: impl Fn() -> Option<utoipa::openapi::path::ParameterIn>,
    ) -> Vec<utoipa::openapi::path::Parameter> {
        use utoipa::openapi::path::{ParameterBuilder, ParameterIn};
        use utoipa::openapi::{ObjectBuilder, Required, SchemaType};

        fn required_string(
            name: &str,
            description: &str,
            example: Option<&str>,
        ) -> utoipa::openapi::path::Parameter {
            ParameterBuilder::new()
                .name(name)
                .required(Required::True)
                .parameter_in(ParameterIn::Query)
                .description(Some(description))
                .example(example.map(|example| serde_json::json!(example)))
                .schema(Some(ObjectBuilder::new().schema_type(SchemaType::String)))
                .build()
        }

        vec![
            required_string(
                "response_type",
                "Response type. Should be \"token\" for the implicit flow, but any value is accepted.",
                Some("token"),
            ),
            required_string(
                "client_id",
                "Client ID. Not checked against any registry.",
                Some("client_id_implicit_authentication_app"),
            ),
            required_string(
                "redirect_uri",
                "URI to redirect to. Used verbatim; the token fragment is appended to it.",
                Some("http://localhost:8082/login/oauth/callback"),
            ),
            required_string("scope", "Scopes requested. Ignored.", Some("profile")),
            required_string(
                "state",
                "Any string. Echoed unescaped at the start of the fragment.",
                None,
            ),
        ]
    }
}
