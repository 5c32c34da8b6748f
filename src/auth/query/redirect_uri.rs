use std::fmt::Display;

/// The caller's redirect URI. Neither parsed nor checked against any allow-list.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RedirectUri(String);

impl RedirectUri {
    pub fn new(uri: String) -> Self {
        Self(uri)
    }

    pub fn get(&self) -> &str {
        &self.0
    }

    /// Appends `#fragment` to the URI as-is. An existing query or fragment is left untouched.
    pub fn with_fragment(&self, fragment: impl Display) -> String {
        format!("{}#{}", self.0, fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::RedirectUri;

    #[test]
    fn appends_fragment() {
        let uri = RedirectUri::new("https://client.example/cb".to_owned());
        assert_eq!(uri.with_fragment("a=b"), "https://client.example/cb#a=b");
    }

    #[test]
    fn keeps_existing_query_and_fragment() {
        let uri = RedirectUri::new("https://client.example/cb?x=1#old".to_owned());
        assert_eq!(
            uri.with_fragment("a=b"),
            "https://client.example/cb?x=1#old#a=b"
        );
    }

    #[test]
    fn does_not_require_a_url() {
        let uri = RedirectUri::new("not a url".to_owned());
        assert_eq!(uri.with_fragment("a=b"), "not a url#a=b");
    }
}
