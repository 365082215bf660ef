//! The static credential attached to every request.

/// Placeholder token, to be replaced with the actual API token
pub const DEFAULT_TOKEN: &str = "YOUR_API_TOKEN";

/// The bearer credential sent in the `Authorization` header
#[derive(Clone)]
pub enum Credentials {
    Bearer { token: String },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"********")
                .finish(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::bearer(DEFAULT_TOKEN)
    }
}

impl Credentials {
    pub fn bearer<S: Into<String>>(token: S) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Self::Bearer { token } => token.as_str(),
        }
    }

    /// Value of the `Authorization` header
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::Credentials;

    #[test]
    fn should_render_bearer_header() {
        let creds = Credentials::bearer("abcd");
        assert_eq!(creds.authorization(), "Bearer abcd");
    }

    #[test]
    fn should_default_to_placeholder() {
        assert_eq!(Credentials::default().authorization(), "Bearer YOUR_API_TOKEN");
    }

    #[test]
    fn should_hide_token_when_debugging() {
        let debug = format!("{:?}", Credentials::bearer("secret-token"));
        assert!(!debug.contains("secret-token"));
    }
}
