//! Small client pushing an IP address record to a third party API.
//!
//! ```no_run
//! # async fn example() -> Result<(), share_data::Error> {
//! use share_data::{Client, IpPayload};
//!
//! let client = Client::with_defaults()?;
//! let outcome = client.send_data(&IpPayload::default()).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;

pub mod credentials;
pub mod error;
pub mod logging;
pub mod payload;
pub mod report;
pub mod send;

pub use credentials::Credentials;
pub use error::{Error, Result};
pub use payload::IpPayload;
pub use send::Outcome;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
/// Endpoint receiving the data, to be replaced with the actual one
pub const DEFAULT_ENDPOINT: &str = "https://api.zoominfo.com/v2/endpoint";

/// Client sending the payload to a single endpoint
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) endpoint: Cow<'static, str>,
    pub(crate) credentials: Credentials,
    pub(crate) inner: reqwest::Client,
}

impl Client {
    /// Creates a client posting to `endpoint` with the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Build`] when the underlying `reqwest::Client` cannot be created,
    /// for example when no TLS backend can be initialised.
    pub fn new(endpoint: impl Into<Cow<'static, str>>, credentials: Credentials) -> Result<Self> {
        let inner = reqwest::ClientBuilder::new()
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::Build)?;
        Ok(Self {
            endpoint: endpoint.into(),
            credentials,
            inner,
        })
    }

    /// Creates a client posting to [`DEFAULT_ENDPOINT`] with the placeholder token.
    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_ENDPOINT, Credentials::default())
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_ref()
    }
}
