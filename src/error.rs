//! The errors returned while sending the data

/// All the possible errors returned by the client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unable to create the underlying http client
    #[error("unable to build the http client")]
    Build(#[source] reqwest::Error),
    /// The connection, the write of the body or the read of the response failed
    #[error("unable to reach the endpoint")]
    Reqwest(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
