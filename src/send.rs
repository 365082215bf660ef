use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;

/// Result of a request that reached the endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The endpoint answered with `200 OK`
    Success,
    /// The endpoint answered with any other status
    Failure(StatusCode),
}

impl Outcome {
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::OK {
            Self::Success
        } else {
            Self::Failure(status)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Failure(status) => *status,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Data sent successfully to ZoomInfo!"),
            Self::Failure(status) => {
                write!(f, "Failed to send data. Response Code: {}", status.as_u16())
            }
        }
    }
}

impl crate::Client {
    /// Posts the payload as JSON to the endpoint
    ///
    /// # Returns
    ///
    /// The [`Outcome`] built from the response status. A status other than `200` is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::Error`] if the connection, the write of the body or the read of the response fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &share_data::Client) -> Result<(), share_data::Error> {
    /// let outcome = client.send_data(&share_data::IpPayload::default()).await?;
    /// println!("{outcome}");
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn send_data(&self, payload: &crate::IpPayload) -> crate::Result<Outcome> {
        tracing::debug!("sending payload");
        let response = self
            .inner
            .post(&*self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.credentials.authorization())
            .json(payload)
            .send()
            .await
            .map_err(|err| {
                tracing::debug!(error = %err, "request failed");
                err
            })?;
        let status = response.status();
        // releases the connection
        drop(response);
        let outcome = Outcome::from_status(status);
        if outcome.is_success() {
            tracing::info!("payload accepted");
        } else {
            tracing::warn!(status = status.as_u16(), "payload rejected");
        }
        Ok(outcome)
    }
}
