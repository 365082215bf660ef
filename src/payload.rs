/// IP address shared by default, to be replaced with the actual one
pub const DEFAULT_IP: &str = "123.45.67.89";

/// JSON body of the request
///
/// Serialized compactly as `{"ip":"123.45.67.89"}`, which parses to the same value as the
/// `{ "ip": "123.45.67.89" }` literal the API documentation shows.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct IpPayload {
    pub ip: String,
}

impl Default for IpPayload {
    fn default() -> Self {
        Self::new(DEFAULT_IP)
    }
}

impl IpPayload {
    pub fn new<S: Into<String>>(ip: S) -> Self {
        Self { ip: ip.into() }
    }
}
