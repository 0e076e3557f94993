/// Outcome of a forwarded mutation, as reported by the downstream store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, kept as diagnostic detail for failures
    pub body: String,
}

impl DownstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok() -> Self {
        Self::new(200, String::new())
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
