use serde::Serialize;

/// Health response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: &'static str,
    /// Active storage backend, `"postgres"` or `"memory"`.
    pub storage: &'static str,
    /// Failure detail when the store probe did not succeed.
    pub detail: Option<String>,
}
