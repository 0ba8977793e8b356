use crate::client::ApiError;

/// Liveness probe for a backend service.
pub trait HealthCheck: Send + Sync {
    /// Returns `Ok(true)` if the service answered its health endpoint with
    /// HTTP 200, `Ok(false)` if it answered with anything else, or `Err` when
    /// it could not be reached at all.
    fn is_healthy(&self) -> impl std::future::Future<Output = Result<bool, ApiError>> + Send;
}
