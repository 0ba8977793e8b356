//! Typed HTTP client for the ash command-generation server.

pub mod ash;
pub mod client;
pub mod health;
pub mod wait;

pub use ash::{AshClient, GenerateResponse, HealthResponse};
pub use client::{ApiError, HttpClient};
pub use health::HealthCheck;
pub use wait::{
    DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_TIMEOUT, WaitPolicy, WaitTimeout, wait_until_healthy,
};
