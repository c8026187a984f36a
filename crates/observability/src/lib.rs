//! # questgate-observability
//!
//! Querschnitt fuer Questgate:
//! - Health-Check-Typen (`/health`)
//! - Structured Logging via tracing-subscriber
//! - Request-Timing Middleware mit Request-ID

pub mod health;
pub mod logging;
pub mod middleware;

pub use health::{HealthResponse, HealthState, HealthStatus};
pub use logging::{logging_initialisieren, LogFormat};
pub use middleware::timing_middleware;
