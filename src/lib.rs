//! Number classification service
//!
//! A single-endpoint HTTP service that classifies a number by independent
//! mathematical predicates (primality, perfection, Armstrong property,
//! parity), computes its digit-sum, and enriches the result with a fun fact
//! from the Numbers API.

pub mod config;
pub mod engine;
pub mod facts;
pub mod server;

// Re-exports for convenience
pub use config::AppConfig;
pub use engine::{classify, normalize, Classification, ValidationPolicy};
pub use facts::{FactLookup, NumbersApiClient};
pub use server::AppState;
