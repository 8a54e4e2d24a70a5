//! SOA Monitor Infrastructure Layer
pub mod dns;
pub mod errors;
pub mod metrics;
pub mod system;
