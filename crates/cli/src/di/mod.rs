mod sinks;
mod use_cases;

pub use sinks::Sinks;
pub use use_cases::UseCases;
