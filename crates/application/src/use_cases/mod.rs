pub mod collect_serials;
pub mod poll_domain;

pub use collect_serials::{CollectSerialsUseCase, FetchFailure, SerialCollection};
pub use poll_domain::{PollDomainUseCase, PollState};
