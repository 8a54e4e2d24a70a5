pub mod builders;
pub mod http_capture;
pub mod soa_responder;

pub use builders::*;
pub use http_capture::{CapturedRequest, HttpCapture};
pub use soa_responder::{Behavior, SoaResponder};
