pub mod message_builder;
pub mod resolver;
pub mod soa_client;
pub mod soa_parser;
pub mod transport;

pub use message_builder::MessageBuilder;
pub use soa_client::HickorySoaClient;
pub use soa_parser::SoaParser;
