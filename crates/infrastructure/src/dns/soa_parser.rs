use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::RData;
use soa_monitor_domain::{DomainError, Serial, ServerAddr};

/// Decodes SOA responses and extracts the serial.
pub struct SoaParser;

impl SoaParser {
    pub fn decode(bytes: &[u8], server: &ServerAddr) -> Result<Message, DomainError> {
        let message = Message::from_vec(bytes).map_err(|e| DomainError::InvalidDnsResponse {
            server: server.to_string(),
            message: format!("failed to parse DNS response: {}", e),
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse {
                server: server.to_string(),
                message: "message is not a response".to_string(),
            });
        }

        Ok(message)
    }

    /// The answer section must hold exactly one record, and it must be SOA.
    pub fn extract_serial(message: &Message, server: &ServerAddr) -> Result<Serial, DomainError> {
        let rcode = message.response_code();
        if rcode != ResponseCode::NoError {
            return Err(DomainError::UnsuccessfulResponse {
                server: server.to_string(),
                rcode: rcode.to_string(),
            });
        }

        match message.answers() {
            [] => Err(DomainError::EmptyAnswer {
                server: server.to_string(),
            }),
            [record] => match record.data() {
                RData::SOA(soa) => Ok(Serial::new(soa.serial())),
                _ => Err(DomainError::NotSoa {
                    server: server.to_string(),
                }),
            },
            answers => Err(DomainError::AmbiguousAnswer {
                server: server.to_string(),
                count: answers.len(),
            }),
        }
    }
}
