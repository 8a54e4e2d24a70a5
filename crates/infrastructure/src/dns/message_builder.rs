//! SOA query construction in wire format using `hickory-proto`.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use soa_monitor_domain::{DomainError, Zone};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a `<zone>. IN SOA` query with a random id and RD set.
    ///
    /// Returns the id alongside the bytes so the caller can match the
    /// response.
    pub fn build_soa_query(zone: &Zone) -> Result<(u16, Vec<u8>), DomainError> {
        let fqdn = zone.fqdn();
        let name = Name::from_str(&fqdn).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", fqdn, e))
        })?;

        let mut query = Query::query(name, RecordType::SOA);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
