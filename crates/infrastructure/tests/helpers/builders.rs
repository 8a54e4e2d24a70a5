#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, SOA};
use hickory_proto::rr::{Name, RData, Record};
use std::str::FromStr;

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn soa_record(zone: &str, serial: u32) -> Record {
    Record::from_rdata(
        name(zone),
        3600,
        RData::SOA(SOA::new(
            name("ns1.example.net."),
            name("hostmaster.example.net."),
            serial,
            3600,
            1800,
            604800,
            86400,
        )),
    )
}

pub fn a_record(zone: &str) -> Record {
    Record::from_rdata(name(zone), 300, RData::A(A::new(192, 0, 2, 1)))
}

pub fn response_with(rcode: ResponseCode, answers: Vec<Record>) -> Message {
    let mut message = Message::new();
    message
        .set_id(4242)
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_response_code(rcode);
    message.add_answers(answers);
    message
}
