#![allow(dead_code)]
use super::builders::{a_record, soa_record};
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinHandle;

/// How the loopback server answers SOA queries.
#[derive(Debug, Clone)]
pub enum Behavior {
    Serial(u32),
    Rcode(ResponseCode),
    NoAnswers,
    TwoSoa(u32, u32),
    NotSoa,
    WrongId(u32),
    /// Truncated over UDP, full answer over TCP.
    Truncated { tcp_serial: u32 },
    Silent,
}

/// A DNS server on 127.0.0.1 answering over UDP and TCP on the same port.
pub struct SoaResponder {
    addr: SocketAddr,
    tasks: Vec<JoinHandle<()>>,
}

impl SoaResponder {
    pub async fn start(behavior: Behavior) -> Self {
        let udp = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = udp.local_addr().unwrap();
        let tcp = TcpListener::bind(addr).await.unwrap();

        let udp_behavior = behavior.clone();
        let udp_task = tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            loop {
                let Ok((len, peer)) = udp.recv_from(&mut buf).await else {
                    return;
                };
                if let Some(response) = respond(&buf[..len], &udp_behavior, false) {
                    let _ = udp.send_to(&response, peer).await;
                }
            }
        });

        let tcp_task = tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = tcp.accept().await else {
                    return;
                };
                let behavior = behavior.clone();
                tokio::spawn(async move {
                    let mut len_buf = [0u8; 2];
                    if stream.read_exact(&mut len_buf).await.is_err() {
                        return;
                    }
                    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                    if stream.read_exact(&mut query).await.is_err() {
                        return;
                    }
                    if let Some(response) = respond(&query, &behavior, true) {
                        let len = (response.len() as u16).to_be_bytes();
                        let _ = stream.write_all(&len).await;
                        let _ = stream.write_all(&response).await;
                    }
                });
            }
        });

        Self {
            addr,
            tasks: vec![udp_task, tcp_task],
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for SoaResponder {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

fn respond(query_bytes: &[u8], behavior: &Behavior, over_tcp: bool) -> Option<Vec<u8>> {
    let query = Message::from_vec(query_bytes).ok()?;
    let question = query.queries().first()?.clone();
    let zone = question.name().to_ascii();

    let mut id = query.id();
    let mut rcode = ResponseCode::NoError;
    let mut truncated = false;
    let answers: Vec<Record> = match behavior {
        Behavior::Silent => return None,
        Behavior::Serial(serial) => vec![soa_record(&zone, *serial)],
        Behavior::Rcode(code) => {
            rcode = *code;
            vec![]
        }
        Behavior::NoAnswers => vec![],
        Behavior::TwoSoa(a, b) => vec![soa_record(&zone, *a), soa_record(&zone, *b)],
        Behavior::NotSoa => vec![a_record(&zone)],
        Behavior::WrongId(serial) => {
            id = id.wrapping_add(1);
            vec![soa_record(&zone, *serial)]
        }
        Behavior::Truncated { tcp_serial } => {
            if over_tcp {
                vec![soa_record(&zone, *tcp_serial)]
            } else {
                truncated = true;
                vec![]
            }
        }
    };

    let mut response = Message::new();
    response
        .set_id(id)
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_authoritative(true)
        .set_truncated(truncated)
        .set_response_code(rcode);
    response.add_query(question);
    response.add_answers(answers);

    response.to_bytes().ok()
}
