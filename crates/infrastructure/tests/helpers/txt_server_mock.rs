#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::TXT;
use hickory_proto::rr::{RData, Record};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockMode {
    /// Answer from the zone, NXDOMAIN for unknown names
    Normal,
    /// Never answer
    Silent,
    /// Answer SERVFAIL
    ServFail,
    /// Over UDP, set TC and keep only the first record; TCP answers in full
    Truncated,
    /// Over UDP, set TC with an empty answer section; TCP answers in full
    TruncatedEmpty,
}

type Zone = HashMap<String, Vec<Vec<String>>>;

/// Nameserver serving Hesiod TXT records from a fixed zone, on one port
/// over both UDP and TCP.
pub struct MockHesiodServer {
    addr: SocketAddr,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockHesiodServer {
    pub async fn start(zone: Vec<(&str, Vec<&str>)>) -> Result<Self, std::io::Error> {
        Self::start_with_mode(zone, MockMode::Normal).await
    }

    pub async fn start_with_mode(
        zone: Vec<(&str, Vec<&str>)>,
        mode: MockMode,
    ) -> Result<Self, std::io::Error> {
        let zone = zone
            .into_iter()
            .map(|(name, records)| (name, records.into_iter().map(|r| vec![r]).collect()))
            .collect();
        Self::start_chunked(zone, mode).await
    }

    /// Like `start_with_mode`, but each record is given as its
    /// character-strings.
    pub async fn start_chunked(
        zone: Vec<(&str, Vec<Vec<&str>>)>,
        mode: MockMode,
    ) -> Result<Self, std::io::Error> {
        let zone: Zone = zone
            .into_iter()
            .map(|(name, records)| {
                let records = records
                    .into_iter()
                    .map(|chunks| chunks.into_iter().map(str::to_string).collect())
                    .collect();
                (name.to_ascii_lowercase(), records)
            })
            .collect();
        let zone = Arc::new(zone);

        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let tcp_zone = Arc::clone(&zone);
        let tcp_count = Arc::clone(&tcp_queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if mode == MockMode::Silent {
                                continue;
                            }
                            if let Some(response) = Self::build_response(&buf[..len], &zone, mode, true) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    result = listener.accept() => {
                        if let Ok((stream, _)) = result {
                            let zone = Arc::clone(&tcp_zone);
                            let count = Arc::clone(&tcp_count);
                            tokio::spawn(async move {
                                let _ = Self::serve_tcp(stream, &zone, mode, &count).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Number of queries answered over TCP so far.
    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    async fn serve_tcp(
        mut stream: TcpStream,
        zone: &Zone,
        mode: MockMode,
        count: &AtomicUsize,
    ) -> Result<(), std::io::Error> {
        loop {
            let len = match stream.read_u16().await {
                Ok(len) => len as usize,
                Err(_) => return Ok(()),
            };
            let mut query = vec![0u8; len];
            stream.read_exact(&mut query).await?;

            if mode == MockMode::Silent {
                continue;
            }
            count.fetch_add(1, Ordering::SeqCst);

            if let Some(response) = Self::build_response(&query, zone, mode, false) {
                stream.write_u16(response.len() as u16).await?;
                stream.write_all(&response).await?;
            }
        }
    }

    fn build_response(
        query_bytes: &[u8],
        zone: &Zone,
        mode: MockMode,
        over_udp: bool,
    ) -> Option<Vec<u8>> {
        let query = Message::from_vec(query_bytes).ok()?;
        let question = query.queries().first()?.clone();
        let name = question.name().to_ascii().to_ascii_lowercase();
        let key = name.trim_end_matches('.');

        let mut response = Message::new();
        response.set_id(query.id());
        response.set_message_type(MessageType::Response);
        response.set_op_code(OpCode::Query);
        response.set_recursion_desired(query.recursion_desired());
        response.set_recursion_available(true);
        response.add_query(question.clone());

        if mode == MockMode::ServFail {
            response.set_response_code(ResponseCode::ServFail);
            return response.to_vec().ok();
        }

        match zone.get(key) {
            Some(records) => {
                let (truncate, kept) = match mode {
                    MockMode::Truncated if over_udp => (true, 1),
                    MockMode::TruncatedEmpty if over_udp => (true, 0),
                    _ => (false, records.len()),
                };

                for chunks in records.iter().take(kept) {
                    response.add_answer(Record::from_rdata(
                        question.name().clone(),
                        60,
                        RData::TXT(TXT::new(chunks.clone())),
                    ));
                }
                if truncate {
                    response.set_truncated(true);
                }
            }
            None => {
                response.set_response_code(ResponseCode::NXDomain);
            }
        }

        response.to_vec().ok()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockHesiodServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
