#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use zonewire_application::ports::{DnsTransport, ZoneRepository};
use zonewire_application::use_cases::AnswerQueryUseCase;
use zonewire_domain::{DomainError, Zone};

pub const TEST_ZONE: &str = "\
$ORIGIN cs430.luther.edu.
$TTL 1h
ant  1h IN A     185.84.224.89
        IN A     199.83.67.158
        IN AAAA  4a9a:70ec:3ac0:c684:359e:8d37:9486:5959
www  1d IN CNAME ant
note    IN TXT   hello
";

pub fn test_zone() -> Zone {
    Zone::parse(TEST_ZONE).unwrap()
}

enum Reply {
    Zone(AnswerQueryUseCase),
    Fixed(Vec<u8>),
    Fail(DomainError),
}

/// Transport double that records every datagram it is handed.
pub struct MockDnsTransport {
    reply: Reply,
    sent: Mutex<Vec<(Vec<u8>, String)>>,
}

impl MockDnsTransport {
    /// Answers like a nameserver serving [`TEST_ZONE`].
    pub fn answering_from_test_zone() -> Self {
        Self::with_reply(Reply::Zone(AnswerQueryUseCase::new(Arc::new(test_zone()))))
    }

    pub fn replying_with(bytes: &[u8]) -> Self {
        Self::with_reply(Reply::Fixed(bytes.to_vec()))
    }

    pub fn failing_with(error: DomainError) -> Self {
        Self::with_reply(Reply::Fail(error))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<(Vec<u8>, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsTransport for MockDnsTransport {
    async fn exchange(&self, message: &[u8], server: &str) -> Result<Vec<u8>, DomainError> {
        self.sent
            .lock()
            .unwrap()
            .push((message.to_vec(), server.to_string()));

        match &self.reply {
            Reply::Zone(use_case) => use_case.execute(message),
            Reply::Fixed(bytes) => Ok(bytes.clone()),
            Reply::Fail(error) => Err(error.clone()),
        }
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}

pub struct MockZoneRepository {
    result: Result<Zone, DomainError>,
}

impl MockZoneRepository {
    pub fn with_zone(zone: Zone) -> Self {
        Self { result: Ok(zone) }
    }

    pub fn failing_with(error: DomainError) -> Self {
        Self { result: Err(error) }
    }
}

impl ZoneRepository for MockZoneRepository {
    fn load_zone(&self) -> Result<Zone, DomainError> {
        self.result.clone()
    }
}
