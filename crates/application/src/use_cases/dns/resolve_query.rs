use crate::ports::DnsTransport;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use zonewire_domain::message::{build_query_with_id, parse_response, FIXED_TRANSACTION_ID};
use zonewire_domain::{Answer, DnsQuery, DomainError, Header};

/// Outcome of one resolver round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub server: String,
    pub answers: Vec<Answer>,
}

pub struct ResolveQueryUseCase {
    transport: Arc<dyn DnsTransport>,
    randomize_transaction_id: bool,
}

impl ResolveQueryUseCase {
    pub fn new(transport: Arc<dyn DnsTransport>) -> Self {
        Self {
            transport,
            randomize_transaction_id: false,
        }
    }

    pub fn with_random_transaction_id(mut self, enabled: bool) -> Self {
        self.randomize_transaction_id = enabled;
        self
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<Resolution, DomainError> {
        let start = Instant::now();
        let id = if self.randomize_transaction_id {
            fastrand::u16(..)
        } else {
            FIXED_TRANSACTION_ID
        };

        let message = build_query_with_id(id, query.record_type, query.labels.as_slice())?;
        debug!(
            id,
            domain = %query.domain(),
            record_type = %query.record_type,
            server = %query.server,
            protocol = self.transport.protocol_name(),
            "Sending query"
        );

        let response = self.transport.exchange(&message, &query.server).await?;

        let header = Header::parse(&response)?;
        if header.id != id {
            return Err(DomainError::TransactionIdMismatch {
                expected: id,
                received: header.id,
            });
        }
        if header.rcode() != 0 {
            warn!(
                rcode = header.rcode(),
                domain = %query.domain(),
                server = %query.server,
                "Server returned an error code"
            );
        }

        let answers = parse_response(&response)?;

        info!(
            domain = %query.domain(),
            server = %query.server,
            answers = answers.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Query resolved"
        );

        Ok(Resolution {
            server: query.server.clone(),
            answers,
        })
    }
}
