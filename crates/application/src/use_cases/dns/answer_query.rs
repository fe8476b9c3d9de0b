use crate::ports::ZoneRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};
use zonewire_domain::message::{build_response, parse_request};
use zonewire_domain::{DomainError, Zone};

/// Turns one inbound query into its authoritative response using a zone
/// that never changes after construction.
pub struct AnswerQueryUseCase {
    zone: Arc<Zone>,
}

impl AnswerQueryUseCase {
    pub fn new(zone: Arc<Zone>) -> Self {
        Self { zone }
    }

    pub fn from_repository(repository: &dyn ZoneRepository) -> Result<Self, DomainError> {
        let zone = repository.load_zone()?;
        if zone.is_empty() {
            warn!(origin = zone.origin(), "Zone has no records, every query will be ignored");
        }
        info!(
            origin = zone.origin(),
            domains = zone.len(),
            default_ttl = zone.default_ttl(),
            "Zone loaded"
        );
        Ok(Self::new(Arc::new(zone)))
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn execute(&self, message: &[u8]) -> Result<Vec<u8>, DomainError> {
        let request = parse_request(self.zone.origin(), message)?;

        let response = build_response(
            &self.zone,
            request.transaction_id,
            &request.domain,
            request.query_type,
            &request.question,
        )?;

        debug!(
            id = request.transaction_id,
            domain = %request.domain,
            record_type = %request.query_type,
            bytes = response.len(),
            "Answered query"
        );

        Ok(response)
    }
}
