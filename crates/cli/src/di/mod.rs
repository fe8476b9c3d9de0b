use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use zonewire_application::use_cases::{AnswerQueryUseCase, ResolveQueryUseCase};
use zonewire_domain::config::ResolverConfig;
use zonewire_infrastructure::dns::{DnsServerHandler, UdpTransport};
use zonewire_infrastructure::repositories::ZoneFileRepository;

pub fn resolve_use_case(config: &ResolverConfig) -> ResolveQueryUseCase {
    let transport = UdpTransport::new(config.port)
        .with_timeout(config.query_timeout_secs.map(Duration::from_secs));

    ResolveQueryUseCase::new(Arc::new(transport))
        .with_random_transaction_id(config.randomize_transaction_id)
}

pub fn dns_server_handler(zone_file: &Path) -> anyhow::Result<DnsServerHandler> {
    let repository = ZoneFileRepository::new(zone_file);
    let use_case = AnswerQueryUseCase::from_repository(&repository)
        .with_context(|| format!("Failed to load zone file {}", zone_file.display()))?;

    Ok(DnsServerHandler::new(Arc::new(use_case)))
}
