mod dns_transport;
mod zone_repository;

pub use dns_transport::DnsTransport;
pub use zone_repository::ZoneRepository;
