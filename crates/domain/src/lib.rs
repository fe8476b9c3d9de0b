//! zonewire domain layer: wire codec, message model, zones and configuration.
pub mod config;
pub mod dns_query;
pub mod errors;
pub mod header;
pub mod message;
pub mod record_type;
pub mod wire;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use errors::DomainError;
pub use header::{Header, CLASS_IN, HEADER_LEN};
pub use message::{Answer, ParsedRequest};
pub use record_type::RecordType;
pub use zone::{Zone, ZoneRecord};
