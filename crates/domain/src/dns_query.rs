use crate::message::split_labels;
use crate::{DomainError, RecordType};

/// A resolver invocation: what to ask for and which server to ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub record_type: RecordType,
    pub labels: Vec<String>,
    pub server: String,
}

impl DnsQuery {
    pub fn new(record_type: RecordType, domain: &str, server: impl Into<String>) -> Self {
        Self {
            record_type,
            labels: split_labels(domain).into_iter().map(str::to_string).collect(),
            server: server.into(),
        }
    }

    /// Validates command-line input. Only A and AAAA can be resolved; without
    /// an explicit server one of `candidates` is picked at random.
    pub fn from_cli(
        record_type: &str,
        domain: &str,
        server: Option<&str>,
        candidates: &[String],
        rng: &mut fastrand::Rng,
    ) -> Result<Self, DomainError> {
        let record_type: RecordType = record_type.parse()?;
        if !record_type.is_address() {
            return Err(DomainError::UnknownQueryType);
        }

        if split_labels(domain).is_empty() {
            return Err(DomainError::InvalidDomainName(domain.to_string()));
        }

        let server = match server {
            Some(server) => server.to_string(),
            None => {
                if candidates.is_empty() {
                    return Err(DomainError::ConfigError(
                        "no public DNS servers configured".to_string(),
                    ));
                }
                candidates[rng.usize(..candidates.len())].clone()
            }
        };

        Ok(Self::new(record_type, domain, server))
    }

    pub fn domain(&self) -> String {
        self.labels.join(".")
    }
}
