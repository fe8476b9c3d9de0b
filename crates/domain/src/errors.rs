use crate::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Value {value} does not fit in {width} bytes")]
    EncodingOverflow { value: u64, width: usize },

    #[error("Integer with {width} significant bytes does not fit in 64 bits")]
    DecodingOverflow { width: usize },

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Unknown zone")]
    UnknownZone,

    #[error("Unknown query type")]
    UnknownQueryType,

    #[error("Unknown class")]
    UnknownClass,

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Unsupported record data for type {0}")]
    UnsupportedRecordData(RecordType),

    #[error("Invalid zone file at line {line}: {reason}")]
    InvalidZoneFile { line: usize, reason: String },

    #[error("Transaction ID mismatch: expected {expected}, received {received}")]
    TransactionIdMismatch { expected: u16, received: u16 },

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// True for the request validation failures the nameserver drops silently.
    pub fn is_request_rejection(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownZone
                | DomainError::UnknownQueryType
                | DomainError::UnknownClass
                | DomainError::UnknownDomain(_)
                | DomainError::MalformedMessage(_)
        )
    }
}
