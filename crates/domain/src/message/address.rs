use crate::wire::decode_int;
use crate::{DomainError, RecordType};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Dotted-decimal text of the first `addr_len` bytes.
pub fn format_ipv4(addr_len: usize, bytes: &[u8]) -> String {
    bytes[..addr_len.min(bytes.len())]
        .iter()
        .map(|octet| octet.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Colon-separated hextets of the first `addr_len` bytes. Each group has its
/// leading zeros stripped; runs of zero groups are not collapsed into `::`.
pub fn format_ipv6(addr_len: usize, bytes: &[u8]) -> String {
    bytes[..addr_len.min(bytes.len())]
        .chunks(2)
        // Two-byte groups cannot overflow.
        .map(|group| format!("{:x}", decode_int(group).unwrap_or_default()))
        .collect::<Vec<_>>()
        .join(":")
}

/// Text form of an address RDATA. Lengths other than 4 and 16 yield an
/// empty string.
pub fn format_address(rdata: &[u8]) -> String {
    match rdata.len() {
        4 => format_ipv4(4, rdata),
        16 => format_ipv6(16, rdata),
        _ => String::new(),
    }
}

/// Raw RDATA bytes for an address written in a zone file.
pub fn encode_address(record_type: RecordType, text: &str) -> Result<Vec<u8>, DomainError> {
    match record_type {
        RecordType::A => text
            .parse::<Ipv4Addr>()
            .map(|addr| addr.octets().to_vec())
            .map_err(|_| DomainError::InvalidIpAddress(text.to_string())),
        RecordType::AAAA => text
            .parse::<Ipv6Addr>()
            .map(|addr| addr.octets().to_vec())
            .map_err(|_| DomainError::InvalidIpAddress(text.to_string())),
        other => Err(DomainError::UnsupportedRecordData(other)),
    }
}
