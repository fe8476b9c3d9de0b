//! Nameserver side: validation of inbound queries.

use super::name::split_labels;
use crate::header::{Header, CLASS_IN, HEADER_LEN};
use crate::wire::WireReader;
use crate::{DomainError, RecordType};

/// A validated query, ready for zone lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    pub transaction_id: u16,
    /// Single label relative to the zone origin, lower-cased.
    pub domain: String,
    pub query_type: RecordType,
    /// Raw question section (QNAME through QCLASS), echoed into the response.
    pub question: Vec<u8>,
}

/// Parses a query addressed to the zone rooted at `origin`.
///
/// The queried name must be exactly one label followed by the origin.
/// Checks run in order: zone, query type, class.
pub fn parse_request(origin: &str, message: &[u8]) -> Result<ParsedRequest, DomainError> {
    let header = Header::parse(message)?;
    if header.is_response() {
        return Err(DomainError::MalformedMessage(
            "message is a response, not a query".to_string(),
        ));
    }
    if header.qdcount != 1 {
        return Err(DomainError::MalformedMessage(format!(
            "expected one question, found {}",
            header.qdcount
        )));
    }

    let mut reader = WireReader::at(message, HEADER_LEN);
    let qname = reader.read_labels()?;

    let origin = split_labels(origin);
    let domain = match qname.split_first() {
        Some((short, rest))
            if rest.len() == origin.len()
                && rest
                    .iter()
                    .zip(&origin)
                    .all(|(label, expected)| label.eq_ignore_ascii_case(expected)) =>
        {
            short.to_ascii_lowercase()
        }
        _ => return Err(DomainError::UnknownZone),
    };

    let query_type = RecordType::from_u16(reader.read_u16()?).ok_or(DomainError::UnknownQueryType)?;

    if reader.read_u16()? != CLASS_IN {
        return Err(DomainError::UnknownClass);
    }

    Ok(ParsedRequest {
        transaction_id: header.id,
        domain,
        query_type,
        question: message[HEADER_LEN..reader.position()].to_vec(),
    })
}
