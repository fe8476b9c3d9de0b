//! Resolver side of the codec: query construction and answer decoding.

use super::address::format_address;
use super::name::encode_name;
use crate::header::{Header, CLASS_IN, HEADER_LEN};
use crate::wire::WireReader;
use crate::{DomainError, RecordType};

/// Transaction id ("OB") used when the caller does not supply one.
pub const FIXED_TRANSACTION_ID: u16 = 0x4F42;

/// One decoded answer: the queried name, its TTL and the address text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub domain: String,
    pub ttl: u32,
    pub address: String,
}

impl Answer {
    pub fn new(domain: impl Into<String>, ttl: u32, address: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ttl,
            address: address.into(),
        }
    }
}

pub fn build_query<S: AsRef<str>>(
    record_type: RecordType,
    labels: &[S],
) -> Result<Vec<u8>, DomainError> {
    build_query_with_id(FIXED_TRANSACTION_ID, record_type, labels)
}

pub fn build_query_with_id<S: AsRef<str>>(
    id: u16,
    record_type: RecordType,
    labels: &[S],
) -> Result<Vec<u8>, DomainError> {
    let qname = encode_name(labels)?;
    let mut out = Vec::with_capacity(HEADER_LEN + qname.len() + 4);

    Header::query(id).write_to(&mut out);
    out.extend_from_slice(&qname);
    out.extend_from_slice(&record_type.to_u16().to_be_bytes());
    out.extend_from_slice(&CLASS_IN.to_be_bytes());

    Ok(out)
}

/// Decodes every answer record of a single-question response.
pub fn parse_response(message: &[u8]) -> Result<Vec<Answer>, DomainError> {
    let header = Header::parse(message)?;
    if header.qdcount == 0 {
        return Err(DomainError::MalformedMessage(
            "response carries no question".to_string(),
        ));
    }

    let mut reader = WireReader::at(message, HEADER_LEN);
    reader.skip_name()?;
    // QTYPE + QCLASS
    reader.read_bytes(4)?;

    parse_answers(message, reader.position(), header.ancount)
}

/// Decodes `answer_count` records starting at byte `offset`. Every answer is
/// reported under the question's name.
pub fn parse_answers(
    message: &[u8],
    offset: usize,
    answer_count: u16,
) -> Result<Vec<Answer>, DomainError> {
    let domain = WireReader::at(message, HEADER_LEN).read_name()?;
    let mut reader = WireReader::at(message, offset);
    let mut answers = Vec::with_capacity(answer_count as usize);

    for _ in 0..answer_count {
        reader.skip_name()?;
        // TYPE + CLASS
        reader.read_bytes(4)?;
        let ttl = reader.read_u32()?;
        let rdlength = reader.read_u16()? as usize;
        let rdata = reader.read_bytes(rdlength)?;

        answers.push(Answer {
            domain: domain.clone(),
            ttl,
            address: format_address(rdata),
        });
    }

    Ok(answers)
}
