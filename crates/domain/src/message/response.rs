//! Nameserver side: response synthesis from zone records.

use super::address::encode_address;
use super::name::{encode_name, split_labels};
use crate::header::{Header, CLASS_IN, HEADER_LEN};
use crate::wire::encode_int;
use crate::zone::{Zone, ZoneRecord};
use crate::{DomainError, RecordType};

/// Compression pointer to the question name, which always starts right
/// after the header.
const QUESTION_NAME_POINTER: u16 = 0xC000 | HEADER_LEN as u16;

/// Longest string a single TXT character-string can carry.
const MAX_CHARACTER_STRING: usize = 255;

/// Builds the response to a validated request: the echoed question plus one
/// answer per zone record of `query_type` owned by `domain`.
pub fn build_response(
    zone: &Zone,
    transaction_id: u16,
    domain: &str,
    query_type: RecordType,
    question: &[u8],
) -> Result<Vec<u8>, DomainError> {
    let records = zone.records_of_type(domain, query_type)?;
    let ancount = u16::try_from(records.len()).map_err(|_| DomainError::EncodingOverflow {
        value: records.len() as u64,
        width: 2,
    })?;

    let mut out = Vec::with_capacity(HEADER_LEN + question.len() + records.len() * 28);
    Header::response(transaction_id, ancount).write_to(&mut out);
    out.extend_from_slice(question);

    for record in records {
        let rdata = encode_rdata(record, zone.origin())?;

        out.extend_from_slice(&QUESTION_NAME_POINTER.to_be_bytes());
        out.extend_from_slice(&record.record_type.to_u16().to_be_bytes());
        out.extend_from_slice(&CLASS_IN.to_be_bytes());
        out.extend(encode_int(u64::from(record.ttl), 4)?);
        out.extend(encode_int(rdata.len() as u64, 2)?);
        out.extend(rdata);
    }

    Ok(out)
}

/// Wire RDATA for a zone record. Names in NS/CNAME/PTR records are written
/// uncompressed and qualified with `origin` unless they end with a dot.
pub fn encode_rdata(record: &ZoneRecord, origin: &str) -> Result<Vec<u8>, DomainError> {
    match record.record_type {
        RecordType::A | RecordType::AAAA => encode_address(record.record_type, &record.rdata),
        RecordType::NS | RecordType::CNAME | RecordType::PTR => {
            let target = qualify(&record.rdata, origin);
            encode_name(&split_labels(&target))
        }
        RecordType::TXT => {
            let text = record.rdata.trim_matches('"');
            if text.len() > MAX_CHARACTER_STRING {
                return Err(DomainError::UnsupportedRecordData(RecordType::TXT));
            }
            let mut out = Vec::with_capacity(text.len() + 1);
            out.extend(encode_int(text.len() as u64, 1)?);
            out.extend_from_slice(text.as_bytes());
            Ok(out)
        }
        RecordType::MX => Err(DomainError::UnsupportedRecordData(RecordType::MX)),
    }
}

fn qualify(name: &str, origin: &str) -> String {
    if name == "@" {
        origin.to_string()
    } else if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.{}", name, origin)
    }
}
