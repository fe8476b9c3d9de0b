//! Static zone model and the line-oriented zone text format.
//!
//! ```text
//! $ORIGIN cs430.luther.edu.
//! $TTL 1h
//! ant   1h IN A    185.84.224.89   ; domain ttl class type rdata
//!          IN A    199.83.67.158   ; class type rdata (default TTL)
//!       1d IN AAAA ::1             ; ttl class type rdata
//! bat      IN A    10.0.0.2        ; domain class type rdata (default TTL)
//! cow.cs430.luther.edu. IN A 10.0.0.3 ; absolute owner, stored as "cow"
//! ```

use crate::message::encode_address;
use crate::{DomainError, RecordType};
use std::collections::HashMap;

/// Symbolic TTLs accepted in zone files.
pub const TTL_TOKENS: [(&str, u32); 6] = [
    ("1s", 1),
    ("1m", 60),
    ("1h", 60 * 60),
    ("1d", 60 * 60 * 24),
    ("1w", 60 * 60 * 24 * 7),
    ("1y", 60 * 60 * 24 * 365),
];

pub fn ttl_seconds(token: &str) -> Option<u32> {
    TTL_TOKENS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, seconds)| *seconds)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    pub ttl: u32,
    pub class: String,
    pub record_type: RecordType,
    pub rdata: String,
}

/// An authoritative zone. Built once, then only read.
#[derive(Debug, Clone)]
pub struct Zone {
    origin: String,
    default_ttl: u32,
    records: HashMap<String, Vec<ZoneRecord>>,
}

impl Zone {
    pub fn new(origin: impl Into<String>, default_ttl: u32) -> Self {
        Self {
            origin: origin.into(),
            default_ttl,
            records: HashMap::new(),
        }
    }

    /// Parses zone text. The first significant line names the origin, the
    /// second the default TTL; every later line is a record.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, strip_comment(line).trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line_no, origin_line) = lines.next().ok_or_else(|| invalid(1, "missing origin line"))?;
        let origin = parse_origin(line_no, origin_line)?;

        let (line_no, ttl_line) = lines
            .next()
            .ok_or_else(|| invalid(line_no + 1, "missing default TTL line"))?;
        let token = ttl_line.split_whitespace().last().unwrap_or_default();
        let default_ttl = ttl_seconds(token)
            .ok_or_else(|| invalid(line_no, format!("unknown TTL token '{}'", token)))?;

        let mut zone = Zone::new(origin, default_ttl);
        let mut current: Option<String> = None;

        for (line_no, line) in lines {
            let fields: Vec<&str> = line.split_whitespace().collect();

            let (domain, ttl, rest) = match fields.as_slice() {
                [domain, ttl, rest @ ..] if rest.len() == 3 => {
                    let ttl = ttl_seconds(ttl)
                        .ok_or_else(|| invalid(line_no, format!("unknown TTL token '{}'", ttl)))?;
                    (Some(*domain), ttl, rest)
                }
                [first, rest @ ..] if rest.len() == 3 => match ttl_seconds(first) {
                    Some(ttl) => (None, ttl, rest),
                    None => (Some(*first), zone.default_ttl, rest),
                },
                rest if rest.len() == 3 => (None, zone.default_ttl, rest),
                _ => {
                    return Err(invalid(
                        line_no,
                        format!("expected 3 to 5 fields, found {}", fields.len()),
                    ))
                }
            };

            if let Some(domain) = domain {
                current = Some(owner_key(line_no, domain, &zone.origin)?);
            }
            let owner = current
                .clone()
                .ok_or_else(|| invalid(line_no, "record appears before any domain"))?;

            let record = parse_record(line_no, ttl, rest)?;
            zone.insert(owner, record);
        }

        Ok(zone)
    }

    /// Appends a record, keeping insertion order within the domain.
    pub fn insert(&mut self, domain: impl Into<String>, record: ZoneRecord) {
        self.records.entry(domain.into()).or_default().push(record);
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn default_ttl(&self) -> u32 {
        self.default_ttl
    }

    /// Number of distinct domains.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.records.contains_key(domain)
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn records(&self, domain: &str) -> Option<&[ZoneRecord]> {
        self.records.get(domain).map(Vec::as_slice)
    }

    /// Records of one type, in file order. An unknown domain is an error; a
    /// known domain without records of that type yields an empty list.
    pub fn records_of_type(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<&ZoneRecord>, DomainError> {
        let records = self
            .records(domain)
            .ok_or_else(|| DomainError::UnknownDomain(domain.to_string()))?;
        Ok(records
            .iter()
            .filter(|record| record.record_type == record_type)
            .collect())
    }
}

fn parse_origin(line_no: usize, line: &str) -> Result<String, DomainError> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next().unwrap_or_default();
    let name = if first.starts_with('$') {
        tokens.next().unwrap_or_default()
    } else {
        first
    };

    let origin = name.trim_end_matches('.').to_ascii_lowercase();
    if origin.is_empty() {
        return Err(invalid(line_no, "origin is empty"));
    }
    Ok(origin)
}

/// Zone key for an owner name. Absolute names (trailing `.`) must fall under
/// the origin and are stored relative to it; `@` and the bare origin name the
/// apex.
fn owner_key(line_no: usize, name: &str, origin: &str) -> Result<String, DomainError> {
    let name = name.to_ascii_lowercase();
    let Some(absolute) = name.strip_suffix('.') else {
        return Ok(name);
    };

    if absolute == origin {
        return Ok("@".to_string());
    }

    absolute
        .strip_suffix(origin)
        .and_then(|prefix| prefix.strip_suffix('.'))
        .filter(|relative| !relative.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            invalid(
                line_no,
                format!("owner '{}' is outside the origin '{}'", name, origin),
            )
        })
}

fn parse_record(line_no: usize, ttl: u32, fields: &[&str]) -> Result<ZoneRecord, DomainError> {
    let [class, record_type, rdata] = fields else {
        return Err(invalid(line_no, "expected class, type and rdata"));
    };

    if !class.eq_ignore_ascii_case("IN") {
        return Err(invalid(line_no, format!("unsupported class '{}'", class)));
    }

    let record_type: RecordType = record_type
        .parse()
        .map_err(|_| invalid(line_no, format!("unknown record type '{}'", record_type)))?;

    if record_type.is_address() {
        encode_address(record_type, rdata).map_err(|e| invalid(line_no, e.to_string()))?;
    }

    Ok(ZoneRecord {
        ttl,
        class: class.to_ascii_uppercase(),
        record_type,
        rdata: rdata.to_string(),
    })
}

fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(index) => &line[..index],
        None => line,
    }
}

fn invalid(line: usize, reason: impl Into<String>) -> DomainError {
    DomainError::InvalidZoneFile {
        line,
        reason: reason.into(),
    }
}
