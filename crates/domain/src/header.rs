use crate::wire::{left_bits, right_bits, WireReader};
use crate::DomainError;

pub const HEADER_LEN: usize = 12;

/// QCLASS / CLASS value for the Internet class.
pub const CLASS_IN: u16 = 1;

/// The fixed 12-byte DNS message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// Standard query, recursion desired.
    pub const QUERY_FLAGS: u16 = 0x0100;

    /// Response, no error, recursion bit echoed.
    pub const RESPONSE_FLAGS: u16 = 0x8100;

    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: Self::QUERY_FLAGS,
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn response(id: u16, ancount: u16) -> Self {
        Self {
            id,
            flags: Self::RESPONSE_FLAGS,
            qdcount: 1,
            ancount,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn parse(buf: &[u8]) -> Result<Self, DomainError> {
        let mut reader = WireReader::new(buf);
        Ok(Self {
            id: reader.read_u16()?,
            flags: reader.read_u16()?,
            qdcount: reader.read_u16()?,
            ancount: reader.read_u16()?,
            nscount: reader.read_u16()?,
            arcount: reader.read_u16()?,
        })
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        for field in [
            self.id,
            self.flags,
            self.qdcount,
            self.ancount,
            self.nscount,
            self.arcount,
        ] {
            out.extend_from_slice(&field.to_be_bytes());
        }
    }

    pub fn is_response(&self) -> bool {
        left_bits(self.flags.to_be_bytes(), 1) == 1
    }

    pub fn rcode(&self) -> u16 {
        right_bits(self.flags.to_be_bytes(), 4)
    }
}
