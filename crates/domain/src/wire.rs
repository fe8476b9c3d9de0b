//! Big-endian integer and bit-field helpers shared by both sides of the
//! codec, plus [`WireReader`], a bounds-checked cursor over a message.

use crate::DomainError;

/// Pointer-compressed names start with the two high bits set.
pub const POINTER_TAG: u16 = 0b11;

/// Pointers can chain; anything deeper than this is treated as a loop.
const MAX_POINTER_HOPS: usize = 16;

/// Encodes `value` big-endian into exactly `n_bytes` bytes.
pub fn encode_int(value: u64, n_bytes: usize) -> Result<Vec<u8>, DomainError> {
    if n_bytes < 8 && value >> (8 * n_bytes) != 0 {
        return Err(DomainError::EncodingOverflow {
            value,
            width: n_bytes,
        });
    }

    let mut out = vec![0u8; n_bytes];
    let be = value.to_be_bytes();
    let take = n_bytes.min(be.len());
    out[n_bytes - take..].copy_from_slice(&be[be.len() - take..]);
    Ok(out)
}

/// Decodes a big-endian byte sequence of any length. Leading zero bytes are
/// ignored; more than eight significant bytes is an overflow.
pub fn decode_int(bytes: &[u8]) -> Result<u64, DomainError> {
    let start = bytes.iter().position(|&byte| byte != 0).unwrap_or(bytes.len());
    let significant = &bytes[start..];
    if significant.len() > 8 {
        return Err(DomainError::DecodingOverflow {
            width: significant.len(),
        });
    }

    Ok(significant
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte)))
}

/// The integer formed by the leftmost `n` bits (1..=16) of a 16-bit field.
pub fn left_bits(field: [u8; 2], n: u32) -> u16 {
    debug_assert!((1..=16).contains(&n), "bit count out of range: {n}");
    let n = n.clamp(1, 16);
    u16::from_be_bytes(field) >> (16 - n)
}

/// The integer formed by the rightmost `n` bits (1..=16) of a 16-bit field.
pub fn right_bits(field: [u8; 2], n: u32) -> u16 {
    debug_assert!((1..=16).contains(&n), "bit count out of range: {n}");
    let n = n.clamp(1, 16);
    (u32::from(u16::from_be_bytes(field)) & ((1u32 << n) - 1)) as u16
}

/// True when a name-start field is a compression pointer.
pub fn is_pointer(field: [u8; 2]) -> bool {
    left_bits(field, 2) == POINTER_TAG
}

/// Offset from the start of the message where a pointed-to name begins.
pub fn pointer_offset(field: [u8; 2]) -> u16 {
    right_bits(field, 14)
}

/// Cursor over an immutable message buffer. Every read advances the
/// position and fails with [`DomainError::MalformedMessage`] instead of
/// running past the end.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], DomainError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or_else(|| {
                DomainError::MalformedMessage(format!(
                    "need {} bytes at offset {}, only {} left",
                    n,
                    self.pos,
                    self.remaining()
                ))
            })?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Reads a domain name in either literal or pointer form and returns its
    /// dotted text. The cursor ends just past the name as it is encoded at
    /// the current position (after the first pointer, if one was followed).
    pub fn read_name(&mut self) -> Result<String, DomainError> {
        Ok(self.read_labels()?.join("."))
    }

    /// Like [`read_name`](Self::read_name) but keeps the labels apart, so a
    /// label holding a `.` byte stays one label.
    pub fn read_labels(&mut self) -> Result<Vec<String>, DomainError> {
        let mut labels: Vec<String> = Vec::new();
        let mut pos = self.pos;
        let mut resume_at: Option<usize> = None;
        let mut hops = 0;

        loop {
            let len = *self.buf.get(pos).ok_or_else(|| {
                DomainError::MalformedMessage(format!("name runs past offset {}", pos))
            })?;

            if left_bits([len, 0], 2) == POINTER_TAG {
                let low = *self.buf.get(pos + 1).ok_or_else(|| {
                    DomainError::MalformedMessage(format!("truncated pointer at offset {}", pos))
                })?;
                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(DomainError::MalformedMessage(
                        "compression pointer loop".to_string(),
                    ));
                }
                resume_at.get_or_insert(pos + 2);
                pos = pointer_offset([len, low]) as usize;
                continue;
            }

            if left_bits([len, 0], 2) != 0 {
                return Err(DomainError::MalformedMessage(format!(
                    "unsupported label type 0x{:02x} at offset {}",
                    len, pos
                )));
            }

            if len == 0 {
                pos += 1;
                break;
            }

            let start = pos + 1;
            let end = start + len as usize;
            let label = self.buf.get(start..end).ok_or_else(|| {
                DomainError::MalformedMessage(format!("label at offset {} is truncated", pos))
            })?;
            labels.push(String::from_utf8_lossy(label).into_owned());
            pos = end;
        }

        self.pos = resume_at.unwrap_or(pos);
        Ok(labels)
    }

    pub fn skip_name(&mut self) -> Result<(), DomainError> {
        self.read_name().map(|_| ())
    }
}
