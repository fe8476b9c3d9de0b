use crate::wire::encode_int;
use crate::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

/// Splits dotted text into labels, dropping empty ones (a trailing dot or a
/// doubled separator).
pub fn split_labels(domain: &str) -> Vec<&str> {
    domain.split('.').filter(|label| !label.is_empty()).collect()
}

/// Wire form of a name: each label prefixed by its length, then a zero byte.
pub fn encode_name<S: AsRef<str>>(labels: &[S]) -> Result<Vec<u8>, DomainError> {
    let mut out = Vec::with_capacity(labels.iter().map(|l| l.as_ref().len() + 1).sum::<usize>() + 1);

    for label in labels {
        let label = label.as_ref();
        if label.is_empty() {
            continue;
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} bytes",
                label, MAX_LABEL_LEN
            )));
        }
        out.extend(encode_int(label.len() as u64, 1)?);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);

    if out.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "encoded name is {} bytes, limit is {}",
            out.len(),
            MAX_NAME_LEN
        )));
    }

    Ok(out)
}
