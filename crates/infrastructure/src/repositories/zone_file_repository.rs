use std::path::PathBuf;
use tracing::debug;
use zonewire_application::ports::ZoneRepository;
use zonewire_domain::{DomainError, Zone};

/// Reads a zone from a text file on every `load_zone` call.
pub struct ZoneFileRepository {
    path: PathBuf,
}

impl ZoneFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ZoneRepository for ZoneFileRepository {
    fn load_zone(&self) -> Result<Zone, DomainError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::IoError(format!(
                "Failed to read zone file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), bytes = text.len(), "Zone file read");

        Zone::parse(&text)
    }
}
